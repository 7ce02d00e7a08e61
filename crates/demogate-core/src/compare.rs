//! Constant-time byte comparison.

use subtle::ConstantTimeEq;

/// Compares two byte slices in time independent of where they first differ.
///
/// Length is not treated as secret, so a length mismatch may return early.
/// Equal-length inputs are compared branchlessly over every byte via
/// `subtle`, never short-circuiting on the first mismatch.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices_match() {
        assert!(constant_time_eq(b"hunter2", b"hunter2"));
    }

    #[test]
    fn different_content_rejected() {
        assert!(!constant_time_eq(b"hunter2", b"hunter3"));
        assert!(!constant_time_eq(b"aunter2", b"hunter2"));
    }

    #[test]
    fn length_mismatch_rejected() {
        assert!(!constant_time_eq(b"short", b"longer input"));
        assert!(!constant_time_eq(b"x", b""));
    }

    #[test]
    fn empty_slices_match() {
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn agrees_with_plain_equality() {
        let pairs: &[(&[u8], &[u8])] = &[
            (b"", b""),
            (b"a", b"a"),
            (b"a", b"b"),
            (b"demo", b"demo"),
            (b"demo", b"dem0"),
            (b"\x00\xff", b"\x00\xff"),
            (b"\x00\xff", b"\x00\xfe"),
        ];
        for (a, b) in pairs {
            assert_eq!(constant_time_eq(a, b), a == b);
        }
    }
}
