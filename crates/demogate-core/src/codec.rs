//! Token codec: URL-safe reversible byte encoding.
//!
//! Token bodies and signatures travel inside cookies and query strings, so
//! the alphabet contains no `+`, `/`, or padding characters.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use crate::error::{CoreError, CoreResult};

/// Encodes arbitrary bytes into the URL-safe alphabet without padding.
#[must_use]
pub fn encode(data: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decodes a string produced by [`encode`].
///
/// Input outside the expected alphabet (or with stray padding) fails with
/// [`CoreError::MalformedEncoding`]; it is never silently truncated.
pub fn decode(encoded: &str) -> CoreResult<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| CoreError::MalformedEncoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_bytes() {
        let inputs: &[&[u8]] = &[
            b"",
            b"a",
            b"demo",
            b"{\"sub\":\"demo\"}",
            &[0x00, 0x01, 0xfe, 0xff],
            &[0xfb, 0xef, 0xbe], // encodes to chars from the url-safe tail of the alphabet
        ];
        for input in inputs {
            let encoded = encode(input);
            assert_eq!(decode(&encoded).unwrap(), *input);
        }
    }

    #[test]
    fn output_is_url_safe() {
        let encoded = encode([0xfb, 0xff, 0xfe, 0x3f, 0x3e, 0x00]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn wrong_alphabet_is_malformed() {
        let err = decode("not/valid+base64==").unwrap_err();
        assert!(matches!(err, CoreError::MalformedEncoding(_)));
    }

    #[test]
    fn stray_padding_is_malformed() {
        assert!(decode("ZGVtbw==").is_err());
    }
}
