//! Redirect-target sanitization for the post-login `next` parameter.
//!
//! The `next` parameter resumes navigation after login and is fully
//! attacker-controlled, so it is the one open-redirect surface of the gate.
//! A candidate survives only if it is a plain same-site path under an
//! allow-listed prefix; anything else falls back to the default.

/// Sanitizes a candidate redirect path.
///
/// Rejected (returning `default`) when the candidate starts with `//`
/// (protocol-relative URL), contains a backslash (escaped path segment
/// tricks), or does not start with one of `allowed_prefixes`.
#[must_use]
pub fn sanitize_next(candidate: &str, allowed_prefixes: &[String], default: &str) -> String {
    if candidate.starts_with("//") || candidate.contains('\\') {
        return default.to_string();
    }
    if allowed_prefixes.iter().any(|p| candidate.starts_with(p.as_str())) {
        return candidate.to_string();
    }
    default.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["/demo".to_string()]
    }

    #[test]
    fn allow_listed_path_passes_through() {
        assert_eq!(
            sanitize_next("/demo/reports", &allowed(), "/demo"),
            "/demo/reports"
        );
        assert_eq!(
            sanitize_next("/demo/reports?tab=2", &allowed(), "/demo"),
            "/demo/reports?tab=2"
        );
    }

    #[test]
    fn protocol_relative_url_falls_back() {
        assert_eq!(sanitize_next("//evil.com", &allowed(), "/demo"), "/demo");
        assert_eq!(
            sanitize_next("//evil.com/demo", &allowed(), "/demo"),
            "/demo"
        );
    }

    #[test]
    fn backslash_falls_back() {
        assert_eq!(
            sanitize_next("/demo\\..\\x", &allowed(), "/demo"),
            "/demo"
        );
    }

    #[test]
    fn non_allow_listed_path_falls_back() {
        assert_eq!(sanitize_next("/outside", &allowed(), "/demo"), "/demo");
        assert_eq!(
            sanitize_next("https://evil.com", &allowed(), "/demo"),
            "/demo"
        );
        assert_eq!(sanitize_next("", &allowed(), "/demo"), "/demo");
    }
}
