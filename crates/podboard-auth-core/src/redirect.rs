//! Post-login redirect target validation.
//!
//! Open-redirect guard: an attacker-supplied absolute URL to a foreign origin
//! must never be honored. Every call site that computes a post-auth
//! destination goes through [`resolve_post_auth_target`]; there is no other
//! way to produce one.

use url::Url;

/// Validate a candidate post-login redirect target against the application's
/// own origin.
///
/// Returns the candidate unchanged when it is a root-relative path or an
/// absolute URL on the base origin. Everything else — foreign origins,
/// scheme-relative `//host` forms, malformed input — is replaced with the
/// base origin. Never panics.
pub fn resolve_post_auth_target(candidate: &str, base_origin: &str) -> String {
    // `//host/path` is scheme-relative: it starts with '/' but navigates
    // cross-origin, so it does not count as a relative path.
    if candidate.starts_with('/') && !candidate.starts_with("//") {
        return candidate.to_string();
    }

    match (Url::parse(candidate), Url::parse(base_origin)) {
        (Ok(target), Ok(base)) if target.origin() == base.origin() => candidate.to_string(),
        _ => base_origin.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://app.example.com";

    #[test]
    fn relative_path_passes_through() {
        assert_eq!(resolve_post_auth_target("/dashboard", BASE), "/dashboard");
        assert_eq!(
            resolve_post_auth_target("/pods/7?tab=gates", BASE),
            "/pods/7?tab=gates"
        );
    }

    #[test]
    fn same_origin_absolute_passes_through() {
        assert_eq!(
            resolve_post_auth_target("https://app.example.com/settings", BASE),
            "https://app.example.com/settings"
        );
    }

    #[test]
    fn foreign_origin_is_replaced() {
        assert_eq!(resolve_post_auth_target("https://evil.com/x", BASE), BASE);
    }

    #[test]
    fn malformed_candidate_is_replaced() {
        assert_eq!(resolve_post_auth_target("not a url", BASE), BASE);
        assert_eq!(resolve_post_auth_target("", BASE), BASE);
    }

    #[test]
    fn scheme_relative_candidate_is_replaced() {
        assert_eq!(resolve_post_auth_target("//evil.com/x", BASE), BASE);
    }

    #[test]
    fn differing_scheme_or_port_is_foreign() {
        assert_eq!(
            resolve_post_auth_target("http://app.example.com/settings", BASE),
            BASE
        );
        assert_eq!(
            resolve_post_auth_target("https://app.example.com:8443/settings", BASE),
            BASE
        );
    }

    #[test]
    fn userinfo_trick_is_foreign() {
        assert_eq!(
            resolve_post_auth_target("https://app.example.com@evil.com/", BASE),
            BASE
        );
    }
}
