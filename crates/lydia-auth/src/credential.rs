//! Locating the bearer credential of a request.
//!
//! The HTTP layer copies the three candidate locations into a
//! [`CredentialSources`] value; [`extract_credential`] then applies the
//! priority order without touching the request again.

use std::fmt;

/// A raw, not yet validated credential string.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where a credential may appear in a request, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSources {
    /// Raw `Authorization` header value
    pub authorization: Option<String>,
    /// Value of the `token` cookie
    pub cookie: Option<String>,
    /// `token` field of a JSON request body
    pub body: Option<String>,
}

impl CredentialSources {
    /// Whether the body has to be read at all, i.e. neither the header nor
    /// the cookie yields a credential.
    pub fn needs_body(&self) -> bool {
        self.bearer().is_none() && self.cookie_token().is_none()
    }

    fn bearer(&self) -> Option<&str> {
        let value = self.authorization.as_deref()?.trim();
        let (scheme, token) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        non_empty(token)
    }

    fn cookie_token(&self) -> Option<&str> {
        self.cookie.as_deref().and_then(non_empty)
    }

    fn body_token(&self) -> Option<&str> {
        self.body.as_deref().and_then(non_empty)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Returns the first non-empty credential in priority order: bearer header,
/// then cookie, then body. `None` is not an error; the caller decides.
pub fn extract_credential(sources: CredentialSources) -> Option<Credential> {
    sources
        .bearer()
        .or_else(|| sources.cookie_token())
        .or_else(|| sources.body_token())
        .map(Credential::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(header: Option<&str>, cookie: Option<&str>, body: Option<&str>) -> CredentialSources {
        CredentialSources {
            authorization: header.map(str::to_string),
            cookie: cookie.map(str::to_string),
            body: body.map(str::to_string),
        }
    }

    fn extracted(sources: CredentialSources) -> Option<String> {
        extract_credential(sources).map(|c| c.as_str().to_string())
    }

    #[test]
    fn test_header_wins_over_cookie_and_body() {
        let s = sources(Some("Bearer from-header"), Some("from-cookie"), Some("from-body"));
        assert_eq!(extracted(s), Some("from-header".to_string()));
    }

    #[test]
    fn test_cookie_wins_over_body() {
        let s = sources(None, Some("from-cookie"), Some("from-body"));
        assert_eq!(extracted(s), Some("from-cookie".to_string()));
    }

    #[test]
    fn test_body_is_last_resort() {
        let s = sources(None, None, Some("from-body"));
        assert_eq!(extracted(s), Some("from-body".to_string()));
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(extracted(CredentialSources::default()), None);
    }

    #[test]
    fn test_non_bearer_scheme_falls_through() {
        let s = sources(Some("Basic dXNlcjpwYXNz"), Some("from-cookie"), None);
        assert_eq!(extracted(s), Some("from-cookie".to_string()));
    }

    #[test]
    fn test_empty_bearer_falls_through() {
        let s = sources(Some("Bearer   "), None, Some("from-body"));
        assert_eq!(extracted(s), Some("from-body".to_string()));

        let s = sources(Some("Bearer"), None, None);
        assert_eq!(extracted(s), None);
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        let s = sources(Some("bearer abc.def.ghi"), None, None);
        assert_eq!(extracted(s), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_empty_cookie_is_ignored() {
        let s = sources(None, Some(""), None);
        assert_eq!(extracted(s), None);
    }

    #[test]
    fn test_needs_body() {
        assert!(sources(None, None, None).needs_body());
        assert!(sources(Some("Basic x"), Some(" "), None).needs_body());
        assert!(!sources(Some("Bearer x"), None, None).needs_body());
        assert!(!sources(None, Some("x"), None).needs_body());
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = Credential::new("secret.jwt.value");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
    }
}
