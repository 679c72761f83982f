use url::{ParseError, Url};

use crate::error::UrlRejection;

pub const ALLOWED_URL_SCHEMES: [&str; 3] = ["http", "https", "wss"];

/// Checks that `s` is, as written, an absolute url with an allowed scheme and
/// a non-empty host.
///
/// The url parser repairs sloppy input (trimming, dropping tabs and newlines,
/// inventing a missing `//`). Callers get the raw text back, so those repairs
/// are refused here rather than accepted.
pub fn check_url(s: &str) -> Result<(), UrlRejection> {
    if s.chars().any(|c| c.is_ascii_control() || c == ' ') {
        return Err(UrlRejection::Unparsable(
            "contains spaces or control characters".to_string(),
        ));
    }

    let url = match Url::parse(s) {
        Ok(url) => url,
        // Any all-digit port is accepted, even past u16.
        Err(ParseError::InvalidPort) => match without_port(s) {
            Some(stripped) => Url::parse(&stripped)
                .map_err(|e| UrlRejection::Unparsable(e.to_string()))?,
            None => return Err(UrlRejection::Unparsable(ParseError::InvalidPort.to_string())),
        },
        Err(e) => return Err(UrlRejection::Unparsable(e.to_string())),
    };

    let scheme = url.scheme();
    if !ALLOWED_URL_SCHEMES.contains(&scheme) {
        return Err(UrlRejection::SchemeNotAllowed(scheme.to_string()));
    }

    if !writes_authority(s, scheme) {
        return Err(UrlRejection::MissingHost);
    }

    match url.host_str() {
        Some(hostname) if !hostname.is_empty() => Ok(()),
        _ => Err(UrlRejection::MissingHost),
    }
}

/// True when `s` continues with `://` straight after its scheme.
fn writes_authority(s: &str, scheme: &str) -> bool {
    match s.get(..scheme.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(scheme) => {
            s[scheme.len()..].starts_with("://")
        }
        _ => false,
    }
}

/// `s` with its all-digit authority port removed, if it has one.
fn without_port(s: &str) -> Option<String> {
    let split = s.find("://")? + 3;
    let (head, rest) = s.split_at(split);

    let end = rest
        .find(|c: char| c == '/' || c == '?' || c == '#')
        .unwrap_or_else(|| rest.len());
    let authority = &rest[..end];
    let host_start = authority.rfind('@').map(|i| i + 1).unwrap_or(0);
    let colon = host_start + authority[host_start..].rfind(':')?;

    // a colon inside an ipv6 literal is not a port separator
    if authority[colon..].contains(']') {
        return None;
    }

    let port = &authority[colon + 1..];
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(format!("{}{}{}", head, &authority[..colon], &rest[end..]))
}

/// Appends a trailing slash so the url can be used as a base for joining
/// paths. Empty input is returned unchanged.
pub fn with_trailing_slash(mut s: String) -> String {
    if !s.is_empty() && !s.ends_with('/') {
        s.push('/');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_schemes() {
        assert_eq!(check_url("http://example.com"), Ok(()));
        assert_eq!(check_url("https://example.com/api"), Ok(()));
        assert_eq!(check_url("wss://example.com:8443/socket"), Ok(()));
        assert_eq!(check_url("https://127.0.0.1:8080"), Ok(()));
        assert_eq!(check_url("HTTPS://example.com"), Ok(()));
        assert_eq!(check_url("http://[::1]:8080/"), Ok(()));
    }

    #[test]
    fn test_rejected_scheme() {
        assert_eq!(
            check_url("ftp://example.com"),
            Err(UrlRejection::SchemeNotAllowed("ftp".to_string()))
        );
        assert_eq!(
            check_url("ws://example.com"),
            Err(UrlRejection::SchemeNotAllowed("ws".to_string()))
        );
    }

    #[test]
    fn test_unparsable() {
        assert!(matches!(
            check_url("not a url"),
            Err(UrlRejection::Unparsable(_))
        ));
        assert!(matches!(
            check_url("example.com"),
            Err(UrlRejection::Unparsable(_))
        ));
        assert!(matches!(
            check_url("http://"),
            Err(UrlRejection::Unparsable(_))
        ));
        assert!(matches!(
            check_url("https://example.com:80a"),
            Err(UrlRejection::Unparsable(_))
        ));
    }

    #[test]
    fn test_whitespace_and_control_characters() {
        for s in &[
            " https://example.com",
            "https://example.com ",
            "https://exa\nmple.com",
            "https://exa\tmple.com",
            "https://example.com/\r",
            "https://example.com/a b",
        ] {
            assert!(
                matches!(check_url(s), Err(UrlRejection::Unparsable(_))),
                "{:?}",
                s
            );
        }
    }

    #[test]
    fn test_authority_must_be_written() {
        for s in &[
            "http:example.com",
            "https:/example.com",
            "https:///example.com",
            "https:\\\\example.com",
        ] {
            assert_eq!(check_url(s), Err(UrlRejection::MissingHost), "{:?}", s);
        }
    }

    #[test]
    fn test_large_numeric_port() {
        assert_eq!(check_url("https://example.com:99999"), Ok(()));
        assert_eq!(check_url("https://user@example.com:70000/path?q=1"), Ok(()));
        assert_eq!(
            without_port("https://user@example.com:70000/path?q=1"),
            Some("https://user@example.com/path?q=1".to_string())
        );
        assert_eq!(without_port("http://[::1]/x"), None);
        assert_eq!(
            check_url("ftp://example.com:99999"),
            Err(UrlRejection::SchemeNotAllowed("ftp".to_string()))
        );
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            with_trailing_slash("https://example.com".to_string()),
            "https://example.com/"
        );
        assert_eq!(
            with_trailing_slash("https://example.com/v1/".to_string()),
            "https://example.com/v1/"
        );
        assert_eq!(with_trailing_slash(String::new()), "");
    }
}
