//! Constant tables used by the markup stripper

/// URL scheme prefixes recognized inside bracketed external links,
/// after MediaWiki's `$wgUrlProtocols`
pub const URL_SCHEMES: &[&str] = &[
    "bitcoin:",
    "ftp://",
    "ftps://",
    "geo:",
    "git://",
    "gopher://",
    "http://",
    "https://",
    "irc://",
    "ircs://",
    "magnet:",
    "mailto:",
    "matrix:",
    "mms://",
    "news:",
    "nntp://",
    "redis://",
    "sftp://",
    "sip:",
    "sips:",
    "sms:",
    "ssh://",
    "svn://",
    "tel:",
    "telnet://",
    "urn:",
    "worldwind://",
    "xmpp:",
    "//",
];

/// Whether `token` begins with a URL scheme (case-insensitive)
pub fn starts_with_url_scheme(token: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| {
        token
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Image link parameters that place the image outside the text flow
pub const NON_INLINE_IMAGE_PARAMS: &[&str] = &["right", "left", "center", "thumb", "frame"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_detection() {
        assert!(starts_with_url_scheme("https://example.org"));
        assert!(starts_with_url_scheme("HTTP://EXAMPLE.ORG"));
        assert!(starts_with_url_scheme("//example.org"));
        assert!(starts_with_url_scheme("mailto:someone@example.org"));
        assert!(!starts_with_url_scheme("example.org"));
        assert!(!starts_with_url_scheme("h"));
    }

    #[test]
    fn test_multibyte_token_does_not_panic() {
        assert!(!starts_with_url_scheme("ééééééé"));
    }
}
