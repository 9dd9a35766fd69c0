//! Ally-code and profile-link parsing.
//!
//! These run before any Comlink call is made: a malformed ally code or
//! profile URL is rejected as a validation error without touching the
//! network.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ComlinkError;

/// 9 digits, optionally grouped `123-456-789`.
fn ally_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{9}|(\d{3}-){2}\d{3})$").expect("valid ally code pattern"))
}

/// Anchored at both ends: a link with trailing text after the ally code is
/// not a profile link.
fn profile_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https://swgoh\.gg/p/\d{9}/?$").expect("valid profile link pattern")
    })
}

fn ally_code_in_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/p/(\d{9})/?").expect("valid extraction pattern"))
}

pub fn is_valid_ally_code(ally_code: &str) -> bool {
    ally_code_regex().is_match(ally_code)
}

pub fn is_profile_link(url: &str) -> bool {
    profile_link_regex().is_match(url)
}

/// Strips the optional dash grouping from a valid ally code.
///
/// # Returns
/// - `Ok(String)` - The bare 9-digit code
/// - `Err(ComlinkError::Validation)` - Input is not an ally code
pub fn normalize_ally_code(ally_code: &str) -> Result<String, ComlinkError> {
    if !is_valid_ally_code(ally_code) {
        return Err(ComlinkError::validation(format!(
            "Invalid ally code: {ally_code}"
        )));
    }
    Ok(ally_code.replace('-', ""))
}

/// Extracts the 9-digit ally code from a swgoh.gg profile URL.
///
/// # Returns
/// - `Ok(String)` - The ally code found in the URL path
/// - `Err(ComlinkError::Validation)` - URL carries no ally code
pub fn ally_code_from_url(url: &str) -> Result<String, ComlinkError> {
    ally_code_in_url_regex()
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|code| code.as_str().to_string())
        .ok_or_else(|| {
            ComlinkError::validation(format!("URL does not contain a valid ally code: {url}"))
        })
}

/// Builds the public profile link for a valid ally code.
pub fn build_profile_link(ally_code: &str) -> Result<String, ComlinkError> {
    let code = normalize_ally_code(ally_code)?;
    Ok(format!("https://swgoh.gg/p/{code}/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_dashed_ally_codes() {
        assert!(is_valid_ally_code("123456789"));
        assert!(is_valid_ally_code("123-456-789"));
    }

    #[test]
    fn rejects_malformed_ally_codes() {
        assert!(!is_valid_ally_code("12345678"));
        assert!(!is_valid_ally_code("1234567890"));
        assert!(!is_valid_ally_code("123-45-6789"));
        assert!(!is_valid_ally_code("abcdefghi"));
        assert!(!is_valid_ally_code(""));
    }

    #[test]
    fn normalizes_dashed_codes() {
        assert_eq!(normalize_ally_code("123-456-789").unwrap(), "123456789");
        assert_eq!(normalize_ally_code("123456789").unwrap(), "123456789");
        assert!(normalize_ally_code("123456").is_err());
    }

    #[test]
    fn recognizes_profile_links() {
        assert!(is_profile_link("https://swgoh.gg/p/123456789/"));
        assert!(is_profile_link("https://swgoh.gg/p/123456789"));
        assert!(!is_profile_link("https://example.com/p/123456789/"));
        assert!(!is_profile_link("https://swgoh.gg/p/12345/"));
    }

    #[test]
    fn rejects_profile_links_with_trailing_text() {
        assert!(!is_profile_link("https://swgoh.gg/p/123456789/characters"));
        assert!(!is_profile_link("https://swgoh.gg/p/123456789/ and more"));
    }

    #[test]
    fn extracts_ally_code_from_url() {
        assert_eq!(
            ally_code_from_url("https://swgoh.gg/p/987654321/").unwrap(),
            "987654321"
        );
        assert!(matches!(
            ally_code_from_url("https://swgoh.gg/g/12345/"),
            Err(ComlinkError::Validation(_))
        ));
    }

    #[test]
    fn builds_profile_links() {
        assert_eq!(
            build_profile_link("123-456-789").unwrap(),
            "https://swgoh.gg/p/123456789/"
        );
        assert!(build_profile_link("not-a-code").is_err());
    }
}
