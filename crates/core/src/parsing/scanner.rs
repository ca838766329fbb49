use crate::config::{LONG_MARKER, OPTION_MARKER};
use crate::error::SyntaxError;

/// Structural kind of a single process argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// An empty argument, skipped.
    Empty,
    /// Text after `--`.
    Long(&'a str),
    /// Text after a single `-`.
    Short(&'a str),
}

/// Classifies one argument without any knowledge of the schema.
///
/// # Errors
///
/// Returns an error if the argument is `--` or `-` alone, or if it does not
/// start with a dash at all.
///
/// # Examples
///
/// ```
/// use socialmedia_signer_core::parsing::{scan, Token};
///
/// assert_eq!(scan("--url=x").unwrap(), Token::Long("url=x"));
/// assert_eq!(scan("-uv").unwrap(), Token::Short("uv"));
/// assert_eq!(scan("").unwrap(), Token::Empty);
/// assert!(scan("url").is_err());
/// ```
pub fn scan(argument: &str) -> Result<Token<'_>, SyntaxError> {
    if argument.is_empty() {
        return Ok(Token::Empty);
    }

    if let Some(body) = argument.strip_prefix(LONG_MARKER) {
        if body.is_empty() {
            return Err(SyntaxError::IncompleteName(argument.to_string()));
        }
        return Ok(Token::Long(body));
    }

    match argument.strip_prefix(OPTION_MARKER) {
        Some("") => Err(SyntaxError::EmptyAbbreviation),
        Some(cluster) => Ok(Token::Short(cluster)),
        None => Err(SyntaxError::NotAnOption(argument.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty() {
        assert_eq!(scan("").unwrap(), Token::Empty);
    }

    #[test]
    fn test_scan_long() {
        assert_eq!(scan("--verify").unwrap(), Token::Long("verify"));
        assert_eq!(scan("--url=").unwrap(), Token::Long("url="));
        // Too short for a name, but that is for the long decoder to say
        assert_eq!(scan("--u").unwrap(), Token::Long("u"));
    }

    #[test]
    fn test_scan_short() {
        assert_eq!(scan("-v").unwrap(), Token::Short("v"));
        assert_eq!(scan("-?").unwrap(), Token::Short("?"));
        assert_eq!(scan("-uv").unwrap(), Token::Short("uv"));
    }

    #[test]
    fn test_scan_double_dash_alone() {
        assert_eq!(
            scan("--").unwrap_err(),
            SyntaxError::IncompleteName("--".to_string())
        );
    }

    #[test]
    fn test_scan_single_dash_alone() {
        assert_eq!(scan("-").unwrap_err(), SyntaxError::EmptyAbbreviation);
    }

    #[test]
    fn test_scan_bare_value() {
        assert_eq!(
            scan("https://x/y").unwrap_err(),
            SyntaxError::NotAnOption("https://x/y".to_string())
        );
    }
}
