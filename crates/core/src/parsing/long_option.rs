use crate::config::{is_option_character, LONG_MARKER, MIN_NAME_LENGTH, VALUE_SEPARATOR};
use crate::error::{Result, SyntaxError};
use crate::parsing::raw::RawArguments;

/// Decodes the text after `--` and records it in `raw`.
///
/// # Errors
///
/// Returns an error if the name is shorter than two characters, if anything
/// other than `=value` follows the name, or if the name was already given.
pub fn decode(body: &str, raw: &mut RawArguments) -> Result<()> {
    let (name, value) = split(body)?;
    raw.insert_name(name, value)
}

/// Splits `name[=value]` into its name and value.
///
/// A missing value is returned as the empty string, the same as an explicit
/// `name=`.
pub fn split(body: &str) -> std::result::Result<(&str, &str), SyntaxError> {
    let name_end = body
        .char_indices()
        .find(|(_, ch)| !is_option_character(*ch))
        .map_or(body.len(), |(index, _)| index);
    let (name, rest) = body.split_at(name_end);

    match name.chars().next() {
        None => {
            return Err(SyntaxError::IncompleteName(format!("{LONG_MARKER}{body}")));
        }
        Some(first) if name.chars().count() < MIN_NAME_LENGTH => {
            return Err(SyntaxError::NameTooShort(first));
        }
        Some(_) => {}
    }

    if rest.is_empty() {
        return Ok((name, ""));
    }

    match rest.strip_prefix(VALUE_SEPARATOR) {
        Some(value) => Ok((name, value)),
        None => Err(SyntaxError::GarbageAfterName {
            garbage: rest.to_string(),
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_split_name_only() {
        assert_eq!(split("verify").unwrap(), ("verify", ""));
    }

    #[test]
    fn test_split_name_and_value() {
        assert_eq!(split("url=https://x/y").unwrap(), ("url", "https://x/y"));
    }

    #[test]
    fn test_split_value_keeps_further_separators() {
        assert_eq!(split("url=a=b").unwrap(), ("url", "a=b"));
    }

    #[test]
    fn test_split_explicit_empty_value() {
        assert_eq!(split("url=").unwrap(), ("url", ""));
    }

    #[test]
    fn test_split_help_character_in_name() {
        assert_eq!(split("??").unwrap(), ("??", ""));
    }

    #[test]
    fn test_split_single_character_name() {
        assert_eq!(split("u").unwrap_err(), SyntaxError::NameTooShort('u'));
        assert_eq!(split("u=x").unwrap_err(), SyntaxError::NameTooShort('u'));
    }

    #[test]
    fn test_split_missing_name() {
        assert_eq!(
            split("=value").unwrap_err(),
            SyntaxError::IncompleteName("--=value".to_string())
        );
    }

    #[test]
    fn test_split_garbage_after_name() {
        assert_eq!(
            split("url:x").unwrap_err(),
            SyntaxError::GarbageAfterName {
                garbage: ":x".to_string(),
                name: "url".to_string(),
            }
        );
        assert!(matches!(
            split("dry-run").unwrap_err(),
            SyntaxError::GarbageAfterName { .. }
        ));
    }

    #[test]
    fn test_decode_records_name() {
        let mut raw = RawArguments::default();
        decode("url=https://x/y", &mut raw).unwrap();
        assert_eq!(raw.name_value("url"), Some("https://x/y"));
    }

    #[test]
    fn test_decode_duplicate_name() {
        let mut raw = RawArguments::default();
        decode("verify", &mut raw).unwrap();
        let result = decode("verify", &mut raw);
        assert_eq!(
            result.unwrap_err(),
            Error::DuplicateOption("--verify".to_string())
        );
    }
}
