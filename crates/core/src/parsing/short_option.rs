use crate::config::{is_option_character, OPTION_MARKER, VALUE_SEPARATOR};
use crate::error::{Result, SyntaxError};
use crate::parsing::raw::RawArguments;

/// Decodes a cluster of stacked abbreviations, e.g. `uv` from `-uv`.
///
/// Every character but the last is recorded without a value. The last one
/// takes `next` as its value, unless `next` is missing, empty or starts with
/// a dash.
///
/// Returns `true` if `next` was consumed as a value, in which case the
/// caller must not scan it as an argument of its own.
///
/// # Errors
///
/// Returns an error if the cluster contains a character which is neither
/// alphanumeric nor `?`, or if an abbreviation was already given.
pub fn decode(cluster: &str, next: Option<&str>, raw: &mut RawArguments) -> Result<bool> {
    let characters: Vec<char> = cluster.chars().collect();
    let mut consumed = false;

    let mut cursor = 0;
    while cursor < characters.len() {
        let abbreviation = characters[cursor];
        check_character(abbreviation, cluster)?;

        let is_last = cursor + 1 == characters.len();
        let value = match next {
            Some(value) if is_last && takes_value(value) => {
                consumed = true;
                value
            }
            _ => "",
        };

        raw.insert_abbreviation(abbreviation, value)?;
        cursor += 1;
    }

    Ok(consumed)
}

fn check_character(character: char, cluster: &str) -> std::result::Result<(), SyntaxError> {
    if character == VALUE_SEPARATOR {
        return Err(SyntaxError::ValueInAbbreviation(cluster.to_string()));
    }

    if !is_option_character(character) {
        return Err(SyntaxError::InvalidAbbreviation {
            character,
            cluster: cluster.to_string(),
        });
    }

    Ok(())
}

fn takes_value(next: &str) -> bool {
    !next.is_empty() && !next.starts_with(OPTION_MARKER)
}
