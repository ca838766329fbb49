use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;

use crate::config::{LONG_MARKER, OPTION_MARKER};
use crate::error::{Error, Result};
use crate::parsing::scanner::{scan, Token};
use crate::parsing::{long_option, short_option};

/// Unvalidated options, in the order they were given.
///
/// An option given without a value is stored with the empty string. The
/// validation pass drains both maps; whatever is left over is unknown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawArguments {
    by_name: IndexMap<String, String>,
    by_abbreviation: IndexMap<char, String>,
}

impl RawArguments {
    /// Records a long option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOption`] if the name was already recorded.
    pub fn insert_name(&mut self, name: &str, value: &str) -> Result<()> {
        match self.by_name.entry(name.to_string()) {
            Entry::Occupied(_) => Err(Error::DuplicateOption(format!("{LONG_MARKER}{name}"))),
            Entry::Vacant(entry) => {
                debug!("{LONG_MARKER}{name}={value}");
                entry.insert(value.to_string());
                Ok(())
            }
        }
    }

    /// Records an abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOption`] if the abbreviation was already
    /// recorded.
    pub fn insert_abbreviation(&mut self, abbreviation: char, value: &str) -> Result<()> {
        match self.by_abbreviation.entry(abbreviation) {
            Entry::Occupied(_) => Err(Error::DuplicateOption(format!(
                "{OPTION_MARKER}{abbreviation}"
            ))),
            Entry::Vacant(entry) => {
                debug!("{OPTION_MARKER}{abbreviation} {value}");
                entry.insert(value.to_string());
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn name_value(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn abbreviation_value(&self, abbreviation: char) -> Option<&str> {
        self.by_abbreviation.get(&abbreviation).map(String::as_str)
    }

    /// Removes and returns the value recorded for `name`.
    pub fn take_name(&mut self, name: &str) -> Option<String> {
        self.by_name.shift_remove(name)
    }

    /// Removes and returns the value recorded for `abbreviation`.
    pub fn take_abbreviation(&mut self, abbreviation: char) -> Option<String> {
        self.by_abbreviation.shift_remove(&abbreviation)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_abbreviation.is_empty()
    }

    /// The first option still recorded, as the user typed it.
    ///
    /// Long names are reported before abbreviations.
    #[must_use]
    pub fn first_leftover(&self) -> Option<String> {
        self.by_name
            .keys()
            .next()
            .map(|name| format!("{LONG_MARKER}{name}"))
            .or_else(|| {
                self.by_abbreviation
                    .keys()
                    .next()
                    .map(|abbreviation| format!("{OPTION_MARKER}{abbreviation}"))
            })
    }
}

/// Scans the arguments following the program path.
///
/// A short option cluster may consume the following argument as its value;
/// that argument is then skipped.
///
/// # Errors
///
/// Returns the first syntax or duplicate error found. No partial result is
/// produced.
///
/// # Examples
///
/// ```
/// use socialmedia_signer_core::parsing::parse_raw;
///
/// let raw = parse_raw(&["-v", "-u", "https://x/y"]).unwrap();
/// assert_eq!(raw.abbreviation_value('v'), Some(""));
/// assert_eq!(raw.abbreviation_value('u'), Some("https://x/y"));
/// ```
pub fn parse_raw<S: AsRef<str>>(arguments: &[S]) -> Result<RawArguments> {
    let mut raw = RawArguments::default();

    let mut index = 0;
    while index < arguments.len() {
        let argument = arguments[index].as_ref();
        let next: Option<&str> = arguments.get(index + 1).map(AsRef::as_ref);

        let consumed_next = match scan(argument)? {
            Token::Empty => false,
            Token::Long(body) => {
                long_option::decode(body, &mut raw)?;
                false
            }
            Token::Short(cluster) => short_option::decode(cluster, next, &mut raw)?,
        };

        index += if consumed_next { 2 } else { 1 };
    }

    Ok(raw)
}
