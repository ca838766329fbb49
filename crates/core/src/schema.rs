//! Declarative description of subcommands and their subarguments.
//!
//! A [`Schema`] is built once at startup and is immutable afterwards. Parsed
//! values are never written into it; the validation pass produces a separate
//! [`Binding`](crate::binding::Binding) instead.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::config::{is_option_character, MIN_NAME_LENGTH};
use crate::error::SchemaError;

/// A single declared command-line option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subargument {
    /// Long form, used as `--name`.
    pub name: String,
    /// Short form, used as `-x`.
    pub abbreviation: char,
    pub description: String,
    /// Shown in help output in place of the value, e.g. `URL`.
    pub value_placeholder: String,
    /// Whether a value may be given at all.
    pub value_allowed: bool,
    /// Whether the option may be given without a value.
    pub value_empty_allowed: bool,
}

impl Subargument {
    /// An option which never takes a value.
    #[must_use]
    pub fn flag(name: &str, abbreviation: char, description: &str) -> Self {
        Self {
            name: name.to_string(),
            abbreviation,
            description: description.to_string(),
            value_placeholder: String::new(),
            value_allowed: false,
            value_empty_allowed: true,
        }
    }

    /// An option which must be given a non-empty value.
    #[must_use]
    pub fn with_value(
        name: &str,
        abbreviation: char,
        description: &str,
        value_placeholder: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            abbreviation,
            description: description.to_string(),
            value_placeholder: value_placeholder.to_string(),
            value_allowed: true,
            value_empty_allowed: false,
        }
    }

    /// An option which may be given with or without a value.
    #[must_use]
    pub fn with_optional_value(
        name: &str,
        abbreviation: char,
        description: &str,
        value_placeholder: &str,
    ) -> Self {
        Self {
            value_empty_allowed: true,
            ..Self::with_value(name, abbreviation, description, value_placeholder)
        }
    }

    /// Renders the option the way a user would type it.
    ///
    /// The abbreviated form is `-x VALUE`, the named form `--name=VALUE`.
    /// Options which may be given without a value show the value in
    /// brackets. `optional` wraps the whole option in brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialmedia_signer_core::schema::Subargument;
    ///
    /// let url = Subargument::with_value("url", 'u', "post to verify", "URL");
    /// assert_eq!(url.format(true, false), "-u URL");
    /// assert_eq!(url.format(false, true), "[--url=URL]");
    /// ```
    #[must_use]
    pub fn format(&self, abbreviated: bool, optional: bool) -> String {
        let mut out = if abbreviated {
            format!("-{}", self.abbreviation)
        } else {
            format!("--{}", self.name)
        };

        if self.value_allowed {
            let separator = if abbreviated { " " } else { "=" };
            if self.value_empty_allowed {
                out.push_str(&format!("[{separator}{}]", self.value_placeholder));
            } else {
                out.push_str(&format!("{separator}{}", self.value_placeholder));
            }
        }

        if optional {
            format!("[{out}]")
        } else {
            out
        }
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.name.chars().count() < MIN_NAME_LENGTH
            || !self.name.chars().all(is_option_character)
        {
            return Err(SchemaError::InvalidName(self.name.clone()));
        }

        if !is_option_character(self.abbreviation) {
            return Err(SchemaError::InvalidAbbreviation {
                name: self.name.clone(),
                abbreviation: self.abbreviation,
            });
        }

        if !self.value_allowed && !self.value_empty_allowed {
            return Err(SchemaError::NeverSettable(self.name.clone()));
        }

        Ok(())
    }
}

impl Display for Subargument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`--{}`", self.name)?;

        if !self.description.is_empty() {
            write!(formatter, " ({})", self.description)?;
        }

        Ok(())
    }
}

/// A subargument which selects what the tool does.
///
/// Subcommands are mutually exclusive. Each one names the subarguments it
/// requires and the ones it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcommand {
    pub subargument: Subargument,
    pub required_subarguments: Vec<String>,
    pub optional_subarguments: Vec<String>,
}

impl Subcommand {
    #[must_use]
    pub fn new(subargument: Subargument) -> Self {
        Self {
            subargument,
            required_subarguments: Vec::new(),
            optional_subarguments: Vec::new(),
        }
    }

    /// Adds subarguments which must be set when this subcommand is selected.
    #[must_use]
    pub fn requires(mut self, names: &[&str]) -> Self {
        self.required_subarguments
            .extend(names.iter().map(ToString::to_string));
        self
    }

    /// Adds subarguments which may be set when this subcommand is selected.
    #[must_use]
    pub fn accepts(mut self, names: &[&str]) -> Self {
        self.optional_subarguments
            .extend(names.iter().map(ToString::to_string));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.subargument.name
    }

    #[must_use]
    pub fn abbreviation(&self) -> char {
        self.subargument.abbreviation
    }

    /// Returns `true` if the named subargument may be set together with this
    /// subcommand.
    #[must_use]
    pub fn permits(&self, subargument: &str) -> bool {
        self.required_subarguments.iter().any(|name| name == subargument)
            || self.optional_subarguments.iter().any(|name| name == subargument)
    }
}

impl Display for Subcommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.subargument, formatter)
    }
}

/// The complete set of options the host tool declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    subcommands: Vec<Subcommand>,
    subarguments: Vec<Subargument>,
}

impl Schema {
    /// Builds and checks a schema.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A name or abbreviation is used twice, across subcommands and
    ///   subarguments alike
    /// - A name or abbreviation does not match the option grammar
    /// - An entry forbids both a value and the empty value
    /// - A subcommand references a subargument which is not declared
    /// - A subcommand lists a subargument as required and optional
    pub fn new(
        subcommands: Vec<Subcommand>,
        subarguments: Vec<Subargument>,
    ) -> Result<Self, SchemaError> {
        let mut names = HashSet::new();
        let mut abbreviations = HashSet::new();

        let entries = subcommands
            .iter()
            .map(|subcommand| &subcommand.subargument)
            .chain(subarguments.iter());

        for entry in entries {
            entry.validate()?;

            if !names.insert(entry.name.as_str()) {
                return Err(SchemaError::DuplicateName(entry.name.clone()));
            }
            if !abbreviations.insert(entry.abbreviation) {
                return Err(SchemaError::DuplicateAbbreviation(entry.abbreviation));
            }
        }

        for subcommand in &subcommands {
            let referenced = subcommand
                .required_subarguments
                .iter()
                .chain(subcommand.optional_subarguments.iter());

            for name in referenced {
                if !subarguments.iter().any(|subargument| &subargument.name == name) {
                    return Err(SchemaError::UnknownSubargument {
                        subcommand: subcommand.name().to_string(),
                        subargument: name.clone(),
                    });
                }
            }

            if let Some(overlap) = subcommand
                .required_subarguments
                .iter()
                .find(|name| subcommand.optional_subarguments.contains(name))
            {
                return Err(SchemaError::RequiredAndOptional {
                    subcommand: subcommand.name().to_string(),
                    subargument: overlap.clone(),
                });
            }
        }

        Ok(Self {
            subcommands,
            subarguments,
        })
    }

    #[must_use]
    pub fn subcommands(&self) -> &[Subcommand] {
        &self.subcommands
    }

    #[must_use]
    pub fn subarguments(&self) -> &[Subargument] {
        &self.subarguments
    }

    #[must_use]
    pub fn subcommand(&self, name: &str) -> Option<&Subcommand> {
        self.subcommands
            .iter()
            .find(|subcommand| subcommand.name() == name)
    }

    #[must_use]
    pub fn subargument(&self, name: &str) -> Option<&Subargument> {
        self.subarguments
            .iter()
            .find(|subargument| subargument.name == name)
    }

    /// Every declared entry, subcommands first, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Subargument> {
        self.subcommands
            .iter()
            .map(|subcommand| &subcommand.subargument)
            .chain(self.subarguments.iter())
    }
}
