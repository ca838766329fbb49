use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors caused by the command line given by the user.
///
/// Every variant is fatal to the current parse. [`Error::Schema`] is the
/// exception to the "user error" rule: it reports a broken schema declared
/// by the host tool and is never caused by the command line itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Parameter given twice `{}`!", .0)]
    DuplicateOption(String),

    #[error("Both `--{}` and `-{}` given, specify only one of them!", .name, .abbreviation)]
    Conflict { name: String, abbreviation: char },

    #[error("Parameter `--{}` does not take a value, but `{}` was given!", .name, .value)]
    InvalidValue { name: String, value: String },

    #[error("Parameter `--{}` requires a value!", .0)]
    MissingValue(String),

    #[error("Only one subcommand allowed, but `--{}` and `--{}` were given!", .0, .1)]
    MultipleSubcommands(String, String),

    #[error("Subcommand `--{}` requires subargument `--{}`!", .subcommand, .subargument)]
    MissingRequiredSubargument {
        subcommand: String,
        subargument: String,
    },

    #[error("Subargument `--{}` is not applicable to subcommand `--{}`!", .subargument, .subcommand)]
    SubargumentNotApplicable {
        subcommand: String,
        subargument: String,
    },

    #[error("Subargument `--{}` given without a subcommand!", .0)]
    SubargumentWithoutSubcommand(String),

    #[error("Unknown parameter `{}`!", .0)]
    UnknownParameter(String),

    #[error("Invalid command-line schema: {}", .0)]
    Schema(#[from] SchemaError),
}

/// Tokens which do not match the command-line grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Not a valid parameter `{}`!", .0)]
    NotAnOption(String),

    #[error("Empty abbreviation `-` found!")]
    EmptyAbbreviation,

    #[error("Incomplete parameter name `{}`!", .0)]
    IncompleteName(String),

    #[error("Parameter name `--{0}` is too short! Do you mean `-{0}` instead?")]
    NameTooShort(char),

    #[error("Garbage `{}` after parameter name `--{}`!", .garbage, .name)]
    GarbageAfterName { garbage: String, name: String },

    #[error("Invalid character `{}` in abbreviation `-{}`!", .character, .cluster)]
    InvalidAbbreviation { character: char, cluster: String },

    #[error(
        "Invalid character `=` in abbreviation `-{}`! Use `--name=value` or `-x value` instead.",
        .0
    )]
    ValueInAbbreviation(String),
}

/// Faults in the schema declared by the host tool.
///
/// These signal a bug in the program, not bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Name `{}` declared twice", .0)]
    DuplicateName(String),

    #[error("Abbreviation `{}` declared twice", .0)]
    DuplicateAbbreviation(char),

    #[error("Name `{}` does not match the option grammar", .0)]
    InvalidName(String),

    #[error("Abbreviation `{}` of `{}` does not match the option grammar", .abbreviation, .name)]
    InvalidAbbreviation { name: String, abbreviation: char },

    #[error("Subargument `{}` forbids a value and forbids an empty value", .0)]
    NeverSettable(String),

    #[error("Subcommand `{}` references unknown subargument `{}`", .subcommand, .subargument)]
    UnknownSubargument {
        subcommand: String,
        subargument: String,
    },

    #[error("Subcommand `{}` lists `{}` as both required and optional", .subcommand, .subargument)]
    RequiredAndOptional {
        subcommand: String,
        subargument: String,
    },
}

impl Error {
    /// Returns `true` if the error was caused by the command line and not by
    /// the declared schema.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Schema(_))
    }

    /// Formats the single diagnostic line shown to the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialmedia_signer_core::error::Error;
    ///
    /// let error = Error::UnknownParameter("--bogus".to_string());
    /// assert_eq!(
    ///     error.diagnostic("smsigner"),
    ///     "command-line: Unknown parameter `--bogus`!  Try 'smsigner --help' for full help."
    /// );
    /// ```
    #[must_use]
    pub fn diagnostic(&self, program_name: &str) -> String {
        format!("command-line: {self}  Try '{program_name} --help' for full help.")
    }

    pub fn conflict(name: &str, abbreviation: char) -> Self {
        Self::Conflict {
            name: name.to_string(),
            abbreviation,
        }
    }

    pub fn invalid_value(name: &str, value: &str) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn missing_required(subcommand: &str, subargument: &str) -> Self {
        Self::MissingRequiredSubargument {
            subcommand: subcommand.to_string(),
            subargument: subargument.to_string(),
        }
    }

    pub fn not_applicable(subcommand: &str, subargument: &str) -> Self {
        Self::SubargumentNotApplicable {
            subcommand: subcommand.to_string(),
            subargument: subargument.to_string(),
        }
    }
}
