//! Grammar constants and program-name utilities.
//!
//! This module holds the fixed characters of the command-line grammar and
//! resolves the program name shown in diagnostics from `argv[0]`.

/// Marker which starts every option token.
pub const OPTION_MARKER: char = '-';

/// Marker which starts a long (named) option.
pub const LONG_MARKER: &str = "--";

/// Separates a long option name from its attached value.
pub const VALUE_SEPARATOR: char = '=';

/// The only non-alphanumeric character allowed in names and abbreviations.
pub const HELP_CHARACTER: char = '?';

/// Minimum number of characters of a long option name.
pub const MIN_NAME_LENGTH: usize = 2;

/// Program name used when the operating system hands us an empty `argv[0]`.
pub const FALLBACK_PROGRAM_NAME: &str = "smsigner";

/// Returns `true` if `ch` may appear in an option name or abbreviation.
///
/// # Examples
///
/// ```
/// use socialmedia_signer_core::config::is_option_character;
///
/// assert!(is_option_character('u'));
/// assert!(is_option_character('?'));
/// assert!(!is_option_character('='));
/// ```
#[must_use]
pub fn is_option_character(ch: char) -> bool {
    ch.is_alphanumeric() || ch == HELP_CHARACTER
}

/// Resolves the program name from the invocation path.
///
/// Everything up to and including the last `/` or `\` is removed. If
/// nothing is left, [`FALLBACK_PROGRAM_NAME`] is used.
///
/// # Examples
///
/// ```
/// use socialmedia_signer_core::config::program_name;
///
/// assert_eq!(program_name("/usr/local/bin/smsigner"), "smsigner");
/// assert_eq!(program_name(r"C:\tools\smsigner.exe"), "smsigner.exe");
/// ```
#[must_use]
pub fn program_name(argv0: &str) -> String {
    let base = argv0
        .rfind(['/', '\\'])
        .map_or(argv0, |separator| &argv0[separator + 1..]);

    if base.is_empty() {
        FALLBACK_PROGRAM_NAME.to_string()
    } else {
        base.to_string()
    }
}
