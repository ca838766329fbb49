//! Socialmedia Signer Core Library
//!
//! This crate provides the command-line parser of the Socialmedia Signer. It
//! turns the process arguments into a validated [`Binding`]: which
//! subcommand was requested, with which subarguments and values.
//!
//! # Key Features
//!
//! - **Schema Model**: Subcommands and subarguments declared once at startup
//! - **Long and Short Options**: `--name=value`, `-x value` and stacked `-xyz`
//! - **Two-Stage Validation**: Value policies first, subcommand scope second
//! - **Fail-Fast Errors**: The first problem found aborts the parse
//!
//! # Examples
//!
//! ```
//! use socialmedia_signer_core::schema::{Schema, Subargument, Subcommand};
//!
//! let schema = Schema::new(
//!     vec![Subcommand::new(Subargument::flag("verify", 'v', "verify a post")).requires(&["url"])],
//!     vec![Subargument::with_value("url", 'u', "post URL", "URL")],
//! )?;
//!
//! let binding = socialmedia_signer_core::parse(&schema, &["smsigner", "-v", "-u", "https://x/y"])?;
//! assert_eq!(binding.selected_subcommand().map(|s| s.name()), Some("verify"));
//! assert_eq!(binding.value("url"), "https://x/y");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod help;
pub mod parsing;
pub mod schema;
pub mod validation;

pub use binding::Binding;
pub use error::{Error, Result, SchemaError, SyntaxError};

use crate::schema::Schema;

/// Parses the full process argument vector against `schema`.
///
/// The first element is the invocation path; only its base name is kept,
/// for diagnostics. Everything after it is parsed as options.
///
/// # Errors
///
/// Returns the first syntax or validation error found.
pub fn parse<'s, S: AsRef<str>>(schema: &'s Schema, argv: &[S]) -> Result<Binding<'s>> {
    let (program_name, arguments) = split_program_name(argv);
    let raw = parsing::parse_raw(arguments)?;
    validation::bind(schema, raw, program_name)
}

/// Separates the program name from the arguments to parse.
pub fn split_program_name<S: AsRef<str>>(argv: &[S]) -> (String, &[S]) {
    match argv.split_first() {
        Some((argv0, arguments)) => (config::program_name(argv0.as_ref()), arguments),
        None => (config::FALLBACK_PROGRAM_NAME.to_string(), argv),
    }
}
