//! Schema-agnostic scanning of the process arguments.
//!
//! This module turns the raw argument list into [`RawArguments`]: one map
//! from long option names to values and one from abbreviations to values.
//! Nothing here knows which options exist; matching against the
//! [`Schema`](crate::schema::Schema) happens in [`crate::validation`].
//!
//! The grammar:
//!
//! ```text
//! <argv>    ::= '--' <name> <value> | '-' <cluster> | ε
//! <name>    ::= [?alnum]{2,}
//! <value>   ::= '=' .* | ε
//! <cluster> ::= [?alnum] <cluster> | [?alnum] <next>
//! <next>    ::= [^-].*    (consumed as the value of the last character)
//!             | '-' .* | ε
//! ```

pub mod long_option;
pub mod raw;
pub mod scanner;
pub mod short_option;

pub use raw::{parse_raw, RawArguments};
pub use scanner::{scan, Token};
