//! The command-line schema of the signer.
//!
//! Subcommands and subarguments are declared here once. Everything else
//! refers to them through the name constants below.

use socialmedia_signer_core::schema::{Schema, Subargument, Subcommand};
use socialmedia_signer_core::SchemaError;

pub const HELP: &str = "help";
pub const VERSION: &str = "version";
pub const SIGN: &str = "sign";
pub const VERIFY: &str = "verify";

pub const PLATFORM: &str = "platform";
pub const URL: &str = "url";
pub const IMAGE: &str = "image";

/// Declares the schema of the `smsigner` binary.
///
/// # Errors
///
/// Returns an error if the declaration is inconsistent. This is a bug in
/// the program, never a user error.
pub fn declare_schema() -> Result<Schema, SchemaError> {
    Schema::new(
        vec![
            Subcommand::new(Subargument::flag(HELP, '?', "display this help and exit")),
            Subcommand::new(Subargument::flag(
                VERSION,
                'V',
                "output version information and exit",
            )),
            Subcommand::new(Subargument::flag(SIGN, 's', "sign a social media post"))
                .requires(&[PLATFORM])
                .accepts(&[IMAGE]),
            Subcommand::new(Subargument::flag(VERIFY, 'v', "verify a signed post"))
                .requires(&[URL])
                .accepts(&[IMAGE]),
        ],
        vec![
            Subargument::with_value(PLATFORM, 'p', "id of the platform to post on", "PLATFORM"),
            Subargument::with_value(URL, 'u', "URL of the post to verify", "URL"),
            Subargument::with_value(IMAGE, 'i', "image which carries the signature", "FILE"),
        ],
    )
}
