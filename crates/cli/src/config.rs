//! Application identity and logging setup.
//!
//! The signer reads no configuration files; everything here is fixed at
//! compile time apart from the log filter.

use env_logger::Env;

pub const APP_NAME: &str = "Socialmedia Signer";
pub const APP_DESCRIPTION: &str = "Sign your social media posts and verify other posts.";
pub const BUGTRACKING_URL: &str = "https://github.com/YouDirk/socialmedia-signer/issues";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Exit status for a broken command-line schema (`EX_SOFTWARE`).
pub const EXIT_SCHEMA_FAULT: u8 = 70;

/// Initializes `env_logger`, honouring `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();
}

/// The one-line version banner, e.g. `Socialmedia Signer (command-line) version 0.1.0`.
#[must_use]
pub fn version_banner() -> String {
    let mut banner = format!("{APP_NAME} (command-line) version {VERSION}");
    if cfg!(debug_assertions) {
        banner.push_str(" +debug");
    }
    banner
}
