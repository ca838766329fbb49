//! Socialmedia Signer CLI Library
//!
//! This crate provides the `smsigner` binary: it declares the command-line
//! schema, parses the process arguments with `socialmedia-signer-core` and
//! dispatches on the selected subcommand.
//!
//! # Architecture
//!
//! - [`command_line`]: The declared subcommands and subarguments
//! - [`app`]: Dispatch on the validated command line
//! - [`platforms`]: The supported social media platforms
//! - [`config`]: Application identity and logging setup
//!
//! # Examples
//!
//! ```bash
//! # Print help
//! smsigner --help
//! smsigner -?
//!
//! # Verify a post
//! smsigner --verify --url=https://x.com/someone/status/1
//! smsigner -v -u https://x.com/someone/status/1
//!
//! # Sign a post for a platform, with a signature image
//! smsigner -s -p x -i signature.png
//! ```

pub mod app;
pub mod command_line;
pub mod config;
pub mod platforms;
