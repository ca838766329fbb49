//! Dispatch on the selected subcommand.
//!
//! [`run`] only ever sees the validated [`Binding`]; it never looks at the
//! raw process arguments.

use std::io::Write;

use log::{debug, error, info};
use socialmedia_signer_core::help::{render_options, render_usage};
use socialmedia_signer_core::{split_program_name, Binding};
use thiserror::Error;

use crate::command_line::{self, HELP, IMAGE, PLATFORM, SIGN, URL, VERIFY, VERSION};
use crate::config::{
    version_banner, APP_DESCRIPTION, APP_NAME, BUGTRACKING_URL, EXIT_SCHEMA_FAULT,
};
use crate::platforms::Platforms;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown platform `{}`! Supported platforms: {}", .id, .supported)]
    UnknownPlatform { id: String, supported: String },

    #[error("No supported platform serves `{}`!", .0)]
    UnsupportedUrl(String),

    #[error("{} is not implemented yet!", .0)]
    NotImplemented(String),

    #[error("Output error: {}", .0)]
    Output(#[from] std::io::Error),
}

/// Runs the subcommand selected in `binding`, writing to `out`.
///
/// Without a subcommand the version banner and a usage hint are printed.
///
/// # Errors
///
/// Returns an error if the requested platform is unknown, if signing or
/// verifying is requested, or if writing to `out` fails.
pub fn run<W: Write>(binding: &Binding, platforms: &Platforms, out: &mut W) -> Result<(), AppError> {
    let Some(subcommand) = binding.selected_subcommand() else {
        writeln!(out, "{}", version_banner())?;
        writeln!(out, "\n{}\n", render_usage(binding.program_name()))?;
        return Ok(());
    };

    debug!("Running subcommand `--{}`", subcommand.name());
    match subcommand.name() {
        HELP => print_help(binding, out),
        VERSION => print_version(out),
        SIGN => sign(binding, platforms),
        VERIFY => verify(binding, platforms),
        other => Err(AppError::NotImplemented(format!("Subcommand `--{other}`"))),
    }
}

fn print_help<W: Write>(binding: &Binding, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "{APP_NAME}\n\n{APP_DESCRIPTION}\n")?;
    write!(out, "{}", render_options(binding.schema()))?;
    writeln!(out)?;
    print_version(out)
}

fn print_version<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "{}", version_banner())?;
    writeln!(out, "\nReport bugs to {BUGTRACKING_URL}")?;
    Ok(())
}

fn sign(binding: &Binding, platforms: &Platforms) -> Result<(), AppError> {
    let id = binding.value(PLATFORM);
    let platform = platforms
        .get_by_id(id)
        .ok_or_else(|| AppError::UnknownPlatform {
            id: id.to_string(),
            supported: platforms.ids(),
        })?;

    info!("Signing for {platform}");
    if let Some(image) = binding.get(IMAGE) {
        debug!("Signature image: `{image}`");
    }

    Err(AppError::NotImplemented(format!("Signing posts on {}", platform.name)))
}

fn verify(binding: &Binding, platforms: &Platforms) -> Result<(), AppError> {
    let url = binding.value(URL);
    let platform = platforms
        .find_by_url(url)
        .ok_or_else(|| AppError::UnsupportedUrl(url.to_string()))?;

    info!("Verifying `{url}` on {platform}");
    if let Some(image) = binding.get(IMAGE) {
        debug!("Signature image: `{image}`");
    }

    Err(AppError::NotImplemented(format!("Verifying posts on {}", platform.name)))
}

/// Parses `argv` and runs the selected subcommand.
///
/// Diagnostics go to `err`, regular output to `out`. Returns the process
/// exit status: 0 on success, 1 for bad input or a failed subcommand and
/// [`EXIT_SCHEMA_FAULT`] if the declared schema is broken.
pub fn execute<S: AsRef<str>, O: Write, E: Write>(argv: &[S], out: &mut O, err: &mut E) -> u8 {
    let schema = match command_line::declare_schema() {
        Ok(schema) => schema,
        Err(e) => {
            error!("Invalid command-line schema: {e}");
            let _ = writeln!(err, "FATAL: Invalid command-line schema: {e}");
            return EXIT_SCHEMA_FAULT;
        }
    };

    let binding = match socialmedia_signer_core::parse(&schema, argv) {
        Ok(binding) => binding,
        Err(e) => {
            let (program_name, _) = split_program_name(argv);
            let _ = writeln!(err, "{}", e.diagnostic(&program_name));
            return 1;
        }
    };

    let platforms = Platforms::supported();
    match run(&binding, &platforms, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "{e}");
            1
        }
    }
}
