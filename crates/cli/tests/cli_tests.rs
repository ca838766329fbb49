//! End-to-end tests of the `smsigner` argument handling.
//!
//! Each test feeds a full argument vector to `app::execute` and checks the
//! exit status and what was written to stdout and stderr.

use pretty_assertions::assert_eq;
use socialmedia_signer_cli::app::execute;
use socialmedia_signer_cli::config::{version_banner, APP_NAME};

fn run(argv: &[&str]) -> (u8, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = execute(argv, &mut out, &mut err);
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_help_long_and_short() {
    let (long_status, long_out, long_err) = run(&["smsigner", "--help"]);
    let (short_status, short_out, _) = run(&["smsigner", "-?"]);

    assert_eq!(long_status, 0);
    assert_eq!(short_status, 0);
    assert_eq!(long_out, short_out);
    assert!(long_err.is_empty());
    assert!(long_out.starts_with(APP_NAME));
}

#[test]
fn test_help_lists_every_entry() {
    let (_, out, _) = run(&["smsigner", "--help"]);

    for line in [
        "  -?, --help ",
        "  -V, --version ",
        "  -s, --sign ",
        "  -v, --verify ",
        "  -p, --platform=PLATFORM ",
        "  -u, --url=URL ",
        "  -i, --image=FILE ",
    ] {
        assert!(out.contains(line), "missing `{line}` in:\n{out}");
    }
}

#[test]
fn test_version() {
    let (status, out, _) = run(&["smsigner", "--version"]);

    assert_eq!(status, 0);
    assert_eq!(out.lines().next(), Some(version_banner().as_str()));
}

#[test]
fn test_without_arguments() {
    let (status, out, err) = run(&["/usr/local/bin/smsigner"]);

    assert_eq!(status, 0);
    assert!(err.is_empty());
    assert!(out.contains("Usage: smsigner --help"));
}

#[test]
fn test_syntax_error_diagnostic() {
    let (status, out, err) = run(&["./smsigner", "-"]);

    assert_eq!(status, 1);
    assert!(out.is_empty());
    assert_eq!(
        err,
        "command-line: Empty abbreviation `-` found!  Try 'smsigner --help' for full help.\n"
    );
}

#[test]
fn test_missing_url_diagnostic() {
    let (status, _, err) = run(&["smsigner", "--verify"]);

    assert_eq!(status, 1);
    assert!(err.starts_with("command-line: Subcommand `--verify` requires subargument `--url`!"));
}

#[test]
fn test_unknown_parameter_diagnostic() {
    let (status, _, err) = run(&["smsigner", "--bogus"]);

    assert_eq!(status, 1);
    assert!(err.contains("Unknown parameter `--bogus`!"));
    assert!(err.ends_with("Try 'smsigner --help' for full help.\n"));
}

#[test]
fn test_verify_reaches_the_platform_lookup() {
    let (status, out, err) = run(&["smsigner", "-v", "-u", "https://x.com/someone/status/1"]);

    assert_eq!(status, 1);
    assert!(out.is_empty());
    assert_eq!(err, "Verifying posts on X.com is not implemented yet!\n");
}

#[test]
fn test_sign_with_unknown_platform() {
    let (status, _, err) = run(&["smsigner", "--sign", "--platform=myspace"]);

    assert_eq!(status, 1);
    assert_eq!(
        err,
        "Unknown platform `myspace`! Supported platforms: threads, x\n"
    );
}

#[test]
fn test_empty_argv() {
    let (status, out, _) = run(&[]);

    assert_eq!(status, 0);
    assert!(out.contains("Usage: smsigner --help"));
}
