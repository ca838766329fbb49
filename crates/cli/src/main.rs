use std::env;
use std::io::{stderr, stdout};
use std::process::ExitCode;

use log::debug;
use socialmedia_signer_cli::{app, config};

fn main() -> ExitCode {
    config::init_logging();

    let argv: Vec<String> = env::args_os()
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect();
    debug!("Arguments: {:?}", argv);

    let status = app::execute(&argv, &mut stdout().lock(), &mut stderr().lock());
    ExitCode::from(status)
}
