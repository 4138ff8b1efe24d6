//! quickrec-prefs CLI entry point

use std::process::ExitCode;

use clap::Parser;

use quickrec_prefs::cli::{run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    run(Cli::parse()).await
}
