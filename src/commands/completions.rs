//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use devcli_demo::cli::Cli;

pub fn handle(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "devcli-demo", &mut io::stdout());
}
