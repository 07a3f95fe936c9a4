mod clock;
mod config;
mod domain;
mod input;
mod session;

use std::io;

use clap::Parser;
use tracing::info;

use crate::clock::SystemClock;
use crate::config::Args;
use crate::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the interactive transcript.
    if let Some(level) = args.log_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .init();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), args.session_config());

    session.banner()?;
    let mut account = session.open_account(SystemClock)?;
    let end = session.run(&mut account)?;
    session.farewell()?;

    info!(?end, transactions = account.transactions().len(), "exiting");

    Ok(())
}
