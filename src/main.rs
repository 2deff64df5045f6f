//! Little List-O-Maker command-line entry point

use std::io;
use listomaker::cli::{self, TerminalPrompter};
use listomaker::{AppConfig, TodoList};

fn main() -> anyhow::Result<()> {
    // Quiet by default; RUST_LOG=debug for detail
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    ).init();

    let config = AppConfig::load()?;
    let mut todo = TodoList::from_config(&config)?;

    let mut prompter = TerminalPrompter::new();
    let mut stdout = io::stdout();
    cli::run_session(&mut todo, &mut prompter, &mut stdout)?;

    todo.close();
    Ok(())
}
