//! Interactive command-line interface
//!
//! The account flow authenticates a user, then the menu loop dispatches
//! item operations until the user exits.

pub mod account;
pub mod menu;
pub mod prompt;
pub mod render;

use std::io::Write;
use crate::business::TodoList;
use crate::error::Result;

pub use account::{AccountAction, AccountState, run_account_flow};
pub use menu::{MenuChoice, run_menu};
pub use prompt::{LinePrompter, Prompter, ScriptedPrompter, TerminalPrompter};

/// Run a full session: banner, account flow, menu
pub fn run_session(
    todo: &mut TodoList,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    render::write_banner(out)?;
    let username = run_account_flow(todo, prompter, out)?;
    run_menu(todo, &username, prompter, out)
}
