//! Login / registration flow
//!
//! A small state machine: `Prompting` asks which action to take,
//! `LoggingIn` and `Registering` collect credentials and fall back to
//! `Prompting` on any recoverable failure, `Authenticated` ends the flow.

use std::io::Write;
use log::warn;
use crate::business::TodoList;
use crate::error::{TodoError, Result};
use super::prompt::Prompter;
use super::render::write_message;

/// Account flow state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountState {
    Prompting,
    LoggingIn,
    Registering,
    Authenticated(String),
}

/// Action chosen at the login/register prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Login,
    Register,
    Unknown,
}

impl AccountAction {
    /// Parse the answer to "login or register" (case-insensitive)
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "login" => AccountAction::Login,
            "register" => AccountAction::Register,
            _ => AccountAction::Unknown,
        }
    }
}

/// Run the account flow until a user is authenticated.
///
/// Returns the authenticated username. Only console and storage failures
/// end the flow early.
pub fn run_account_flow(
    todo: &mut TodoList,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<String> {
    let mut state = AccountState::Prompting;

    loop {
        state = match state {
            AccountState::Prompting => {
                let answer = prompter.read_line("Do you want to login or register?")?;
                match AccountAction::parse(&answer) {
                    AccountAction::Login => AccountState::LoggingIn,
                    AccountAction::Register => AccountState::Registering,
                    AccountAction::Unknown => {
                        write_message(out, "Write either 'register' or 'login'.")?;
                        writeln!(out)?;
                        AccountState::Prompting
                    }
                }
            }
            AccountState::LoggingIn => login_step(todo, prompter, out)?,
            AccountState::Registering => register_step(todo, prompter, out)?,
            AccountState::Authenticated(username) => return Ok(username),
        };
    }
}

fn login_step(
    todo: &TodoList,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<AccountState> {
    let username = prompter.read_line("Username")?;
    let password = prompter.read_password("Password")?;

    match todo.login(&username, &password) {
        Ok(user) => {
            write_message(out, &format!("Welcome {}!", user.username))?;
            Ok(AccountState::Authenticated(user.username))
        }
        // Same message for both so usernames cannot be enumerated
        Err(TodoError::UserNotFound(_)) | Err(TodoError::InvalidCredentials) => {
            write_message(out, "Invalid password or username!")?;
            writeln!(out)?;
            Ok(AccountState::Prompting)
        }
        // Unreadable stored hash: log it, but answer like a failed login
        Err(TodoError::HashError(msg)) => {
            warn!("Password verification failed: {}", msg);
            write_message(out, "Invalid password or username!")?;
            writeln!(out)?;
            Ok(AccountState::Prompting)
        }
        Err(err) => Err(err),
    }
}

fn register_step(
    todo: &mut TodoList,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<AccountState> {
    let username = prompter.read_line("Write new username")?;
    let password = prompter.read_password("Password")?;

    match todo.register(&username, &password) {
        Ok(user) => {
            write_message(out, &format!("New user {} created successfully.", user.username))?;
            Ok(AccountState::Authenticated(user.username))
        }
        Err(TodoError::UsernameTaken(_)) => {
            write_message(out, "Username is taken, try again!")?;
            writeln!(out)?;
            Ok(AccountState::Prompting)
        }
        Err(TodoError::EmptyUsername) => {
            write_message(out, "Username cannot be empty.")?;
            writeln!(out)?;
            Ok(AccountState::Prompting)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::ScriptedPrompter;
    use crate::database::queries;

    fn run(todo: &mut TodoList, answers: &[&str]) -> (Result<String>, String) {
        let mut prompter = ScriptedPrompter::new(answers.iter().copied());
        let mut out = Vec::new();
        let result = run_account_flow(todo, &mut prompter, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(AccountAction::parse("login"), AccountAction::Login);
        assert_eq!(AccountAction::parse("LOGIN"), AccountAction::Login);
        assert_eq!(AccountAction::parse(" Register "), AccountAction::Register);
        assert_eq!(AccountAction::parse("signup"), AccountAction::Unknown);
        assert_eq!(AccountAction::parse(""), AccountAction::Unknown);
    }

    #[test]
    fn test_register_authenticates() {
        let mut todo = TodoList::open_in_memory().unwrap();
        let (result, output) = run(&mut todo, &["register", "alice", "pw1"]);
        assert_eq!(result.unwrap(), "alice");
        assert!(output.contains("New user alice created successfully."));
        assert!(todo.user_exists("alice").unwrap());
    }

    #[test]
    fn test_login_authenticates() {
        let mut todo = TodoList::open_in_memory().unwrap();
        todo.register("alice", "pw1").unwrap();

        let (result, output) = run(&mut todo, &["login", "alice", "pw1"]);
        assert_eq!(result.unwrap(), "alice");
        assert!(output.contains("Welcome alice!"));
    }

    #[test]
    fn test_unknown_command_reprompts() {
        let mut todo = TodoList::open_in_memory().unwrap();
        let (result, output) = run(&mut todo, &["hello", "register", "bob", "pw"]);
        assert_eq!(result.unwrap(), "bob");
        assert!(output.contains("Write either 'register' or 'login'."));
    }

    #[test]
    fn test_login_failures_share_message() {
        let mut todo = TodoList::open_in_memory().unwrap();
        todo.register("alice", "pw1").unwrap();

        let (result, output) = run(
            &mut todo,
            &["login", "ghost", "pw", "login", "alice", "wrong", "login", "alice", "pw1"],
        );
        assert_eq!(result.unwrap(), "alice");
        assert_eq!(output.matches("Invalid password or username!").count(), 2);
        assert!(!output.contains("register first"));
    }

    #[test]
    fn test_taken_username_returns_to_prompt() {
        let mut todo = TodoList::open_in_memory().unwrap();
        todo.register("alice", "pw1").unwrap();

        let (result, output) =
            run(&mut todo, &["register", "alice", "x", "register", "carol", "pw"]);
        assert_eq!(result.unwrap(), "carol");
        assert!(output.contains("Username is taken, try again!"));
        assert_eq!(todo.user_count().unwrap(), 2);
    }

    #[test]
    fn test_empty_username_rejected() {
        let mut todo = TodoList::open_in_memory().unwrap();
        let (result, output) = run(&mut todo, &["register", "", "pw", "register", "dave", "pw"]);
        assert_eq!(result.unwrap(), "dave");
        assert!(output.contains("Username cannot be empty."));
    }

    #[test]
    fn test_corrupt_stored_hash_returns_to_prompt() {
        let mut todo = TodoList::open_in_memory().unwrap();
        queries::insert_user(todo.connection().unwrap(), "mallory", b"\xff\xfe").unwrap();

        let (result, output) = run(
            &mut todo,
            &["login", "mallory", "pw", "register", "erin", "pw"],
        );
        assert_eq!(result.unwrap(), "erin");
        assert_eq!(output.matches("Invalid password or username!").count(), 1);
        assert!(!output.contains("Hash error"));
    }

    #[test]
    fn test_end_of_input_ends_flow() {
        let mut todo = TodoList::open_in_memory().unwrap();
        let (result, _) = run(&mut todo, &["login", "alice"]);
        assert!(matches!(result, Err(TodoError::IoError(_))));
    }
}
