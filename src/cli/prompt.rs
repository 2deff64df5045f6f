//! Console input
//!
//! Interactive flows read input through the `Prompter` trait so they can be
//! driven by a terminal or by a scripted list of answers.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
use dialoguer::{Input, Password};
use crate::error::{TodoError, Result};

/// Source of user input
pub trait Prompter {
    /// Read a line of text
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Read a line of text without echoing it
    fn read_password(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal prompter backed by `dialoguer`.
///
/// When stdin is not a terminal (piped or redirected input), lines are read
/// from stdin directly and nothing is masked.
#[derive(Debug)]
pub struct TerminalPrompter {
    piped: Option<LinePrompter<StdinLock<'static>, Stdout>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        let piped = if io::stdin().is_terminal() {
            None
        } else {
            Some(LinePrompter::new(io::stdin().lock(), io::stdout()))
        };
        Self { piped }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if let Some(piped) = self.piped.as_mut() {
            return piped.read_line(prompt);
        }
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn read_password(&mut self, prompt: &str) -> Result<String> {
        if let Some(piped) = self.piped.as_mut() {
            return piped.read_password(prompt);
        }
        Ok(Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?)
    }
}

/// Prompter reading one line per answer from any buffered reader.
///
/// Prompts are echoed to `out`. End of input is `UnexpectedEof`.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    fn next_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}: ", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(TodoError::IoError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("end of input at prompt '{}'", prompt),
            )));
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.next_line(prompt)
    }

    fn read_password(&mut self, prompt: &str) -> Result<String> {
        self.next_line(prompt)
    }
}

/// Prompter that replays a fixed list of answers.
///
/// Running out of answers is reported like end of input on a terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            TodoError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for prompt '{}'", prompt),
            ))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }

    fn read_password(&mut self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let mut prompter = ScriptedPrompter::new(["one", "two"]);
        assert_eq!(prompter.read_line("first").unwrap(), "one");
        assert_eq!(prompter.read_password("second").unwrap(), "two");
        assert_eq!(prompter.remaining(), 0);
        assert_eq!(prompter.prompts(), ["first", "second"]);
    }

    #[test]
    fn test_scripted_exhausted() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let err = prompter.read_line("anything").unwrap_err();
        assert!(matches!(err, TodoError::IoError(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_line_prompter_reads_lines() {
        let input = io::Cursor::new("register\r\nalice\n\nlast");
        let mut out = Vec::new();
        let mut prompter = LinePrompter::new(input, &mut out);

        assert_eq!(prompter.read_line("Action").unwrap(), "register");
        assert_eq!(prompter.read_password("Password").unwrap(), "alice");
        assert_eq!(prompter.read_line("Empty").unwrap(), "");
        assert_eq!(prompter.read_line("No newline").unwrap(), "last");
        let err = prompter.read_line("Gone").unwrap_err();
        assert!(matches!(err, TodoError::IoError(e) if e.kind() == io::ErrorKind::UnexpectedEof));

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("Action: Password: "));
    }
}
