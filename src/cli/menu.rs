//! Main menu loop

use std::io::Write;
use log::debug;
use crate::business::{TodoList, parse_item_id};
use crate::error::{TodoError, Result};
use super::prompt::Prompter;
use super::render::{FAREWELL, write_items, write_message};

/// One menu selection. Exactly one action runs per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Create,
    Remove,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Parse a menu selection ("1" to "4")
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::List,
            "2" => MenuChoice::Create,
            "3" => MenuChoice::Remove,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

fn write_menu(out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "What do you want to do today?")?;
    writeln!(out, "1. View your to-do list")?;
    writeln!(out, "2. Create new to-do item")?;
    writeln!(out, "3. Remove an item")?;
    writeln!(out, "4. Exit")?;
    writeln!(out)?;
    Ok(())
}

/// Run the menu for an authenticated user until they choose Exit
pub fn run_menu(
    todo: &mut TodoList,
    username: &str,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    loop {
        write_menu(out)?;
        let selection = prompter.read_line("Selection")?;

        match MenuChoice::parse(&selection) {
            MenuChoice::List => show_items(todo, username, out)?,
            MenuChoice::Create => create_item(todo, username, prompter, out)?,
            MenuChoice::Remove => remove_item(todo, username, prompter, out)?,
            MenuChoice::Exit => {
                write_message(out, FAREWELL)?;
                return Ok(());
            }
            MenuChoice::Invalid => debug!("Ignoring menu input {:?}", selection),
        }
    }
}

fn show_items(todo: &TodoList, username: &str, out: &mut dyn Write) -> Result<()> {
    let items = todo.list_items(username)?;
    write_items(out, &items)
}

fn create_item(
    todo: &mut TodoList,
    username: &str,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    let name = prompter.read_line("Name for the item")?;
    let description = prompter.read_line("Description for the item")?;

    match todo.create_item(username, &name, Some(description.as_str())) {
        Ok(item) => write_message(
            out,
            &format!("Created item '{}' with ID {}.", item.name, item.item_id),
        ),
        Err(TodoError::EmptyItemName) => write_message(out, "Item name cannot be empty."),
        Err(err) => Err(err),
    }
}

fn remove_item(
    todo: &mut TodoList,
    username: &str,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    if !todo.has_items(username)? {
        return write_message(out, "You should add some items first.");
    }

    let input = prompter.read_line("Give the ID to remove")?;
    let result = parse_item_id(&input).and_then(|id| todo.remove_item(username, id));

    match result {
        Ok(item) => write_message(out, &format!("Deleted item '{}'", item.name)),
        Err(TodoError::InvalidId(_)) | Err(TodoError::InvalidIdInput(_)) => {
            write_message(out, "Invalid ID!")
        }
        Err(TodoError::NoItems) => write_message(out, "You should add some items first."),
        Err(err) => Err(err),
    }
}
