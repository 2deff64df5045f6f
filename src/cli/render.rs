//! Text output for items and messages

use std::io::Write;
use crate::database::Item;
use crate::error::Result;

pub const SEPARATOR: &str = "_____";

pub const FAREWELL: &str = "Leaving so soon? Just remember, even Bilbo Baggins had his to-do list: \n\
⚬ Adventure awaits, check. \n\
⚬ Second breakfast, check. \n\
⚬ Keep an eye on that ring, check. \n\
Until we meet again, continue with your tasks like a hobbit on an adventure!";

/// Print the banner shown at startup
pub fn write_banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Welcome to {} Version {}", crate::APP_NAME, crate::APP_VERSION)?;
    Ok(())
}

/// Print a user's item list, or the empty-list message
pub fn write_items(out: &mut dyn Write, items: &[Item]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Your to-do list:")?;
    writeln!(out, "{}", SEPARATOR)?;

    if items.is_empty() {
        writeln!(out)?;
        writeln!(out, "No items found for this user.")?;
        return Ok(());
    }

    for item in items {
        write_item(out, item)?;
    }
    Ok(())
}

fn write_item(out: &mut dyn Write, item: &Item) -> Result<()> {
    writeln!(out, "ID number {}: {}", item.item_id, item.name)?;
    writeln!(out, "Time added: {}", item.created_at_display())?;
    writeln!(out, "Description:")?;
    writeln!(out)?;
    writeln!(out, "{}", item.description.as_deref().unwrap_or(""))?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out)?;
    Ok(())
}

/// Print a message preceded by a blank line
pub fn write_message(out: &mut dyn Write, message: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn render(items: &[Item]) -> String {
        let mut out = Vec::new();
        write_items(&mut out, items).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_list() {
        let text = render(&[]);
        assert!(text.contains("Your to-do list:"));
        assert!(text.contains("No items found for this user."));
    }

    #[test]
    fn test_item_layout() {
        let item = Item {
            item_id: 3,
            name: "Buy milk".to_string(),
            description: Some("2%".to_string()),
            created_at: Utc::now(),
        };
        let text = render(&[item.clone()]);
        assert!(text.contains("ID number 3: Buy milk\n"));
        assert!(text.contains(&format!("Time added: {}\n", item.created_at_display())));
        assert!(text.contains("Description:\n\n2%\n_____\n"));
        assert!(!text.contains("No items found"));
    }

    #[test]
    fn test_missing_description_renders_blank() {
        let item = Item {
            item_id: 1,
            name: "Nap".to_string(),
            description: None,
            created_at: Utc::now(),
        };
        assert!(render(&[item]).contains("Description:\n\n\n_____"));
    }

    #[test]
    fn test_banner() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Welcome to Little List-O-Maker Version 1.1\n"
        );
    }
}
