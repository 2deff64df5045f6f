//! Data models for Little List-O-Maker database entities

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Registered account
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    /// Unique user ID
    pub user_id: i64,
    /// Unique username
    pub username: String,
    /// bcrypt hash (modular crypt format, salt embedded)
    #[serde(skip_serializing)]
    pub password_hash: Vec<u8>,
}

/// To-do item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique item ID
    pub item_id: i64,
    /// Item name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creation time in local time, formatted for display (`dd-mm-YYYY HH:MM`)
    pub fn created_at_display(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
            .to_string()
    }
}

/// Ownership link between an item and a user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserItem {
    /// Linked item ID
    pub item_id: i64,
    /// Linked user ID
    pub user_id: i64,
}

/// Time format used when showing items
pub const DISPLAY_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";
