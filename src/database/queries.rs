//! SQL query operations for database access
//!
//! This module provides low-level query functions for database operations.
//! For business-level operations, use the TodoList API.
//!
//! Functions take a `&Connection`; a `rusqlite::Transaction` derefs to one,
//! so writes that must be atomic are composed by the caller inside a
//! transaction.

use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, params};
use rusqlite::types::Type;
use chrono::{DateTime, NaiveDateTime, Utc};
use crate::error::{TodoError, Result};
use super::models::{Item, User};

/// Timestamp format used in database
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a DateTime for database storage
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp from database
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    chrono::NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
}

// ============================================================================
// Users queries
// ============================================================================

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        username: row.get(1)?,
        password_hash: row.get(2)?,
    })
}

/// Find a user by username
pub fn find_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
    let user = conn
        .query_row(
            "SELECT user_id, username, password_hash FROM users WHERE username = ?",
            params![username],
            user_from_row,
        )
        .optional()?;
    Ok(user)
}

/// Check if a username is already registered
pub fn username_exists(conn: &Connection, username: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE username = ?",
        params![username],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Insert a new user and return its ID.
///
/// A UNIQUE violation on `username` is reported as `UsernameTaken`.
pub fn insert_user(conn: &Connection, username: &str, password_hash: &[u8]) -> Result<i64> {
    let result = conn.execute(
        "INSERT INTO users (username, password_hash) VALUES (?, ?)",
        params![username, password_hash],
    );

    match result {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            Err(TodoError::UsernameTaken(username.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Count all registered users
pub fn count_users(conn: &Connection) -> Result<u32> {
    let count: u32 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    Ok(count)
}

// ============================================================================
// Items queries
// ============================================================================

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    let created_at: String = row.get(3)?;
    let created_at = NaiveDateTime::parse_from_str(&created_at, TIMESTAMP_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    Ok(Item {
        item_id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: DateTime::from_naive_utc_and_offset(created_at, Utc),
    })
}

/// Get all items linked to a username, oldest first
pub fn get_items_for_user(conn: &Connection, username: &str) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(
        "SELECT i.item_id, i.name, i.description, i.created_at
         FROM items i
         JOIN user_items ui ON ui.item_id = i.item_id
         JOIN users u ON u.user_id = ui.user_id
         WHERE u.username = ?
         ORDER BY i.item_id"
    )?;

    let items = stmt.query_map(params![username], item_from_row)?;

    items.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Count items linked to a username
pub fn count_items_for_user(conn: &Connection, username: &str) -> Result<u32> {
    let count: u32 = conn.query_row(
        "SELECT COUNT(*)
         FROM user_items ui
         JOIN users u ON u.user_id = ui.user_id
         WHERE u.username = ?",
        params![username],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Get an item by ID, only if it is linked to the username
pub fn find_owned_item(conn: &Connection, username: &str, item_id: i64) -> Result<Option<Item>> {
    let item = conn
        .query_row(
            "SELECT i.item_id, i.name, i.description, i.created_at
             FROM items i
             JOIN user_items ui ON ui.item_id = i.item_id
             JOIN users u ON u.user_id = ui.user_id
             WHERE u.username = ? AND i.item_id = ?",
            params![username, item_id],
            item_from_row,
        )
        .optional()?;
    Ok(item)
}

/// Insert a new item and return it
pub fn insert_item(
    conn: &Connection,
    name: &str,
    description: Option<&str>,
    created_at: &DateTime<Utc>,
) -> Result<Item> {
    conn.execute(
        "INSERT INTO items (name, description, created_at) VALUES (?, ?, ?)",
        params![name, description, format_timestamp(created_at)],
    )?;

    Ok(Item {
        item_id: conn.last_insert_rowid(),
        name: name.to_string(),
        description: description.map(str::to_string),
        // Round-trip through the storage format so the value matches later reads
        created_at: parse_timestamp(&format_timestamp(created_at)).unwrap_or(*created_at),
    })
}

/// Link an item to a user
pub fn insert_user_item(conn: &Connection, item_id: i64, user_id: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO user_items (item_id, user_id) VALUES (?, ?)",
        params![item_id, user_id],
    )?;
    Ok(())
}

/// Permanently delete an item together with every link to it.
/// Returns the number of removed link rows.
pub fn delete_item(conn: &Connection, item_id: i64) -> Result<usize> {
    let links = conn.execute(
        "DELETE FROM user_items WHERE item_id = ?",
        params![item_id],
    )?;
    let rows = conn.execute("DELETE FROM items WHERE item_id = ?", params![item_id])?;
    if rows == 0 {
        return Err(TodoError::InvalidId(item_id));
    }
    Ok(links)
}

/// Count link rows for an item
#[cfg(test)]
pub(crate) fn count_links_for_item(conn: &Connection, item_id: i64) -> Result<u32> {
    let count: u32 = conn.query_row(
        "SELECT COUNT(*) FROM user_items WHERE item_id = ?",
        params![item_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Check if an item row exists, regardless of owner
#[cfg(test)]
pub(crate) fn item_exists(conn: &Connection, item_id: i64) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM items WHERE item_id = ?",
        params![item_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
