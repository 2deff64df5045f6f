//! Main TodoList API
//!
//! This module provides the primary interface for interacting with
//! a to-do list database.

use std::path::Path;
use rusqlite::Connection;
use crate::config::AppConfig;
use crate::database::Database;
use crate::error::{TodoError, Result};
use crate::DEFAULT_BCRYPT_COST;

/// Main to-do list interface
///
/// Owns the storage handle explicitly; there is no process-wide database
/// state. Dropping the value closes the connection.
pub struct TodoList {
    /// Database connection
    pub(crate) db: Option<Database>,
    /// bcrypt cost for new password hashes
    pub(crate) bcrypt_cost: u32,
}

impl TodoList {
    /// Open (or create) a to-do list database at the given path
    pub fn open(path: &Path, bcrypt_cost: u32) -> Result<Self> {
        let db = Database::open(path)?;
        Ok(Self {
            db: Some(db),
            bcrypt_cost,
        })
    }

    /// Open the database described by a configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::open(&config.database_path, config.bcrypt_cost)
    }

    /// Create an in-memory to-do list (nothing is persisted)
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            db: Some(Database::open_in_memory()?),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        })
    }

    /// Override the bcrypt cost used for new registrations
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// bcrypt cost used for new registrations
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    /// Check if the database is open
    pub fn is_open(&self) -> bool {
        self.db.as_ref().is_some_and(Database::is_open)
    }

    /// Close the database
    pub fn close(&mut self) {
        if let Some(mut db) = self.db.take() {
            db.close();
        }
    }

    pub(crate) fn database(&self) -> Result<&Database> {
        self.db.as_ref()
            .ok_or_else(|| TodoError::DatabaseError("Database not open".to_string()))
    }

    pub(crate) fn database_mut(&mut self) -> Result<&mut Database> {
        self.db.as_mut()
            .ok_or_else(|| TodoError::DatabaseError("Database not open".to_string()))
    }

    pub(crate) fn connection(&self) -> Result<&Connection> {
        self.database()?.connection()
    }
}
