//! Database connection management

use std::path::{Path, PathBuf};
use log::debug;
use rusqlite::{Connection, Transaction};
use crate::error::{TodoError, Result};
use super::schema;

/// Database connection wrapper
pub struct Database {
    /// Path to the database file (`None` for in-memory databases)
    path: Option<PathBuf>,
    /// SQLite connection
    conn: Option<Connection>,
}

impl Database {
    /// Open the database at the specified path, creating the file and schema if absent
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        debug!("Opened database at {}", path.display());

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Some(conn),
        })
    }

    /// Create an in-memory database with all tables
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;

        Ok(Self {
            path: None,
            conn: Some(conn),
        })
    }

    fn init(conn: &Connection) -> Result<()> {
        // Link rows rely on ON DELETE CASCADE
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        for sql in schema::CREATE_ALL_TABLES {
            conn.execute(sql, [])?;
        }
        Ok(())
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            TodoError::DatabaseError("Database not open".to_string())
        })
    }

    /// Get a mutable reference to the connection
    pub fn connection_mut(&mut self) -> Result<&mut Connection> {
        self.conn.as_mut().ok_or_else(|| {
            TodoError::DatabaseError("Database not open".to_string())
        })
    }

    /// Begin a transaction.
    ///
    /// The transaction rolls back when dropped without `commit()`.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.connection_mut()?.transaction()?)
    }

    /// Get the database path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table_names(db: &Database) -> Vec<String> {
        let conn = db.connection().unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn test_open_creates_schema() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("todo.db");

        let db = Database::open(&db_path).unwrap();
        assert!(db_path.exists());
        assert_eq!(db.path(), Some(db_path.as_path()));

        let tables = table_names(&db);
        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"items".to_string()));
        assert!(tables.contains(&"user_items".to_string()));
    }

    #[test]
    fn test_reopen_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("todo.db");

        {
            let db = Database::open(&db_path).unwrap();
            db.connection().unwrap().execute(
                "INSERT INTO users (username, password_hash) VALUES (?, ?)",
                rusqlite::params!["alice", b"hash".to_vec()],
            ).unwrap();
        }

        let db = Database::open(&db_path).unwrap();
        let count: i64 = db.connection().unwrap()
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db.connection().unwrap()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);

        // Link to a missing item must be rejected
        let result = db.connection().unwrap().execute(
            "INSERT INTO user_items (item_id, user_id) VALUES (99, 99)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_close() {
        let mut db = Database::open_in_memory().unwrap();
        assert!(db.is_open());
        assert!(db.path().is_none());

        db.close();
        assert!(!db.is_open());
        assert!(matches!(db.connection(), Err(TodoError::DatabaseError(_))));
    }

    #[test]
    fn test_transaction_rolls_back_on_drop() {
        let mut db = Database::open_in_memory().unwrap();
        {
            let tx = db.transaction().unwrap();
            tx.execute(
                "INSERT INTO users (username, password_hash) VALUES (?, ?)",
                rusqlite::params!["bob", b"hash".to_vec()],
            ).unwrap();
        }
        let count: i64 = db.connection().unwrap()
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
