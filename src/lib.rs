//! # Little List-O-Maker
//!
//! A command-line to-do list manager with per-user accounts.
//!
//! ## Features
//!
//! - SQLite storage (users, items, ownership links)
//! - bcrypt password hashing with a fresh salt per account
//! - Items visible and removable only by the users linked to them
//! - Interactive login/register flow and numbered menu
//!
//! ## Example
//!
//! ```no_run
//! use listomaker::TodoList;
//! use std::path::Path;
//!
//! let mut todo = TodoList::open(Path::new("/path/to/todo.db"), 4).unwrap();
//! todo.register("alice", "pw1").unwrap();
//! todo.create_item("alice", "Buy milk", Some("2%")).unwrap();
//!
//! for item in todo.list_items("alice").unwrap() {
//!     println!("{}: {}", item.item_id, item.name);
//! }
//! ```

pub mod business;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod database;
pub mod error;

// Re-export main types
pub use business::TodoList;
pub use config::AppConfig;
pub use database::models::{Item, User, UserItem};
pub use error::{Result, TodoError};

/// Application name shown in the banner
pub const APP_NAME: &str = "Little List-O-Maker";

/// Application version shown in the banner
pub const APP_VERSION: &str = "1.1";

/// Default database filename
pub const DATABASE_FILENAME: &str = "todo.db";

/// Default bcrypt cost.
///
/// Low for interactive responsiveness; raise it through configuration for
/// anything beyond a personal machine.
pub const DEFAULT_BCRYPT_COST: u32 = 4;

/// Lowest cost bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;
