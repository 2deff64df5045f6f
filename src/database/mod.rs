//! Database layer for Little List-O-Maker
//!
//! Handles SQLite database operations including:
//! - Schema creation
//! - User lookups and inserts
//! - Item queries filtered through the ownership link table

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Database;
pub use models::*;
