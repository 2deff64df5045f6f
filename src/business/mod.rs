//! Business logic layer for Little List-O-Maker
//!
//! This module provides the high-level TodoList API for managing
//! accounts and the items each account owns.

pub mod todo_list;
pub mod accounts;
pub mod items;

pub use todo_list::TodoList;
pub use items::parse_item_id;
