//! Item operations
//!
//! This module provides item management operations for the TodoList.
//! Every operation is scoped to a username through the `user_items` link.

use chrono::Utc;
use log::{debug, info};
use crate::database::{Item, queries};
use crate::error::{TodoError, Result};
use super::todo_list::TodoList;

/// Parse user input as an item ID
pub fn parse_item_id(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| TodoError::InvalidIdInput(input.to_string()))
}

impl TodoList {
    /// Get all items linked to a user, ordered by ID.
    ///
    /// An unknown user or a user without items yields an empty list.
    pub fn list_items(&self, username: &str) -> Result<Vec<Item>> {
        queries::get_items_for_user(self.connection()?, username)
    }

    /// Count the items linked to a user
    pub fn count_items(&self, username: &str) -> Result<u32> {
        queries::count_items_for_user(self.connection()?, username)
    }

    /// Check whether a user owns at least one item
    pub fn has_items(&self, username: &str) -> Result<bool> {
        Ok(self.count_items(username)? > 0)
    }

    /// Create an item and link it to the user in one transaction
    pub fn create_item(
        &mut self,
        username: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Item> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TodoError::EmptyItemName);
        }
        let description = description.filter(|d| !d.is_empty());

        let tx = self.database_mut()?.transaction()?;

        let user = queries::find_user_by_username(&tx, username)?
            .ok_or_else(|| TodoError::UserNotFound(username.to_string()))?;

        let item = queries::insert_item(&tx, name, description, &Utc::now())?;
        queries::insert_user_item(&tx, item.item_id, user.user_id)?;
        tx.commit()?;

        info!("User {} created item {} ({})", username, item.item_id, item.name);
        Ok(item)
    }

    /// Remove an item owned by the user.
    ///
    /// Returns `NoItems` if the user owns nothing, and `InvalidId` if the
    /// item does not exist or is not linked to the user. The item and all
    /// of its links are deleted in one transaction.
    pub fn remove_item(&mut self, username: &str, item_id: i64) -> Result<Item> {
        let tx = self.database_mut()?.transaction()?;

        if queries::count_items_for_user(&tx, username)? == 0 {
            return Err(TodoError::NoItems);
        }

        let Some(item) = queries::find_owned_item(&tx, username, item_id)? else {
            debug!("User {} has no item {}", username, item_id);
            return Err(TodoError::InvalidId(item_id));
        };

        let links = queries::delete_item(&tx, item.item_id)?;
        tx.commit()?;

        info!(
            "User {} removed item {} ({} link(s))",
            username, item.item_id, links
        );
        Ok(item)
    }
}
