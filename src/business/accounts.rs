//! Account operations
//!
//! Registration and login against the users table.

use log::{debug, info};
use crate::crypto;
use crate::database::{User, queries};
use crate::error::{TodoError, Result};
use super::todo_list::TodoList;

impl TodoList {
    /// Register a new account.
    ///
    /// Fails with `UsernameTaken` if the username exists; no second row is
    /// written in that case.
    pub fn register(&mut self, username: &str, password: &str) -> Result<User> {
        if username.trim().is_empty() {
            return Err(TodoError::EmptyUsername);
        }

        let conn = self.connection()?;
        if queries::username_exists(conn, username)? {
            return Err(TodoError::UsernameTaken(username.to_string()));
        }

        let salt = crypto::generate_salt();
        let password_hash = crypto::hash_password(password, &salt, self.bcrypt_cost)?;
        let user_id = queries::insert_user(conn, username, &password_hash)?;

        info!("Registered user {} (id {})", username, user_id);
        Ok(User {
            user_id,
            username: username.to_string(),
            password_hash,
        })
    }

    /// Log in with a username and password.
    ///
    /// An unknown username is `UserNotFound`, a wrong password is
    /// `InvalidCredentials`. Callers showing these to a user should not
    /// distinguish them.
    pub fn login(&self, username: &str, password: &str) -> Result<User> {
        let conn = self.connection()?;

        let Some(user) = queries::find_user_by_username(conn, username)? else {
            log_failed_login(username);
            return Err(TodoError::UserNotFound(username.to_string()));
        };

        if !crypto::verify_password(password, &user.password_hash)? {
            log_failed_login(username);
            return Err(TodoError::InvalidCredentials);
        }

        info!("User {} logged in", username);
        Ok(user)
    }

    /// Check whether a username is registered
    pub fn user_exists(&self, username: &str) -> Result<bool> {
        queries::username_exists(self.connection()?, username)
    }

    /// Number of registered accounts
    pub fn user_count(&self) -> Result<u32> {
        queries::count_users(self.connection()?)
    }
}

// Unknown user and wrong password must log the same line
fn log_failed_login(username: &str) {
    debug!("Failed login for user {}", username);
}
