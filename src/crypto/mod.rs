//! Credential hashing for Little List-O-Maker
//!
//! Passwords are stored as bcrypt hashes in modular crypt format
//! (`$2b$<cost>$<salt><digest>`), so the salt and cost travel with the hash.

pub mod password;

pub use password::{Salt, generate_salt, hash_password, verify_password};
