//! Database schema definitions

/// SQL to create the users table
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id         INTEGER PRIMARY KEY AUTOINCREMENT,
    username        TEXT NOT NULL UNIQUE,
    password_hash   BLOB NOT NULL
)
"#;

/// SQL to create the items table
pub const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    item_id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL,
    description     TEXT,
    created_at      TEXT NOT NULL
)
"#;

/// SQL to create the ownership link table (composite primary key)
pub const CREATE_USER_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS user_items (
    item_id         INTEGER NOT NULL REFERENCES items(item_id) ON DELETE CASCADE,
    user_id         INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    PRIMARY KEY (item_id, user_id)
)
"#;

/// Index for looking up a user's items
pub const CREATE_USER_ITEMS_USER_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_user_items_user_id ON user_items(user_id)
"#;

/// All table creation statements in order (parents before the link table)
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_USERS_TABLE,
    CREATE_ITEMS_TABLE,
    CREATE_USER_ITEMS_TABLE,
    CREATE_USER_ITEMS_USER_INDEX,
];
