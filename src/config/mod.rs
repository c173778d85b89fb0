/// Database configuration and connection management
pub mod database;

/// Session storage backends read at startup
pub mod session;

/// Application settings loaded from `expense_desk.toml`
pub mod settings;
