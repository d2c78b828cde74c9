//! Persistence Layer - SQLite 存储

pub mod sqlite;
