//! SQLite Persistence - 仓储实现

mod database;
mod prompt_repo;
mod work_repo;

pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool};
pub use prompt_repo::SqlitePromptRepository;
pub use work_repo::SqliteWorkRepository;
