//! CQRS Queries

mod prompt_queries;
mod work_queries;

pub mod handlers;

pub use prompt_queries::{GetPrompt, ListPrompts};
pub use work_queries::{GetWork, ListWorks};
