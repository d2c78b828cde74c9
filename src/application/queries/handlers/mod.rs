//! Query Handlers

mod prompt_handlers;
mod work_handlers;

pub use prompt_handlers::{GetPromptHandler, ListPromptsHandler};
pub use work_handlers::{GetWorkHandler, ListWorksHandler};
