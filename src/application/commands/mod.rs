//! CQRS Commands

mod generation_commands;
mod prompt_commands;
mod work_commands;

pub mod handlers;

pub use generation_commands::{GenerateContent, GetSuggestions, ImproveContent};
pub use prompt_commands::{DeletePrompt, SavePrompt};
pub use work_commands::{DeleteWork, SaveWork};
