//! Command Handlers

mod generation_handlers;
mod prompt_handlers;
mod work_handlers;

pub use generation_handlers::{
    GenerateContentHandler, GetSuggestionsHandler, ImproveContentHandler,
    GENERATE_FAILED_MESSAGE, IMPROVE_FAILED_MESSAGE, SUGGESTIONS_FAILED_MESSAGE,
};
pub use prompt_handlers::{DeletePromptHandler, SavePromptHandler};
pub use work_handlers::{DeleteWorkHandler, SaveWorkHandler};
