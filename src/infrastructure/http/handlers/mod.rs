//! HTTP Handlers

mod generate;
mod ping;
mod prompt;
mod work;

pub use generate::*;
pub use ping::*;
pub use prompt::*;
pub use work::*;
