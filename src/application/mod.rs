//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（GenerationEngine、Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Generation commands
    GenerateContent,
    GetSuggestions,
    ImproveContent,
    // Work commands
    DeleteWork,
    SaveWork,
    // Prompt commands
    DeletePrompt,
    SavePrompt,
    // Handlers
    handlers::{
        DeletePromptHandler, DeleteWorkHandler, GenerateContentHandler, GetSuggestionsHandler,
        ImproveContentHandler, SavePromptHandler, SaveWorkHandler, GENERATE_FAILED_MESSAGE,
        IMPROVE_FAILED_MESSAGE, SUGGESTIONS_FAILED_MESSAGE,
    },
};

pub use error::ApplicationError;

pub use ports::{
    GenerationEnginePort, GenerationError, PromptRecord, PromptRepositoryPort, RepositoryError,
    WorkRecord, WorkRepositoryPort,
};

pub use queries::{
    handlers::{GetPromptHandler, GetWorkHandler, ListPromptsHandler, ListWorksHandler},
    GetPrompt, GetWork, ListPrompts, ListWorks,
};
