//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    DeletePromptHandler, DeleteWorkHandler, GenerateContentHandler, GetSuggestionsHandler,
    ImproveContentHandler, SavePromptHandler, SaveWorkHandler,
    // Query handlers
    GetPromptHandler, GetWorkHandler, ListPromptsHandler, ListWorksHandler,
    // Ports
    GenerationEnginePort, PromptRepositoryPort, WorkRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub work_repo: Arc<dyn WorkRepositoryPort>,
    pub prompt_repo: Arc<dyn PromptRepositoryPort>,
    pub generation_engine: Arc<dyn GenerationEnginePort>,

    // ========== Command Handlers ==========
    pub generate_content_handler: GenerateContentHandler,
    pub improve_content_handler: ImproveContentHandler,
    pub get_suggestions_handler: GetSuggestionsHandler,
    pub save_work_handler: SaveWorkHandler,
    pub delete_work_handler: DeleteWorkHandler,
    pub save_prompt_handler: SavePromptHandler,
    pub delete_prompt_handler: DeletePromptHandler,

    // ========== Query Handlers ==========
    pub get_work_handler: GetWorkHandler,
    pub list_works_handler: ListWorksHandler,
    pub get_prompt_handler: GetPromptHandler,
    pub list_prompts_handler: ListPromptsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        work_repo: Arc<dyn WorkRepositoryPort>,
        prompt_repo: Arc<dyn PromptRepositoryPort>,
        generation_engine: Arc<dyn GenerationEnginePort>,
    ) -> Self {
        Self {
            // Ports
            work_repo: work_repo.clone(),
            prompt_repo: prompt_repo.clone(),
            generation_engine: generation_engine.clone(),

            // Command handlers
            generate_content_handler: GenerateContentHandler::new(generation_engine.clone()),
            improve_content_handler: ImproveContentHandler::new(generation_engine.clone()),
            get_suggestions_handler: GetSuggestionsHandler::new(generation_engine.clone()),
            save_work_handler: SaveWorkHandler::new(work_repo.clone()),
            delete_work_handler: DeleteWorkHandler::new(work_repo.clone()),
            save_prompt_handler: SavePromptHandler::new(prompt_repo.clone()),
            delete_prompt_handler: DeletePromptHandler::new(prompt_repo.clone()),

            // Query handlers
            get_work_handler: GetWorkHandler::new(work_repo.clone()),
            list_works_handler: ListWorksHandler::new(work_repo.clone()),
            get_prompt_handler: GetPromptHandler::new(prompt_repo.clone()),
            list_prompts_handler: ListPromptsHandler::new(prompt_repo.clone()),
        }
    }
}
