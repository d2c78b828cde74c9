//! Prompt Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{PromptRecord, PromptRepositoryPort};
use crate::application::queries::{GetPrompt, ListPrompts};

/// GetPrompt Handler
pub struct GetPromptHandler {
    prompt_repo: Arc<dyn PromptRepositoryPort>,
}

impl GetPromptHandler {
    pub fn new(prompt_repo: Arc<dyn PromptRepositoryPort>) -> Self {
        Self { prompt_repo }
    }

    pub async fn handle(&self, query: GetPrompt) -> Result<PromptRecord, ApplicationError> {
        self.prompt_repo
            .find_by_id(query.owner_id, query.prompt_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Prompt", query.prompt_id))
    }
}

/// ListPrompts Handler
pub struct ListPromptsHandler {
    prompt_repo: Arc<dyn PromptRepositoryPort>,
}

impl ListPromptsHandler {
    pub fn new(prompt_repo: Arc<dyn PromptRepositoryPort>) -> Self {
        Self { prompt_repo }
    }

    pub async fn handle(&self, query: ListPrompts) -> Result<Vec<PromptRecord>, ApplicationError> {
        Ok(self.prompt_repo.find_by_owner(query.owner_id).await?)
    }
}
