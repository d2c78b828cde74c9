//! Prompt Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{DeletePrompt, SavePrompt};
use crate::application::error::ApplicationError;
use crate::application::ports::{PromptRecord, PromptRepositoryPort};
use crate::domain::Title;

// ============================================================================
// SavePrompt
// ============================================================================

/// SavePrompt Handler
pub struct SavePromptHandler {
    prompt_repo: Arc<dyn PromptRepositoryPort>,
}

impl SavePromptHandler {
    pub fn new(prompt_repo: Arc<dyn PromptRepositoryPort>) -> Self {
        Self { prompt_repo }
    }

    pub async fn handle(&self, command: SavePrompt) -> Result<PromptRecord, ApplicationError> {
        let title = Title::new(&command.title).map_err(ApplicationError::validation)?;
        if command.prompt_text.trim().is_empty() {
            return Err(ApplicationError::validation("Prompt text cannot be empty"));
        }

        let (id, created_at) = match command.id {
            Some(id) => {
                let existing = self
                    .prompt_repo
                    .find_by_id(command.owner_id, id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("Prompt", id))?;
                (id, existing.created_at)
            }
            None => (Uuid::new_v4(), Utc::now()),
        };

        let prompt = PromptRecord {
            id,
            owner_id: command.owner_id,
            title: title.into_string(),
            prompt_text: command.prompt_text,
            category: command.category,
            is_favorite: command.is_favorite,
            created_at,
        };

        self.prompt_repo.save(&prompt).await?;

        tracing::info!(
            prompt_id = %prompt.id,
            owner_id = %prompt.owner_id,
            title = %prompt.title,
            "Prompt saved"
        );

        Ok(prompt)
    }
}

// ============================================================================
// DeletePrompt
// ============================================================================

/// DeletePrompt Handler
pub struct DeletePromptHandler {
    prompt_repo: Arc<dyn PromptRepositoryPort>,
}

impl DeletePromptHandler {
    pub fn new(prompt_repo: Arc<dyn PromptRepositoryPort>) -> Self {
        Self { prompt_repo }
    }

    pub async fn handle(&self, command: DeletePrompt) -> Result<(), ApplicationError> {
        let prompt = self
            .prompt_repo
            .find_by_id(command.owner_id, command.prompt_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Prompt", command.prompt_id))?;

        self.prompt_repo
            .delete(command.owner_id, command.prompt_id)
            .await?;

        tracing::info!(
            prompt_id = %command.prompt_id,
            title = %prompt.title,
            "Prompt deleted"
        );

        Ok(())
    }
}
