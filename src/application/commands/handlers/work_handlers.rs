//! Work Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{DeleteWork, SaveWork};
use crate::application::error::ApplicationError;
use crate::application::ports::{WorkRecord, WorkRepositoryPort};
use crate::domain::Title;

// ============================================================================
// SaveWork
// ============================================================================

/// SaveWork Handler
///
/// id 缺省时新建，否则覆盖保存：created_at 保留，updated_at 刷新
pub struct SaveWorkHandler {
    work_repo: Arc<dyn WorkRepositoryPort>,
}

impl SaveWorkHandler {
    pub fn new(work_repo: Arc<dyn WorkRepositoryPort>) -> Self {
        Self { work_repo }
    }

    pub async fn handle(&self, command: SaveWork) -> Result<WorkRecord, ApplicationError> {
        let title = Title::new(&command.title).map_err(ApplicationError::validation)?;
        if command.content.trim().is_empty() {
            return Err(ApplicationError::validation("Content cannot be empty"));
        }

        let now = Utc::now();
        let (id, created_at) = match command.id {
            Some(id) => {
                let existing = self
                    .work_repo
                    .find_by_id(command.owner_id, id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("Work", id))?;
                (id, existing.created_at)
            }
            None => (Uuid::new_v4(), now),
        };

        let work = WorkRecord {
            id,
            owner_id: command.owner_id,
            title: title.into_string(),
            content: command.content,
            content_type: command.content_type,
            prompt: command.prompt,
            is_public: command.is_public,
            created_at,
            updated_at: now,
        };

        self.work_repo.save(&work).await?;

        tracing::info!(
            work_id = %work.id,
            owner_id = %work.owner_id,
            title = %work.title,
            "Work saved"
        );

        Ok(work)
    }
}

// ============================================================================
// DeleteWork
// ============================================================================

/// DeleteWork Handler
pub struct DeleteWorkHandler {
    work_repo: Arc<dyn WorkRepositoryPort>,
}

impl DeleteWorkHandler {
    pub fn new(work_repo: Arc<dyn WorkRepositoryPort>) -> Self {
        Self { work_repo }
    }

    pub async fn handle(&self, command: DeleteWork) -> Result<(), ApplicationError> {
        // 检查作品存在且属于调用者
        let work = self
            .work_repo
            .find_by_id(command.owner_id, command.work_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Work", command.work_id))?;

        self.work_repo.delete(command.owner_id, command.work_id).await?;

        tracing::info!(
            work_id = %command.work_id,
            title = %work.title,
            "Work deleted"
        );

        Ok(())
    }
}
