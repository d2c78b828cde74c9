//! Work Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{WorkRecord, WorkRepositoryPort};
use crate::application::queries::{GetWork, ListWorks};

/// GetWork Handler
pub struct GetWorkHandler {
    work_repo: Arc<dyn WorkRepositoryPort>,
}

impl GetWorkHandler {
    pub fn new(work_repo: Arc<dyn WorkRepositoryPort>) -> Self {
        Self { work_repo }
    }

    pub async fn handle(&self, query: GetWork) -> Result<WorkRecord, ApplicationError> {
        self.work_repo
            .find_by_id(query.owner_id, query.work_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Work", query.work_id))
    }
}

/// ListWorks Handler
pub struct ListWorksHandler {
    work_repo: Arc<dyn WorkRepositoryPort>,
}

impl ListWorksHandler {
    pub fn new(work_repo: Arc<dyn WorkRepositoryPort>) -> Self {
        Self { work_repo }
    }

    pub async fn handle(&self, query: ListWorks) -> Result<Vec<WorkRecord>, ApplicationError> {
        Ok(self.work_repo.find_by_owner(query.owner_id).await?)
    }
}
