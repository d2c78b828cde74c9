//! Work HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::WorkRecord;
use crate::application::{DeleteWork, GetWork, ListWorks, SaveWork};
use crate::domain::ContentType;
use crate::infrastructure::http::auth::AuthenticatedUser;
use crate::infrastructure::http::dto::{ApiResponse, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SaveWorkRequest {
    /// 省略时创建新作品
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub prompt: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Deserialize)]
pub struct GetWorkRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct DeleteWorkRequest {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct WorkResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub prompt: Option<String>,
    pub is_public: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<WorkRecord> for WorkResponse {
    fn from(record: WorkRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            content_type: record.content_type.as_str().to_string(),
            prompt: record.prompt,
            is_public: record.is_public,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 保存作品（新建或覆盖）
pub async fn save_work(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<SaveWorkRequest>,
) -> Result<Json<ApiResponse<WorkResponse>>, ApiError> {
    let command = SaveWork {
        owner_id: user.id(),
        id: request.id,
        title: request.title,
        content: request.content,
        content_type: request.content_type,
        prompt: request.prompt,
        is_public: request.is_public,
    };

    let work = state.save_work_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(WorkResponse::from(work))))
}

/// 获取作品详情
pub async fn get_work(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<GetWorkRequest>,
) -> Result<Json<ApiResponse<WorkResponse>>, ApiError> {
    let query = GetWork {
        owner_id: user.id(),
        work_id: request.id,
    };

    let work = state.get_work_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(WorkResponse::from(work))))
}

/// 列出调用者的全部作品（updated_at 降序）
pub async fn list_works(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<WorkResponse>>>, ApiError> {
    let query = ListWorks {
        owner_id: user.id(),
    };

    let works = state.list_works_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(
        works.into_iter().map(WorkResponse::from).collect(),
    )))
}

/// 删除作品
pub async fn delete_work(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<DeleteWorkRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeleteWork {
        owner_id: user.id(),
        work_id: request.id,
    };

    state.delete_work_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}
