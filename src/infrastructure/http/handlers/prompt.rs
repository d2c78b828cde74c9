//! Prompt HTTP Handlers
//!
//! 可复用提示词模板的增删查，区别于单次生成请求的文本

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::PromptRecord;
use crate::application::{DeletePrompt, GetPrompt, ListPrompts, SavePrompt};
use crate::infrastructure::http::auth::AuthenticatedUser;
use crate::infrastructure::http::dto::{ApiResponse, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

fn default_category() -> String {
    "general".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SavePromptRequest {
    /// 省略时创建新提示词
    pub id: Option<Uuid>,
    pub title: String,
    pub prompt_text: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Deserialize)]
pub struct GetPromptRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct DeletePromptRequest {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub id: Uuid,
    pub title: String,
    pub prompt_text: String,
    pub category: String,
    pub is_favorite: bool,
    pub created_at: String,
}

impl From<PromptRecord> for PromptResponse {
    fn from(record: PromptRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            prompt_text: record.prompt_text,
            category: record.category,
            is_favorite: record.is_favorite,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 保存提示词（新建或覆盖）
pub async fn save_prompt(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<SavePromptRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, ApiError> {
    let command = SavePrompt {
        owner_id: user.id(),
        id: request.id,
        title: request.title,
        prompt_text: request.prompt_text,
        category: request.category,
        is_favorite: request.is_favorite,
    };

    let prompt = state.save_prompt_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(PromptResponse::from(prompt))))
}

/// 获取提示词详情
pub async fn get_prompt(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<GetPromptRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, ApiError> {
    let query = GetPrompt {
        owner_id: user.id(),
        prompt_id: request.id,
    };

    let prompt = state.get_prompt_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(PromptResponse::from(prompt))))
}

/// 列出调用者的全部提示词（created_at 降序）
pub async fn list_prompts(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<PromptResponse>>>, ApiError> {
    let query = ListPrompts {
        owner_id: user.id(),
    };

    let prompts = state.list_prompts_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(
        prompts.into_iter().map(PromptResponse::from).collect(),
    )))
}

/// 删除提示词
pub async fn delete_prompt(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<DeletePromptRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeletePrompt {
        owner_id: user.id(),
        prompt_id: request.id,
    };

    state.delete_prompt_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}
