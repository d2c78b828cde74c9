//! Generation HTTP Handlers
//!
//! 生成门面的代理端点。模型凭证只在服务端配置中，
//! 客户端 shell 永远接触不到 API key。

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{GenerateContent, GetSuggestions, ImproveContent};
use crate::domain::{ContentType, GenerationRequest, TargetLength, Tone};
use crate::infrastructure::http::auth::AuthenticatedUser;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    /// 用户自由文本意图
    pub prompt: String,
    pub content_type: ContentType,
    /// 缺省 creative
    #[serde(default)]
    pub tone: Tone,
    /// 缺省 medium
    #[serde(default)]
    pub length: TargetLength,
}

#[derive(Debug, Serialize)]
pub struct GeneratedContentResponse {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveContentRequest {
    pub content: String,
    pub instruction: String,
}

#[derive(Debug, Deserialize)]
pub struct GetSuggestionsRequest {
    pub content: String,
    pub content_type: ContentType,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    /// 至多 3 条非空建议
    pub suggestions: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 生成内容
pub async fn generate_content(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<ApiResponse<GeneratedContentResponse>>, ApiError> {
    tracing::debug!(
        user_id = %user.id(),
        content_type = %request.content_type,
        "Generate content requested"
    );

    let command = GenerateContent {
        request: GenerationRequest {
            free_form_text: request.prompt,
            content_type: request.content_type,
            tone: request.tone,
            target_length: request.length,
        },
    };

    let content = state.generate_content_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(GeneratedContentResponse {
        content,
    })))
}

/// 改进内容
pub async fn improve_content(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<ImproveContentRequest>,
) -> Result<Json<ApiResponse<GeneratedContentResponse>>, ApiError> {
    tracing::debug!(user_id = %user.id(), "Improve content requested");

    let command = ImproveContent {
        content: request.content,
        instruction: request.instruction,
    };

    let content = state.improve_content_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(GeneratedContentResponse {
        content,
    })))
}

/// 获取续写建议
pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(request): Json<GetSuggestionsRequest>,
) -> Result<Json<ApiResponse<SuggestionsResponse>>, ApiError> {
    tracing::debug!(
        user_id = %user.id(),
        content_type = %request.content_type,
        "Suggestions requested"
    );

    let command = GetSuggestions {
        content: request.content,
        content_type: request.content_type,
    };

    let suggestions = state.get_suggestions_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(SuggestionsResponse {
        suggestions,
    })))
}
