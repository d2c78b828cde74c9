//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                  GET   健康检查
//! - /api/generate/content      POST  生成内容
//! - /api/generate/improve      POST  改进内容
//! - /api/generate/suggestions  POST  续写建议（至多 3 条）
//! - /api/work/save             POST  保存作品（新建或覆盖）
//! - /api/work/get              POST  获取作品详情
//! - /api/work/list             GET   列出调用者作品（updated_at 降序）
//! - /api/work/delete           POST  删除作品
//! - /api/prompt/save           POST  保存提示词
//! - /api/prompt/get            POST  获取提示词详情
//! - /api/prompt/list           GET   列出调用者提示词（created_at 降序）
//! - /api/prompt/delete         POST  删除提示词

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/generate", generate_routes())
        .nest("/work", work_routes())
        .nest("/prompt", prompt_routes())
}

/// Generation 路由
fn generate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/content", post(handlers::generate_content))
        .route("/improve", post(handlers::improve_content))
        .route("/suggestions", post(handlers::get_suggestions))
}

/// Work 路由
fn work_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/save", post(handlers::save_work))
        .route("/get", post(handlers::get_work))
        .route("/list", get(handlers::list_works))
        .route("/delete", post(handlers::delete_work))
}

/// Prompt 路由
fn prompt_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/save", post(handlers::save_prompt))
        .route("/get", post(handlers::get_prompt))
        .route("/list", get(handlers::list_prompts))
        .route("/delete", post(handlers::delete_prompt))
}
