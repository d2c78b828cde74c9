//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口，所有操作以作品所有者（已认证用户）为界。
//! 具体实现在 infrastructure 层（SQLite）。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::ContentType;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Work Repository
// ============================================================================

/// 创作作品实体（用于持久化）
#[derive(Debug, Clone)]
pub struct WorkRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    /// 生成该作品时使用的原始 prompt（可选）
    pub prompt: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Work Repository Port
#[async_trait]
pub trait WorkRepositoryPort: Send + Sync {
    /// 保存作品（insert-or-update）
    async fn save(&self, work: &WorkRecord) -> Result<(), RepositoryError>;

    /// 按 ID 查找作品（仅限 owner 名下）
    async fn find_by_id(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<WorkRecord>, RepositoryError>;

    /// 获取 owner 的全部作品，按 updated_at 降序
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<WorkRecord>, RepositoryError>;

    /// 删除作品（仅限 owner 名下）
    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}

// ============================================================================
// Prompt Repository
// ============================================================================

/// 可复用提示词实体（用于持久化）
///
/// 区别于单次请求的 GenerationRequest 文本，这是用户显式保存的指令模板
#[derive(Debug, Clone)]
pub struct PromptRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub prompt_text: String,
    pub category: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

/// Prompt Repository Port
#[async_trait]
pub trait PromptRepositoryPort: Send + Sync {
    /// 保存提示词（insert-or-update）
    async fn save(&self, prompt: &PromptRecord) -> Result<(), RepositoryError>;

    /// 按 ID 查找提示词（仅限 owner 名下）
    async fn find_by_id(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<PromptRecord>, RepositoryError>;

    /// 获取 owner 的全部提示词，按 created_at 降序
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<PromptRecord>, RepositoryError>;

    /// 删除提示词（仅限 owner 名下）
    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}
