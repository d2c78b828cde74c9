//! Work Commands

use uuid::Uuid;

use crate::domain::ContentType;

/// 保存作品命令
///
/// id 为 None 时创建新作品，否则覆盖保存已有作品
#[derive(Debug, Clone)]
pub struct SaveWork {
    pub owner_id: Uuid,
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub prompt: Option<String>,
    pub is_public: bool,
}

/// 删除作品命令
#[derive(Debug, Clone)]
pub struct DeleteWork {
    pub owner_id: Uuid,
    pub work_id: Uuid,
}
