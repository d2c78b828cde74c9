//! Prompt Commands

use uuid::Uuid;

/// 保存提示词命令
#[derive(Debug, Clone)]
pub struct SavePrompt {
    pub owner_id: Uuid,
    pub id: Option<Uuid>,
    pub title: String,
    pub prompt_text: String,
    pub category: String,
    pub is_favorite: bool,
}

/// 删除提示词命令
#[derive(Debug, Clone)]
pub struct DeletePrompt {
    pub owner_id: Uuid,
    pub prompt_id: Uuid,
}
