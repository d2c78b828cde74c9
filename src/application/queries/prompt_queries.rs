//! Prompt Queries

use uuid::Uuid;

/// 获取单个提示词查询
#[derive(Debug, Clone)]
pub struct GetPrompt {
    pub owner_id: Uuid,
    pub prompt_id: Uuid,
}

/// 列出调用者全部提示词查询（created_at 降序）
#[derive(Debug, Clone)]
pub struct ListPrompts {
    pub owner_id: Uuid,
}
