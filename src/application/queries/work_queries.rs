//! Work Queries

use uuid::Uuid;

/// 获取单个作品查询
#[derive(Debug, Clone)]
pub struct GetWork {
    pub owner_id: Uuid,
    pub work_id: Uuid,
}

/// 列出调用者全部作品查询（updated_at 降序）
#[derive(Debug, Clone)]
pub struct ListWorks {
    pub owner_id: Uuid,
}
