//! Generation Commands

use crate::domain::{ContentType, GenerationRequest};

/// 生成内容命令
#[derive(Debug, Clone)]
pub struct GenerateContent {
    pub request: GenerationRequest,
}

/// 改进内容命令
#[derive(Debug, Clone)]
pub struct ImproveContent {
    /// 现有内容（逐字嵌入改进模板）
    pub content: String,
    /// 改进指令
    pub instruction: String,
}

/// 续写建议命令
#[derive(Debug, Clone)]
pub struct GetSuggestions {
    /// 当前内容
    pub content: String,
    /// 内容类型（用于模板中的类型名）
    pub content_type: ContentType,
}
