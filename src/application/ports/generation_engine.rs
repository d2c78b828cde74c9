//! Generation Engine Port - 远端文本生成模型抽象
//!
//! 定义唯一的出站调用类型：提交一条文本 prompt，收到一条文本响应。
//! 具体实现在 infrastructure/adapters 层。

use async_trait::async_trait;
use thiserror::Error;

/// 生成引擎错误
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Generation Engine Port
///
/// 远端生成模型的抽象接口。单次请求/响应往返：
/// 无重试、无流式、无取消，超时由底层传输层决定。
#[async_trait]
pub trait GenerationEnginePort: Send + Sync {
    /// 提交单条 prompt，返回模型的原始文本输出
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// 检查生成服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
