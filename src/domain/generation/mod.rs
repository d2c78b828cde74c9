//! Generation Context - 内容生成限界上下文
//!
//! 职责:
//! - 生成请求的结构化参数（类型、语气、长度）
//! - 确定性 prompt 构造（纯函数）
//! - 建议列表解析

mod prompt_builder;
mod request;

pub use prompt_builder::{
    build_prompt, improve_prompt, parse_suggestions, suggestions_prompt, MAX_SUGGESTIONS,
};
pub use request::{ContentType, GenerationRequest, TargetLength, Tone};
