//! 领域层 - Bounded Contexts
//!
//! - Generation Context: prompt 构造与生成请求参数
//! - Work Context: 作品与提示词的值对象

pub mod generation;
pub mod work;

pub use generation::{
    build_prompt, improve_prompt, parse_suggestions, suggestions_prompt, ContentType,
    GenerationRequest, TargetLength, Tone, MAX_SUGGESTIONS,
};
pub use work::Title;
