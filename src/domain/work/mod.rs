//! Work Context - 作品限界上下文
//!
//! 职责:
//! - 用户创作作品与可复用提示词的标题校验

mod value_objects;

pub use value_objects::Title;
