//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod generation_engine;
mod repositories;

pub use generation_engine::{GenerationEnginePort, GenerationError};
pub use repositories::{
    PromptRecord, PromptRepositoryPort, RepositoryError, WorkRecord, WorkRepositoryPort,
};
