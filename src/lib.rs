//! Quill - 创意写作工作室后端服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Generation Context: prompt 构造与生成请求参数
//! - Work Context: 作品与提示词的值对象
//!
//! 应用层 (application/):
//! - Ports: 端口定义（GenerationEngine, Repositories）
//! - Commands: CQRS 命令处理器（生成门面、作品/提示词保存删除）
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（模型凭证只在服务端，代理生成调用）
//! - Adapters: Gemini HTTP Client / Fake Client
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
