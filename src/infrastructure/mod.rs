//! 基础设施层
//!
//! - http: RESTful API（axum）
//! - adapters: 生成引擎客户端（HTTP Gemini + Fake）
//! - persistence: SQLite 仓储

pub mod adapters;
pub mod http;
pub mod persistence;
