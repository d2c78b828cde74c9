//! Generation Adapter - 生成引擎客户端实现

mod fake_generation_client;
mod http_gemini_client;

pub use fake_generation_client::FakeGenerationClient;
pub use http_gemini_client::{HttpGeminiClient, HttpGeminiClientConfig};
