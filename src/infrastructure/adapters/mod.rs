//! Infrastructure Adapters - 出站端口实现

mod generation;

pub use generation::{FakeGenerationClient, HttpGeminiClient, HttpGeminiClientConfig};
