//! Fake Generation Client - 用于测试的生成客户端
//!
//! 始终返回固定文本或固定失败，不实际调用远端模型。
//! 记录收到的 prompt 供断言使用。

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{GenerationEnginePort, GenerationError};

/// Fake Generation Client
pub struct FakeGenerationClient {
    response_text: String,
    fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerationClient {
    /// 固定返回给定文本
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            response_text: text.into(),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// 每次调用都失败
    pub fn failing() -> Self {
        Self {
            response_text: String::new(),
            fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的全部 prompt
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationEnginePort for FakeGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.fail {
            return Err(GenerationError::ServiceError(
                "fake generation failure".to_string(),
            ));
        }

        Ok(self.response_text.clone())
    }

    async fn health_check(&self) -> bool {
        !self.fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_fixed_response_and_records_prompt() {
        let client = FakeGenerationClient::with_response("canned");
        let result = client.generate("some prompt").await.unwrap();
        assert_eq!(result, "canned");
        assert_eq!(client.recorded_prompts(), vec!["some prompt"]);
    }

    #[tokio::test]
    async fn test_failing_client_errors() {
        let client = FakeGenerationClient::failing();
        assert!(client.generate("p").await.is_err());
        assert!(!client.health_check().await);
    }
}
