//! HTTP Gemini Client - 调用 Google 生成式语言 REST API
//!
//! 实现 GenerationEnginePort trait，通过 HTTP 调用远端模型。
//! API key 只存在于服务端配置，通过请求头传递，绝不落入日志或客户端。
//!
//! 外部 API:
//! POST {base_url}/v1beta/models/{model}:generateContent
//! Header: x-goog-api-key: <key>
//! Request: {"contents": [{"parts": [{"text": "..."}]}]}  (JSON)
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{GenerationEnginePort, GenerationError};

/// 请求体 (JSON)
#[derive(Debug, Serialize)]
struct GenerateContentBody {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

/// 响应体 (JSON)
#[derive(Debug, Deserialize)]
struct GenerateContentReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// HTTP Gemini 客户端配置
#[derive(Debug, Clone)]
pub struct HttpGeminiClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API key（服务端机密）
    pub api_key: String,
    /// 模型标识
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpGeminiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpGeminiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Gemini 客户端
pub struct HttpGeminiClient {
    client: Client,
    config: HttpGeminiClientConfig,
}

impl HttpGeminiClient {
    /// 创建新的客户端
    pub fn new(config: HttpGeminiClientConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取生成 URL
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// 获取模型列表 URL（用于健康检查）
    fn models_url(&self) -> String {
        format!("{}/v1beta/models", self.config.base_url)
    }

    /// 从响应中提取文本
    ///
    /// 取第一个 candidate，拼接其全部 parts
    fn extract_text(reply: GenerateContentReply) -> Result<String, GenerationError> {
        let text: String = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "Model returned no text candidates".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerationEnginePort for HttpGeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateContentBody {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            url = %self.generate_url(),
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generation request"
        );

        let response = self
            .client
            .post(&self.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else if e.is_connect() {
                    GenerationError::NetworkError(format!(
                        "Cannot connect to generation service: {}",
                        e
                    ))
                } else {
                    GenerationError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let reply: GenerateContentReply = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("Failed to parse reply: {}", e)))?;

        let text = Self::extract_text(reply)?;

        tracing::info!(
            model = %self.config.model,
            output_len = text.len(),
            "Generation completed"
        );

        Ok(text)
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(&self.models_url())
            .header("x-goog-api-key", &self.config.api_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
