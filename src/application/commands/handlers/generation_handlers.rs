//! Generation Command Handlers
//!
//! 生成门面的三个操作。每个操作都是一次独立的无状态请求/响应往返：
//! 空文本在发起网络调用前被拒绝；远端失败时只向用户暴露固定消息，
//! 底层原因仅记录日志。

use std::sync::Arc;

use crate::application::commands::{GenerateContent, GetSuggestions, ImproveContent};
use crate::application::error::ApplicationError;
use crate::application::ports::GenerationEnginePort;
use crate::domain::{build_prompt, improve_prompt, parse_suggestions, suggestions_prompt};

/// 生成失败的固定用户可见消息
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate content. Please try again.";
/// 改进失败的固定用户可见消息
pub const IMPROVE_FAILED_MESSAGE: &str = "Failed to improve content. Please try again.";
/// 建议失败的固定用户可见消息
pub const SUGGESTIONS_FAILED_MESSAGE: &str = "Failed to get suggestions. Please try again.";

// ============================================================================
// GenerateContent
// ============================================================================

/// GenerateContent Handler
pub struct GenerateContentHandler {
    engine: Arc<dyn GenerationEnginePort>,
}

impl GenerateContentHandler {
    pub fn new(engine: Arc<dyn GenerationEnginePort>) -> Self {
        Self { engine }
    }

    pub async fn handle(&self, command: GenerateContent) -> Result<String, ApplicationError> {
        if command.request.free_form_text.trim().is_empty() {
            return Err(ApplicationError::validation("Prompt text cannot be empty"));
        }

        let prompt = build_prompt(&command.request);

        tracing::debug!(
            content_type = %command.request.content_type,
            tone = %command.request.tone,
            length = command.request.target_length.as_str(),
            prompt_len = prompt.len(),
            "Generating content"
        );

        match self.engine.generate(&prompt).await {
            Ok(text) => {
                tracing::info!(
                    content_type = %command.request.content_type,
                    output_len = text.len(),
                    "Content generated"
                );
                Ok(text)
            }
            Err(e) => {
                tracing::error!(error = %e, "Content generation failed");
                Err(ApplicationError::ExternalServiceError(
                    GENERATE_FAILED_MESSAGE.to_string(),
                ))
            }
        }
    }
}

// ============================================================================
// ImproveContent
// ============================================================================

/// ImproveContent Handler
pub struct ImproveContentHandler {
    engine: Arc<dyn GenerationEnginePort>,
}

impl ImproveContentHandler {
    pub fn new(engine: Arc<dyn GenerationEnginePort>) -> Self {
        Self { engine }
    }

    pub async fn handle(&self, command: ImproveContent) -> Result<String, ApplicationError> {
        if command.content.trim().is_empty() {
            return Err(ApplicationError::validation("Content cannot be empty"));
        }
        if command.instruction.trim().is_empty() {
            return Err(ApplicationError::validation("Instruction cannot be empty"));
        }

        let prompt = improve_prompt(&command.content, &command.instruction);

        match self.engine.generate(&prompt).await {
            Ok(text) => {
                tracing::info!(output_len = text.len(), "Content improved");
                Ok(text)
            }
            Err(e) => {
                tracing::error!(error = %e, "Content improvement failed");
                Err(ApplicationError::ExternalServiceError(
                    IMPROVE_FAILED_MESSAGE.to_string(),
                ))
            }
        }
    }
}

// ============================================================================
// GetSuggestions
// ============================================================================

/// GetSuggestions Handler
///
/// 返回至多 3 条非空建议；模型返回不足 3 条时不补齐、不重试
pub struct GetSuggestionsHandler {
    engine: Arc<dyn GenerationEnginePort>,
}

impl GetSuggestionsHandler {
    pub fn new(engine: Arc<dyn GenerationEnginePort>) -> Self {
        Self { engine }
    }

    pub async fn handle(&self, command: GetSuggestions) -> Result<Vec<String>, ApplicationError> {
        if command.content.trim().is_empty() {
            return Err(ApplicationError::validation("Content cannot be empty"));
        }

        let prompt = suggestions_prompt(&command.content, command.content_type);

        match self.engine.generate(&prompt).await {
            Ok(text) => {
                let suggestions = parse_suggestions(&text);
                tracing::info!(
                    content_type = %command.content_type,
                    count = suggestions.len(),
                    "Suggestions generated"
                );
                Ok(suggestions)
            }
            Err(e) => {
                tracing::error!(error = %e, "Suggestion generation failed");
                Err(ApplicationError::ExternalServiceError(
                    SUGGESTIONS_FAILED_MESSAGE.to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentType, GenerationRequest, TargetLength, Tone};
    use crate::infrastructure::adapters::FakeGenerationClient;

    #[tokio::test]
    async fn test_generate_content_returns_engine_output() {
        let engine = Arc::new(FakeGenerationClient::with_response("A generated story."));
        let handler = GenerateContentHandler::new(engine.clone());

        let command = GenerateContent {
            request: GenerationRequest::new("a lost key", ContentType::Story),
        };
        let result = handler.handle(command).await.unwrap();
        assert_eq!(result, "A generated story.");

        // 发送给引擎的 prompt 包含用户原文
        let prompts = engine.recorded_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("a lost key"));
        assert!(prompts[0].contains("3-5 paragraphs"));
    }

    #[tokio::test]
    async fn test_generate_content_rejects_blank_prompt_before_call() {
        let engine = Arc::new(FakeGenerationClient::with_response("unused"));
        let handler = GenerateContentHandler::new(engine.clone());

        let command = GenerateContent {
            request: GenerationRequest::new("   \n ", ContentType::Poem),
        };
        let err = handler.handle(command).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        // 未发起任何网络调用
        assert!(engine.recorded_prompts().is_empty());
    }

    #[tokio::test]
    async fn test_generate_content_failure_uses_fixed_message() {
        let engine = Arc::new(FakeGenerationClient::failing());
        let handler = GenerateContentHandler::new(engine);

        let command = GenerateContent {
            request: GenerationRequest::new("anything", ContentType::Article)
                .with_tone(Tone::Professional)
                .with_length(TargetLength::Long),
        };
        let err = handler.handle(command).await.unwrap_err();
        match err {
            ApplicationError::ExternalServiceError(msg) => {
                assert_eq!(msg, GENERATE_FAILED_MESSAGE);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_improve_content_embeds_instruction_and_content() {
        let engine = Arc::new(FakeGenerationClient::with_response("Improved text."));
        let handler = ImproveContentHandler::new(engine.clone());

        let command = ImproveContent {
            content: "Draft paragraph.".to_string(),
            instruction: "Make this more engaging and creative".to_string(),
        };
        let result = handler.handle(command).await.unwrap();
        assert_eq!(result, "Improved text.");

        let prompts = engine.recorded_prompts();
        assert!(prompts[0].contains("\"Make this more engaging and creative\""));
        assert!(prompts[0].contains("Draft paragraph."));
    }

    #[tokio::test]
    async fn test_improve_content_failure_uses_fixed_message() {
        let engine = Arc::new(FakeGenerationClient::failing());
        let handler = ImproveContentHandler::new(engine);

        let command = ImproveContent {
            content: "Some text".to_string(),
            instruction: "Tighten it".to_string(),
        };
        let err = handler.handle(command).await.unwrap_err();
        match err {
            ApplicationError::ExternalServiceError(msg) => {
                assert_eq!(msg, IMPROVE_FAILED_MESSAGE);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_suggestions_truncates_to_three() {
        let engine = Arc::new(FakeGenerationClient::with_response(
            "Idea one\n\nIdea two\nIdea three\nIdea four",
        ));
        let handler = GetSuggestionsHandler::new(engine);

        let command = GetSuggestions {
            content: "The door creaked open.".to_string(),
            content_type: ContentType::Story,
        };
        let suggestions = handler.handle(command).await.unwrap();
        assert_eq!(suggestions, vec!["Idea one", "Idea two", "Idea three"]);
    }

    #[tokio::test]
    async fn test_get_suggestions_returns_fewer_without_padding() {
        let engine = Arc::new(FakeGenerationClient::with_response("Only one idea\n"));
        let handler = GetSuggestionsHandler::new(engine);

        let command = GetSuggestions {
            content: "A verse".to_string(),
            content_type: ContentType::Poem,
        };
        let suggestions = handler.handle(command).await.unwrap();
        assert_eq!(suggestions, vec!["Only one idea"]);
    }

    #[tokio::test]
    async fn test_get_suggestions_failure_uses_fixed_message() {
        let engine = Arc::new(FakeGenerationClient::failing());
        let handler = GetSuggestionsHandler::new(engine);

        let command = GetSuggestions {
            content: "A scene".to_string(),
            content_type: ContentType::Script,
        };
        let err = handler.handle(command).await.unwrap_err();
        match err {
            ApplicationError::ExternalServiceError(msg) => {
                assert_eq!(msg, SUGGESTIONS_FAILED_MESSAGE);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
