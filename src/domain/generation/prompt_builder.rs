//! Prompt Builder - 确定性 prompt 构造
//!
//! 将结构化的生成请求映射为发送给远端模型的单条自然语言指令。
//! 纯函数，无副作用，无错误分支：查表覆盖全部枚举变体。

use super::{ContentType, GenerationRequest, TargetLength};

/// 建议条数上限
pub const MAX_SUGGESTIONS: usize = 3;

/// 长度指引查表
fn length_guide(length: TargetLength) -> &'static str {
    match length {
        TargetLength::Short => "1-2 paragraphs",
        TargetLength::Medium => "3-5 paragraphs",
        TargetLength::Long => "6-10 paragraphs",
    }
}

/// 类型指引查表
fn type_instruction(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Story => {
            "Create an engaging narrative with characters, plot, and vivid descriptions."
        }
        ContentType::Poem => {
            "Write a creative poem with rhythm, imagery, and emotional depth."
        }
        ContentType::Script => {
            "Write in screenplay format with dialogue, action lines, and scene descriptions."
        }
        ContentType::Article => "Write an informative and well-structured article.",
        ContentType::General => "Create creative and engaging content.",
    }
}

/// 构造内容生成 prompt
///
/// 输出顺序固定:
/// 1. 角色声明（类型 + 语气）
/// 2. 长度指引
/// 3. 类型指引
/// 4. 用户原文（逐字）
/// 5. 收尾质量要求
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "You are a professional {kind} writer. Create a {tone} {kind} that is {length} long.\n\n\
         {instruction}\n\n\
         User request: {user_text}\n\n\
         Make it creative, engaging, and high-quality. Use vivid language and compelling storytelling techniques.",
        kind = request.content_type.as_str(),
        tone = request.tone.as_str(),
        length = length_guide(request.target_length),
        instruction = type_instruction(request.content_type),
        user_text = request.free_form_text,
    )
}

/// 构造内容改进 prompt
///
/// 固定模板，instruction 与原文逐字嵌入
pub fn improve_prompt(content: &str, instruction: &str) -> String {
    format!(
        "Please improve this content based on the following request: \"{instruction}\"\n\n\
         Original content:\n{content}\n\n\
         Provide the improved version:"
    )
}

/// 构造续写建议 prompt
///
/// 要求模型恰好返回 3 条建议，一行一条
pub fn suggestions_prompt(content: &str, content_type: ContentType) -> String {
    format!(
        "Based on this {}: \"{}\", provide 3 creative suggestions for what could come next. \
         Return only the suggestions, one per line.",
        content_type.as_str(),
        content,
    )
}

/// 解析模型返回的建议列表
///
/// 按行切分，丢弃空白行，截断到前 3 条。
/// 模型返回不足 3 条时按实际条数返回，不补齐、不重试。
pub fn parse_suggestions(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::Tone;

    #[test]
    fn test_prompt_contains_parts_in_order() {
        // 对每个 type/tone/length 组合验证:
        // 长度指引、类型指引、用户原文按此相对顺序出现
        for content_type in ContentType::ALL {
            for tone in Tone::ALL {
                for length in TargetLength::ALL {
                    let request = GenerationRequest {
                        free_form_text: "the last train out of the city".to_string(),
                        content_type,
                        tone,
                        target_length: length,
                    };
                    let prompt = build_prompt(&request);

                    let guide_pos = prompt.find(length_guide(length)).unwrap();
                    let instruction_pos = prompt.find(type_instruction(content_type)).unwrap();
                    let text_pos = prompt.find("the last train out of the city").unwrap();

                    assert!(guide_pos < instruction_pos);
                    assert!(instruction_pos < text_pos);
                    assert!(prompt.contains(tone.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_defaults_match_explicit_values() {
        let defaulted = GenerationRequest::new("rain on the window", ContentType::Story);
        let explicit = GenerationRequest::new("rain on the window", ContentType::Story)
            .with_tone(Tone::Creative)
            .with_length(TargetLength::Medium);

        assert_eq!(build_prompt(&defaulted), build_prompt(&explicit));
    }

    #[test]
    fn test_lighthouse_keeper_example() {
        let request = GenerationRequest::new(
            "a lighthouse keeper finds something strange",
            ContentType::Story,
        )
        .with_tone(Tone::Mysterious)
        .with_length(TargetLength::Short);

        let prompt = build_prompt(&request);
        assert!(prompt.contains("1-2 paragraphs"));
        assert!(prompt.contains(
            "Create an engaging narrative with characters, plot, and vivid descriptions."
        ));
        assert!(prompt.contains("a lighthouse keeper finds something strange"));
        assert!(prompt.contains("mysterious"));
    }

    #[test]
    fn test_improve_prompt_embeds_verbatim() {
        let prompt = improve_prompt("Once upon a time.", "Make it more engaging");
        assert!(prompt.contains("\"Make it more engaging\""));
        assert!(prompt.contains("Original content:\nOnce upon a time."));
        assert!(prompt.ends_with("Provide the improved version:"));
    }

    #[test]
    fn test_suggestions_prompt_names_type() {
        let prompt = suggestions_prompt("The door creaked open.", ContentType::Story);
        assert!(prompt.contains("Based on this story:"));
        assert!(prompt.contains("\"The door creaked open.\""));
        assert!(prompt.contains("one per line"));
    }

    #[test]
    fn test_parse_suggestions_drops_blanks_and_truncates() {
        let parsed = parse_suggestions("Idea one\n\nIdea two\nIdea three\nIdea four");
        assert_eq!(parsed, vec!["Idea one", "Idea two", "Idea three"]);
    }

    #[test]
    fn test_parse_suggestions_fewer_than_three() {
        let parsed = parse_suggestions("Only idea\n   \n");
        assert_eq!(parsed, vec!["Only idea"]);
    }

    #[test]
    fn test_parse_suggestions_entries_trimmed() {
        let parsed = parse_suggestions("  padded idea  \nsecond\n");
        assert_eq!(parsed, vec!["padded idea", "second"]);
        for entry in &parsed {
            assert!(!entry.trim().is_empty());
        }
    }

    #[test]
    fn test_parse_suggestions_empty_response() {
        assert!(parse_suggestions("").is_empty());
        assert!(parse_suggestions("\n\n  \n").is_empty());
    }
}
