//! Generation Context - Value Objects
//!
//! 生成请求的结构化参数：内容类型、语气、目标长度

use serde::{Deserialize, Serialize};

/// 内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// 故事
    Story,
    /// 诗歌
    Poem,
    /// 剧本
    Script,
    /// 文章
    Article,
    /// 通用创作
    General,
}

impl ContentType {
    /// 全部变体（用于遍历）
    pub const ALL: [ContentType; 5] = [
        ContentType::Story,
        ContentType::Poem,
        ContentType::Script,
        ContentType::Article,
        ContentType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Story => "story",
            ContentType::Poem => "poem",
            ContentType::Script => "script",
            ContentType::Article => "article",
            ContentType::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "story" => Some(ContentType::Story),
            "poem" => Some(ContentType::Poem),
            "script" => Some(ContentType::Script),
            "article" => Some(ContentType::Article),
            "general" => Some(ContentType::General),
            _ => None,
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::General
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 语气
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Creative,
    Professional,
    Casual,
    Dramatic,
    Mysterious,
}

impl Tone {
    /// 全部变体（用于遍历）
    pub const ALL: [Tone; 5] = [
        Tone::Creative,
        Tone::Professional,
        Tone::Casual,
        Tone::Dramatic,
        Tone::Mysterious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Creative => "creative",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Dramatic => "dramatic",
            Tone::Mysterious => "mysterious",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "creative" => Some(Tone::Creative),
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "dramatic" => Some(Tone::Dramatic),
            "mysterious" => Some(Tone::Mysterious),
            _ => None,
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Creative
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 目标长度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLength {
    Short,
    Medium,
    Long,
}

impl TargetLength {
    /// 全部变体（用于遍历）
    pub const ALL: [TargetLength; 3] =
        [TargetLength::Short, TargetLength::Medium, TargetLength::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLength::Short => "short",
            TargetLength::Medium => "medium",
            TargetLength::Long => "long",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "short" => Some(TargetLength::Short),
            "medium" => Some(TargetLength::Medium),
            "long" => Some(TargetLength::Long),
            _ => None,
        }
    }
}

impl Default for TargetLength {
    fn default() -> Self {
        TargetLength::Medium
    }
}

/// 生成请求
///
/// 不变量:
/// - 构造后不可变，每次调用消费一次
/// - 不携带任何跨调用状态（façade 是无状态变换）
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// 用户的自由文本意图
    pub free_form_text: String,
    /// 内容类型
    pub content_type: ContentType,
    /// 语气（缺省 creative）
    pub tone: Tone,
    /// 目标长度（缺省 medium）
    pub target_length: TargetLength,
}

impl GenerationRequest {
    /// 创建请求，tone/length 使用缺省值
    pub fn new(free_form_text: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            free_form_text: free_form_text.into(),
            content_type,
            tone: Tone::default(),
            target_length: TargetLength::default(),
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_length(mut self, length: TargetLength) -> Self {
        self.target_length = length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = GenerationRequest::new("a quiet morning", ContentType::Poem);
        assert_eq!(request.tone, Tone::Creative);
        assert_eq!(request.target_length, TargetLength::Medium);
    }

    #[test]
    fn test_str_round_trip() {
        for content_type in ContentType::ALL {
            assert_eq!(ContentType::from_str(content_type.as_str()), Some(content_type));
        }
        for tone in Tone::ALL {
            assert_eq!(Tone::from_str(tone.as_str()), Some(tone));
        }
        for length in TargetLength::ALL {
            assert_eq!(TargetLength::from_str(length.as_str()), Some(length));
        }
    }

    #[test]
    fn test_unknown_str() {
        assert_eq!(ContentType::from_str("novel"), None);
        assert_eq!(Tone::from_str("sad"), None);
        assert_eq!(TargetLength::from_str("huge"), None);
    }
}
