//! Step definitions

use crate::error::{Result, ScrubError};
use crate::types::EmoticonOptions;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// What a step matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    Url,
    Nickname,
    Hashtag,
    Punctuation,
    Whitespace,
    Html,
    Emoji,
    Emoticon {
        #[serde(default)]
        options: EmoticonOptions,
    },
    Regexp {
        pattern: CustomPattern,
    },
}

impl Target {
    /// Label used for this target in collect results.
    pub fn label(&self) -> &'static str {
        match self {
            Target::Url => "url",
            Target::Nickname => "nickname",
            Target::Hashtag => "hashtag",
            Target::Punctuation => "punctuation",
            Target::Whitespace => "whitespace",
            Target::Html => "html",
            Target::Emoji => "emoji",
            Target::Emoticon { .. } => "emoticon",
            Target::Regexp { .. } => "regexp",
        }
    }
}

/// One link of a pipeline: a target plus an optional replacement token.
///
/// The token is only read by replace pipelines; `None` means the default
/// token for the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub target: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Step {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn label(&self) -> &'static str {
        self.target.label()
    }
}

impl From<Target> for Step {
    fn from(target: Target) -> Self {
        Step::new(target)
    }
}

/// Caller-supplied regular expression.
///
/// Compiled on first use and cached, so a bad pattern is reported when the
/// step runs, not when it is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CustomPattern {
    source: String,
    compiled: OnceLock<std::result::Result<Regex, regex::Error>>,
}

impl CustomPattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            compiled: OnceLock::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Compiled regex, or the syntax error it produced.
    pub fn regex(&self) -> Result<&Regex> {
        match self.compiled.get_or_init(|| Regex::new(&self.source)) {
            Ok(regex) => Ok(regex),
            Err(e) => {
                tracing::warn!(pattern = %self.source, error = %e, "custom pattern rejected");
                Err(ScrubError::invalid_pattern(&self.source, e.clone()))
            }
        }
    }
}

impl PartialEq for CustomPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CustomPattern {}

impl From<String> for CustomPattern {
    fn from(source: String) -> Self {
        CustomPattern::new(source)
    }
}

impl From<&str> for CustomPattern {
    fn from(source: &str) -> Self {
        CustomPattern::new(source)
    }
}

impl From<CustomPattern> for String {
    fn from(pattern: CustomPattern) -> Self {
        pattern.source
    }
}
