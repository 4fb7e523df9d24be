use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrubError>;

#[derive(Debug, Error)]
pub enum ScrubError {
    /// A custom `regexp` step pattern failed to compile when first applied.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// A caller-supplied emoticon entry failed to compile.
    #[error("invalid pattern table entry `{pattern}` ({label}): {source}")]
    InvalidTableEntry {
        pattern: String,
        label: String,
        #[source]
        source: regex::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrubError {
    pub fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        ScrubError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}
