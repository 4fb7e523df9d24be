//! Common types shared across the pipeline and its tools

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Match text (or table label) to number of occurrences.
pub type Counts = BTreeMap<String, usize>;

/// Collect-mode result: step label to its counts.
pub type ResultMap = BTreeMap<String, Counts>;

/// Output of one collect step over one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub label: &'static str,
    pub counts: Counts,
}

impl Tally {
    pub fn new(label: &'static str, counts: Counts) -> Self {
        Self { label, counts }
    }

    /// Total number of matches across all keys.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Post-processing applied after the last step of a clean or replace pipeline.
///
/// These run per call and are never stored on the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecuteOptions {
    /// Collapse every whitespace run to a single space and trim both ends.
    pub collapse_whitespace: bool,
    /// Lowercase the final text.
    pub lowercase: bool,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            lowercase: false,
        }
    }
}

impl ExecuteOptions {
    /// Keep whitespace exactly as the steps left it.
    pub fn raw() -> Self {
        Self {
            collapse_whitespace: false,
            lowercase: false,
        }
    }

    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

/// Masking applied before counting emoticons, so that text such as the `:/`
/// inside `https://` is not mistaken for a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EmoticonOptions {
    pub mask_urls: bool,
    pub mask_emoji: bool,
}

impl Default for EmoticonOptions {
    fn default() -> Self {
        Self {
            mask_urls: true,
            mask_emoji: true,
        }
    }
}

impl EmoticonOptions {
    /// Count emoticons in the raw text, without masking anything.
    pub fn unmasked() -> Self {
        Self {
            mask_urls: false,
            mask_emoji: false,
        }
    }

    pub fn with_mask_urls(mut self, mask: bool) -> Self {
        self.mask_urls = mask;
        self
    }

    pub fn with_mask_emoji(mut self, mask: bool) -> Self {
        self.mask_emoji = mask;
        self
    }
}
