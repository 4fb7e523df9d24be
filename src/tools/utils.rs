//! Shared patterns and helpers for the step tools

use crate::error::Result;
use crate::pipeline::Step;
use crate::types::ExecuteOptions;
use regex::Regex;
use std::sync::LazyLock;

pub(crate) static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

pub(crate) static NICKNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid regex"));

pub(crate) static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

pub(crate) static HTML_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>").expect("valid regex"));

// Anything that is neither a word character nor whitespace
pub(crate) static SYMBOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

pub(crate) static SYMBOL_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]+").expect("valid regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Tab, newline, carriage return, vertical tab, form feed.
pub(crate) const CONTROL_WHITESPACE: [char; 5] = ['\t', '\n', '\r', '\x0B', '\x0C'];

/// Normalize whitespace by collapsing runs to a single space and trimming.
///
/// - Multiple spaces → single space
/// - Newlines and tabs → single space
/// - Trim leading/trailing whitespace
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// Replace each control whitespace character with `replacement`.
pub(crate) fn replace_control_whitespace(text: &str, replacement: &str) -> String {
    if !text.contains(CONTROL_WHITESPACE) {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if CONTROL_WHITESPACE.contains(&c) {
            result.push_str(replacement);
        } else {
            result.push(c);
        }
    }
    result
}

/// Remove every regex match, or substitute `replacement` literally.
pub(crate) fn substitute(regex: &Regex, text: &str, replacement: &str) -> String {
    regex
        .replace_all(text, regex::NoExpand(replacement))
        .into_owned()
}

/// Pipe `text` through every step in order, then apply the per-call options.
pub(crate) fn rewrite<F>(
    steps: &[Step],
    text: &str,
    options: ExecuteOptions,
    apply: F,
) -> Result<String>
where
    F: Fn(&Step, &str) -> Result<String>,
{
    let mut result = text.to_string();
    for step in steps {
        tracing::trace!(step = step.label(), "applying step");
        result = apply(step, &result)?;
    }

    if options.collapse_whitespace {
        result = normalize_whitespace(&result);
    }
    if options.lowercase {
        result = result.to_lowercase();
    }
    Ok(result)
}
