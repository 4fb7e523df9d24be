//! Replace Tools
//!
//! Every step substitutes its matches with a token. Emoji and emoticons are
//! replaced with their table label padded by spaces.


use super::utils::*;
use crate::error::Result;
use crate::pipeline::{Mode, Rewrite, Step, Target};
use crate::table::PatternTable;
use crate::types::ExecuteOptions;

pub const TOKEN_URL: &str = "TOKEN_URL";
pub const TOKEN_NICKNAME: &str = "TOKEN_NICKNAME";
pub const TOKEN_HASHTAG: &str = "TOKEN_HASHTAG";
pub const TOKEN_PUNCTUATION: &str = " TOKEN_PUNCTUATION ";
pub const TOKEN_WHITESPACE: &str = " ";
pub const TOKEN_HTML: &str = "TOKEN_HTML";
pub const TOKEN_CUSTOM: &str = "TOKEN_CUSTOM";

/// Substitute matches with tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Replace;

impl Mode for Replace {
    const NAME: &'static str = "replace";
    type Output = String;

    fn run(
        steps: &[Step],
        table: &PatternTable,
        text: &str,
        options: ExecuteOptions,
    ) -> Result<String> {
        rewrite(steps, text, options, |step, s| replace_step(step, table, s))
    }
}

impl Rewrite for Replace {}

/// Default token for a target, `None` for table-driven targets.
pub fn default_token(target: &Target) -> Option<&'static str> {
    match target {
        Target::Url => Some(TOKEN_URL),
        Target::Nickname => Some(TOKEN_NICKNAME),
        Target::Hashtag => Some(TOKEN_HASHTAG),
        Target::Punctuation => Some(TOKEN_PUNCTUATION),
        Target::Whitespace => Some(TOKEN_WHITESPACE),
        Target::Html => Some(TOKEN_HTML),
        Target::Regexp { .. } => Some(TOKEN_CUSTOM),
        Target::Emoji | Target::Emoticon { .. } => None,
    }
}

/// Apply one replace-step to `text`.
pub fn replace_step(step: &Step, table: &PatternTable, text: &str) -> Result<String> {
    let token = step
        .token
        .as_deref()
        .or_else(|| default_token(&step.target))
        .unwrap_or_default();

    let result = match &step.target {
        Target::Url => substitute(&URL_REGEX, text, token),
        Target::Nickname => substitute(&NICKNAME_REGEX, text, token),
        Target::Hashtag => substitute(&HASHTAG_REGEX, text, token),
        Target::Punctuation => substitute(&SYMBOL_RUN_REGEX, text, token),
        Target::Whitespace => replace_control_whitespace(text, token),
        Target::Html => substitute(&HTML_REGEX, text, token),
        Target::Emoji => table.substitute_emoji(text, |label| label_token(step, label)),
        Target::Emoticon { .. } => {
            table.substitute_emoticons(text, |label| label_token(step, label))
        }
        Target::Regexp { pattern } => substitute(pattern.regex()?, text, token),
    };
    Ok(result)
}

// An explicit token wins over the padded table label
fn label_token(step: &Step, label: &str) -> String {
    match &step.token {
        Some(token) => token.clone(),
        None => format!(" {label} "),
    }
}
