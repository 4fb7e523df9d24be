//! Clean Tools
//!
//! Every step deletes what it matches. Emoji and emoticons leave a single
//! space behind so that `":)word1:Dword2"` does not glue the words together.

mod tests;

use super::utils::*;
use crate::error::Result;
use crate::pipeline::{Mode, Rewrite, Step, Target};
use crate::table::PatternTable;
use crate::types::ExecuteOptions;

/// Delete matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clean;

impl Mode for Clean {
    const NAME: &'static str = "clean";
    type Output = String;

    fn run(
        steps: &[Step],
        table: &PatternTable,
        text: &str,
        options: ExecuteOptions,
    ) -> Result<String> {
        rewrite(steps, text, options, |step, s| clean_step(step, table, s))
    }
}

impl Rewrite for Clean {}

/// Apply one delete-step to `text`.
pub fn clean_step(step: &Step, table: &PatternTable, text: &str) -> Result<String> {
    let result = match &step.target {
        Target::Url => substitute(&URL_REGEX, text, ""),
        Target::Nickname => substitute(&NICKNAME_REGEX, text, ""),
        Target::Hashtag => substitute(&HASHTAG_REGEX, text, ""),
        Target::Punctuation => remove_ascii_punctuation(text),
        Target::Whitespace => replace_control_whitespace(text, " "),
        Target::Html => substitute(&HTML_REGEX, text, ""),
        Target::Emoji => table.substitute_emoji(text, |_| " ".to_string()),
        Target::Emoticon { .. } => table.substitute_emoticons(text, |_| " ".to_string()),
        Target::Regexp { pattern } => substitute(pattern.regex()?, text, ""),
    };
    Ok(result)
}

/// Remove every character of ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
///
/// Non-ASCII symbols such as `«` or `…` are kept.
pub fn remove_ascii_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
