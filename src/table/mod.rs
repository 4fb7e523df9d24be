//! Pattern Table
//!
//! Ordered emoji (literal) and emoticon (regex) entries mapped to labels.
//! Declaration order is part of the contract: clean and replace walk it in
//! reverse, collect walks it forward.

mod emoji;
mod emoticons;
mod tests;

use crate::error::{Result, ScrubError};
use regex::Regex;
use std::sync::{Arc, LazyLock};

static BUILTIN: LazyLock<Arc<PatternTable>> = LazyLock::new(|| {
    let emoticons = emoticons::EMOTICONS
        .iter()
        .map(|(pattern, label)| EmoticonEntry {
            regex: Regex::new(pattern).expect("valid regex"),
            label: label.to_string(),
        })
        .collect();
    Arc::new(PatternTable {
        emoji: emoji::EMOJI
            .iter()
            .map(|(symbol, label)| (symbol.to_string(), label.to_string()))
            .collect(),
        emoticons,
    })
});

/// One emoticon pattern and the label it maps to.
#[derive(Debug, Clone)]
pub struct EmoticonEntry {
    pub regex: Regex,
    pub label: String,
}

impl EmoticonEntry {
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

#[derive(Debug, Clone)]
pub struct PatternTable {
    emoji: Vec<(String, String)>,
    emoticons: Vec<EmoticonEntry>,
}

impl PatternTable {
    /// Build a table from caller entries, compiling every emoticon regex.
    ///
    /// # Examples
    /// ```
    /// use scrub::table::PatternTable;
    ///
    /// let table = PatternTable::new(
    ///     [("🙂", "SMILE")],
    ///     [(r":\)", "HAPPY")],
    /// ).unwrap();
    /// assert_eq!(table.emoji_len(), 1);
    /// ```
    pub fn new<E, L, P, M>(
        emoji: impl IntoIterator<Item = (E, L)>,
        emoticons: impl IntoIterator<Item = (P, M)>,
    ) -> Result<Self>
    where
        E: Into<String>,
        L: Into<String>,
        P: AsRef<str>,
        M: Into<String>,
    {
        let emoji = emoji
            .into_iter()
            .map(|(symbol, label)| (symbol.into(), label.into()))
            .collect();

        let emoticons = emoticons
            .into_iter()
            .map(|(pattern, label)| {
                let label = label.into();
                match Regex::new(pattern.as_ref()) {
                    Ok(regex) => Ok(EmoticonEntry { regex, label }),
                    Err(source) => Err(ScrubError::InvalidTableEntry {
                        pattern: pattern.as_ref().to_string(),
                        label,
                        source,
                    }),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { emoji, emoticons })
    }

    /// Shared built-in table, compiled once per process.
    pub fn builtin() -> Arc<PatternTable> {
        Arc::clone(&BUILTIN)
    }

    /// Emoji entries in declaration order.
    pub fn emoji(&self) -> impl DoubleEndedIterator<Item = (&str, &str)> {
        self.emoji.iter().map(|(s, l)| (s.as_str(), l.as_str()))
    }

    /// Emoticon entries in declaration order.
    pub fn emoticons(&self) -> &[EmoticonEntry] {
        &self.emoticons
    }

    pub fn emoji_len(&self) -> usize {
        self.emoji.len()
    }

    pub fn emoticons_len(&self) -> usize {
        self.emoticons.len()
    }

    /// Replace every emoji with `replacement(label)`, longest-declared first.
    pub(crate) fn substitute_emoji<F>(&self, text: &str, replacement: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut result = text.to_string();
        for (symbol, label) in self.emoji().rev() {
            if result.contains(symbol) {
                result = result.replace(symbol, &replacement(label));
            }
        }
        result
    }

    /// Replace every emoticon match with `replacement(label)`, last-declared first.
    pub(crate) fn substitute_emoticons<F>(&self, text: &str, replacement: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut result = text.to_string();
        for entry in self.emoticons.iter().rev() {
            let token = replacement(&entry.label);
            result = entry
                .regex
                .replace_all(&result, regex::NoExpand(token.as_str()))
                .into_owned();
        }
        result
    }
}
