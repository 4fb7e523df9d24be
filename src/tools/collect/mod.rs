//! Collect Tools
//!
//! Steps never modify the text: each one tallies its matches in the original
//! input and returns a [`Tally`].


use super::utils::*;
use crate::error::Result;
use crate::pipeline::{Mode, Step, Target};
use crate::table::PatternTable;
use crate::types::{Counts, EmoticonOptions, ExecuteOptions, ResultMap, Tally};
use crate::{merge_counts, tally};

/// Count matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collect;

impl Mode for Collect {
    const NAME: &'static str = "collect";
    type Output = Vec<Tally>;

    fn run(
        steps: &[Step],
        table: &PatternTable,
        text: &str,
        _options: ExecuteOptions,
    ) -> Result<Vec<Tally>> {
        steps
            .iter()
            .map(|step| collect_step(step, table, text))
            .collect()
    }
}

/// Tally one step over `text`.
pub fn collect_step(step: &Step, table: &PatternTable, text: &str) -> Result<Tally> {
    let counts = match &step.target {
        Target::Url => tally!(URL_REGEX.find_iter(text).map(|m| m.as_str())),
        Target::Nickname => tally!(NICKNAME_REGEX.find_iter(text).map(|m| m.as_str())),
        Target::Hashtag => tally!(HASHTAG_REGEX.find_iter(text).map(|m| m.as_str())),
        Target::Punctuation => tally!(SYMBOL_REGEX.find_iter(text).map(|m| m.as_str())),
        Target::Whitespace => tally!(text.chars().filter(|c| CONTROL_WHITESPACE.contains(c))),
        Target::Html => tally!(HTML_REGEX.find_iter(text).map(|m| m.as_str())),
        Target::Emoji => count_emoji(table, text),
        Target::Emoticon { options } => count_emoticons(table, text, *options),
        Target::Regexp { pattern } => {
            let regex = pattern.regex()?;
            tally!(regex.find_iter(text).map(|m| m.as_str()))
        }
    };
    Ok(Tally::new(step.label(), counts))
}

/// Count emoji occurrences per label, walking the table forward.
///
/// Entries sharing a label add up. Overlapping entries (a skin-toned thumb
/// and the plain thumb) both count the same text.
pub fn count_emoji(table: &PatternTable, text: &str) -> Counts {
    let mut counts = Counts::new();
    for (symbol, label) in table.emoji() {
        let n = text.matches(symbol).count();
        if n > 0 {
            *counts.entry(label.to_string()).or_insert(0) += n;
        }
    }
    counts
}

/// Count emoticon matches per label after masking URLs and emoji.
pub fn count_emoticons(table: &PatternTable, text: &str, options: EmoticonOptions) -> Counts {
    let mut masked = text.to_string();
    if options.mask_urls {
        masked = substitute(&URL_REGEX, &masked, " ");
    }
    if options.mask_emoji {
        masked = table.substitute_emoji(&masked, |_| " ".to_string());
    }

    let mut counts = Counts::new();
    for entry in table.emoticons() {
        let n = entry.regex.find_iter(&masked).count();
        if n > 0 {
            *counts.entry(entry.label.clone()).or_insert(0) += n;
        }
    }
    counts
}

/// Run every step on `text` and key the results by label.
///
/// When two steps share a label (two `regexp` steps, say) the later step's
/// counts replace the earlier ones. [`batch_execute`] sums instead.
pub fn execute(steps: &[Step], table: &PatternTable, text: &str) -> Result<ResultMap> {
    let mut result = ResultMap::new();
    for step in steps {
        let tally = collect_step(step, table, text)?;
        result.insert(tally.label.to_string(), tally.counts);
    }
    Ok(result)
}

/// Run every step on every input and sum all counts into one map.
pub fn batch_execute<I, T>(steps: &[Step], table: &PatternTable, inputs: I) -> Result<ResultMap>
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    let mut result = ResultMap::new();
    let mut seen = 0usize;
    for input in inputs {
        let text = input.to_string();
        for step in steps {
            let tally = collect_step(step, table, &text)?;
            let counts = result.entry(tally.label.to_string()).or_default();
            merge_counts!(counts, tally.counts);
        }
        seen += 1;
    }
    tracing::debug!(inputs = seen, steps = steps.len(), "batch collect finished");
    Ok(result)
}
