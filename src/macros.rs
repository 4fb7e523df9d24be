//! Shared Macros

/// Count every item of an iterator into a fresh `Counts` map.
#[macro_export]
macro_rules! tally {
    ($items:expr) => {{
        let mut counts = $crate::types::Counts::new();
        for item in $items {
            *counts.entry(item.to_string()).or_insert(0) += 1;
        }
        counts
    }};
}

/// Add the counts of one or more maps into `target`.
#[macro_export]
macro_rules! merge_counts {
    ($target:expr, $($source:expr),+ $(,)?) => {{
        $(
            for (key, n) in $source {
                *$target.entry(key.clone()).or_insert(0) += n;
            }
        )+
    }};
}
