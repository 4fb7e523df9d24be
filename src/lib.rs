#![doc = include_str!("../README.md")]

mod macros;

pub mod error;
pub mod pipeline;
pub mod table;
pub mod tools;
pub mod types;


pub use error::*;
pub use pipeline::{
    Builder, CleanBuilder, CollectBuilder, Compiled, Mode, ReplaceBuilder, Rewrite, Step, Target,
};
pub use table::PatternTable;
pub use tools::{Clean, Collect, Replace};
pub use types::*;

/// Start a pipeline that deletes what it matches.
///
/// # Examples
/// ```
/// let text = scrub::clean().hashtag().nickname().execute("Why #damn @alex33 is so harmful?").unwrap();
/// assert_eq!(text, "Why is so harmful?");
/// ```
pub fn clean() -> CleanBuilder {
    Builder::new()
}

/// Start a pipeline that replaces what it matches with tokens.
///
/// # Examples
/// ```
/// let text = scrub::replace()
///     .hashtag_with("")
///     .nickname()
///     .url_with("CUSTOM_URL_TOKEN")
///     .execute("#fun #lol    Why  @Alex33 is so funny? Check here: https://some-url.com")
///     .unwrap();
/// assert_eq!(text, "Why TOKEN_NICKNAME is so funny? Check here: CUSTOM_URL_TOKEN");
/// ```
pub fn replace() -> ReplaceBuilder {
    Builder::new()
}

/// Start a pipeline that counts what it matches.
pub fn collect() -> CollectBuilder {
    Builder::new()
}
