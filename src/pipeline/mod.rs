//! Pipeline Builder
//!
//! One builder type, [`Builder<M>`], shared by the three modes. Chain methods
//! append exactly one [`Step`] each and hand the builder back. Steps run in
//! insertion order; they are never reordered or deduplicated.
//!
//! Finalize calls (`execute`, `batch_execute`, `compile`) only read the step
//! list. Whitespace collapsing and lowercasing are options of the call, not
//! extra steps, so executing a builder twice gives the same answer twice.
//!
//! A builder has no internal locking. Chain methods take it by value, so it
//! is owned by whoever is building it.

mod compiled;
mod step;
mod tests;

pub use compiled::Compiled;
pub use step::{CustomPattern, Step, Target};

use crate::error::Result;
use crate::table::PatternTable;
use crate::tools::{collect, Clean, Collect, Replace};
use crate::types::{EmoticonOptions, ExecuteOptions, ResultMap};
use std::marker::PhantomData;
use std::sync::Arc;

mod sealed {
    pub trait Sealed {}
    impl Sealed for crate::tools::Clean {}
    impl Sealed for crate::tools::Replace {}
    impl Sealed for crate::tools::Collect {}
}

/// Execution semantics of a pipeline.
pub trait Mode: sealed::Sealed {
    const NAME: &'static str;

    /// What one input produces.
    type Output;

    /// Run `steps` over `text`.
    fn run(
        steps: &[Step],
        table: &PatternTable,
        text: &str,
        options: ExecuteOptions,
    ) -> Result<Self::Output>;
}

/// Modes whose steps pipe text into text.
pub trait Rewrite: Mode<Output = String> {}

pub type CleanBuilder = Builder<Clean>;
pub type ReplaceBuilder = Builder<Replace>;
pub type CollectBuilder = Builder<Collect>;

#[derive(Debug, Clone)]
pub struct Builder<M> {
    steps: Vec<Step>,
    table: Arc<PatternTable>,
    mode: PhantomData<M>,
}

impl<M: Mode> Default for Builder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mode> Builder<M> {
    /// Empty builder over the built-in pattern table.
    pub fn new() -> Self {
        Self::with_table(PatternTable::builtin())
    }

    /// Empty builder over a caller-supplied pattern table.
    pub fn with_table(table: Arc<PatternTable>) -> Self {
        Self {
            steps: Vec::new(),
            table,
            mode: PhantomData,
        }
    }

    /// Builder preloaded with `steps`, in order.
    pub fn from_steps(steps: impl IntoIterator<Item = Step>) -> Self {
        let mut builder = Self::new();
        builder.steps.extend(steps);
        builder
    }

    /// Builder from a JSON step list.
    ///
    /// # Examples
    /// ```
    /// let builder = scrub::CleanBuilder::from_json(
    ///     r#"[{"kind": "url"}, {"kind": "regexp", "pattern": "\\d+"}]"#,
    /// ).unwrap();
    /// assert_eq!(builder.execute("call 555 or https://x.io").unwrap(), "call or");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let steps: Vec<Step> = serde_json::from_str(json)?;
        Ok(Self::from_steps(steps))
    }

    /// Serialize the step list to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.steps)?)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn table(&self) -> &Arc<PatternTable> {
        &self.table
    }

    /// Append an arbitrary step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// `http://` and `https://` links.
    pub fn url(self) -> Self {
        self.step(Step::new(Target::Url))
    }

    /// `@nickname` mentions.
    pub fn nickname(self) -> Self {
        self.step(Step::new(Target::Nickname))
    }

    /// `#hashtag` words.
    pub fn hashtag(self) -> Self {
        self.step(Step::new(Target::Hashtag))
    }

    /// Punctuation. Clean removes the ASCII set; replace and collect match any
    /// character that is neither a word character nor whitespace.
    pub fn punctuation(self) -> Self {
        self.step(Step::new(Target::Punctuation))
    }

    /// Tab, newline, carriage return, vertical tab and form feed.
    pub fn whitespace(self) -> Self {
        self.step(Step::new(Target::Whitespace))
    }

    /// `<...>` tags.
    pub fn html(self) -> Self {
        self.step(Step::new(Target::Html))
    }

    pub fn emoji(self) -> Self {
        self.step(Step::new(Target::Emoji))
    }

    pub fn emoticon(self) -> Self {
        self.step(Step::new(Target::Emoticon {
            options: EmoticonOptions::default(),
        }))
    }

    /// Custom regular expression, compiled when the step first runs.
    pub fn regexp(self, pattern: impl Into<String>) -> Self {
        self.step(Step::new(Target::Regexp {
            pattern: CustomPattern::new(pattern),
        }))
    }

    fn freeze(&self, options: ExecuteOptions) -> Compiled<M> {
        Compiled::new(self.steps.clone(), Arc::clone(&self.table), options)
    }
}

impl<M: Rewrite> Builder<M> {
    /// Run the pipeline on `input`, collapsing whitespace afterwards.
    ///
    /// # Examples
    /// ```
    /// let text = scrub::clean()
    ///     .hashtag()
    ///     .nickname()
    ///     .url()
    ///     .execute("#fun #lol    Why  @Alex33 is so funny? Check here: https://some-url.com")
    ///     .unwrap();
    /// assert_eq!(text, "Why is so funny? Check here:");
    /// ```
    pub fn execute(&self, input: impl ToString) -> Result<String> {
        self.execute_with(input, ExecuteOptions::default())
    }

    /// Run the pipeline on `input` with explicit post-processing options.
    pub fn execute_with(&self, input: impl ToString, options: ExecuteOptions) -> Result<String> {
        tracing::debug!(mode = M::NAME, steps = self.steps.len(), "executing pipeline");
        M::run(&self.steps, &self.table, &input.to_string(), options)
    }

    /// Freeze the current steps into a reusable pipeline.
    pub fn compile(&self) -> Compiled<M> {
        self.freeze(ExecuteOptions::default())
    }

    pub fn compile_with(&self, options: ExecuteOptions) -> Compiled<M> {
        self.freeze(options)
    }
}

impl Builder<Replace> {
    fn step_with(self, target: Target, token: impl Into<String>) -> Self {
        self.step(Step::new(target).with_token(token))
    }

    pub fn url_with(self, token: impl Into<String>) -> Self {
        self.step_with(Target::Url, token)
    }

    pub fn nickname_with(self, token: impl Into<String>) -> Self {
        self.step_with(Target::Nickname, token)
    }

    pub fn hashtag_with(self, token: impl Into<String>) -> Self {
        self.step_with(Target::Hashtag, token)
    }

    pub fn punctuation_with(self, token: impl Into<String>) -> Self {
        self.step_with(Target::Punctuation, token)
    }

    pub fn whitespace_with(self, token: impl Into<String>) -> Self {
        self.step_with(Target::Whitespace, token)
    }

    pub fn html_with(self, token: impl Into<String>) -> Self {
        self.step_with(Target::Html, token)
    }

    pub fn regexp_with(self, pattern: impl Into<String>, token: impl Into<String>) -> Self {
        let target = Target::Regexp {
            pattern: CustomPattern::new(pattern),
        };
        self.step_with(target, token)
    }
}

impl Builder<Collect> {
    /// Emoticons with explicit URL/emoji masking.
    pub fn emoticon_with(self, options: EmoticonOptions) -> Self {
        self.step(Step::new(Target::Emoticon { options }))
    }

    /// Tally every step over `input`.
    ///
    /// Steps see the original text, not each other's output. If two steps
    /// share a label, the later one's counts replace the earlier entry.
    ///
    /// # Examples
    /// ```
    /// let result = scrub::collect().hashtag().execute("#a #b #a").unwrap();
    /// assert_eq!(result["hashtag"]["#a"], 2);
    /// assert_eq!(result["hashtag"]["#b"], 1);
    /// ```
    pub fn execute(&self, input: impl ToString) -> Result<ResultMap> {
        tracing::debug!(mode = Collect::NAME, steps = self.steps.len(), "executing pipeline");
        collect::execute(&self.steps, &self.table, &input.to_string())
    }

    /// Tally every step over every input, summing counts across inputs.
    ///
    /// Unlike [`execute`](Self::execute), steps that share a label add up.
    pub fn batch_execute<I, T>(&self, inputs: I) -> Result<ResultMap>
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        collect::batch_execute(&self.steps, &self.table, inputs)
    }

    /// Freeze the current steps into a reusable collector.
    pub fn compile(&self) -> Compiled<Collect> {
        self.freeze(ExecuteOptions::default())
    }
}
