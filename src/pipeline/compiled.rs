use super::{Mode, Step};
use crate::error::Result;
use crate::table::PatternTable;
use crate::tools::{collect, Collect};
use crate::types::{ExecuteOptions, ResultMap};
use std::marker::PhantomData;
use std::sync::Arc;

/// A frozen pipeline.
///
/// Holds a snapshot of the builder's steps taken at compile time; chaining
/// more steps onto the builder afterwards does not change it. Cheap to clone
/// and safe to share between threads.
///
/// # Examples
/// ```
/// let pipeline = scrub::clean().url().hashtag().compile();
/// assert_eq!(pipeline.apply("#rust https://x.io rocks").unwrap(), "rocks");
/// assert_eq!(pipeline.apply("#rust https://x.io rocks").unwrap(), "rocks");
/// ```
#[derive(Debug, Clone)]
pub struct Compiled<M> {
    steps: Arc<[Step]>,
    table: Arc<PatternTable>,
    options: ExecuteOptions,
    mode: PhantomData<M>,
}

impl<M: Mode> Compiled<M> {
    pub(crate) fn new(steps: Vec<Step>, table: Arc<PatternTable>, options: ExecuteOptions) -> Self {
        Self {
            steps: steps.into(),
            table,
            options,
            mode: PhantomData,
        }
    }

    /// Run the frozen steps on `input`.
    ///
    /// Clean and replace pipelines return the rewritten text; collect
    /// pipelines return one [`Tally`](crate::types::Tally) per step, in step order.
    pub fn apply(&self, input: impl ToString) -> Result<M::Output> {
        M::run(&self.steps, &self.table, &input.to_string(), self.options)
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

    pub fn options(&self) -> ExecuteOptions {
        self.options
    }
}

impl Compiled<Collect> {
    /// Same as [`Builder::execute`](super::Builder::execute) for collect pipelines.
    pub fn execute(&self, input: impl ToString) -> Result<ResultMap> {
        collect::execute(&self.steps, &self.table, &input.to_string())
    }

    /// Same as [`Builder::batch_execute`](super::Builder::batch_execute).
    pub fn batch_execute<I, T>(&self, inputs: I) -> Result<ResultMap>
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        collect::batch_execute(&self.steps, &self.table, inputs)
    }
}
