// Shared patterns and helpers
pub mod utils;

// One tool per pipeline mode
pub mod clean;
pub mod collect;
pub mod replace;

pub use clean::Clean;
pub use collect::Collect;
pub use replace::Replace;
