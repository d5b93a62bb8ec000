pub mod clauses;
pub mod error;
pub mod or_filter;

pub use clauses::BoolClauses;
pub use error::{CompileError, Result};
pub use or_filter::compile_or_filter;
