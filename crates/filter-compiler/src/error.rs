use model::FilterType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("Expected an OR filter, got a {0} filter")]
    UnexpectedFilterType(FilterType),

    #[error("OR filter params must be an ordered list of filters or filter groups")]
    MalformedParams,

    #[error("Sub-filter of type {0} carries no compiled query")]
    MissingQuery(FilterType),
}

pub type Result<T> = std::result::Result<T, CompileError>;
