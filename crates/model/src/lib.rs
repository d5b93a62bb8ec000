pub mod build;
pub mod filter;

pub use build::{
    build_exists_filter, build_or_filter, build_phrase_filter, build_phrases_filter,
    build_range_filter,
};
pub use filter::{
    Filter, FilterEntry, FilterMeta, FilterParams, FilterState, FilterStateStore, FilterType,
};
