use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Discriminator tag for a filter's predicate kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterType {
    #[serde(rename = "phrase")]
    Phrase,
    #[serde(rename = "phrases")]
    Phrases,
    #[serde(rename = "range")]
    Range,
    #[serde(rename = "exists")]
    Exists,
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "custom")]
    Custom,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::Phrase => "phrase",
            FilterType::Phrases => "phrases",
            FilterType::Range => "range",
            FilterType::Exists => "exists",
            FilterType::Or => "OR",
            FilterType::Custom => "custom",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage scope a filter belongs to in the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterStateStore {
    AppState,
    GlobalState,
}

/// The `$state` envelope. Opaque to the compiler and always passed through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub store: FilterStateStore,
}

/// One element of an OR filter's params: a single filter, or an implicit AND
/// group of further entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterEntry {
    Group(Vec<FilterEntry>),
    Filter(Filter),
}

/// Tag-specific payload carried in `meta.params`.
///
/// Only OR filters carry a structured `Entries` list; every other tag's
/// payload stays an opaque JSON value. `Entries` must stay the first variant
/// so that a list of filter objects deserializes as entries rather than as a
/// plain array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterParams {
    Entries(Vec<FilterEntry>),
    Value(Value),
}

/// Structured filter metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterMeta {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    #[serde(default)]
    pub negate: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub alias: Option<String>,
    /// Reference to the target data source, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<FilterParams>,
}

impl FilterMeta {
    /// Enabled, non-negated metadata for the given tag with no payload.
    pub fn new(filter_type: FilterType) -> Self {
        FilterMeta {
            filter_type,
            negate: false,
            disabled: false,
            alias: None,
            index: None,
            params: None,
        }
    }
}

/// A single search predicate or predicate group: metadata, the compiled
/// query fragment, and the storage-scope envelope.
///
/// `query` is a single-key object once compiled (`match_phrase`, `range`,
/// `exists`, `bool`, ...) and `None` for composite filters that have not
/// been compiled yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub meta: FilterMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    #[serde(rename = "$state", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<FilterState>,
}

impl Filter {
    pub fn is_or(&self) -> bool {
        self.meta.filter_type == FilterType::Or
    }

    pub fn is_disabled(&self) -> bool {
        self.meta.disabled
    }

    pub fn is_negated(&self) -> bool {
        self.meta.negate
    }
}
