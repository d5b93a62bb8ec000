//! Constructors for primitive filters and the OR-filter envelope.
//!
//! Primitive builders produce the compiled single-key query fragment up
//! front; the compiler treats those fragments as opaque. Only
//! [`build_or_filter`] produces a composite filter that still needs
//! compilation.

use crate::filter::{
    Filter, FilterEntry, FilterMeta, FilterParams, FilterState, FilterStateStore, FilterType,
};
use serde_json::{Map, Value, json};

fn single_key(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

/// Filter matching a single field value with `match_phrase`.
pub fn build_phrase_filter(field: &str, value: impl Into<Value>, index: &str) -> Filter {
    let value = value.into();
    let mut meta = FilterMeta::new(FilterType::Phrase);
    meta.index = Some(index.to_string());
    meta.params = Some(FilterParams::Value(json!({ "query": value.clone() })));

    Filter {
        meta,
        query: Some(single_key("match_phrase", single_key(field, value))),
        state: None,
    }
}

/// Filter matching any of several field values, expressed as a should clause
/// of `match_phrase` queries.
pub fn build_phrases_filter(field: &str, values: Vec<Value>, index: &str) -> Filter {
    let should: Vec<Value> = values
        .iter()
        .map(|value| single_key("match_phrase", single_key(field, value.clone())))
        .collect();

    let mut meta = FilterMeta::new(FilterType::Phrases);
    meta.index = Some(index.to_string());
    meta.params = Some(FilterParams::Value(Value::Array(values)));

    Filter {
        meta,
        query: Some(json!({
            "bool": { "should": should, "minimum_should_match": 1 }
        })),
        state: None,
    }
}

/// Filter matching a field against range bounds (`gte`, `lt`, ...). The
/// bounds object is carried verbatim into the `range` query.
pub fn build_range_filter(field: &str, params: Value, index: &str) -> Filter {
    let mut meta = FilterMeta::new(FilterType::Range);
    meta.index = Some(index.to_string());
    meta.params = Some(FilterParams::Value(params.clone()));

    Filter {
        meta,
        query: Some(single_key("range", single_key(field, params))),
        state: None,
    }
}

/// Filter matching documents where the field is present.
pub fn build_exists_filter(field: &str, index: &str) -> Filter {
    let mut meta = FilterMeta::new(FilterType::Exists);
    meta.index = Some(index.to_string());

    Filter {
        meta,
        query: Some(json!({ "exists": { "field": field } })),
        state: None,
    }
}

/// OR-filter envelope over an ordered list of entries. Each entry is one
/// branch of the eventual should clause; a group entry ANDs its members into
/// a single branch. The result carries no query until compiled.
pub fn build_or_filter(entries: Vec<FilterEntry>) -> Filter {
    let mut meta = FilterMeta::new(FilterType::Or);
    meta.params = Some(FilterParams::Entries(entries));

    Filter {
        meta,
        query: None,
        state: Some(FilterState {
            store: FilterStateStore::AppState,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_filter_query() {
        let filter = build_phrase_filter("extension", "value", "logstash-*");
        assert_eq!(
            filter.query,
            Some(json!({ "match_phrase": { "extension": "value" } }))
        );
        assert_eq!(filter.meta.filter_type, FilterType::Phrase);
        assert_eq!(filter.meta.index.as_deref(), Some("logstash-*"));
    }

    #[test]
    fn test_phrase_filter_accepts_non_string_values() {
        let filter = build_phrase_filter("ssl", false, "logstash-*");
        assert_eq!(filter.query, Some(json!({ "match_phrase": { "ssl": false } })));
    }

    #[test]
    fn test_phrases_filter_query() {
        let filter = build_phrases_filter("extension", vec![json!("tar"), json!("gz")], "logstash-*");
        assert_eq!(
            filter.query,
            Some(json!({
                "bool": {
                    "should": [
                        { "match_phrase": { "extension": "tar" } },
                        { "match_phrase": { "extension": "gz" } }
                    ],
                    "minimum_should_match": 1
                }
            }))
        );
        assert_eq!(
            filter.meta.params,
            Some(FilterParams::Value(json!(["tar", "gz"])))
        );
    }

    #[test]
    fn test_range_filter_query() {
        let filter = build_range_filter("bytes", json!({ "gte": 10 }), "logstash-*");
        assert_eq!(
            filter.query,
            Some(json!({ "range": { "bytes": { "gte": 10 } } }))
        );
    }

    #[test]
    fn test_exists_filter_query() {
        let filter = build_exists_filter("machine.os", "logstash-*");
        assert_eq!(filter.query, Some(json!({ "exists": { "field": "machine.os" } })));
    }

    #[test]
    fn test_or_filter_defaults() {
        let filter = build_or_filter(vec![]);
        assert_eq!(filter.meta.filter_type, FilterType::Or);
        assert!(!filter.meta.negate);
        assert!(!filter.meta.disabled);
        assert!(filter.query.is_none());
        assert_eq!(
            filter.state,
            Some(FilterState {
                store: FilterStateStore::AppState
            })
        );
    }
}
