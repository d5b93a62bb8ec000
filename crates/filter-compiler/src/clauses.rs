use serde_json::{Value, json};

/// Accumulator for one AND branch of a compiled should clause.
///
/// `must` and `should` stay empty at branch level; they are emitted anyway so
/// the branch carries the full bool-query shape the search engine expects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolClauses {
    pub filter: Vec<Value>,
    pub must: Vec<Value>,
    pub must_not: Vec<Value>,
    pub should: Vec<Value>,
}

impl BoolClauses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one compiled sub-query into the positive or negated slot,
    /// preserving insertion order within each slot.
    pub fn push(&mut self, query: Value, negate: bool) {
        if negate {
            self.must_not.push(query);
        } else {
            self.filter.push(query);
        }
    }

    /// Emit the branch as a bool query object.
    pub fn into_query(self) -> Value {
        json!({
            "bool": {
                "filter": self.filter,
                "must": self.must,
                "must_not": self.must_not,
                "should": self.should,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_branch_keeps_all_slots() {
        assert_eq!(
            BoolClauses::new().into_query(),
            json!({
                "bool": { "filter": [], "must": [], "must_not": [], "should": [] }
            })
        );
    }

    #[test]
    fn test_push_routes_by_negation() {
        let mut clauses = BoolClauses::new();
        clauses.push(json!({ "exists": { "field": "a" } }), false);
        clauses.push(json!({ "exists": { "field": "b" } }), true);
        clauses.push(json!({ "exists": { "field": "c" } }), false);

        assert_eq!(
            clauses.filter,
            vec![
                json!({ "exists": { "field": "a" } }),
                json!({ "exists": { "field": "c" } })
            ]
        );
        assert_eq!(clauses.must_not, vec![json!({ "exists": { "field": "b" } })]);
    }
}
