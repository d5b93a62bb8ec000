use crate::{
    clauses::BoolClauses,
    error::{CompileError, Result},
};
use model::{Filter, FilterEntry, FilterParams, FilterType};
use serde_json::{Value, json};
use tracing::warn;

/// Compile an OR filter into a flat boolean should clause.
///
/// Each top-level entry of the filter's params becomes one branch of the
/// `should` array: a single filter is a one-element AND group, a group entry
/// ANDs its members into the branch's `filter`/`must_not` lists, and nested
/// OR filters are compiled recursively before insertion. Disabled filters
/// are dropped at every depth; order is preserved everywhere else.
///
/// The input is never mutated. The returned filter carries the compiled
/// query, a copy of the input meta with params replaced by the flattened
/// list of enabled sub-filters, and the `$state` envelope unchanged.
pub fn compile_or_filter(filter: &Filter) -> Result<Filter> {
    if filter.meta.filter_type != FilterType::Or {
        warn!(
            filter_type = %filter.meta.filter_type,
            "refusing to compile a non-OR filter"
        );
        return Err(CompileError::UnexpectedFilterType(filter.meta.filter_type));
    }
    let (query, flattened) = compile_should_clause(or_entries(filter)?)?;

    let mut meta = filter.meta.clone();
    meta.params = Some(FilterParams::Entries(
        flattened.into_iter().map(FilterEntry::Filter).collect(),
    ));
    Ok(Filter {
        meta,
        query: Some(query),
        state: filter.state.clone(),
    })
}

fn or_entries(filter: &Filter) -> Result<&[FilterEntry]> {
    match filter.meta.params.as_ref() {
        Some(FilterParams::Entries(entries)) => Ok(entries),
        _ => {
            warn!("OR filter params is not an entry list");
            Err(CompileError::MalformedParams)
        }
    }
}

/// One branch per top-level entry, in input order. Also returns the
/// flattened list of enabled sub-filters for the preserved params.
fn compile_should_clause(entries: &[FilterEntry]) -> Result<(Value, Vec<Filter>)> {
    let mut should = Vec::with_capacity(entries.len());
    let mut flattened = Vec::new();

    for entry in entries {
        let mut branch = Vec::new();
        collect_enabled(entry, &mut branch);

        let mut clauses = BoolClauses::new();
        for item in branch.iter().copied() {
            clauses.push(compiled_query(item)?, item.is_negated());
        }
        should.push(clauses.into_query());
        flattened.extend(branch.into_iter().cloned());
    }

    let query = json!({ "bool": { "should": should, "minimum_should_match": 1 } });
    Ok((query, flattened))
}

/// Disabled filters are invisible at any depth; members of nested groups
/// join the same AND branch in input order.
fn collect_enabled<'a>(entry: &'a FilterEntry, out: &mut Vec<&'a Filter>) {
    match entry {
        FilterEntry::Filter(filter) => {
            if !filter.is_disabled() {
                out.push(filter);
            }
        }
        FilterEntry::Group(entries) => {
            for entry in entries {
                collect_enabled(entry, out);
            }
        }
    }
}

/// The query fragment one enabled sub-filter contributes to its branch.
/// Nested OR filters compile to their own should clause; anything else must
/// already carry a compiled single-key query.
fn compiled_query(item: &Filter) -> Result<Value> {
    if item.is_or() {
        let (query, _) = compile_should_clause(or_entries(item)?)?;
        return Ok(query);
    }
    item.query.clone().ok_or_else(|| {
        warn!(
            filter_type = %item.meta.filter_type,
            "sub-filter carries no compiled query"
        );
        CompileError::MissingQuery(item.meta.filter_type)
    })
}
