// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use catalog_search::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Null values count as missing
pub(crate) fn field_value<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for part in path.split('.') {
        current = current.get(part)?;
    }

    (!current.is_null()).then_some(current)
}

/// Arrays match element-wise, like multi-valued index fields do
fn any_element(value: &Value, mut predicate: impl FnMut(&Value) -> bool) -> bool {
    match value {
        Value::Array(items) => items.iter().any(predicate),
        single => predicate(single),
    }
}

fn elements(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().filter(|v| !v.is_null()).collect(),
        single => vec![single],
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Filters
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn filter_matches(doc: &Value, filter: &SearchFilterExpr) -> bool {
    match filter {
        SearchFilterExpr::MatchAll => true,
        SearchFilterExpr::Field { field, op } => op_matches(field_value(doc, field), op),
        SearchFilterExpr::And(clauses) => clauses.iter().all(|c| filter_matches(doc, c)),
        SearchFilterExpr::Or(clauses) => clauses.iter().any(|c| filter_matches(doc, c)),
        SearchFilterExpr::Not(clause) => !filter_matches(doc, clause),
    }
}

fn op_matches(value: Option<&Value>, op: &SearchFilterOp) -> bool {
    match op {
        SearchFilterOp::Exists => {
            value.is_some_and(|v| !matches!(v, Value::Array(items) if items.is_empty()))
        }
        SearchFilterOp::Eq(expected) => equals_any(value, std::slice::from_ref(expected)),
        SearchFilterOp::Ne(expected) => !equals_any(value, std::slice::from_ref(expected)),
        SearchFilterOp::In(expected) => equals_any(value, expected),
        SearchFilterOp::Lt(bound) => compares(value, bound, Ordering::is_lt),
        SearchFilterOp::Lte(bound) => compares(value, bound, Ordering::is_le),
        SearchFilterOp::Gt(bound) => compares(value, bound, Ordering::is_gt),
        SearchFilterOp::Gte(bound) => compares(value, bound, Ordering::is_ge),
        SearchFilterOp::Prefix(prefix) => value.is_some_and(|v| {
            any_element(v, |e| e.as_str().is_some_and(|s| s.starts_with(prefix.as_str())))
        }),
    }
}

fn equals_any(value: Option<&Value>, expected: &[Value]) -> bool {
    value.is_some_and(|v| {
        any_element(v, |e| {
            expected
                .iter()
                .any(|x| compare_values(e, x) == Some(Ordering::Equal))
        })
    })
}

fn compares(value: Option<&Value>, bound: &Value, accept: fn(Ordering) -> bool) -> bool {
    value.is_some_and(|v| any_element(v, |e| compare_values(e, bound).is_some_and(accept)))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

enum Numeric {
    Exact(Decimal),
    Float(f64),
}

impl Numeric {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Numeric::Float),
            Value::String(s) => Decimal::from_str(s.trim()).ok().map(Numeric::Exact),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Exact(d) => d.to_f64(),
            Numeric::Float(f) => Some(*f),
        }
    }
}

/// Decimal strings compare exactly with each other and numerically with
/// numbers. Other strings compare as they are stored.
pub(crate) fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => match (Numeric::of(a), Numeric::of(b)) {
            (Some(Numeric::Exact(a)), Some(Numeric::Exact(b))) => Some(a.cmp(&b)),
            (Some(a), Some(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
            _ => match (a, b) {
                (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
                _ => None,
            },
        },
    }
}

pub(crate) fn numeric_value(value: &Value) -> Option<f64> {
    Numeric::of(value)?.as_f64()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Text
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn field_tokens(doc: &Value, field: &str) -> Vec<String> {
    field_value(doc, field)
        .map(|v| {
            elements(v)
                .into_iter()
                .filter_map(Value::as_str)
                .flat_map(tokenize)
                .collect()
        })
        .unwrap_or_default()
}

/// Edit distance allowed for a term of the given length
fn auto_fuzziness(term: &str) -> usize {
    match term.chars().count() {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut current = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        previous = current;
    }

    previous[b.len()]
}

fn term_matches(term: &str, token: &str, fuzzy: bool, prefix: bool) -> bool {
    if prefix && token.starts_with(term) {
        return true;
    }

    term == token || (fuzzy && edit_distance(term, token) <= auto_fuzziness(term))
}

/// Returns the relevance score, or `None` when the document does not match
pub(crate) fn text_score(
    schema: &CatalogIndexSchema,
    doc: &Value,
    text: Option<&TextQuery>,
) -> Option<f32> {
    match text {
        None => Some(1.0),
        Some(TextQuery::MultiMatch(multi_match)) => multi_match_score(schema, doc, multi_match),
        Some(TextQuery::PhrasePrefix { field, prefix }) => {
            phrase_prefix_matches(doc, field, prefix).then_some(1.0)
        }
        Some(TextQuery::MoreLikeThis { fields, like }) => more_like_this_score(doc, fields, like),
    }
}

fn multi_match_score(
    schema: &CatalogIndexSchema,
    doc: &Value,
    multi_match: &MultiMatchQuery,
) -> Option<f32> {
    let terms = tokenize(&multi_match.query);
    if terms.is_empty() {
        return Some(1.0);
    }

    let fields: Vec<_> = multi_match
        .policy
        .specs
        .iter()
        .map(|spec| {
            let is_autocomplete = schema
                .find_field(spec.field_name)
                .is_some_and(|f| f.role == SearchSchemaFieldRole::Autocomplete);
            (spec.boost, is_autocomplete, field_tokens(doc, spec.field_name))
        })
        .collect();

    let mut score = 0.0;
    let mut matched_terms = 0;

    for term in &terms {
        let mut term_matched = false;
        for (boost, is_autocomplete, tokens) in &fields {
            if tokens
                .iter()
                .any(|t| term_matches(term, t, multi_match.fuzzy, *is_autocomplete))
            {
                score += *boost;
                term_matched = true;
            }
        }
        if term_matched {
            matched_terms += 1;
        }
    }

    let is_match = match multi_match.operator {
        TextOperator::And => matched_terms == terms.len(),
        TextOperator::Or => matched_terms > 0,
    };

    match (multi_match.mode, is_match) {
        (_, true) => Some(score),
        (TextMatchMode::Lenient, false) => Some(0.0),
        (TextMatchMode::Strict, false) => None,
    }
}

fn phrase_prefix_matches(doc: &Value, field: &str, prefix: &str) -> bool {
    let mut leading = tokenize(prefix);
    let Some(last) = leading.pop() else {
        return false;
    };

    let tokens = field_tokens(doc, field);
    if tokens.len() <= leading.len() {
        return false;
    }

    tokens.windows(leading.len() + 1).any(|window| {
        window[..leading.len()] == leading[..] && window[leading.len()].starts_with(&last)
    })
}

fn more_like_this_score(doc: &Value, fields: &[SearchFieldPath], like: &str) -> Option<f32> {
    let like_terms: HashSet<String> = tokenize(like).into_iter().collect();

    let doc_terms: HashSet<String> = fields
        .iter()
        .flat_map(|field| field_tokens(doc, field))
        .collect();

    let shared = like_terms.intersection(&doc_terms).count();

    #[allow(clippy::cast_precision_loss)]
    let score = shared as f32;

    (shared > 0).then_some(score)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) struct ScoredDocument<'a> {
    pub id: uuid::Uuid,
    pub source: &'a Value,
    pub score: f32,
}

pub(crate) fn compare_scored(
    a: &ScoredDocument<'_>,
    b: &ScoredDocument<'_>,
    sort: &[SearchSortSpec],
) -> Ordering {
    let relevance = [SearchSortSpec::Relevance];
    let sort = if sort.is_empty() { &relevance[..] } else { sort };

    sort.iter()
        .map(|spec| match spec {
            SearchSortSpec::Relevance => b.score.total_cmp(&a.score),
            SearchSortSpec::ByField { field, direction } => {
                compare_field(a.source, b.source, field, *direction)
            }
        })
        .find(|o| o.is_ne())
        .unwrap_or_else(|| a.id.cmp(&b.id))
}

/// Documents without the field go last in either direction
fn compare_field(a: &Value, b: &Value, field: &str, direction: SortDirection) -> Ordering {
    match (sort_key(a, field), sort_key(b, field)) {
        (Some(a), Some(b)) => {
            let ordering = compare_values(a, b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_key<'a>(doc: &'a Value, field: &str) -> Option<&'a Value> {
    field_value(doc, field).and_then(|v| elements(v).into_iter().next())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Aggregations
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn aggregate(
    matched: &[ScoredDocument<'_>],
    specs: &[AggregationSpec],
) -> AggregationResults {
    specs
        .iter()
        .map(|spec| {
            let result = match &spec.kind {
                AggregationKind::Terms { field, size } => {
                    AggregationResult::Terms(terms_buckets(matched, field, *size))
                }
                AggregationKind::Avg { field } => AggregationResult::Avg(average(matched, field)),
                AggregationKind::Range { field, ranges } => {
                    AggregationResult::Range(range_buckets(matched, field, ranges))
                }
            };
            (spec.name.to_string(), result)
        })
        .collect()
}

fn terms_buckets(matched: &[ScoredDocument<'_>], field: &str, size: usize) -> Vec<TermsBucket> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();

    for doc in matched {
        let Some(value) = field_value(doc.source, field) else {
            continue;
        };

        let keys: HashSet<String> = elements(value)
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        for key in keys {
            *counts.entry(key).or_default() += 1;
        }
    }

    let mut buckets: Vec<_> = counts
        .into_iter()
        .map(|(key, doc_count)| TermsBucket { key, doc_count })
        .collect();

    // Stable sort keeps the keys ordered within equal counts
    buckets.sort_by(|a, b| b.doc_count.cmp(&a.doc_count));
    buckets.truncate(size);
    buckets
}

fn numeric_values<'a>(doc: &'a Value, field: &str) -> impl Iterator<Item = f64> + 'a {
    field_value(doc, field)
        .map(elements)
        .unwrap_or_default()
        .into_iter()
        .filter_map(numeric_value)
}

fn average(matched: &[ScoredDocument<'_>], field: &str) -> Option<f64> {
    let (sum, count) = matched
        .iter()
        .flat_map(|doc| numeric_values(doc.source, field))
        .fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / f64::from(count))
}

fn range_buckets(
    matched: &[ScoredDocument<'_>],
    field: &str,
    ranges: &[RangeBound],
) -> Vec<RangeBucket> {
    ranges
        .iter()
        .map(|range| RangeBucket {
            key: range.key.to_string(),
            doc_count: matched
                .iter()
                .filter(|doc| numeric_values(doc.source, field).any(|v| range.contains(v)))
                .count() as u64,
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
