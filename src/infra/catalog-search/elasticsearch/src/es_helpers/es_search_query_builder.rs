// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::*;

use super::FIELD_SUFFIX_KEYWORD;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Field every document carries, used to make the order of equally ranked
/// hits stable across pages
const TIE_BREAKER_FIELD: &str = "id";

pub struct ElasticsearchQueryBuilder {}

impl ElasticsearchQueryBuilder {
    pub fn build_search_query(
        schema: &CatalogIndexSchema,
        query: &CatalogSearchQuery,
    ) -> serde_json::Value {
        let mut query_json = serde_json::json!({
            "query": Self::query_argument(schema, query.text.as_ref(), &query.filter),
            "sort": Self::sort_argument(schema, &query.sort),
            "from": query.page.offset,
            "size": query.page.limit,
            "track_total_hits": true,
        });

        if !query.aggregations.is_empty() {
            query_json["aggs"] = Self::aggregations_argument(schema, &query.aggregations);
        }

        query_json
    }

    fn query_argument(
        schema: &CatalogIndexSchema,
        text: Option<&TextQuery>,
        filter: &SearchFilterExpr,
    ) -> serde_json::Value {
        let filter_json = match filter {
            SearchFilterExpr::MatchAll => None,
            _ => Some(Self::filter(schema, filter)),
        };

        let mut bool_json = serde_json::Map::new();

        match text {
            None => {
                bool_json.insert("must".into(), serde_json::json!({ "match_all": {} }));
            }
            Some(text @ TextQuery::MultiMatch(multi_match))
                if multi_match.mode == TextMatchMode::Lenient =>
            {
                // The text only ranks, documents that miss it still match
                bool_json.insert(
                    "should".into(),
                    serde_json::json!([Self::text_query(text), { "match_all": {} }]),
                );
                bool_json.insert("minimum_should_match".into(), serde_json::json!(1));
            }
            Some(text) => {
                bool_json.insert("must".into(), Self::text_query(text));
            }
        }

        if let Some(filter_json) = filter_json {
            bool_json.insert("filter".into(), filter_json);
        }

        serde_json::json!({ "bool": bool_json })
    }

    fn text_query(text: &TextQuery) -> serde_json::Value {
        match text {
            TextQuery::MultiMatch(multi_match) => {
                let fields = multi_match
                    .policy
                    .specs
                    .iter()
                    .map(|spec| format!("{}^{}", spec.field_name, spec.boost))
                    .collect::<Vec<_>>();

                let mut multi_match_json = serde_json::json!({
                    "query": multi_match.query.trim(),
                    "fields": fields,
                    "type": "best_fields",
                    "operator": match multi_match.operator {
                        TextOperator::And => "and",
                        TextOperator::Or => "or",
                    },
                });

                if multi_match.fuzzy {
                    multi_match_json["fuzziness"] = serde_json::json!("AUTO");
                }

                serde_json::json!({ "multi_match": multi_match_json })
            }

            TextQuery::PhrasePrefix { field, prefix } => serde_json::json!({
                "match_phrase_prefix": {
                    *field: {
                        "query": prefix,
                    }
                }
            }),

            TextQuery::MoreLikeThis { fields, like } => serde_json::json!({
                "more_like_this": {
                    "fields": fields,
                    "like": like,
                    "min_term_freq": 1,
                    "min_doc_freq": 1,
                }
            }),
        }
    }

    /// Exact-value operations on analyzed text go to its keyword sub-field
    fn exact_value_field(schema: &CatalogIndexSchema, field: &str) -> String {
        match schema.find_field(field).map(|f| f.role) {
            Some(SearchSchemaFieldRole::Text {
                keyword_subfield: true,
            }) => format!("{field}.{FIELD_SUFFIX_KEYWORD}"),
            _ => field.to_string(),
        }
    }

    fn filter(schema: &CatalogIndexSchema, filter_expr: &SearchFilterExpr) -> serde_json::Value {
        match filter_expr {
            SearchFilterExpr::MatchAll => serde_json::json!({ "match_all": {} }),

            SearchFilterExpr::Field { field, op } => {
                let field = Self::exact_value_field(schema, field);
                match op {
                    SearchFilterOp::Eq(value) => serde_json::json!({
                        "term": { field: value }
                    }),

                    SearchFilterOp::Ne(value) => serde_json::json!({
                        "bool": {
                            "must_not": {
                                "term": { field: value }
                            }
                        }
                    }),

                    SearchFilterOp::Lt(value) => Self::range(&field, "lt", value),
                    SearchFilterOp::Lte(value) => Self::range(&field, "lte", value),
                    SearchFilterOp::Gt(value) => Self::range(&field, "gt", value),
                    SearchFilterOp::Gte(value) => Self::range(&field, "gte", value),

                    SearchFilterOp::In(values) => serde_json::json!({
                        "terms": { field: values }
                    }),

                    SearchFilterOp::Prefix(prefix) => serde_json::json!({
                        "prefix": { field: prefix }
                    }),

                    SearchFilterOp::Exists => serde_json::json!({
                        "exists": { "field": field }
                    }),
                }
            }

            SearchFilterExpr::And(operands) => {
                let parts = operands
                    .iter()
                    .filter(|operand| **operand != SearchFilterExpr::MatchAll)
                    .map(|operand| Self::filter(schema, operand))
                    .collect::<Vec<_>>();
                serde_json::json!({
                    "bool": {
                        "must": parts
                    },
                })
            }

            SearchFilterExpr::Or(operands) => {
                let parts = operands
                    .iter()
                    .map(|operand| Self::filter(schema, operand))
                    .collect::<Vec<_>>();
                serde_json::json!({
                    "bool": {
                        "should": parts,
                        "minimum_should_match": 1,
                    },
                })
            }

            SearchFilterExpr::Not(operand) => serde_json::json!({
                "bool": {
                    "must_not": Self::filter(schema, operand),
                },
            }),
        }
    }

    fn range(field: &str, op: &str, value: &serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "range": {
                field: {
                    op: value
                }
            }
        })
    }

    fn sort_argument(
        schema: &CatalogIndexSchema,
        sort_specs: &[SearchSortSpec],
    ) -> serde_json::Value {
        fn relevance_sort() -> serde_json::Value {
            serde_json::json!({"_score": {"order": "desc"}})
        }

        let mut parts = sort_specs
            .iter()
            .map(|sort_part| match sort_part {
                SearchSortSpec::Relevance => relevance_sort(),
                SearchSortSpec::ByField { field, direction } => {
                    let sort_field = Self::exact_value_field(schema, field);
                    serde_json::json!({
                        sort_field: {
                            "order": match direction {
                                SortDirection::Ascending => "asc",
                                SortDirection::Descending => "desc",
                            },
                            "missing": "_last",
                            "unmapped_type": "keyword",
                        }
                    })
                }
            })
            .collect::<Vec<_>>();

        if parts.is_empty() {
            parts.push(relevance_sort());
        }
        parts.push(serde_json::json!({ TIE_BREAKER_FIELD: { "order": "asc" } }));

        serde_json::Value::Array(parts)
    }

    fn aggregations_argument(
        schema: &CatalogIndexSchema,
        aggregations: &[AggregationSpec],
    ) -> serde_json::Value {
        let aggs = aggregations
            .iter()
            .map(|spec| {
                let agg_json = match &spec.kind {
                    AggregationKind::Terms { field, size } => serde_json::json!({
                        "terms": {
                            "field": Self::exact_value_field(schema, field),
                            "size": size,
                        }
                    }),

                    AggregationKind::Avg { field } => serde_json::json!({
                        "avg": { "field": field }
                    }),

                    AggregationKind::Range { field, ranges } => {
                        let ranges = ranges
                            .iter()
                            .map(|bound| {
                                let mut range_json = serde_json::json!({ "key": bound.key });
                                if let Some(from) = bound.from {
                                    range_json["from"] = serde_json::json!(from);
                                }
                                if let Some(to) = bound.to {
                                    range_json["to"] = serde_json::json!(to);
                                }
                                range_json
                            })
                            .collect::<Vec<_>>();

                        serde_json::json!({
                            "range": {
                                "field": field,
                                "ranges": ranges,
                            }
                        })
                    }
                };

                (spec.name.to_string(), agg_json)
            })
            .collect::<serde_json::Map<_, _>>();

        serde_json::Value::Object(aggs)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
