// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::{
    AggregationKind,
    AggregationResult,
    AggregationResults,
    AggregationSpec,
    RangeBucket,
    TermsBucket,
};
use serde_json::Value;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reads aggregation results back in terms of the requested specs.
/// Aggregations missing from the response are left out.
pub struct ElasticsearchAggregationsParser {}

impl ElasticsearchAggregationsParser {
    pub fn parse(
        specs: &[AggregationSpec],
        aggregations: Option<&serde_json::Map<String, Value>>,
    ) -> AggregationResults {
        let Some(aggregations) = aggregations else {
            return AggregationResults::new();
        };

        specs
            .iter()
            .filter_map(|spec| {
                let raw = aggregations.get(spec.name)?;
                let result = match &spec.kind {
                    AggregationKind::Terms { .. } => {
                        AggregationResult::Terms(Self::buckets(raw, |key, doc_count| TermsBucket {
                            key,
                            doc_count,
                        }))
                    }
                    AggregationKind::Range { .. } => {
                        AggregationResult::Range(Self::buckets(raw, |key, doc_count| RangeBucket {
                            key,
                            doc_count,
                        }))
                    }
                    AggregationKind::Avg { .. } => AggregationResult::Avg(raw["value"].as_f64()),
                };

                Some((spec.name.to_string(), result))
            })
            .collect()
    }

    fn buckets<B>(raw: &Value, make_bucket: impl Fn(String, u64) -> B) -> Vec<B> {
        raw["buckets"]
            .as_array()
            .map(|buckets| {
                buckets
                    .iter()
                    .map(|bucket| {
                        let key = match &bucket["key"] {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        make_bucket(key, bucket["doc_count"].as_u64().unwrap_or(0))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
