// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::{CatalogIndexSchema, SearchSchemaFieldRole};

use crate::ElasticsearchConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const FIELD_SUFFIX_KEYWORD: &str = "keyword";

const PRICE_SCALING_FACTOR: u32 = 100;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ElasticsearchIndexMappings {}

impl ElasticsearchIndexMappings {
    /// Settings and mappings of a new index for the given schema
    pub fn build_create_index_body(
        schema: &CatalogIndexSchema,
        config: &ElasticsearchConfig,
    ) -> serde_json::Value {
        serde_json::json!({
            "settings": {
                "number_of_shards": config.number_of_shards,
                "number_of_replicas": config.number_of_replicas,
                "refresh_interval": config.refresh_interval,
                "max_result_window": config.max_result_window,
                "analysis": Self::build_analysis_settings_json(config),
            },
            "mappings": Self::build_mappings_json(schema),
        })
    }

    pub fn build_analysis_settings_json(config: &ElasticsearchConfig) -> serde_json::Value {
        serde_json::json!({
            "filter": {
                "catalog_edge_ngram": {
                    "type": "edge_ngram",
                    "min_gram": config.autocomplete_min_gram,
                    "max_gram": config.autocomplete_max_gram,
                },
            },
            "analyzer": {
                "catalog_text": {
                    "type": "custom",
                    "tokenizer": "standard",
                    "filter": [
                        "lowercase",
                        "asciifolding",
                    ],
                },
                "catalog_autocomplete": {
                    "type": "custom",
                    "tokenizer": "standard",
                    "filter": [
                        "lowercase",
                        "asciifolding",
                        "catalog_edge_ngram",
                    ],
                },
            }
        })
    }

    pub fn build_mappings_json(schema: &CatalogIndexSchema) -> serde_json::Value {
        let properties = schema
            .fields
            .iter()
            .map(|field| {
                let field_mapping = match field.role {
                    SearchSchemaFieldRole::Text { keyword_subfield } => {
                        Self::map_text_field(keyword_subfield)
                    }

                    // Prefixes are indexed as edge n-grams, the query is not split into them
                    SearchSchemaFieldRole::Autocomplete => serde_json::json!({
                        "type": "text",
                        "analyzer": "catalog_autocomplete",
                        "search_analyzer": "catalog_text",
                    }),

                    SearchSchemaFieldRole::Keyword => serde_json::json!({
                        "type": "keyword"
                    }),

                    SearchSchemaFieldRole::Boolean => serde_json::json!({
                        "type": "boolean"
                    }),

                    SearchSchemaFieldRole::Integer => serde_json::json!({
                        "type": "long"
                    }),

                    SearchSchemaFieldRole::Float => serde_json::json!({
                        "type": "float"
                    }),

                    SearchSchemaFieldRole::Price => serde_json::json!({
                        "type": "scaled_float",
                        "scaling_factor": PRICE_SCALING_FACTOR,
                    }),

                    SearchSchemaFieldRole::DateTime => serde_json::json!({
                        "type": "date"
                    }),

                    SearchSchemaFieldRole::Object => serde_json::json!({
                        "type": "object",
                        "enabled": false
                    }),
                };

                (field.path.to_string(), field_mapping)
            })
            .collect::<serde_json::Map<_, _>>();

        serde_json::json!({
            "dynamic": false,
            "properties": properties,
        })
    }

    fn map_text_field(keyword_subfield: bool) -> serde_json::Value {
        let mut base_mapping = serde_json::json!({
            "type": "text",
            "analyzer": "catalog_text",
        });

        if keyword_subfield {
            base_mapping["fields"] = serde_json::json!({
                FIELD_SUFFIX_KEYWORD: {
                    "type": "keyword",
                    "ignore_above": 256
                }
            });
        }

        base_mapping
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
