// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Deserialize;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ELASTICSEARCH_DEFAULT_URL: &str = "http://localhost:9200";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElasticsearchConfig {
    pub url: String,

    /// Password of the `elastic` user, requests are anonymous without it
    pub password: Option<String>,

    /// Prepended to every index name
    pub index_prefix: String,

    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,

    // Settings of newly created indices
    pub number_of_shards: u32,
    pub number_of_replicas: u32,
    pub refresh_interval: String,
    pub max_result_window: usize,

    /// Shortest prefix that autocomplete fields can be matched by
    pub autocomplete_min_gram: u32,
    pub autocomplete_max_gram: u32,
}

impl ElasticsearchConfig {
    pub fn index_name(&self, name: &str) -> String {
        format!("{}{name}", self.index_prefix)
    }
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            url: ELASTICSEARCH_DEFAULT_URL.to_string(),
            password: None,
            index_prefix: String::new(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            number_of_shards: 1,
            number_of_replicas: 0,
            refresh_interval: "1s".to_string(),
            max_result_window: 10_000,
            autocomplete_min_gram: 2,
            autocomplete_max_gram: 20,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
