// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search_cli::{CLIConfig, configure_catalog};
use catalog_search_elasticsearch::ElasticsearchConfig;
use database_common::DatabaseConnectionSettings;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_di_graph_validates_in_memory() {
    test_di_graph_validates(CLIConfig::default());
}

#[test_log::test(tokio::test)]
async fn test_di_graph_validates_elasticsearch_and_postgres() {
    test_di_graph_validates(CLIConfig {
        elasticsearch: Some(ElasticsearchConfig::default()),
        database: Some(DatabaseConnectionSettings::new("localhost", "catalog")),
        ..CLIConfig::default()
    });
}

fn test_di_graph_validates(config: CLIConfig) {
    // Neither the pool nor the search client connect before first use
    let mut catalog_builder = configure_catalog(&config).unwrap();

    let validate_result = catalog_builder.validate();

    assert!(
        validate_result.is_ok(),
        "{}",
        validate_result.err().unwrap()
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
