// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io::Write;

use assert_matches::assert_matches;
use catalog_search::CatalogSearchConfig;
use catalog_search_cli::{CLIConfig, CLIError};
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_empty_config_selects_defaults() {
    let config = CLIConfig::from_yaml_str("").unwrap();

    assert_eq!(CatalogSearchConfig::default(), config.search);
    assert!(config.elasticsearch.is_none());
    assert!(config.database.is_none());
}

#[test]
fn test_partial_sections_keep_defaults() {
    let yaml = [
        "search:",
        "  suggestionMinLength: 3",
        "  cascadeDeleteCap: 500",
        "elasticsearch:",
        "  url: http://search.internal:9200",
        "  indexPrefix: staging-",
        "database:",
        "  host: db.internal",
        "  databaseName: catalog",
        "  user: catalog_reader",
        "  password: hunter2",
    ]
    .join("\n");

    let config = CLIConfig::from_yaml_str(&yaml).unwrap();

    assert_eq!(
        CatalogSearchConfig {
            suggestion_min_length: 3,
            cascade_delete_cap: 500,
            ..CatalogSearchConfig::default()
        },
        config.search
    );

    let es_config = config.elasticsearch.unwrap();
    assert_eq!("http://search.internal:9200", es_config.url);
    assert_eq!("staging-products", es_config.index_name("products"));
    assert_eq!(30, es_config.timeout_secs);
    assert_eq!(None, es_config.password);

    let db_settings = config.database.unwrap();
    assert_eq!("db.internal", db_settings.host);
    assert_eq!(5432, db_settings.port());
    assert_eq!(10, db_settings.max_connections);
}

#[test]
fn test_unknown_section_is_rejected() {
    let res = CLIConfig::from_yaml_str("elastic:\n  url: http://localhost:9200\n");
    assert_matches!(res, Err(CLIError::UsageError { .. }));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "search:\n  maxSuggestionLimit: 25").unwrap();

    let config = CLIConfig::load(Some(file.path())).unwrap();
    assert_eq!(25, config.search.max_suggestion_limit);

    let config = CLIConfig::load(None).unwrap();
    assert_eq!(50, config.search.max_suggestion_limit);
}

#[test]
fn test_missing_file_is_a_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let res = CLIConfig::load(Some(temp_dir.path().join("absent.yaml").as_path()));

    assert_matches!(res, Err(CLIError::UsageError { .. }));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
