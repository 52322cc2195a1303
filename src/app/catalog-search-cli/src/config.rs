// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;

use catalog_search::CatalogSearchConfig;
use catalog_search_elasticsearch::ElasticsearchConfig;
use database_common::DatabaseConnectionSettings;
use serde::Deserialize;

use crate::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const CONFIG_PATH_ENV_VAR: &str = "CATALOG_SEARCH_CONFIG";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CLIConfig {
    /// Search behavior
    pub search: CatalogSearchConfig,

    /// Search index cluster, an in-memory index is used when absent
    pub elasticsearch: Option<ElasticsearchConfig>,

    /// Catalog store, an in-memory store is used when absent
    pub database: Option<DatabaseConnectionSettings>,
}

impl CLIConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CLIError> {
        // An empty document deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(CLIError::usage_error_from)
    }

    pub fn load(path: Option<&Path>) -> Result<Self, CLIError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let yaml = std::fs::read_to_string(path).map_err(|e| {
            CLIError::usage_error(format!(
                "Cannot read config file {}: {e}",
                path.display()
            ))
        })?;

        Self::from_yaml_str(&yaml)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
