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

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogSearchConfig {
    /// Suggestion queries shorter than this are rejected
    pub suggestion_min_length: usize,

    /// Used when a suggestion request asks for no results
    pub default_suggestion_limit: usize,

    pub max_suggestion_limit: usize,

    /// At most this many product documents are deleted along with a brand
    pub cascade_delete_cap: usize,

    pub default_sync_batch_size: usize,
}

impl Default for CatalogSearchConfig {
    fn default() -> Self {
        Self {
            suggestion_min_length: 2,
            default_suggestion_limit: 10,
            max_suggestion_limit: 50,
            cascade_delete_cap: 1000,
            default_sync_batch_size: 100,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
