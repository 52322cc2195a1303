// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use catalog_search::{BrandId, CatalogSearchService};

use super::Command;
use crate::{CLIError, CommandOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct AnalyticsCommand {
    search_svc: Arc<dyn CatalogSearchService>,
    query: Option<String>,
    brand_ids: Option<Vec<BrandId>>,
    categories: Option<Vec<String>>,
}

impl AnalyticsCommand {
    pub fn new(
        search_svc: Arc<dyn CatalogSearchService>,
        query: Option<String>,
        brand_ids: Vec<BrandId>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            search_svc,
            query,
            brand_ids: (!brand_ids.is_empty()).then_some(brand_ids),
            categories: (!categories.is_empty()).then_some(categories),
        }
    }
}

#[async_trait::async_trait]
impl Command for AnalyticsCommand {
    async fn run(&mut self) -> Result<CommandOutput, CLIError> {
        let analytics = self
            .search_svc
            .get_search_analytics(
                self.query.clone(),
                self.brand_ids.clone(),
                self.categories.clone(),
            )
            .await;

        CommandOutput::from_serializable(&analytics)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
