// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use catalog_search::CatalogSearchService;

use super::Command;
use crate::{CLIError, CommandOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct HealthCommand {
    search_svc: Arc<dyn CatalogSearchService>,
}

impl HealthCommand {
    pub fn new(search_svc: Arc<dyn CatalogSearchService>) -> Self {
        Self { search_svc }
    }
}

#[async_trait::async_trait]
impl Command for HealthCommand {
    async fn run(&mut self) -> Result<CommandOutput, CLIError> {
        let report = self.search_svc.index_health().await?;
        CommandOutput::from_serializable(&report)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
