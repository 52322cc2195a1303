// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use catalog_search::{BrandId, ProductId, SearchSynchronizationService};
use serde_json::json;

use super::Command;
use crate::{CLIError, CommandOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DeleteBrandCommand {
    sync_svc: Arc<dyn SearchSynchronizationService>,
    brand_id: BrandId,
}

impl DeleteBrandCommand {
    pub fn new(sync_svc: Arc<dyn SearchSynchronizationService>, brand_id: BrandId) -> Self {
        Self { sync_svc, brand_id }
    }
}

#[async_trait::async_trait]
impl Command for DeleteBrandCommand {
    fn needs_indices(&self) -> bool {
        true
    }

    async fn run(&mut self) -> Result<CommandOutput, CLIError> {
        let report = self.sync_svc.delete_brand_from_index(&self.brand_id).await?;

        if report.cap_reached {
            tracing::warn!(
                brand_id = %self.brand_id,
                products_deleted = report.products_deleted,
                "Cascade delete stopped at the cap, product documents may remain"
            );
        }

        CommandOutput::from_serializable(&report)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DeleteProductCommand {
    sync_svc: Arc<dyn SearchSynchronizationService>,
    product_id: ProductId,
}

impl DeleteProductCommand {
    pub fn new(sync_svc: Arc<dyn SearchSynchronizationService>, product_id: ProductId) -> Self {
        Self {
            sync_svc,
            product_id,
        }
    }
}

#[async_trait::async_trait]
impl Command for DeleteProductCommand {
    fn needs_indices(&self) -> bool {
        true
    }

    async fn run(&mut self) -> Result<CommandOutput, CLIError> {
        self.sync_svc
            .delete_product_from_index(&self.product_id)
            .await?;

        Ok(CommandOutput::new(json!({ "deleted": self.product_id })))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
