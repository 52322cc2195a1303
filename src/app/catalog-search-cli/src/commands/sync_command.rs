// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use catalog_search::{BrandId, ProductId, SearchSynchronizationService, SyncEntityOutcome};
use serde_json::json;

use super::Command;
use crate::{CLIError, CommandOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTarget {
    AllBrands,
    AllProducts,
    Everything,
    ProductsInBatches { batch_size: usize },
    Brand(BrandId),
    Product(ProductId),
}

pub struct SyncCommand {
    sync_svc: Arc<dyn SearchSynchronizationService>,
    target: SyncTarget,
}

impl SyncCommand {
    pub fn new(sync_svc: Arc<dyn SearchSynchronizationService>, target: SyncTarget) -> Self {
        Self { sync_svc, target }
    }

    fn entity_outcome(kind: &str, id: uuid::Uuid, outcome: SyncEntityOutcome) -> CommandOutput {
        CommandOutput::new(json!({
            "entity": kind,
            "id": id,
            "outcome": outcome,
        }))
    }
}

#[async_trait::async_trait]
impl Command for SyncCommand {
    fn needs_indices(&self) -> bool {
        true
    }

    async fn run(&mut self) -> Result<CommandOutput, CLIError> {
        match self.target {
            SyncTarget::AllBrands => {
                let brands_synced = self.sync_svc.sync_all_brands().await?;
                Ok(CommandOutput::new(json!({ "brandsSynced": brands_synced })))
            }
            SyncTarget::AllProducts => {
                let products_synced = self.sync_svc.sync_all_products().await?;
                Ok(CommandOutput::new(
                    json!({ "productsSynced": products_synced }),
                ))
            }
            SyncTarget::Everything => {
                let summary = self.sync_svc.sync_all().await?;
                CommandOutput::from_serializable(&summary)
            }
            SyncTarget::ProductsInBatches { batch_size } => {
                let report = self.sync_svc.sync_all_products_batch(batch_size).await?;
                CommandOutput::from_serializable(&report)
            }
            SyncTarget::Brand(brand_id) => {
                let outcome = self.sync_svc.sync_brand_by_id(&brand_id).await?;
                Ok(Self::entity_outcome("brand", brand_id, outcome))
            }
            SyncTarget::Product(product_id) => {
                let outcome = self.sync_svc.sync_product_by_id(&product_id).await?;
                Ok(Self::entity_outcome("product", product_id, outcome))
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
