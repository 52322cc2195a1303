// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use serde::Serialize;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Keeps the search index consistent with the relational catalog. The
/// catalog is only read.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait SearchSynchronizationService: Send + Sync {
    /// Upserts every brand. The first failure aborts the pass.
    async fn sync_all_brands(&self) -> Result<usize, SyncError>;

    /// Upserts every product. The first failure aborts the pass.
    async fn sync_all_products(&self) -> Result<usize, SyncError>;

    /// Brands first, then products
    async fn sync_all(&self) -> Result<SyncSummary, SyncError>;

    /// Upserts products page by page, so that only one page is held in
    /// memory. A zero batch size selects the configured default.
    async fn sync_all_products_batch(&self, batch_size: usize)
    -> Result<BatchSyncReport, SyncError>;

    async fn sync_brand(&self, brand: &Brand) -> Result<(), SyncError>;

    async fn sync_product(&self, product: &Product) -> Result<(), SyncError>;

    async fn sync_brand_by_id(&self, brand_id: &BrandId) -> Result<SyncEntityOutcome, SyncError>;

    async fn sync_product_by_id(
        &self,
        product_id: &ProductId,
    ) -> Result<SyncEntityOutcome, SyncError>;

    /// Deletes the brand document and the product documents of this brand
    async fn delete_brand_from_index(
        &self,
        brand_id: &BrandId,
    ) -> Result<CascadeDeleteReport, SyncError>;

    async fn delete_product_from_index(&self, product_id: &ProductId) -> Result<(), SyncError>;

    /// Clears both indices and synchronizes everything again. A failure
    /// leaves the indices partially rebuilt.
    async fn rebuild_search_index(&self) -> Result<RebuildReport, SyncError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub brands_synced: usize,
    pub products_synced: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSyncReport {
    /// Non-empty pages that were synchronized
    pub pages: usize,
    pub total_synced: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeDeleteReport {
    pub products_deleted: usize,
    /// More product documents may remain for this brand
    pub cap_reached: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebuildReport {
    pub brands_deleted: u64,
    pub products_deleted: u64,
    pub brands_synced: usize,
    pub products_synced: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncEntityOutcome {
    Synced,
    NotFoundInCatalog,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Search index rebuild is already in progress")]
    RebuildInProgress,

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
