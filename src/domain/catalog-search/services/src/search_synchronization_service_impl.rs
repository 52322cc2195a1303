// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use catalog_search::*;
use database_common::PaginationOpts;
use internal_error::InternalError;

use crate::DocumentMapper;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SearchSynchronizationServiceImpl {
    config: Arc<CatalogSearchConfig>,
    product_repo: Arc<dyn CatalogProductRepository>,
    brand_repo: Arc<dyn CatalogBrandRepository>,
    product_index: Arc<dyn SearchIndexRepository<ProductDocument>>,
    brand_index: Arc<dyn SearchIndexRepository<BrandDocument>>,
    rebuild_guard: tokio::sync::Mutex<()>,
}

#[dill::component(pub)]
#[dill::interface(dyn SearchSynchronizationService)]
#[dill::scope(dill::Singleton)]
impl SearchSynchronizationServiceImpl {
    pub fn new(
        config: Arc<CatalogSearchConfig>,
        product_repo: Arc<dyn CatalogProductRepository>,
        brand_repo: Arc<dyn CatalogBrandRepository>,
        product_index: Arc<dyn SearchIndexRepository<ProductDocument>>,
        brand_index: Arc<dyn SearchIndexRepository<BrandDocument>>,
    ) -> Self {
        Self {
            config,
            product_repo,
            brand_repo,
            product_index,
            brand_index,
            rebuild_guard: tokio::sync::Mutex::new(()),
        }
    }

    async fn active_product_count(&self, brand_id: &BrandId) -> u64 {
        match self
            .product_repo
            .count_active_products_by_brand(brand_id)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(
                    %brand_id,
                    error = ?e,
                    error_msg = %e,
                    "Failed to count active products of brand, indexing it with zero products"
                );
                0
            }
        }
    }

    async fn upsert_brand(&self, brand: &Brand) -> Result<(), InternalError> {
        let product_count = self.active_product_count(&brand.id).await;
        let doc = DocumentMapper::brand_document(brand, product_count);

        self.brand_index.upsert(doc).await.inspect_err(|e| {
            tracing::error!(
                brand_id = %brand.id,
                error = ?e,
                error_msg = %e,
                "Failed to index brand"
            );
        })
    }

    async fn upsert_product(&self, product: &Product) -> Result<(), InternalError> {
        let doc = DocumentMapper::product_document(product);

        self.product_index.upsert(doc).await.inspect_err(|e| {
            tracing::error!(
                product_id = %product.id,
                error = ?e,
                error_msg = %e,
                "Failed to index product"
            );
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[common_macros::method_names_consts]
#[async_trait::async_trait]
impl SearchSynchronizationService for SearchSynchronizationServiceImpl {
    #[tracing::instrument(
        level = "info",
        name = SearchSynchronizationServiceImpl_sync_all_brands,
        skip_all
    )]
    async fn sync_all_brands(&self) -> Result<usize, SyncError> {
        let brands = self.brand_repo.list_all_brands().await.inspect_err(|e| {
            tracing::error!(error = ?e, error_msg = %e, "Failed to load brands from catalog");
        })?;

        tracing::info!(num_brands = brands.len(), "Synchronizing all brands");

        for brand in &brands {
            self.upsert_brand(brand).await?;
        }

        tracing::info!(num_synced = brands.len(), "Synchronized all brands");
        Ok(brands.len())
    }

    #[tracing::instrument(
        level = "info",
        name = SearchSynchronizationServiceImpl_sync_all_products,
        skip_all
    )]
    async fn sync_all_products(&self) -> Result<usize, SyncError> {
        let products = self.product_repo.list_all_products().await.inspect_err(|e| {
            tracing::error!(error = ?e, error_msg = %e, "Failed to load products from catalog");
        })?;

        tracing::info!(num_products = products.len(), "Synchronizing all products");

        for product in &products {
            self.upsert_product(product).await?;
        }

        tracing::info!(num_synced = products.len(), "Synchronized all products");
        Ok(products.len())
    }

    #[tracing::instrument(
        level = "info",
        name = SearchSynchronizationServiceImpl_sync_all,
        skip_all
    )]
    async fn sync_all(&self) -> Result<SyncSummary, SyncError> {
        let brands_synced = self.sync_all_brands().await?;
        let products_synced = self.sync_all_products().await?;

        Ok(SyncSummary {
            brands_synced,
            products_synced,
        })
    }

    #[tracing::instrument(
        level = "info",
        name = SearchSynchronizationServiceImpl_sync_all_products_batch,
        skip_all,
        fields(batch_size)
    )]
    async fn sync_all_products_batch(
        &self,
        batch_size: usize,
    ) -> Result<BatchSyncReport, SyncError> {
        let batch_size = match batch_size {
            0 => self.config.default_sync_batch_size,
            n => n,
        };

        let mut report = BatchSyncReport::default();
        let mut pagination = PaginationOpts::from_page(0, batch_size);

        loop {
            let page = self
                .product_repo
                .list_products_page(pagination)
                .await
                .inspect_err(|e| {
                    tracing::error!(
                        offset = pagination.offset,
                        error = ?e,
                        error_msg = %e,
                        "Failed to load product batch from catalog"
                    );
                })?;

            if page.is_empty() {
                break;
            }

            for product in &page {
                self.upsert_product(product).await?;
            }

            report.pages += 1;
            report.total_synced += page.len();

            tracing::info!(
                batch = report.pages,
                batch_len = page.len(),
                total_synced = report.total_synced,
                "Synchronized product batch"
            );

            // The page is released before the next one is fetched
            drop(page);
            pagination = pagination.next_page();
        }

        tracing::info!(
            num_batches = report.pages,
            num_synced = report.total_synced,
            "Synchronized all products in batches"
        );

        Ok(report)
    }

    #[tracing::instrument(
        level = "debug",
        name = SearchSynchronizationServiceImpl_sync_brand,
        skip_all,
        fields(brand_id = %brand.id)
    )]
    async fn sync_brand(&self, brand: &Brand) -> Result<(), SyncError> {
        Ok(self.upsert_brand(brand).await?)
    }

    #[tracing::instrument(
        level = "debug",
        name = SearchSynchronizationServiceImpl_sync_product,
        skip_all,
        fields(product_id = %product.id)
    )]
    async fn sync_product(&self, product: &Product) -> Result<(), SyncError> {
        Ok(self.upsert_product(product).await?)
    }

    #[tracing::instrument(
        level = "debug",
        name = SearchSynchronizationServiceImpl_sync_brand_by_id,
        skip_all,
        fields(%brand_id)
    )]
    async fn sync_brand_by_id(&self, brand_id: &BrandId) -> Result<SyncEntityOutcome, SyncError> {
        let Some(brand) = self.brand_repo.get_brand(brand_id).await? else {
            tracing::info!("Brand not found in catalog, nothing to synchronize");
            return Ok(SyncEntityOutcome::NotFoundInCatalog);
        };

        self.upsert_brand(&brand).await?;
        Ok(SyncEntityOutcome::Synced)
    }

    #[tracing::instrument(
        level = "debug",
        name = SearchSynchronizationServiceImpl_sync_product_by_id,
        skip_all,
        fields(%product_id)
    )]
    async fn sync_product_by_id(
        &self,
        product_id: &ProductId,
    ) -> Result<SyncEntityOutcome, SyncError> {
        let Some(product) = self.product_repo.get_product(product_id).await? else {
            tracing::info!("Product not found in catalog, nothing to synchronize");
            return Ok(SyncEntityOutcome::NotFoundInCatalog);
        };

        self.upsert_product(&product).await?;
        Ok(SyncEntityOutcome::Synced)
    }

    #[tracing::instrument(
        level = "info",
        name = SearchSynchronizationServiceImpl_delete_brand_from_index,
        skip_all,
        fields(%brand_id)
    )]
    async fn delete_brand_from_index(
        &self,
        brand_id: &BrandId,
    ) -> Result<CascadeDeleteReport, SyncError> {
        self.brand_index.delete(*brand_id).await.inspect_err(|e| {
            tracing::error!(error = ?e, error_msg = %e, "Failed to delete brand document");
        })?;

        let cap = self.config.cascade_delete_cap.min(MAX_SEARCH_RESULT_WINDOW);
        let listing_query = CatalogQueryBuilder::products_of_brand(*brand_id, cap);
        let listing = self.product_index.search(&listing_query).await?;

        for doc in &listing.hits {
            self.product_index.delete(doc.id).await.inspect_err(|e| {
                tracing::error!(
                    product_id = %doc.id,
                    error = ?e,
                    error_msg = %e,
                    "Failed to delete product document of brand"
                );
            })?;
        }

        let report = CascadeDeleteReport {
            products_deleted: listing.hits.len(),
            cap_reached: listing.total_hits > listing.hits.len() as u64,
        };

        if report.cap_reached {
            tracing::warn!(
                cap,
                total_products = listing.total_hits,
                "Cascade delete reached its cap, some product documents of the brand remain"
            );
        } else {
            tracing::info!(
                products_deleted = report.products_deleted,
                "Deleted brand with its product documents"
            );
        }

        Ok(report)
    }

    #[tracing::instrument(
        level = "info",
        name = SearchSynchronizationServiceImpl_delete_product_from_index,
        skip_all,
        fields(%product_id)
    )]
    async fn delete_product_from_index(&self, product_id: &ProductId) -> Result<(), SyncError> {
        self.product_index
            .delete(*product_id)
            .await
            .inspect_err(|e| {
                tracing::error!(error = ?e, error_msg = %e, "Failed to delete product document");
            })?;

        Ok(())
    }

    #[tracing::instrument(
        level = "info",
        name = SearchSynchronizationServiceImpl_rebuild_search_index,
        skip_all
    )]
    async fn rebuild_search_index(&self) -> Result<RebuildReport, SyncError> {
        let Ok(_rebuild_lock) = self.rebuild_guard.try_lock() else {
            tracing::warn!("Rejecting rebuild, another one is in progress");
            return Err(SyncError::RebuildInProgress);
        };

        tracing::info!("Rebuilding search indices");

        let brands_deleted = self.brand_index.delete_all().await?;
        let products_deleted = self.product_index.delete_all().await?;
        tracing::info!(brands_deleted, products_deleted, "Cleared search indices");

        let brands_synced = self.sync_all_brands().await?;
        let products_synced = self.sync_all_products().await?;

        tracing::info!(brands_synced, products_synced, "Rebuilt search indices");

        Ok(RebuildReport {
            brands_deleted,
            products_deleted,
            brands_synced,
            products_synced,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
