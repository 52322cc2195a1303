// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use catalog_search::*;
use catalog_search_inmem::*;
use database_common::PaginationOpts;
use internal_error::InternalError;
use tokio::sync::Notify;
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Product index that is unreachable, remembering what was attempted
pub(crate) struct UnreachableProductIndex {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl UnreachableProductIndex {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn fail<T>(&self, call: &str) -> Result<T, InternalError> {
        self.calls.lock().unwrap().push(call.to_string());
        InternalError::bail("Connection refused: search index is unreachable")
    }
}

#[async_trait::async_trait]
impl SearchIndexRepository<ProductDocument> for UnreachableProductIndex {
    async fn upsert(&self, _document: ProductDocument) -> Result<(), InternalError> {
        self.fail("upsert")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), InternalError> {
        self.fail("delete")
    }

    async fn delete_all(&self) -> Result<u64, InternalError> {
        self.fail("delete_all")
    }

    async fn search(
        &self,
        _query: &CatalogSearchQuery,
    ) -> Result<SearchHits<ProductDocument>, InternalError> {
        self.fail("search")
    }

    async fn count(&self) -> Result<u64, InternalError> {
        self.fail("count")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Delegates to the in-memory index, failing every upsert after the first
/// `healthy_upserts` ones
pub(crate) struct FlakyProductIndex {
    inner: Arc<InMemoryCatalogIndex>,
    healthy_upserts: usize,
    upserts: Mutex<usize>,
}

impl FlakyProductIndex {
    pub fn new(inner: Arc<InMemoryCatalogIndex>, healthy_upserts: usize) -> Self {
        Self {
            inner,
            healthy_upserts,
            upserts: Mutex::new(0),
        }
    }

    fn inner(&self) -> &dyn SearchIndexRepository<ProductDocument> {
        self.inner.as_ref()
    }
}

#[async_trait::async_trait]
impl SearchIndexRepository<ProductDocument> for FlakyProductIndex {
    async fn upsert(&self, document: ProductDocument) -> Result<(), InternalError> {
        let attempt = {
            let mut upserts = self.upserts.lock().unwrap();
            *upserts += 1;
            *upserts
        };

        if attempt > self.healthy_upserts {
            return InternalError::bail(format!("Rejected document {}", document.id));
        }

        self.inner().upsert(document).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), InternalError> {
        self.inner().delete(id).await
    }

    async fn delete_all(&self) -> Result<u64, InternalError> {
        self.inner().delete_all().await
    }

    async fn search(
        &self,
        query: &CatalogSearchQuery,
    ) -> Result<SearchHits<ProductDocument>, InternalError> {
        self.inner().search(query).await
    }

    async fn count(&self) -> Result<u64, InternalError> {
        self.inner().count().await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Remembers the pages requested from the wrapped repository
pub(crate) struct RecordingProductRepository {
    inner: Arc<InMemoryCatalogProductRepository>,
    pub requested_pages: Mutex<Vec<PaginationOpts>>,
}

impl RecordingProductRepository {
    pub fn new(inner: Arc<InMemoryCatalogProductRepository>) -> Self {
        Self {
            inner,
            requested_pages: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_offsets(&self) -> Vec<usize> {
        self.requested_pages
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.offset)
            .collect()
    }
}

#[async_trait::async_trait]
impl CatalogProductRepository for RecordingProductRepository {
    async fn list_all_products(&self) -> Result<Vec<Product>, InternalError> {
        self.inner.list_all_products().await
    }

    async fn list_products_page(
        &self,
        pagination: PaginationOpts,
    ) -> Result<Vec<Product>, InternalError> {
        self.requested_pages.lock().unwrap().push(pagination);
        self.inner.list_products_page(pagination).await
    }

    async fn get_product(&self, product_id: &ProductId) -> Result<Option<Product>, InternalError> {
        self.inner.get_product(product_id).await
    }

    async fn count_active_products_by_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<u64, InternalError> {
        self.inner.count_active_products_by_brand(brand_id).await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Holds the first full brand listing until released
pub(crate) struct BlockingBrandRepository {
    inner: Arc<InMemoryCatalogBrandRepository>,
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl BlockingBrandRepository {
    pub fn new(inner: Arc<InMemoryCatalogBrandRepository>) -> Self {
        Self {
            inner,
            entered: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

#[async_trait::async_trait]
impl CatalogBrandRepository for BlockingBrandRepository {
    async fn list_all_brands(&self) -> Result<Vec<Brand>, InternalError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.list_all_brands().await
    }

    async fn get_brand(&self, brand_id: &BrandId) -> Result<Option<Brand>, InternalError> {
        self.inner.get_brand(brand_id).await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
