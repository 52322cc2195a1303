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
use catalog_search_inmem::*;
use catalog_search_repo_tests::{fixture_brand, fixture_product};
use catalog_search_services::*;
use dill::{Catalog, CatalogBuilder};
use rust_decimal::Decimal;
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Services wired over the in-memory catalog store and search index
pub(crate) struct CatalogSearchHarness {
    _catalog: Catalog,
    pub product_repo: Arc<InMemoryCatalogProductRepository>,
    pub brand_repo: Arc<InMemoryCatalogBrandRepository>,
    pub index: Arc<InMemoryCatalogIndex>,
    pub search_service: Arc<dyn CatalogSearchService>,
    pub sync_service: Arc<dyn SearchSynchronizationService>,
    pub suggestions_service: Arc<dyn SearchSuggestionsService>,
}

impl CatalogSearchHarness {
    pub fn new() -> Self {
        Self::with_config(CatalogSearchConfig::default())
    }

    pub fn with_config(config: CatalogSearchConfig) -> Self {
        let mut b = CatalogBuilder::new();
        b.add_value(config)
            .add::<InMemoryCatalogIndex>()
            .add::<InMemoryCatalogProductRepository>()
            .add::<InMemoryCatalogBrandRepository>();
        register_dependencies(&mut b);

        let catalog = b.build();

        Self {
            product_repo: catalog.get_one().unwrap(),
            brand_repo: catalog.get_one().unwrap(),
            index: catalog.get_one().unwrap(),
            search_service: catalog.get_one().unwrap(),
            sync_service: catalog.get_one().unwrap(),
            suggestions_service: catalog.get_one().unwrap(),
            _catalog: catalog,
        }
    }

    pub fn save_catalog(&self, brands: Vec<Brand>, products: Vec<Product>) {
        self.brand_repo.save_brands(brands);
        self.product_repo.save_products(products);
    }

    /// Saves the entities and synchronizes them into the index
    pub async fn index_catalog(&self, brands: Vec<Brand>, products: Vec<Product>) {
        self.save_catalog(brands, products);
        self.sync_service.sync_all().await.unwrap();
    }

    pub async fn product_document_count(&self) -> u64 {
        let repo: &dyn SearchIndexRepository<ProductDocument> = self.index.as_ref();
        repo.count().await.unwrap()
    }

    pub async fn brand_document_count(&self) -> u64 {
        let repo: &dyn SearchIndexRepository<BrandDocument> = self.index.as_ref();
        repo.count().await.unwrap()
    }

    pub async fn index_brand_document(&self, doc: BrandDocument) {
        let repo: &dyn SearchIndexRepository<BrandDocument> = self.index.as_ref();
        repo.upsert(doc).await.unwrap();
    }

    pub async fn index_product_document(&self, doc: ProductDocument) {
        let repo: &dyn SearchIndexRepository<ProductDocument> = self.index.as_ref();
        repo.upsert(doc).await.unwrap();
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn brand(n: u128, name: &str) -> Brand {
    fixture_brand(Uuid::from_u128(0xb000 + n), name, true)
}

pub(crate) fn product(n: u128, name: &str, price: &str, brand: Option<&Brand>) -> Product {
    fixture_product(
        Uuid::from_u128(0xf000 + n),
        name,
        price.parse::<Decimal>().unwrap(),
        brand,
    )
}

pub(crate) fn product_id(n: u128) -> ProductId {
    Uuid::from_u128(0xf000 + n)
}

pub(crate) fn brand_id(n: u128) -> BrandId {
    Uuid::from_u128(0xb000 + n)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
