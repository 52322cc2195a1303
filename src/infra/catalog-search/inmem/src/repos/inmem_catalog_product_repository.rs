// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use catalog_search::*;
use database_common::PaginationOpts;
use dill::{Singleton, component, interface, scope};
use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Products are kept together with the brand they are joined with
pub struct InMemoryCatalogProductRepository {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    products: BTreeMap<ProductId, Product>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[scope(Singleton)]
#[interface(dyn CatalogProductRepository)]
impl InMemoryCatalogProductRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn save_products(&self, products: impl IntoIterator<Item = Product>) {
        let mut guard = self.state.lock().unwrap();
        for product in products {
            guard.products.insert(product.id, product);
        }
    }

    pub fn remove_product(&self, product_id: &ProductId) -> Option<Product> {
        let mut guard = self.state.lock().unwrap();
        guard.products.remove(product_id)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CatalogProductRepository for InMemoryCatalogProductRepository {
    async fn list_all_products(&self) -> Result<Vec<Product>, InternalError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.products.values().cloned().collect())
    }

    async fn list_products_page(
        &self,
        pagination: PaginationOpts,
    ) -> Result<Vec<Product>, InternalError> {
        let guard = self.state.lock().unwrap();
        Ok(guard
            .products
            .values()
            .skip(pagination.offset)
            .take(pagination.limit)
            .cloned()
            .collect())
    }

    async fn get_product(&self, product_id: &ProductId) -> Result<Option<Product>, InternalError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.products.get(product_id).cloned())
    }

    async fn count_active_products_by_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<u64, InternalError> {
        let guard = self.state.lock().unwrap();
        let count = guard
            .products
            .values()
            .filter(|p| p.is_active && p.brand_id.as_ref() == Some(brand_id))
            .count();

        Ok(count as u64)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
