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
use dill::{Singleton, component, interface, scope};
use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryCatalogBrandRepository {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    brands: BTreeMap<BrandId, Brand>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[scope(Singleton)]
#[interface(dyn CatalogBrandRepository)]
impl InMemoryCatalogBrandRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    /// Stores brands the way the catalog would, replacing those with the
    /// same id
    pub fn save_brands(&self, brands: impl IntoIterator<Item = Brand>) {
        let mut guard = self.state.lock().unwrap();
        for brand in brands {
            guard.brands.insert(brand.id, brand);
        }
    }

    pub fn remove_brand(&self, brand_id: &BrandId) -> Option<Brand> {
        let mut guard = self.state.lock().unwrap();
        guard.brands.remove(brand_id)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CatalogBrandRepository for InMemoryCatalogBrandRepository {
    async fn list_all_brands(&self) -> Result<Vec<Brand>, InternalError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.brands.values().cloned().collect())
    }

    async fn get_brand(&self, brand_id: &BrandId) -> Result<Option<Brand>, InternalError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.brands.get(brand_id).cloned())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
