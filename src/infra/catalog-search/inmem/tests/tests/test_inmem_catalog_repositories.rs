// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search_inmem::{InMemoryCatalogBrandRepository, InMemoryCatalogProductRepository};
use catalog_search_repo_tests::CatalogFixture;
use dill::{Catalog, CatalogBuilder};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_list_all_brands() {
    let harness = InMemoryCatalogHarness::new();
    catalog_search_repo_tests::test_list_all_brands(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_get_brand() {
    let harness = InMemoryCatalogHarness::new();
    catalog_search_repo_tests::test_get_brand(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_list_all_products_with_brands() {
    let harness = InMemoryCatalogHarness::new();
    catalog_search_repo_tests::test_list_all_products_with_brands(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_list_products_in_pages() {
    let harness = InMemoryCatalogHarness::new();
    catalog_search_repo_tests::test_list_products_in_pages(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_get_product() {
    let harness = InMemoryCatalogHarness::new();
    catalog_search_repo_tests::test_get_product(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_count_active_products_by_brand() {
    let harness = InMemoryCatalogHarness::new();
    catalog_search_repo_tests::test_count_active_products_by_brand(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct InMemoryCatalogHarness {
    catalog: Catalog,
}

impl InMemoryCatalogHarness {
    pub fn new() -> Self {
        let mut catalog_builder = CatalogBuilder::new();
        catalog_builder.add::<InMemoryCatalogBrandRepository>();
        catalog_builder.add::<InMemoryCatalogProductRepository>();
        let catalog = catalog_builder.build();

        let fixture = CatalogFixture::new();
        catalog
            .get_one::<InMemoryCatalogBrandRepository>()
            .unwrap()
            .save_brands(fixture.brands);
        catalog
            .get_one::<InMemoryCatalogProductRepository>()
            .unwrap()
            .save_products(fixture.products);

        Self { catalog }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
