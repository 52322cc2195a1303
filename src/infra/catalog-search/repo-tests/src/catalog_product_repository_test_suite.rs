// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::*;
use database_common::PaginationOpts;
use dill::Catalog;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_list_all_products_with_brands(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn CatalogProductRepository>().unwrap();
    let fixture = CatalogFixture::new();

    let products = repo.list_all_products().await.unwrap();

    let mut expected = fixture.products.clone();
    expected.sort_by_key(|p| p.id);
    assert_eq!(expected, products);

    let unbranded = products.iter().find(|p| p.id == UNBRANDED_LAMP_ID).unwrap();
    assert_eq!(None, unbranded.brand);

    let hammock = products.iter().find(|p| p.id == HAMMOCK_ID).unwrap();
    assert_eq!(
        Some("Globex"),
        hammock.brand.as_ref().map(|b| b.name.as_str())
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_list_products_in_pages(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn CatalogProductRepository>().unwrap();

    let mut pagination = PaginationOpts::from_page(0, 2);
    let mut page_sizes = Vec::new();
    let mut seen_ids = Vec::new();

    loop {
        let page = repo.list_products_page(pagination).await.unwrap();
        if page.is_empty() {
            break;
        }

        page_sizes.push(page.len());
        seen_ids.extend(page.iter().map(|p| p.id));
        pagination = pagination.next_page();
    }

    assert_eq!(vec![2, 2, 1], page_sizes);
    assert_eq!(
        vec![
            ROCKET_SKATES_ID,
            ANVIL_ID,
            GIANT_MAGNET_ID,
            HAMMOCK_ID,
            UNBRANDED_LAMP_ID
        ],
        seen_ids
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_get_product(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn CatalogProductRepository>().unwrap();
    let fixture = CatalogFixture::new();

    let product = repo.get_product(&ROCKET_SKATES_ID).await.unwrap();
    assert_eq!(fixture.product(&ROCKET_SKATES_ID), product.as_ref());

    let missing = repo.get_product(&Uuid::from_u128(0xdead)).await.unwrap();
    assert_eq!(None, missing);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_count_active_products_by_brand(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn CatalogProductRepository>().unwrap();

    // The retired magnet is not counted
    assert_eq!(
        2,
        repo.count_active_products_by_brand(&ACME_BRAND_ID)
            .await
            .unwrap()
    );
    assert_eq!(
        1,
        repo.count_active_products_by_brand(&GLOBEX_BRAND_ID)
            .await
            .unwrap()
    );
    assert_eq!(
        0,
        repo.count_active_products_by_brand(&DORMANT_BRAND_ID)
            .await
            .unwrap()
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
