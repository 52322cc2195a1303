// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::*;
use dill::Catalog;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_list_all_brands(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn CatalogBrandRepository>().unwrap();
    let fixture = CatalogFixture::new();

    let brands = repo.list_all_brands().await.unwrap();

    let mut expected = fixture.brands.clone();
    expected.sort_by_key(|b| b.id);
    assert_eq!(expected, brands);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_get_brand(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn CatalogBrandRepository>().unwrap();
    let fixture = CatalogFixture::new();

    let brand = repo.get_brand(&DORMANT_BRAND_ID).await.unwrap();
    assert_eq!(fixture.brand(&DORMANT_BRAND_ID), brand.as_ref());

    let missing = repo.get_brand(&Uuid::from_u128(0xdead)).await.unwrap();
    assert_eq!(None, missing);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
