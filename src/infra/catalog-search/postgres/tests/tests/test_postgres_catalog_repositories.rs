// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::{Brand, Product};
use catalog_search_postgres::{PostgresCatalogBrandRepository, PostgresCatalogProductRepository};
use catalog_search_repo_tests::CatalogFixture;
use dill::{Catalog, CatalogBuilder};
use sqlx::PgPool;
use sqlx::types::Json;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_group::group(database, postgres)]
#[test_log::test(sqlx::test(migrations = "../../../../migrations/postgres"))]
#[ignore = "requires a Postgres database"]
async fn test_list_all_brands(pg_pool: PgPool) {
    let harness = PostgresCatalogHarness::new(pg_pool).await;
    catalog_search_repo_tests::test_list_all_brands(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_group::group(database, postgres)]
#[test_log::test(sqlx::test(migrations = "../../../../migrations/postgres"))]
#[ignore = "requires a Postgres database"]
async fn test_get_brand(pg_pool: PgPool) {
    let harness = PostgresCatalogHarness::new(pg_pool).await;
    catalog_search_repo_tests::test_get_brand(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_group::group(database, postgres)]
#[test_log::test(sqlx::test(migrations = "../../../../migrations/postgres"))]
#[ignore = "requires a Postgres database"]
async fn test_list_all_products_with_brands(pg_pool: PgPool) {
    let harness = PostgresCatalogHarness::new(pg_pool).await;
    catalog_search_repo_tests::test_list_all_products_with_brands(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_group::group(database, postgres)]
#[test_log::test(sqlx::test(migrations = "../../../../migrations/postgres"))]
#[ignore = "requires a Postgres database"]
async fn test_list_products_in_pages(pg_pool: PgPool) {
    let harness = PostgresCatalogHarness::new(pg_pool).await;
    catalog_search_repo_tests::test_list_products_in_pages(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_group::group(database, postgres)]
#[test_log::test(sqlx::test(migrations = "../../../../migrations/postgres"))]
#[ignore = "requires a Postgres database"]
async fn test_get_product(pg_pool: PgPool) {
    let harness = PostgresCatalogHarness::new(pg_pool).await;
    catalog_search_repo_tests::test_get_product(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_group::group(database, postgres)]
#[test_log::test(sqlx::test(migrations = "../../../../migrations/postgres"))]
#[ignore = "requires a Postgres database"]
async fn test_count_active_products_by_brand(pg_pool: PgPool) {
    let harness = PostgresCatalogHarness::new(pg_pool).await;
    catalog_search_repo_tests::test_count_active_products_by_brand(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Harness
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct PostgresCatalogHarness {
    catalog: Catalog,
}

impl PostgresCatalogHarness {
    async fn new(pg_pool: PgPool) -> Self {
        let fixture = CatalogFixture::new();
        for brand in &fixture.brands {
            insert_brand(&pg_pool, brand).await;
        }
        for product in &fixture.products {
            insert_product(&pg_pool, product).await;
        }

        let mut catalog_builder = CatalogBuilder::new();
        catalog_builder.add_value(pg_pool);
        catalog_builder.add::<PostgresCatalogBrandRepository>();
        catalog_builder.add::<PostgresCatalogProductRepository>();

        Self {
            catalog: catalog_builder.build(),
        }
    }
}

async fn insert_brand(pg_pool: &PgPool, brand: &Brand) {
    sqlx::query(
        r#"
        INSERT INTO brands (id, name, description, slug, is_active,
                            created_at, updated_at, created_by, updated_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(brand.id)
    .bind(&brand.name)
    .bind(&brand.description)
    .bind(&brand.slug)
    .bind(brand.is_active)
    .bind(brand.created_at)
    .bind(brand.updated_at)
    .bind(&brand.created_by)
    .bind(&brand.updated_by)
    .execute(pg_pool)
    .await
    .unwrap();
}

async fn insert_product(pg_pool: &PgPool, product: &Product) {
    sqlx::query(
        r#"
        INSERT INTO products (id, name, description, slug, price, image_path, is_active,
                              categories, tags, attributes, view_count, order_count, rating,
                              created_at, updated_at, created_by, updated_by, brand_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18)
        "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(&product.slug)
    .bind(product.price)
    .bind(&product.image_path)
    .bind(product.is_active)
    .bind(&product.categories)
    .bind(&product.tags)
    .bind(product.attributes.as_ref().map(Json))
    .bind(product.view_count)
    .bind(product.order_count)
    .bind(product.rating)
    .bind(product.created_at)
    .bind(product.updated_at)
    .bind(&product.created_by)
    .bind(&product.updated_by)
    .bind(product.brand_id)
    .execute(pg_pool)
    .await
    .unwrap();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
