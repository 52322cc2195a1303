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
use database_common::{PaginationOpts, PgReadSnapshot};
use dill::{component, interface};
use internal_error::{InternalError, ResultIntoInternal};
use sqlx::PgPool;

use super::{PRODUCT_WITH_BRAND_COLUMNS, ProductRowModel};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Products are always returned with their brand joined in
pub struct PostgresCatalogProductRepository {
    pool: Arc<PgPool>,
}

#[component(pub)]
#[interface(dyn CatalogProductRepository)]
impl PostgresCatalogProductRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    fn select_products(tail: &str) -> String {
        format!(
            "SELECT {PRODUCT_WITH_BRAND_COLUMNS} FROM products p \
             LEFT JOIN brands b ON b.id = p.brand_id {tail}"
        )
    }
}

#[async_trait::async_trait]
impl CatalogProductRepository for PostgresCatalogProductRepository {
    async fn list_all_products(&self) -> Result<Vec<Product>, InternalError> {
        let mut snapshot = PgReadSnapshot::begin(&self.pool).await?;

        let rows = sqlx::query_as::<_, ProductRowModel>(&Self::select_products("ORDER BY p.id"))
            .fetch_all(snapshot.connection())
            .await
            .int_err()?;

        tracing::debug!(num_products = rows.len(), "Loaded all products");

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_products_page(
        &self,
        pagination: PaginationOpts,
    ) -> Result<Vec<Product>, InternalError> {
        let mut snapshot = PgReadSnapshot::begin(&self.pool).await?;

        let rows = sqlx::query_as::<_, ProductRowModel>(&Self::select_products(
            "ORDER BY p.id LIMIT $1 OFFSET $2",
        ))
        .bind(pagination.limit_i64())
        .bind(pagination.offset_i64())
        .fetch_all(snapshot.connection())
        .await
        .int_err()?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_product(&self, product_id: &ProductId) -> Result<Option<Product>, InternalError> {
        let mut snapshot = PgReadSnapshot::begin(&self.pool).await?;

        let maybe_row =
            sqlx::query_as::<_, ProductRowModel>(&Self::select_products("WHERE p.id = $1"))
                .bind(product_id)
                .fetch_optional(snapshot.connection())
                .await
                .int_err()?;

        Ok(maybe_row.map(Into::into))
    }

    async fn count_active_products_by_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<u64, InternalError> {
        let mut snapshot = PgReadSnapshot::begin(&self.pool).await?;

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products WHERE brand_id = $1 AND is_active",
        )
        .bind(brand_id)
        .fetch_one(snapshot.connection())
        .await
        .int_err()?;

        u64::try_from(count).int_err()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
