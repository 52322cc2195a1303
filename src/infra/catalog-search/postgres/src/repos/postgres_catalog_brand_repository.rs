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
use database_common::PgReadSnapshot;
use dill::{component, interface};
use internal_error::{InternalError, ResultIntoInternal};
use sqlx::PgPool;

use super::{BRAND_COLUMNS, BrandRowModel};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct PostgresCatalogBrandRepository {
    pool: Arc<PgPool>,
}

#[component(pub)]
#[interface(dyn CatalogBrandRepository)]
impl PostgresCatalogBrandRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CatalogBrandRepository for PostgresCatalogBrandRepository {
    async fn list_all_brands(&self) -> Result<Vec<Brand>, InternalError> {
        let mut snapshot = PgReadSnapshot::begin(&self.pool).await?;

        let rows = sqlx::query_as::<_, BrandRowModel>(&format!(
            "SELECT {BRAND_COLUMNS} FROM brands ORDER BY id"
        ))
        .fetch_all(snapshot.connection())
        .await
        .int_err()?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_brand(&self, brand_id: &BrandId) -> Result<Option<Brand>, InternalError> {
        let mut snapshot = PgReadSnapshot::begin(&self.pool).await?;

        let maybe_row = sqlx::query_as::<_, BrandRowModel>(&format!(
            "SELECT {BRAND_COLUMNS} FROM brands WHERE id = $1"
        ))
        .bind(brand_id)
        .fetch_optional(snapshot.connection())
        .await
        .int_err()?;

        Ok(maybe_row.map(Into::into))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
