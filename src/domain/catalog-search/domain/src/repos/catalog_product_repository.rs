// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use database_common::PaginationOpts;
use internal_error::InternalError;

use crate::{BrandId, Product, ProductId};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Read access to products of the relational catalog. Products are returned
/// with their brand joined.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProductRepository: Send + Sync {
    /// Every product, read from a single consistent snapshot
    async fn list_all_products(&self) -> Result<Vec<Product>, InternalError>;

    /// A page of products ordered by id, read from its own snapshot
    async fn list_products_page(
        &self,
        pagination: PaginationOpts,
    ) -> Result<Vec<Product>, InternalError>;

    async fn get_product(&self, product_id: &ProductId) -> Result<Option<Product>, InternalError>;

    async fn count_active_products_by_brand(&self, brand_id: &BrandId)
    -> Result<u64, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
