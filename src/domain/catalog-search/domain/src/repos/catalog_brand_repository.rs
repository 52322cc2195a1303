// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::{Brand, BrandId};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogBrandRepository: Send + Sync {
    /// Every brand, read from a single consistent snapshot
    async fn list_all_brands(&self) -> Result<Vec<Brand>, InternalError>;

    async fn get_brand(&self, brand_id: &BrandId) -> Result<Option<Brand>, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
