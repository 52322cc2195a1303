// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Discovery queries over the search index.
///
/// Results only contain active entities unless an operation takes an explicit
/// [`ActivityScope`].
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSearchService: Send + Sync {
    async fn search_products(
        &self,
        req: ProductSearchRequest,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError>;

    /// Products whose name starts with the given phrase, ordered by name
    async fn get_product_suggestions(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError>;

    async fn search_brands(
        &self,
        req: BrandSearchRequest,
    ) -> Result<SearchPage<BrandDocument>, CatalogSearchError>;

    async fn get_brand_suggestions(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<SearchPage<BrandDocument>, CatalogSearchError>;

    /// Searches products and brands with the same paging. The two result sets
    /// are neither merged nor deduplicated.
    async fn global_search(
        &self,
        query: &str,
        page: usize,
        size: usize,
        scope: ActivityScope,
    ) -> Result<GlobalSearchResult, CatalogSearchError>;

    async fn get_similar_products(
        &self,
        product_id: ProductId,
        product_name: &str,
        brand_name: Option<String>,
        limit: usize,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError>;

    async fn get_popular_products(
        &self,
        page: usize,
        size: usize,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError>;

    async fn get_top_rated_products(
        &self,
        min_rating: f32,
        page: usize,
        size: usize,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError>;

    /// Best effort: index failures yield empty analytics
    async fn get_search_analytics(
        &self,
        query: Option<String>,
        brand_ids: Option<Vec<BrandId>>,
        categories: Option<Vec<String>>,
    ) -> SearchAnalytics;

    async fn index_health(&self) -> Result<IndexHealthReport, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum CatalogSearchError {
    #[error(transparent)]
    Validation(#[from] SearchValidationError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
