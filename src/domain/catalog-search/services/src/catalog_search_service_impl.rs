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
use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component(pub)]
#[dill::interface(dyn CatalogSearchService)]
pub struct CatalogSearchServiceImpl {
    product_index: Arc<dyn SearchIndexRepository<ProductDocument>>,
    brand_index: Arc<dyn SearchIndexRepository<BrandDocument>>,
    index_admin: Arc<dyn SearchIndexAdmin>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl CatalogSearchServiceImpl {
    async fn search_product_page(
        &self,
        query: &CatalogSearchQuery,
    ) -> Result<SearchPage<ProductDocument>, InternalError> {
        let hits = self.product_index.search(query).await.inspect_err(|e| {
            tracing::error!(error = ?e, error_msg = %e, "Product index query failed");
        })?;

        Ok(SearchPage::from_hits(hits, query.page))
    }

    async fn search_brand_page(
        &self,
        query: &CatalogSearchQuery,
    ) -> Result<SearchPage<BrandDocument>, InternalError> {
        let hits = self.brand_index.search(query).await.inspect_err(|e| {
            tracing::error!(error = ?e, error_msg = %e, "Brand index query failed");
        })?;

        Ok(SearchPage::from_hits(hits, query.page))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[common_macros::method_names_consts]
#[async_trait::async_trait]
impl CatalogSearchService for CatalogSearchServiceImpl {
    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_search_products,
        skip_all,
        fields(query = ?req.query, page = req.page, size = req.size)
    )]
    async fn search_products(
        &self,
        req: ProductSearchRequest,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError> {
        req.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected product search request");
        })?;

        let query = CatalogQueryBuilder::product_search(&req);
        let page = self.search_product_page(&query).await?;

        tracing::debug!(
            total_elements = page.total_elements,
            returned = page.content.len(),
            "Product search completed"
        );

        Ok(page)
    }

    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_get_product_suggestions,
        skip_all,
        fields(%prefix, limit)
    )]
    async fn get_product_suggestions(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError> {
        let query = CatalogQueryBuilder::product_suggestions(prefix, limit);
        Ok(self.search_product_page(&query).await?)
    }

    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_search_brands,
        skip_all,
        fields(query = ?req.query, page = req.page, size = req.size)
    )]
    async fn search_brands(
        &self,
        req: BrandSearchRequest,
    ) -> Result<SearchPage<BrandDocument>, CatalogSearchError> {
        let query = CatalogQueryBuilder::brand_search(&req);
        Ok(self.search_brand_page(&query).await?)
    }

    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_get_brand_suggestions,
        skip_all,
        fields(%prefix, limit)
    )]
    async fn get_brand_suggestions(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<SearchPage<BrandDocument>, CatalogSearchError> {
        let query = CatalogQueryBuilder::brand_suggestions(prefix, limit);
        Ok(self.search_brand_page(&query).await?)
    }

    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_global_search,
        skip_all,
        fields(%query, page, size, ?scope)
    )]
    async fn global_search(
        &self,
        query: &str,
        page: usize,
        size: usize,
        scope: ActivityScope,
    ) -> Result<GlobalSearchResult, CatalogSearchError> {
        if query.trim().is_empty() {
            return Err(SearchValidationError::EmptyQuery.into());
        }

        let page_spec = SearchPageSpec::from_page(page, size);
        let products_query = CatalogQueryBuilder::global_products(query, page_spec, scope);
        let brands_query = CatalogQueryBuilder::global_brands(query, page_spec, scope);

        let (products, brands) = tokio::try_join!(
            self.search_product_page(&products_query),
            self.search_brand_page(&brands_query),
        )?;

        Ok(GlobalSearchResult { products, brands })
    }

    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_get_similar_products,
        skip_all,
        fields(%product_id, limit)
    )]
    async fn get_similar_products(
        &self,
        product_id: ProductId,
        product_name: &str,
        brand_name: Option<String>,
        limit: usize,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError> {
        let query = CatalogQueryBuilder::similar_products(
            product_id,
            product_name,
            brand_name.as_deref(),
            limit,
        );
        Ok(self.search_product_page(&query).await?)
    }

    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_get_popular_products,
        skip_all,
        fields(page, size)
    )]
    async fn get_popular_products(
        &self,
        page: usize,
        size: usize,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError> {
        let query = CatalogQueryBuilder::popular_products(SearchPageSpec::from_page(page, size));
        Ok(self.search_product_page(&query).await?)
    }

    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_get_top_rated_products,
        skip_all,
        fields(min_rating, page, size)
    )]
    async fn get_top_rated_products(
        &self,
        min_rating: f32,
        page: usize,
        size: usize,
    ) -> Result<SearchPage<ProductDocument>, CatalogSearchError> {
        validate_rating(min_rating)?;

        let query = CatalogQueryBuilder::top_rated_products(
            min_rating,
            SearchPageSpec::from_page(page, size),
        );
        Ok(self.search_product_page(&query).await?)
    }

    #[tracing::instrument(
        level = "debug",
        name = CatalogSearchServiceImpl_get_search_analytics,
        skip_all,
        fields(?query)
    )]
    async fn get_search_analytics(
        &self,
        query: Option<String>,
        brand_ids: Option<Vec<BrandId>>,
        categories: Option<Vec<String>>,
    ) -> SearchAnalytics {
        let query = CatalogQueryBuilder::search_analytics(
            query.as_deref(),
            brand_ids.as_deref(),
            categories.as_deref(),
        );

        match self.product_index.search(&query).await {
            Ok(hits) => analytics_from_aggregations(&hits.aggregations),
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    error_msg = %e,
                    "Search analytics failed, returning empty analytics"
                );
                SearchAnalytics::default()
            }
        }
    }

    #[tracing::instrument(level = "debug", name = CatalogSearchServiceImpl_index_health, skip_all)]
    async fn index_health(&self) -> Result<IndexHealthReport, InternalError> {
        let cluster = self.index_admin.health().await?;
        let product_documents = self.product_index.count().await?;
        let brand_documents = self.brand_index.count().await?;

        Ok(IndexHealthReport {
            cluster,
            product_documents,
            brand_documents,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn analytics_from_aggregations(aggregations: &AggregationResults) -> SearchAnalytics {
    let terms = |name: &str| match aggregations.get(name) {
        Some(AggregationResult::Terms(buckets)) => buckets.clone(),
        _ => Vec::new(),
    };

    let avg = |name: &str| match aggregations.get(name) {
        Some(AggregationResult::Avg(value)) => value.unwrap_or_default(),
        _ => 0.0,
    };

    let price_ranges = match aggregations.get(ANALYTICS_PRICE_RANGES_AGG) {
        Some(AggregationResult::Range(buckets)) => buckets.clone(),
        _ => Vec::new(),
    };

    SearchAnalytics {
        brand_counts: terms(ANALYTICS_BRANDS_AGG),
        category_counts: terms(ANALYTICS_CATEGORIES_AGG),
        price_ranges,
        average_price: avg(ANALYTICS_AVG_PRICE_AGG),
        average_rating: avg(ANALYTICS_AVG_RATING_AGG),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
