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

use super::Command;
use crate::{CLIError, CommandOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub enum SearchQuery {
    Products(ProductSearchRequest),
    Brands(BrandSearchRequest),
    Global {
        query: String,
        page: usize,
        size: usize,
        scope: ActivityScope,
    },
    Similar {
        product_id: ProductId,
        product_name: String,
        brand_name: Option<String>,
        limit: usize,
    },
    Popular {
        page: usize,
        size: usize,
    },
    TopRated {
        min_rating: f32,
        page: usize,
        size: usize,
    },
}

/// Read-only queries against the search index
pub struct SearchCommand {
    search_svc: Arc<dyn CatalogSearchService>,
    query: Option<SearchQuery>,
}

impl SearchCommand {
    pub fn new(search_svc: Arc<dyn CatalogSearchService>, query: SearchQuery) -> Self {
        Self {
            search_svc,
            query: Some(query),
        }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn run(&mut self) -> Result<CommandOutput, CLIError> {
        let Some(query) = self.query.take() else {
            return Err(CLIError::usage_error("Search command can only run once"));
        };

        match query {
            SearchQuery::Products(req) => {
                let page = self.search_svc.search_products(req).await?;
                CommandOutput::from_serializable(&page)
            }
            SearchQuery::Brands(req) => {
                let page = self.search_svc.search_brands(req).await?;
                CommandOutput::from_serializable(&page)
            }
            SearchQuery::Global {
                query,
                page,
                size,
                scope,
            } => {
                let result = self
                    .search_svc
                    .global_search(&query, page, size, scope)
                    .await?;
                CommandOutput::from_serializable(&result)
            }
            SearchQuery::Similar {
                product_id,
                product_name,
                brand_name,
                limit,
            } => {
                let page = self
                    .search_svc
                    .get_similar_products(product_id, &product_name, brand_name, limit)
                    .await?;
                CommandOutput::from_serializable(&page)
            }
            SearchQuery::Popular { page, size } => {
                let page = self.search_svc.get_popular_products(page, size).await?;
                CommandOutput::from_serializable(&page)
            }
            SearchQuery::TopRated {
                min_rating,
                page,
                size,
            } => {
                let page = self
                    .search_svc
                    .get_top_rated_products(min_rating, page, size)
                    .await?;
                CommandOutput::from_serializable(&page)
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
