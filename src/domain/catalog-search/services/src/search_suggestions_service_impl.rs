// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use catalog_search::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component(pub)]
#[dill::interface(dyn SearchSuggestionsService)]
pub struct SearchSuggestionsServiceImpl {
    config: Arc<CatalogSearchConfig>,
    search_service: Arc<dyn CatalogSearchService>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A request that passed validation, with its limit and flags normalized
#[derive(Debug)]
struct ValidSuggestionsRequest {
    query: String,
    suggestion_type: SuggestionType,
    limit: usize,
    include_products: bool,
    include_brands: bool,
}

#[derive(Debug, Default)]
struct SuggestionsAccumulator {
    products: Vec<ProductSuggestion>,
    brands: Vec<BrandSuggestion>,
}

impl SuggestionsAccumulator {
    fn len(&self) -> usize {
        self.products.len() + self.brands.len()
    }

    fn top_up(&mut self, global: &GlobalSearchResult, req: &ValidSuggestionsRequest) {
        let mut seen_products: HashSet<ProductId> = self.products.iter().map(|p| p.id).collect();
        let mut seen_brands: HashSet<BrandId> = self.brands.iter().map(|b| b.id).collect();

        if req.include_products {
            for doc in &global.products.content {
                if self.len() >= req.limit {
                    return;
                }
                if seen_products.insert(doc.id) {
                    self.products.push(ProductSuggestion::from(doc));
                }
            }
        }

        if req.include_brands {
            for doc in &global.brands.content {
                if self.len() >= req.limit {
                    return;
                }
                if seen_brands.insert(doc.id) {
                    self.brands.push(BrandSuggestion::from(doc));
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl SearchSuggestionsServiceImpl {
    fn validate(
        &self,
        req: SuggestionsRequest,
    ) -> Result<ValidSuggestionsRequest, SearchValidationError> {
        let query = req.query.trim();

        if query.is_empty() {
            return Err(SearchValidationError::EmptyQuery);
        }

        let min_length = self.config.suggestion_min_length;
        if query.chars().count() < min_length {
            return Err(SearchValidationError::QueryTooShort { min_length });
        }

        let limit = match req.limit {
            0 => self.config.default_suggestion_limit,
            n => n.min(self.config.max_suggestion_limit),
        };

        let (include_products, include_brands) = match (req.include_products, req.include_brands) {
            (false, false) => (true, true),
            flags => flags,
        };

        Ok(ValidSuggestionsRequest {
            query: query.to_string(),
            suggestion_type: req.suggestion_type,
            limit,
            include_products,
            include_brands,
        })
    }

    async fn product_suggestions(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ProductSuggestion>, SearchSuggestionsError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let page = self
            .search_service
            .get_product_suggestions(query, limit)
            .await?;

        Ok(page.content.iter().map(ProductSuggestion::from).collect())
    }

    async fn brand_suggestions(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<BrandSuggestion>, SearchSuggestionsError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let page = self
            .search_service
            .get_brand_suggestions(query, limit)
            .await?;

        Ok(page.content.iter().map(BrandSuggestion::from).collect())
    }

    /// Splits the budget between the included types. With both included each
    /// type gets half of the limit, rounded down.
    async fn autocomplete(
        &self,
        req: &ValidSuggestionsRequest,
    ) -> Result<SuggestionsAccumulator, SearchSuggestionsError> {
        let (products_limit, brands_limit) = match (req.include_products, req.include_brands) {
            (true, true) => (req.limit / 2, req.limit / 2),
            (true, false) => (req.limit, 0),
            (false, _) => (0, req.limit),
        };

        let (products, brands) = tokio::try_join!(
            self.product_suggestions(&req.query, products_limit),
            self.brand_suggestions(&req.query, brands_limit),
        )?;

        Ok(SuggestionsAccumulator { products, brands })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[common_macros::method_names_consts]
#[async_trait::async_trait]
impl SearchSuggestionsService for SearchSuggestionsServiceImpl {
    #[tracing::instrument(
        level = "debug",
        name = SearchSuggestionsServiceImpl_get_suggestions,
        skip_all,
        fields(query = %req.query, suggestion_type = ?req.suggestion_type, limit = req.limit)
    )]
    async fn get_suggestions(
        &self,
        req: SuggestionsRequest,
    ) -> Result<SuggestionsResponse, SearchSuggestionsError> {
        let started_at = Instant::now();

        let req = self.validate(req).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected suggestions request");
        })?;

        let suggestions = match req.suggestion_type {
            SuggestionType::Products => SuggestionsAccumulator {
                products: self.product_suggestions(&req.query, req.limit).await?,
                brands: Vec::new(),
            },
            SuggestionType::Brands => SuggestionsAccumulator {
                products: Vec::new(),
                brands: self.brand_suggestions(&req.query, req.limit).await?,
            },
            SuggestionType::Autocomplete => self.autocomplete(&req).await?,
            SuggestionType::All => {
                let mut suggestions = self.autocomplete(&req).await?;

                let remaining = req.limit.saturating_sub(suggestions.len());
                if remaining > 0 {
                    tracing::debug!(remaining, "Topping up suggestions with a global search");

                    let global = self
                        .search_service
                        .global_search(&req.query, 0, remaining, ActivityScope::ActiveOnly)
                        .await?;

                    suggestions.top_up(&global, &req);
                }

                suggestions
            }
        };

        let total_suggestions = suggestions.len();
        let execution_time_ms = u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::debug!(total_suggestions, execution_time_ms, "Suggestions assembled");

        Ok(SuggestionsResponse {
            query: req.query,
            products: suggestions.products,
            brands: suggestions.brands,
            total_suggestions,
            execution_time_ms,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
