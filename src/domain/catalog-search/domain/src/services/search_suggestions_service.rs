// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait SearchSuggestionsService: Send + Sync {
    async fn get_suggestions(
        &self,
        req: SuggestionsRequest,
    ) -> Result<SuggestionsResponse, SearchSuggestionsError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionType {
    /// Autocomplete, topped up with a global search when short of the limit
    #[default]
    All,
    Products,
    Brands,
    /// Prefix matches only
    Autocomplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionsRequest {
    pub query: String,
    pub suggestion_type: SuggestionType,
    /// Zero selects the configured default
    pub limit: usize,
    pub include_products: bool,
    pub include_brands: bool,
}

impl SuggestionsRequest {
    pub fn new(query: impl Into<String>, suggestion_type: SuggestionType, limit: usize) -> Self {
        Self {
            query: query.into(),
            suggestion_type,
            limit,
            include_products: true,
            include_brands: true,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub query: String,
    pub products: Vec<ProductSuggestion>,
    pub brands: Vec<BrandSuggestion>,
    pub total_suggestions: usize,
    pub execution_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSuggestion {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub brand_name: Option<String>,
    pub price: Decimal,
    pub rating: f32,
}

impl From<&ProductDocument> for ProductSuggestion {
    fn from(doc: &ProductDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name().to_string(),
            slug: doc.slug.clone(),
            brand_name: doc.brand_name().map(ToString::to_string),
            price: doc.price,
            rating: doc.rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSuggestion {
    pub id: BrandId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub product_count: i64,
}

impl From<&BrandDocument> for BrandSuggestion {
    fn from(doc: &BrandDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name().to_string(),
            slug: doc.slug.clone(),
            description: doc.description.clone(),
            product_count: doc.product_count,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum SearchSuggestionsError {
    #[error(transparent)]
    Validation(#[from] SearchValidationError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<CatalogSearchError> for SearchSuggestionsError {
    fn from(value: CatalogSearchError) -> Self {
        match value {
            CatalogSearchError::Validation(e) => Self::Validation(e),
            CatalogSearchError::Internal(e) => Self::Internal(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
