// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use rust_decimal::Decimal;

use crate::BrandId;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const MIN_RATING: f32 = 0.0;
pub const MAX_RATING: f32 = 5.0;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Filtered product search. Absent filters do not narrow the result.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSearchRequest {
    pub query: Option<String>,
    pub brand_ids: Option<Vec<BrandId>>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f32>,
    pub page: usize,
    /// Zero selects the default page size
    pub size: usize,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub fuzzy: bool,
}

impl Default for ProductSearchRequest {
    fn default() -> Self {
        Self {
            query: None,
            brand_ids: None,
            categories: None,
            tags: None,
            min_price: None,
            max_price: None,
            min_rating: None,
            page: 0,
            size: 0,
            sort_by: None,
            sort_direction: None,
            fuzzy: true,
        }
    }
}

impl ProductSearchRequest {
    pub fn validate(&self) -> Result<(), SearchValidationError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            return Err(SearchValidationError::InvalidPriceRange { min, max });
        }

        if let Some(rating) = self.min_rating {
            validate_rating(rating)?;
        }

        Ok(())
    }
}

pub fn validate_rating(rating: f32) -> Result<(), SearchValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(SearchValidationError::RatingOutOfRange(rating))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandSearchRequest {
    pub query: Option<String>,
    /// Only active brands when absent
    pub is_active: Option<bool>,
    pub min_product_count: Option<i64>,
    pub page: usize,
    pub size: usize,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchValidationError {
    #[error("Minimum price {min} cannot be greater than maximum price {max}")]
    InvalidPriceRange { min: Decimal, max: Decimal },

    #[error("Rating must be between {MIN_RATING} and {MAX_RATING}, got {0}")]
    RatingOutOfRange(f32),

    #[error("Query must not be empty")]
    EmptyQuery,

    #[error("Query must be at least {min_length} characters long")]
    QueryTooShort { min_length: usize },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
