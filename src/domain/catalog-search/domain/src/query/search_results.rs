// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Raw result of a search index query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHits<D> {
    pub total_hits: u64,
    pub hits: Vec<D>,
    pub aggregations: AggregationResults,
}

impl<D> Default for SearchHits<D> {
    fn default() -> Self {
        Self {
            total_hits: 0,
            hits: Vec::new(),
            aggregations: AggregationResults::new(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> SearchPage<T> {
    pub fn new(content: Vec<T>, page_spec: SearchPageSpec, total_elements: u64) -> Self {
        let size = page_spec.limit;
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size as u64)
        };

        Self {
            content,
            page: page_spec.page_number(),
            size,
            total_elements,
            total_pages,
        }
    }

    pub fn from_hits(hits: SearchHits<T>, page_spec: SearchPageSpec) -> Self {
        Self::new(hits.hits, page_spec, hits.total_hits)
    }

    pub fn empty(page_spec: SearchPageSpec) -> Self {
        Self::new(Vec::new(), page_spec, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Products and brands matching one query, ranked independently
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalSearchResult {
    pub products: SearchPage<ProductDocument>,
    pub brands: SearchPage<BrandDocument>,
}

impl GlobalSearchResult {
    pub fn total_results(&self) -> u64 {
        self.products.total_elements + self.brands.total_elements
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalytics {
    pub brand_counts: Vec<TermsBucket>,
    pub category_counts: Vec<TermsBucket>,
    pub price_ranges: Vec<RangeBucket>,
    pub average_price: f64,
    pub average_rating: f64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexHealthReport {
    pub cluster: serde_json::Value,
    pub product_documents: u64,
    pub brand_documents: u64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
