// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_SEARCH_PAGE_SIZE: usize = 20;
pub const MAX_SEARCH_PAGE_SIZE: usize = 100;
/// Deepest `offset + limit` an index serves, matches the default `index.max_result_window`
pub const MAX_SEARCH_RESULT_WINDOW: usize = 10_000;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Index-agnostic description of a single search request
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSearchQuery {
    /// Free-text part, `None` matches every document
    pub text: Option<TextQuery>,

    /// Structured filter
    pub filter: SearchFilterExpr,

    /// Sorting specification, relevance if empty
    pub sort: Vec<SearchSortSpec>,

    /// Pagination specification
    pub page: SearchPageSpec,

    /// Aggregations to compute over all matching documents
    pub aggregations: Vec<AggregationSpec>,
}

impl CatalogSearchQuery {
    pub fn new(filter: SearchFilterExpr) -> Self {
        Self {
            text: None,
            filter,
            sort: Vec::new(),
            page: SearchPageSpec::default(),
            aggregations: Vec::new(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub enum TextQuery {
    MultiMatch(MultiMatchQuery),

    /// Phrase whose last term is matched as a prefix
    PhrasePrefix {
        field: SearchFieldPath,
        prefix: String,
    },

    /// Documents with terms similar to `like`
    MoreLikeThis {
        fields: Vec<SearchFieldPath>,
        like: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiMatchQuery {
    pub query: String,
    pub policy: MultiMatchPolicy,
    pub operator: TextOperator,
    /// Tolerate typos, edit distance depends on the term length
    pub fuzzy: bool,
    pub mode: TextMatchMode,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextOperator {
    /// Every term must match
    And,
    /// Any term may match
    Or,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextMatchMode {
    /// Documents must match the text
    Strict,

    /// The text only contributes to ranking, non-matching documents are
    /// still returned
    Lenient,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub struct MultiMatchPolicy {
    pub specs: Vec<MultiMatchFieldSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiMatchFieldSpec {
    pub field_name: SearchFieldPath,
    pub boost: f32,
}

impl MultiMatchPolicy {
    fn from_boosts(boosts: &[(SearchFieldPath, f32)]) -> Self {
        Self {
            specs: boosts
                .iter()
                .map(|&(field_name, boost)| MultiMatchFieldSpec { field_name, boost })
                .collect(),
        }
    }

    pub fn product_full_text() -> Self {
        Self::from_boosts(&[
            (product_fields::NAME, 4.0),
            (product_fields::BRAND_NAME, 3.0),
            (product_fields::DESCRIPTION, 2.0),
        ])
    }

    /// Full text policy that also favors prefix matches on names
    pub fn product_global() -> Self {
        Self::from_boosts(&[
            (product_fields::NAME, 4.0),
            (product_fields::BRAND_NAME, 3.0),
            (product_fields::DESCRIPTION, 2.0),
            (product_fields::NAME_AUTOCOMPLETE, 2.0),
            (product_fields::BRAND_NAME_AUTOCOMPLETE, 2.0),
        ])
    }

    pub fn brand_full_text() -> Self {
        Self::from_boosts(&[(brand_fields::NAME, 3.0), (brand_fields::DESCRIPTION, 1.0)])
    }

    pub fn brand_name_or_description() -> Self {
        Self::from_boosts(&[
            (brand_fields::NAME, 3.0),
            (brand_fields::DESCRIPTION, 1.0),
            (brand_fields::NAME_AUTOCOMPLETE, 2.0),
        ])
    }

    pub fn fields(&self) -> impl Iterator<Item = SearchFieldPath> + '_ {
        self.specs.iter().map(|s| s.field_name)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSortSpec {
    Relevance,
    ByField {
        field: String,
        direction: SortDirection,
    },
}

impl SearchSortSpec {
    pub fn by_field(field: impl Into<String>, direction: SortDirection) -> Self {
        Self::ByField {
            field: field.into(),
            direction,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// "desc" in any case descends, anything else ascends
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchPageSpec {
    pub limit: usize,
    pub offset: usize,
}

impl SearchPageSpec {
    /// Page numbering starts at zero, a zero size selects the default one
    pub fn from_page(page: usize, size: usize) -> Self {
        let size = clamp_page_size(size);
        Self {
            limit: size,
            offset: page.saturating_mul(size),
        }
    }

    /// Leading page of up to `limit` hits, never wider than the result window
    pub fn first(limit: usize) -> Self {
        Self {
            limit: limit.min(MAX_SEARCH_RESULT_WINDOW),
            offset: 0,
        }
    }

    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.offset / self.limit
        }
    }
}

impl Default for SearchPageSpec {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_PAGE_SIZE,
            offset: 0,
        }
    }
}

pub fn clamp_page_size(size: usize) -> usize {
    match size {
        0 => DEFAULT_SEARCH_PAGE_SIZE,
        s => s.min(MAX_SEARCH_PAGE_SIZE),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Whether deactivated entities take part in a query
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ActivityScope {
    #[default]
    ActiveOnly,
    IncludeInactive,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
