// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use uuid::Uuid;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ANALYTICS_BRANDS_AGG: &str = "brands";
pub const ANALYTICS_CATEGORIES_AGG: &str = "categories";
pub const ANALYTICS_PRICE_RANGES_AGG: &str = "priceRanges";
pub const ANALYTICS_AVG_PRICE_AGG: &str = "avgPrice";
pub const ANALYTICS_AVG_RATING_AGG: &str = "avgRating";

const ANALYTICS_TERMS_SIZE: usize = 20;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Composes catalog queries out of validated requests.
///
/// Every dimension of a filtered search is present in the resulting filter:
/// a dimension the caller did not restrict becomes [`SearchFilterExpr::MatchAll`],
/// a restricted one also accepts documents that lack the field.
pub struct CatalogQueryBuilder {}

impl CatalogQueryBuilder {
    pub fn activity_filter(field: SearchFieldPath, scope: ActivityScope) -> SearchFilterExpr {
        match scope {
            ActivityScope::ActiveOnly => field_eq_bool(field, true),
            ActivityScope::IncludeInactive => SearchFilterExpr::MatchAll,
        }
    }

    pub fn product_search(req: &ProductSearchRequest) -> CatalogSearchQuery {
        let filter = SearchFilterExpr::And(vec![
            Self::activity_filter(product_fields::IS_ACTIVE, ActivityScope::ActiveOnly),
            Self::optional_terms(
                product_fields::BRAND_ID,
                req.brand_ids.as_deref().map(uuids_as_strings),
            ),
            Self::optional_terms(product_fields::CATEGORIES, req.categories.clone()),
            Self::optional_terms(product_fields::TAGS, req.tags.clone()),
            Self::price_range(req),
            match req.min_rating {
                Some(min_rating) => field_gte_num(product_fields::RATING, f64::from(min_rating))
                    .or_missing(product_fields::RATING),
                None => SearchFilterExpr::MatchAll,
            },
        ]);

        CatalogSearchQuery {
            text: Self::multi_match(
                req.query.as_deref(),
                MultiMatchPolicy::product_full_text(),
                TextOperator::Or,
                req.fuzzy,
                TextMatchMode::Lenient,
            ),
            filter,
            sort: vec![Self::field_sort(
                req.sort_by.as_deref(),
                req.sort_direction.as_deref(),
            )],
            page: SearchPageSpec::from_page(req.page, req.size),
            aggregations: Vec::new(),
        }
    }

    pub fn product_suggestions(prefix: &str, limit: usize) -> CatalogSearchQuery {
        CatalogSearchQuery {
            text: Some(TextQuery::PhrasePrefix {
                field: product_fields::NAME_AUTOCOMPLETE,
                prefix: prefix.trim().to_string(),
            }),
            sort: vec![SearchSortSpec::by_field(
                product_fields::NAME,
                SortDirection::Ascending,
            )],
            page: SearchPageSpec::first(limit),
            ..CatalogSearchQuery::new(Self::activity_filter(
                product_fields::IS_ACTIVE,
                ActivityScope::ActiveOnly,
            ))
        }
    }

    pub fn brand_search(req: &BrandSearchRequest) -> CatalogSearchQuery {
        let activity = match req.is_active {
            None => Self::activity_filter(brand_fields::IS_ACTIVE, ActivityScope::ActiveOnly),
            Some(is_active) => field_eq_bool(brand_fields::IS_ACTIVE, is_active)
                .or_missing(brand_fields::IS_ACTIVE),
        };

        let product_count = match req.min_product_count {
            Some(min) => field_gte_int(brand_fields::PRODUCT_COUNT, min)
                .or_missing(brand_fields::PRODUCT_COUNT),
            None => SearchFilterExpr::MatchAll,
        };

        CatalogSearchQuery {
            text: Self::multi_match(
                req.query.as_deref(),
                MultiMatchPolicy::brand_full_text(),
                TextOperator::Or,
                true,
                TextMatchMode::Lenient,
            ),
            filter: SearchFilterExpr::And(vec![activity, product_count]),
            sort: vec![Self::field_sort(
                req.sort_by.as_deref(),
                req.sort_direction.as_deref(),
            )],
            page: SearchPageSpec::from_page(req.page, req.size),
            aggregations: Vec::new(),
        }
    }

    pub fn brand_suggestions(prefix: &str, limit: usize) -> CatalogSearchQuery {
        CatalogSearchQuery {
            text: Some(TextQuery::PhrasePrefix {
                field: brand_fields::NAME_AUTOCOMPLETE,
                prefix: prefix.trim().to_string(),
            }),
            sort: vec![SearchSortSpec::by_field(
                brand_fields::NAME,
                SortDirection::Ascending,
            )],
            page: SearchPageSpec::first(limit),
            ..CatalogSearchQuery::new(Self::activity_filter(
                brand_fields::IS_ACTIVE,
                ActivityScope::ActiveOnly,
            ))
        }
    }

    /// Product half of a global search: every term must match
    pub fn global_products(
        query: &str,
        page: SearchPageSpec,
        scope: ActivityScope,
    ) -> CatalogSearchQuery {
        CatalogSearchQuery {
            text: Self::multi_match(
                Some(query),
                MultiMatchPolicy::product_global(),
                TextOperator::And,
                true,
                TextMatchMode::Strict,
            ),
            sort: vec![SearchSortSpec::Relevance],
            page,
            ..CatalogSearchQuery::new(Self::activity_filter(product_fields::IS_ACTIVE, scope))
        }
    }

    /// Brand half of a global search: name or description must match
    pub fn global_brands(
        query: &str,
        page: SearchPageSpec,
        scope: ActivityScope,
    ) -> CatalogSearchQuery {
        CatalogSearchQuery {
            text: Self::multi_match(
                Some(query),
                MultiMatchPolicy::brand_name_or_description(),
                TextOperator::And,
                true,
                TextMatchMode::Strict,
            ),
            sort: vec![SearchSortSpec::Relevance],
            page,
            ..CatalogSearchQuery::new(Self::activity_filter(brand_fields::IS_ACTIVE, scope))
        }
    }

    pub fn similar_products(
        product_id: Uuid,
        product_name: &str,
        brand_name: Option<&str>,
        limit: usize,
    ) -> CatalogSearchQuery {
        let like = match brand_name {
            Some(brand_name) => format!("{} {}", product_name.trim(), brand_name.trim()),
            None => product_name.trim().to_string(),
        };

        CatalogSearchQuery {
            text: Some(TextQuery::MoreLikeThis {
                fields: vec![
                    product_fields::NAME,
                    product_fields::DESCRIPTION,
                    product_fields::BRAND_NAME,
                ],
                like: like.trim().to_string(),
            }),
            sort: vec![SearchSortSpec::by_field(
                product_fields::RATING,
                SortDirection::Descending,
            )],
            page: SearchPageSpec::first(limit),
            ..CatalogSearchQuery::new(filter_and!(
                Self::activity_filter(product_fields::IS_ACTIVE, ActivityScope::ActiveOnly),
                field_ne_str(product_fields::ID, &product_id.to_string())
            ))
        }
    }

    pub fn popular_products(page: SearchPageSpec) -> CatalogSearchQuery {
        CatalogSearchQuery {
            sort: vec![
                SearchSortSpec::by_field(product_fields::ORDER_COUNT, SortDirection::Descending),
                SearchSortSpec::by_field(product_fields::VIEW_COUNT, SortDirection::Descending),
            ],
            page,
            ..CatalogSearchQuery::new(Self::activity_filter(
                product_fields::IS_ACTIVE,
                ActivityScope::ActiveOnly,
            ))
        }
    }

    pub fn top_rated_products(min_rating: f32, page: SearchPageSpec) -> CatalogSearchQuery {
        CatalogSearchQuery {
            sort: vec![SearchSortSpec::by_field(
                product_fields::RATING,
                SortDirection::Descending,
            )],
            page,
            ..CatalogSearchQuery::new(filter_and!(
                Self::activity_filter(product_fields::IS_ACTIVE, ActivityScope::ActiveOnly),
                field_gte_num(product_fields::RATING, f64::from(min_rating))
            ))
        }
    }

    /// Zero-hit query that only computes facets over the matching products
    pub fn search_analytics(
        query: Option<&str>,
        brand_ids: Option<&[BrandId]>,
        categories: Option<&[String]>,
    ) -> CatalogSearchQuery {
        let filter = SearchFilterExpr::And(vec![
            Self::activity_filter(product_fields::IS_ACTIVE, ActivityScope::ActiveOnly),
            match brand_ids {
                Some(ids) if !ids.is_empty() => {
                    field_in_str(product_fields::BRAND_ID, uuids_as_strings(ids))
                }
                _ => SearchFilterExpr::MatchAll,
            },
            match categories {
                Some(categories) if !categories.is_empty() => {
                    field_in_str(product_fields::CATEGORIES, categories.iter().cloned())
                }
                _ => SearchFilterExpr::MatchAll,
            },
        ]);

        CatalogSearchQuery {
            text: Self::multi_match(
                query,
                MultiMatchPolicy::product_full_text(),
                TextOperator::Or,
                true,
                TextMatchMode::Strict,
            ),
            filter,
            sort: Vec::new(),
            page: SearchPageSpec::first(0),
            aggregations: Self::analytics_aggregations(),
        }
    }

    pub fn analytics_aggregations() -> Vec<AggregationSpec> {
        vec![
            AggregationSpec {
                name: ANALYTICS_BRANDS_AGG,
                kind: AggregationKind::Terms {
                    field: product_fields::BRAND_NAME,
                    size: ANALYTICS_TERMS_SIZE,
                },
            },
            AggregationSpec {
                name: ANALYTICS_CATEGORIES_AGG,
                kind: AggregationKind::Terms {
                    field: product_fields::CATEGORIES,
                    size: ANALYTICS_TERMS_SIZE,
                },
            },
            AggregationSpec {
                name: ANALYTICS_PRICE_RANGES_AGG,
                kind: AggregationKind::Range {
                    field: product_fields::PRICE,
                    ranges: vec![
                        RangeBound {
                            key: "*-50",
                            from: None,
                            to: Some(50.0),
                        },
                        RangeBound {
                            key: "50-100",
                            from: Some(50.0),
                            to: Some(100.0),
                        },
                        RangeBound {
                            key: "100-500",
                            from: Some(100.0),
                            to: Some(500.0),
                        },
                        RangeBound {
                            key: "500-*",
                            from: Some(500.0),
                            to: None,
                        },
                    ],
                },
            },
            AggregationSpec {
                name: ANALYTICS_AVG_PRICE_AGG,
                kind: AggregationKind::Avg {
                    field: product_fields::PRICE,
                },
            },
            AggregationSpec {
                name: ANALYTICS_AVG_RATING_AGG,
                kind: AggregationKind::Avg {
                    field: product_fields::RATING,
                },
            },
        ]
    }

    /// Product documents of a brand regardless of their activity, up to `cap`
    pub fn products_of_brand(brand_id: BrandId, cap: usize) -> CatalogSearchQuery {
        CatalogSearchQuery {
            page: SearchPageSpec::first(cap),
            ..CatalogSearchQuery::new(filter_and!(
                Self::activity_filter(product_fields::IS_ACTIVE, ActivityScope::IncludeInactive),
                field_eq_str(product_fields::BRAND_ID, &brand_id.to_string())
            ))
        }
    }

    /// Sort by the requested field, by name when none is given
    pub fn field_sort(sort_by: Option<&str>, sort_direction: Option<&str>) -> SearchSortSpec {
        let field = match sort_by.map(str::trim) {
            Some(field) if !field.is_empty() => field,
            _ => product_fields::NAME,
        };

        SearchSortSpec::by_field(field, SortDirection::parse_lenient(sort_direction))
    }

    fn multi_match(
        query: Option<&str>,
        policy: MultiMatchPolicy,
        operator: TextOperator,
        fuzzy: bool,
        mode: TextMatchMode,
    ) -> Option<TextQuery> {
        let query = query.map(str::trim).filter(|q| !q.is_empty())?;

        Some(TextQuery::MultiMatch(MultiMatchQuery {
            query: query.to_string(),
            policy,
            operator,
            fuzzy,
            mode,
        }))
    }

    fn optional_terms(field: SearchFieldPath, values: Option<Vec<String>>) -> SearchFilterExpr {
        match values {
            Some(values) if !values.is_empty() => field_in_str(field, values).or_missing(field),
            _ => SearchFilterExpr::MatchAll,
        }
    }

    fn price_range(req: &ProductSearchRequest) -> SearchFilterExpr {
        let bounds: Vec<_> = [
            req.min_price
                .map(|min| field_gte_decimal(product_fields::PRICE, min)),
            req.max_price
                .map(|max| field_lte_decimal(product_fields::PRICE, max)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if bounds.is_empty() {
            SearchFilterExpr::MatchAll
        } else {
            SearchFilterExpr::and_clauses(bounds).or_missing(product_fields::PRICE)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn uuids_as_strings(ids: &[Uuid]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
