// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use assert_matches::assert_matches;
use catalog_search::*;
use catalog_search_services::*;
use pretty_assertions::assert_eq;

use crate::tests::utils::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

async fn phone_catalog(harness: &CatalogSearchHarness, count: u128) {
    harness
        .index_catalog(
            (1..=count)
                .map(|i| brand(i, &format!("Phone Brand {i:02}")))
                .collect(),
            (1..=count)
                .map(|i| product(i, &format!("Phone {i:02}"), "199.00", None))
                .collect(),
        )
        .await;
}

fn product_names(response: &SuggestionsResponse) -> Vec<&str> {
    response.products.iter().map(|p| p.name.as_str()).collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_autocomplete_splits_limit_between_products_and_brands() {
    let harness = CatalogSearchHarness::new();
    phone_catalog(&harness, 10).await;

    let response = harness
        .suggestions_service
        .get_suggestions(SuggestionsRequest::new("phone", SuggestionType::Autocomplete, 10))
        .await
        .unwrap();

    assert_eq!(5, response.products.len());
    assert_eq!(5, response.brands.len());
    assert_eq!(10, response.total_suggestions);
    assert_eq!(
        vec!["Phone 01", "Phone 02", "Phone 03", "Phone 04", "Phone 05"],
        product_names(&response)
    );
    assert_eq!("phone", response.query);
}

#[test_log::test(tokio::test)]
async fn test_autocomplete_gives_whole_limit_to_single_included_type() {
    let harness = CatalogSearchHarness::new();
    phone_catalog(&harness, 12).await;

    let response = harness
        .suggestions_service
        .get_suggestions(SuggestionsRequest {
            include_brands: false,
            ..SuggestionsRequest::new("phone", SuggestionType::Autocomplete, 10)
        })
        .await
        .unwrap();

    assert_eq!(10, response.products.len());
    assert!(response.brands.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_odd_limit_is_halved_rounding_down() {
    let mut search_service = MockCatalogSearchService::new();
    search_service
        .expect_get_product_suggestions()
        .withf(|_, limit| *limit == 3)
        .times(1)
        .returning(|_, limit| Ok(SearchPage::empty(SearchPageSpec::first(limit))));
    search_service
        .expect_get_brand_suggestions()
        .withf(|_, limit| *limit == 3)
        .times(1)
        .returning(|_, limit| Ok(SearchPage::empty(SearchPageSpec::first(limit))));
    search_service.expect_global_search().never();

    let suggestions_service = SearchSuggestionsServiceImpl::new(
        Arc::new(CatalogSearchConfig::default()),
        Arc::new(search_service),
    );

    let response = suggestions_service
        .get_suggestions(SuggestionsRequest::new("lamp", SuggestionType::Autocomplete, 7))
        .await
        .unwrap();

    assert_eq!(0, response.total_suggestions);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_typed_suggestions_only_query_their_index() {
    let harness = CatalogSearchHarness::new();
    phone_catalog(&harness, 3).await;

    let products = harness
        .suggestions_service
        .get_suggestions(SuggestionsRequest::new("phone", SuggestionType::Products, 10))
        .await
        .unwrap();
    assert_eq!(3, products.products.len());
    assert!(products.brands.is_empty());

    let brands = harness
        .suggestions_service
        .get_suggestions(SuggestionsRequest::new("phone", SuggestionType::Brands, 10))
        .await
        .unwrap();
    assert!(brands.products.is_empty());
    assert_eq!(
        vec!["Phone Brand 01", "Phone Brand 02", "Phone Brand 03"],
        brands
            .brands
            .iter()
            .map(|b| b.name.as_str())
            .collect::<Vec<_>>()
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_all_tops_up_with_global_search_without_duplicates() {
    let harness = CatalogSearchHarness::new();
    harness
        .index_catalog(
            vec![],
            vec![
                product(1, "Phone Case", "9.99", None),
                Product {
                    description: Some("Fast charging for any phone".to_string()),
                    ..product(2, "Charger", "24.99", None)
                },
                product(3, "Hammock", "75.00", None),
            ],
        )
        .await;

    let response = harness
        .suggestions_service
        .get_suggestions(SuggestionsRequest::new("phone", SuggestionType::All, 10))
        .await
        .unwrap();

    assert_eq!(vec!["Phone Case", "Charger"], product_names(&response));
    assert!(response.brands.is_empty());
    assert_eq!(2, response.total_suggestions);
}

#[test_log::test(tokio::test)]
async fn test_all_top_up_leaves_out_excluded_types() {
    let harness = CatalogSearchHarness::new();
    harness
        .index_catalog(
            vec![brand(1, "Phone Works")],
            vec![Product {
                description: Some("Fast charging for any phone".to_string()),
                ..product(1, "Charger", "24.99", None)
            }],
        )
        .await;

    let response = harness
        .suggestions_service
        .get_suggestions(SuggestionsRequest {
            include_brands: false,
            ..SuggestionsRequest::new("phone", SuggestionType::All, 10)
        })
        .await
        .unwrap();

    assert_eq!(vec!["Charger"], product_names(&response));
    assert!(response.brands.is_empty());
    assert_eq!(1, response.total_suggestions);
}

#[test_log::test(tokio::test)]
async fn test_all_skips_global_search_when_autocomplete_fills_limit() {
    let mut search_service = MockCatalogSearchService::new();
    search_service
        .expect_get_product_suggestions()
        .returning(|_, limit| {
            let docs = (0..limit)
                .map(|i| ProductDocument::new(product_id(i as u128), format!("Lamp {i}")))
                .collect();
            Ok(SearchPage::new(docs, SearchPageSpec::first(limit), 100))
        });
    search_service
        .expect_get_brand_suggestions()
        .returning(|_, limit| {
            let docs = (0..limit)
                .map(|i| BrandDocument::new(brand_id(i as u128), format!("Lamp Brand {i}")))
                .collect();
            Ok(SearchPage::new(docs, SearchPageSpec::first(limit), 100))
        });
    search_service.expect_global_search().never();

    let suggestions_service = SearchSuggestionsServiceImpl::new(
        Arc::new(CatalogSearchConfig::default()),
        Arc::new(search_service),
    );

    let response = suggestions_service
        .get_suggestions(SuggestionsRequest::new("lamp", SuggestionType::All, 6))
        .await
        .unwrap();

    assert_eq!(3, response.products.len());
    assert_eq!(3, response.brands.len());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_blank_and_short_queries_rejected() {
    let harness = CatalogSearchHarness::new();

    assert_matches!(
        harness
            .suggestions_service
            .get_suggestions(SuggestionsRequest::new("   ", SuggestionType::All, 10))
            .await,
        Err(SearchSuggestionsError::Validation(
            SearchValidationError::EmptyQuery
        ))
    );

    assert_matches!(
        harness
            .suggestions_service
            .get_suggestions(SuggestionsRequest::new(" p ", SuggestionType::All, 10))
            .await,
        Err(SearchSuggestionsError::Validation(
            SearchValidationError::QueryTooShort { min_length: 2 }
        ))
    );
}

#[test_log::test(tokio::test)]
async fn test_limit_defaults_and_clamps() {
    let harness = CatalogSearchHarness::new();
    phone_catalog(&harness, 60).await;

    let defaulted = harness
        .suggestions_service
        .get_suggestions(SuggestionsRequest::new("phone", SuggestionType::Products, 0))
        .await
        .unwrap();
    assert_eq!(10, defaulted.products.len());

    let clamped = harness
        .suggestions_service
        .get_suggestions(SuggestionsRequest::new("phone", SuggestionType::Products, 500))
        .await
        .unwrap();
    assert_eq!(50, clamped.products.len());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
