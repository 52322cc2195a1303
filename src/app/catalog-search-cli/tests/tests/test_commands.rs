// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use assert_matches::assert_matches;
use catalog_search_cli::cli::Cli;
use catalog_search_cli::{CLIConfig, CLIError, configure_catalog, run_command};
use catalog_search_inmem::{InMemoryCatalogBrandRepository, InMemoryCatalogProductRepository};
use catalog_search_repo_tests::{ACME_BRAND_ID, CatalogFixture, HAMMOCK_ID};
use clap::Parser;
use dill::Catalog;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_sync_all_then_health() {
    let harness = CliHarness::new();

    let summary = harness.run(&["sync", "all"]).await.unwrap();
    assert_eq!(json!({ "brandsSynced": 3, "productsSynced": 5 }), summary);

    let health = harness.run(&["health"]).await.unwrap();
    assert_eq!(5, health["productDocuments"]);
    assert_eq!(3, health["brandDocuments"]);
    assert_eq!("green", health["cluster"]["status"]);
}

#[test_log::test(tokio::test)]
async fn test_sync_single_entities() {
    let harness = CliHarness::new();

    let synced = harness
        .run(&["sync", "product", &HAMMOCK_ID.to_string()])
        .await
        .unwrap();
    assert_eq!(
        json!({ "entity": "product", "id": HAMMOCK_ID, "outcome": "synced" }),
        synced
    );

    let missing_id = Uuid::from_u128(0xdead);
    let missing = harness
        .run(&["sync", "brand", &missing_id.to_string()])
        .await
        .unwrap();
    assert_eq!(
        json!({ "entity": "brand", "id": missing_id, "outcome": "notFoundInCatalog" }),
        missing
    );
}

#[test_log::test(tokio::test)]
async fn test_search_products_of_brand() {
    let harness = CliHarness::new();
    harness.run(&["sync", "all"]).await.unwrap();

    let page = harness
        .run(&[
            "search",
            "products",
            "--brand-id",
            &ACME_BRAND_ID.to_string(),
            "--sort-by",
            "name",
            "--sort-direction",
            "asc",
        ])
        .await
        .unwrap();

    // The retired magnet is not active, the unbranded lamp lacks a brand id
    // and passes the brand filter
    assert_eq!(
        vec!["Anvil", "Desk Lamp", "Rocket Skates"],
        product_names(&page["content"])
    );
    assert_eq!(3, page["totalElements"]);
    assert_eq!(20, page["size"]);
}

#[test_log::test(tokio::test)]
async fn test_suggest_products() {
    let harness = CliHarness::new();
    harness.run(&["sync", "products"]).await.unwrap();

    let response = harness
        .run(&["suggest", "ham", "--type", "products"])
        .await
        .unwrap();

    assert_eq!(vec!["Hammock"], product_names(&response["products"]));
    assert_eq!(json!([]), response["brands"]);
}

#[test_log::test(tokio::test)]
async fn test_delete_brand_cascades() {
    let harness = CliHarness::new();
    harness.run(&["sync", "all"]).await.unwrap();

    let report = harness
        .run(&["delete", "brand", &ACME_BRAND_ID.to_string()])
        .await
        .unwrap();
    assert_eq!(json!({ "productsDeleted": 3, "capReached": false }), report);

    let health = harness.run(&["health"]).await.unwrap();
    assert_eq!(2, health["productDocuments"]);
    assert_eq!(2, health["brandDocuments"]);
}

#[test_log::test(tokio::test)]
async fn test_rebuild_from_empty_index() {
    let harness = CliHarness::new();

    let report = harness.run(&["rebuild"]).await.unwrap();
    assert_eq!(
        json!({
            "brandsDeleted": 0,
            "productsDeleted": 0,
            "brandsSynced": 3,
            "productsSynced": 5,
        }),
        report
    );
}

#[test_log::test(tokio::test)]
async fn test_validation_errors_are_usage_errors() {
    let harness = CliHarness::new();

    let res = harness.run(&["search", "global", "  "]).await;
    assert_matches!(res, Err(CLIError::UsageError { .. }));

    let res = harness
        .run(&["search", "products", "--min-price", "100", "--max-price", "10"])
        .await;
    assert_matches!(res, Err(err @ CLIError::UsageError { .. }) if err.exit_code() == 2);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Harness
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct CliHarness {
    catalog: Catalog,
}

impl CliHarness {
    fn new() -> Self {
        let catalog = configure_catalog(&CLIConfig::default()).unwrap().build();

        let fixture = CatalogFixture::new();
        catalog
            .get_one::<InMemoryCatalogBrandRepository>()
            .unwrap()
            .save_brands(fixture.brands);
        catalog
            .get_one::<InMemoryCatalogProductRepository>()
            .unwrap()
            .save_products(fixture.products);

        Self { catalog }
    }

    async fn run(&self, args: &[&str]) -> Result<Value, CLIError> {
        let cli = Cli::try_parse_from(
            std::iter::once("catalog-search-admin").chain(args.iter().copied()),
        )
        .unwrap();

        run_command(&self.catalog, cli.command)
            .await
            .map(|output| output.0)
    }
}

fn product_names(products: &Value) -> Vec<&str> {
    products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
