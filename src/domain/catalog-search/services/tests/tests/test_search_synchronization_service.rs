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

#[test_log::test(tokio::test)]
async fn test_sync_all_indexes_brands_with_active_product_counts() {
    let harness = CatalogSearchHarness::new();
    let acme = brand(1, "Acme");
    let globex = brand(2, "Globex");
    harness.save_catalog(
        vec![acme.clone(), globex.clone()],
        vec![
            product(1, "Anvil", "49.99", Some(&acme)),
            product(2, "Rocket Skates", "149.99", Some(&acme)),
            Product {
                is_active: false,
                ..product(3, "Giant Magnet", "89.00", Some(&acme))
            },
            product(4, "Lamp", "19.99", None),
        ],
    );

    let summary = harness.sync_service.sync_all().await.unwrap();

    assert_eq!(
        SyncSummary {
            brands_synced: 2,
            products_synced: 4,
        },
        summary
    );
    assert_eq!(4, harness.product_document_count().await);
    assert_eq!(2, harness.brand_document_count().await);

    let product_count = |id: BrandId| {
        harness
            .index
            .get_document_source(BRANDS_INDEX_NAME, &id)
            .unwrap()[brand_fields::PRODUCT_COUNT]
            .clone()
    };
    assert_eq!(serde_json::json!(2), product_count(acme.id));
    assert_eq!(serde_json::json!(0), product_count(globex.id));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_sync_product_twice_leaves_single_document() {
    let harness = CatalogSearchHarness::new();
    let mut anvil = product(1, "Anvil", "49.99", None);

    harness.sync_service.sync_product(&anvil).await.unwrap();
    anvil.name = "Heavy Anvil".to_string();
    harness.sync_service.sync_product(&anvil).await.unwrap();
    harness.sync_service.sync_product(&anvil).await.unwrap();

    assert_eq!(1, harness.product_document_count().await);
    let source = harness
        .index
        .get_document_source(PRODUCTS_INDEX_NAME, &anvil.id)
        .unwrap();
    assert_eq!("Heavy Anvil", source[product_fields::NAME]);
    assert_eq!("Heavy Anvil", source[product_fields::NAME_AUTOCOMPLETE]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_sync_by_id_reports_entities_missing_from_catalog() {
    let harness = CatalogSearchHarness::new();
    let acme = brand(1, "Acme");
    harness.save_catalog(vec![acme.clone()], vec![product(1, "Anvil", "49.99", Some(&acme))]);

    assert_matches!(
        harness.sync_service.sync_product_by_id(&product_id(1)).await,
        Ok(SyncEntityOutcome::Synced)
    );
    assert_matches!(
        harness.sync_service.sync_brand_by_id(&acme.id).await,
        Ok(SyncEntityOutcome::Synced)
    );
    assert_matches!(
        harness.sync_service.sync_product_by_id(&product_id(99)).await,
        Ok(SyncEntityOutcome::NotFoundInCatalog)
    );
    assert_matches!(
        harness.sync_service.sync_brand_by_id(&brand_id(99)).await,
        Ok(SyncEntityOutcome::NotFoundInCatalog)
    );

    assert_eq!(1, harness.product_document_count().await);
    assert_eq!(1, harness.brand_document_count().await);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn numbered_products(count: u128) -> Vec<Product> {
    (1..=count)
        .map(|i| product(i, &format!("Item {i:03}"), "10.00", None))
        .collect()
}

fn batch_sync_service(
    harness: &CatalogSearchHarness,
    product_repo: Arc<RecordingProductRepository>,
) -> SearchSynchronizationServiceImpl {
    SearchSynchronizationServiceImpl::new(
        Arc::new(CatalogSearchConfig::default()),
        product_repo,
        harness.brand_repo.clone(),
        harness.index.clone(),
        harness.index.clone(),
    )
}

#[test_log::test(tokio::test)]
async fn test_batch_sync_walks_pages_until_empty() {
    let harness = CatalogSearchHarness::new();
    harness.save_catalog(vec![], numbered_products(130));

    let product_repo = Arc::new(RecordingProductRepository::new(harness.product_repo.clone()));
    let sync_service = batch_sync_service(&harness, product_repo.clone());

    let report = sync_service.sync_all_products_batch(50).await.unwrap();

    assert_eq!(
        BatchSyncReport {
            pages: 3,
            total_synced: 130,
        },
        report
    );
    assert_eq!(vec![0, 50, 100, 150], product_repo.requested_offsets());
    assert_eq!(130, harness.product_document_count().await);
}

#[test_log::test(tokio::test)]
async fn test_batch_sync_zero_size_uses_default() {
    let harness = CatalogSearchHarness::new();
    harness.save_catalog(vec![], numbered_products(130));

    let product_repo = Arc::new(RecordingProductRepository::new(harness.product_repo.clone()));
    let sync_service = batch_sync_service(&harness, product_repo.clone());

    let report = sync_service.sync_all_products_batch(0).await.unwrap();

    assert_eq!(2, report.pages);
    assert_eq!(130, report.total_synced);
    assert_eq!(vec![0, 100, 200], product_repo.requested_offsets());
}

#[test_log::test(tokio::test)]
async fn test_batch_sync_of_empty_catalog() {
    let harness = CatalogSearchHarness::new();

    let report = harness
        .sync_service
        .sync_all_products_batch(25)
        .await
        .unwrap();

    assert_eq!(BatchSyncReport::default(), report);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_full_sync_stops_at_first_failure() {
    let harness = CatalogSearchHarness::new();
    harness.save_catalog(vec![], numbered_products(5));

    let sync_service = SearchSynchronizationServiceImpl::new(
        Arc::new(CatalogSearchConfig::default()),
        harness.product_repo.clone(),
        harness.brand_repo.clone(),
        Arc::new(FlakyProductIndex::new(harness.index.clone(), 2)),
        harness.index.clone(),
    );

    assert_matches!(
        sync_service.sync_all_products().await,
        Err(SyncError::Internal(_))
    );
    assert_eq!(2, harness.product_document_count().await);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_delete_brand_cascades_to_its_products() {
    let harness = CatalogSearchHarness::new();
    let acme = brand(1, "Acme");
    let globex = brand(2, "Globex");
    harness
        .index_catalog(
            vec![acme.clone(), globex.clone()],
            vec![
                product(1, "Anvil", "49.99", Some(&acme)),
                product(2, "Rocket Skates", "149.99", Some(&acme)),
                Product {
                    is_active: false,
                    ..product(3, "Giant Magnet", "89.00", Some(&acme))
                },
                product(4, "Hammock", "75.00", Some(&globex)),
                product(5, "Lamp", "19.99", None),
            ],
        )
        .await;

    let report = harness
        .sync_service
        .delete_brand_from_index(&acme.id)
        .await
        .unwrap();

    assert_eq!(
        CascadeDeleteReport {
            products_deleted: 3,
            cap_reached: false,
        },
        report
    );
    assert_eq!(1, harness.brand_document_count().await);
    assert_eq!(2, harness.product_document_count().await);
    assert!(
        harness
            .index
            .get_document_source(PRODUCTS_INDEX_NAME, &product_id(4))
            .is_some()
    );
}

#[test_log::test(tokio::test)]
async fn test_delete_brand_reports_reached_cap() {
    let harness = CatalogSearchHarness::with_config(CatalogSearchConfig {
        cascade_delete_cap: 2,
        ..CatalogSearchConfig::default()
    });
    let acme = brand(1, "Acme");
    harness
        .index_catalog(
            vec![acme.clone()],
            vec![
                product(1, "Anvil", "49.99", Some(&acme)),
                product(2, "Rocket Skates", "149.99", Some(&acme)),
                product(3, "Giant Magnet", "89.00", Some(&acme)),
            ],
        )
        .await;

    let report = harness
        .sync_service
        .delete_brand_from_index(&acme.id)
        .await
        .unwrap();

    assert_eq!(
        CascadeDeleteReport {
            products_deleted: 2,
            cap_reached: true,
        },
        report
    );
    assert_eq!(0, harness.brand_document_count().await);
    assert_eq!(1, harness.product_document_count().await);
}

#[test_log::test(tokio::test)]
async fn test_delete_brand_with_unbounded_cap_removes_all_products() {
    let harness = CatalogSearchHarness::with_config(CatalogSearchConfig {
        cascade_delete_cap: usize::MAX,
        ..CatalogSearchConfig::default()
    });
    let acme = brand(1, "Acme");
    harness
        .index_catalog(
            vec![acme.clone()],
            vec![
                product(1, "Anvil", "49.99", Some(&acme)),
                product(2, "Rocket Skates", "149.99", Some(&acme)),
            ],
        )
        .await;

    let report = harness
        .sync_service
        .delete_brand_from_index(&acme.id)
        .await
        .unwrap();

    assert_eq!(
        CascadeDeleteReport {
            products_deleted: 2,
            cap_reached: false,
        },
        report
    );
    assert_eq!(0, harness.product_document_count().await);
}

#[test_log::test(tokio::test)]
async fn test_delete_product_is_idempotent() {
    let harness = CatalogSearchHarness::new();
    harness
        .index_catalog(vec![], vec![product(1, "Anvil", "49.99", None)])
        .await;

    harness
        .sync_service
        .delete_product_from_index(&product_id(1))
        .await
        .unwrap();
    harness
        .sync_service
        .delete_product_from_index(&product_id(1))
        .await
        .unwrap();

    assert_eq!(0, harness.product_document_count().await);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_rebuild_drops_documents_missing_from_catalog() {
    let harness = CatalogSearchHarness::new();
    let acme = brand(1, "Acme");
    harness
        .index_catalog(vec![acme.clone()], vec![product(1, "Anvil", "49.99", Some(&acme))])
        .await;
    harness
        .index_product_document(ProductDocument::new(product_id(77), "Stale Product"))
        .await;
    harness
        .index_brand_document(BrandDocument::new(brand_id(77), "Stale Brand"))
        .await;

    let report = harness.sync_service.rebuild_search_index().await.unwrap();

    assert_eq!(
        RebuildReport {
            brands_deleted: 2,
            products_deleted: 2,
            brands_synced: 1,
            products_synced: 1,
        },
        report
    );
    assert_eq!(1, harness.product_document_count().await);
    assert_eq!(1, harness.brand_document_count().await);
    assert!(
        harness
            .index
            .get_document_source(PRODUCTS_INDEX_NAME, &product_id(77))
            .is_none()
    );
}

#[test_log::test(tokio::test)]
async fn test_concurrent_rebuild_is_rejected() {
    let harness = CatalogSearchHarness::new();
    let acme = brand(1, "Acme");
    harness.save_catalog(vec![acme.clone()], vec![product(1, "Anvil", "49.99", Some(&acme))]);

    let brand_repo = Arc::new(BlockingBrandRepository::new(harness.brand_repo.clone()));
    let sync_service = Arc::new(SearchSynchronizationServiceImpl::new(
        Arc::new(CatalogSearchConfig::default()),
        harness.product_repo.clone(),
        brand_repo.clone(),
        harness.index.clone(),
        harness.index.clone(),
    ));

    let first = tokio::spawn({
        let sync_service = sync_service.clone();
        async move { sync_service.rebuild_search_index().await }
    });

    brand_repo.entered.notified().await;

    assert_matches!(
        sync_service.rebuild_search_index().await,
        Err(SyncError::RebuildInProgress)
    );

    brand_repo.release.notify_one();
    let report = first.await.unwrap().unwrap();

    assert_eq!(1, report.brands_synced);
    assert_eq!(1, report.products_synced);
    assert_eq!(1, harness.brand_document_count().await);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
