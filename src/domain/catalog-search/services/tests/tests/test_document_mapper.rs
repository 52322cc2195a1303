// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search_services::DocumentMapper;
use pretty_assertions::assert_eq;

use crate::tests::utils::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_product_document_mirrors_autocomplete_fields() {
    let acme = brand(1, "Acme Outdoor");
    let skates = product(1, "Rocket Skates", "149.99", Some(&acme));

    let doc = DocumentMapper::product_document(&skates);

    assert_eq!("Rocket Skates", doc.name());
    assert_eq!(doc.name(), doc.name_autocomplete());
    assert_eq!(Some("Acme Outdoor"), doc.brand_name());
    assert_eq!(doc.brand_name(), doc.brand_name_autocomplete());
    assert_eq!(Some(acme.id), doc.brand_id());
    assert_eq!(Some("acme outdoor"), doc.brand_slug());
    assert_eq!(skates.price, doc.price);
    assert_eq!(Some(skates.created_at), doc.created_at);
    assert_eq!(skates.categories, doc.categories);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_product_document_without_brand() {
    let lamp = product(2, "Desk Lamp", "19.99", None);

    let doc = DocumentMapper::product_document(&lamp);

    assert_eq!(None, doc.brand_id());
    assert_eq!(None, doc.brand_name());
    assert_eq!(None, doc.brand_name_autocomplete());
    assert_eq!("Desk Lamp", doc.name_autocomplete());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_brand_document_carries_product_count() {
    let acme = brand(1, "Acme");

    let doc = DocumentMapper::brand_document(&acme, 42);

    assert_eq!(acme.id, doc.id);
    assert_eq!("Acme", doc.name());
    assert_eq!("Acme", doc.name_autocomplete());
    assert_eq!(42, doc.product_count);
    assert_eq!(acme.description, doc.description);
    assert!(doc.is_active);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
