// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::{Brand, BrandDocument, Product, ProductDocument};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Converts catalog entities into search documents
pub struct DocumentMapper {}

impl DocumentMapper {
    /// Brand fields are only filled when the product has a joined brand
    pub fn product_document(product: &Product) -> ProductDocument {
        let mut doc = ProductDocument::new(product.id, product.name.clone());

        doc.description.clone_from(&product.description);
        doc.slug.clone_from(&product.slug);
        doc.categories.clone_from(&product.categories);
        doc.tags.clone_from(&product.tags);
        doc.price = product.price;
        doc.rating = product.rating;
        doc.view_count = product.view_count;
        doc.order_count = product.order_count;
        doc.is_active = product.is_active;
        doc.created_at = Some(product.created_at);
        doc.updated_at = Some(product.updated_at);
        doc.created_by.clone_from(&product.created_by);
        doc.updated_by.clone_from(&product.updated_by);
        doc.attributes.clone_from(&product.attributes);

        if let Some(brand) = &product.brand {
            doc.set_brand(brand);
        }

        doc
    }

    pub fn brand_document(brand: &Brand, active_product_count: u64) -> BrandDocument {
        let mut doc = BrandDocument::new(brand.id, brand.name.clone());

        doc.description.clone_from(&brand.description);
        doc.slug.clone_from(&brand.slug);
        doc.is_active = brand.is_active;
        doc.created_at = Some(brand.created_at);
        doc.updated_at = Some(brand.updated_at);
        doc.created_by.clone_from(&brand.created_by);
        doc.updated_by.clone_from(&brand.updated_by);
        doc.product_count = i64::try_from(active_product_count).unwrap_or(i64::MAX);

        doc
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
