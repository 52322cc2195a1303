// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::*;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ACME_BRAND_ID: BrandId = Uuid::from_u128(0x0a01);
pub const GLOBEX_BRAND_ID: BrandId = Uuid::from_u128(0x0a02);
pub const DORMANT_BRAND_ID: BrandId = Uuid::from_u128(0x0a03);

pub const ROCKET_SKATES_ID: ProductId = Uuid::from_u128(0x0b01);
pub const ANVIL_ID: ProductId = Uuid::from_u128(0x0b02);
pub const GIANT_MAGNET_ID: ProductId = Uuid::from_u128(0x0b03);
pub const HAMMOCK_ID: ProductId = Uuid::from_u128(0x0b04);
pub const UNBRANDED_LAMP_ID: ProductId = Uuid::from_u128(0x0b05);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Catalog that every repository test suite expects to be loaded.
///
/// Acme has two active products and a retired one, Globex has one, the
/// dormant brand has none, and one product has no brand.
pub struct CatalogFixture {
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

impl CatalogFixture {
    pub fn new() -> Self {
        let acme = fixture_brand(ACME_BRAND_ID, "Acme", true);
        let globex = fixture_brand(GLOBEX_BRAND_ID, "Globex", true);
        let dormant = fixture_brand(DORMANT_BRAND_ID, "Dormant", false);

        let products = vec![
            Product {
                attributes: Some(ProductAttributes {
                    color: Some("red".to_string()),
                    weight: Some(2.5),
                    ..Default::default()
                }),
                ..fixture_product(
                    ROCKET_SKATES_ID,
                    "Rocket Skates",
                    Decimal::new(14999, 2),
                    Some(&acme),
                )
            },
            fixture_product(ANVIL_ID, "Anvil", Decimal::new(4999, 2), Some(&acme)),
            Product {
                is_active: false,
                ..fixture_product(
                    GIANT_MAGNET_ID,
                    "Giant Magnet",
                    Decimal::new(899, 2),
                    Some(&acme),
                )
            },
            fixture_product(HAMMOCK_ID, "Hammock", Decimal::new(7500, 2), Some(&globex)),
            fixture_product(UNBRANDED_LAMP_ID, "Desk Lamp", Decimal::new(1999, 2), None),
        ];

        Self {
            brands: vec![acme, globex, dormant],
            products,
        }
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    pub fn brand(&self, id: &BrandId) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == *id)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn fixture_time(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn fixture_brand(id: BrandId, name: &str, is_active: bool) -> Brand {
    Brand {
        id,
        name: name.to_string(),
        description: Some(format!("{name} brand")),
        slug: name.to_lowercase(),
        is_active,
        created_at: fixture_time(1),
        updated_at: fixture_time(2),
        created_by: Some("catalog-admin".to_string()),
        updated_by: None,
    }
}

pub fn fixture_product(
    id: ProductId,
    name: &str,
    price: Decimal,
    brand: Option<&Brand>,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: Some(format!("{name} for every occasion")),
        slug: name.to_lowercase().replace(' ', "-"),
        price,
        image_path: None,
        is_active: true,
        categories: vec!["outdoor".to_string()],
        tags: vec!["classic".to_string()],
        attributes: None,
        view_count: 10,
        order_count: 2,
        rating: 4.5,
        created_at: fixture_time(3),
        updated_at: fixture_time(4),
        created_by: Some("catalog-admin".to_string()),
        updated_by: None,
        brand_id: brand.map(|b| b.id),
        brand: brand.cloned(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
