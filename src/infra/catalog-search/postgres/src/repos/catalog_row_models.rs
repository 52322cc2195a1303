// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use catalog_search::{Brand, BrandId, Product, ProductAttributes, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) const BRAND_COLUMNS: &str = r#"
    id, name, description, slug, is_active, created_at, updated_at, created_by, updated_by
"#;

// Products with their brand columns prefixed, `p` and `b` aliases expected
pub(crate) const PRODUCT_WITH_BRAND_COLUMNS: &str = r#"
    p.id, p.name, p.description, p.slug, p.price, p.image_path, p.is_active,
    p.categories, p.tags, p.attributes, p.view_count, p.order_count, p.rating,
    p.created_at, p.updated_at, p.created_by, p.updated_by, p.brand_id,
    b.name AS brand_name,
    b.description AS brand_description,
    b.slug AS brand_slug,
    b.is_active AS brand_is_active,
    b.created_at AS brand_created_at,
    b.updated_at AS brand_updated_at,
    b.created_by AS brand_created_by,
    b.updated_by AS brand_updated_by
"#;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BrandRowModel {
    pub id: BrandId,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl From<BrandRowModel> for Brand {
    fn from(row: BrandRowModel) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            slug: row.slug,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            created_by: row.created_by,
            updated_by: row.updated_by,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRowModel {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub price: Decimal,
    pub image_path: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub attributes: Option<Json<ProductAttributes>>,
    pub view_count: i32,
    pub order_count: i32,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub brand_id: Option<BrandId>,

    // LEFT JOIN side, all null when the product has no brand
    pub brand_name: Option<String>,
    pub brand_description: Option<String>,
    pub brand_slug: Option<String>,
    pub brand_is_active: Option<bool>,
    pub brand_created_at: Option<DateTime<Utc>>,
    pub brand_updated_at: Option<DateTime<Utc>>,
    pub brand_created_by: Option<String>,
    pub brand_updated_by: Option<String>,
}

impl ProductRowModel {
    fn joined_brand(&mut self) -> Option<Brand> {
        let (
            Some(id),
            Some(name),
            Some(slug),
            Some(is_active),
            Some(created_at),
            Some(updated_at),
        ) = (
            self.brand_id,
            self.brand_name.take(),
            self.brand_slug.take(),
            self.brand_is_active,
            self.brand_created_at,
            self.brand_updated_at,
        )
        else {
            return None;
        };

        Some(Brand {
            id,
            name,
            description: self.brand_description.take(),
            slug,
            is_active,
            created_at,
            updated_at,
            created_by: self.brand_created_by.take(),
            updated_by: self.brand_updated_by.take(),
        })
    }
}

impl From<ProductRowModel> for Product {
    fn from(mut row: ProductRowModel) -> Self {
        let brand = row.joined_brand();

        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            slug: row.slug,
            price: row.price,
            image_path: row.image_path,
            is_active: row.is_active,
            categories: row.categories,
            tags: row.tags,
            attributes: row.attributes.map(|Json(attributes)| attributes),
            view_count: row.view_count,
            order_count: row.order_count,
            rating: row.rating,
            created_at: row.created_at,
            updated_at: row.updated_at,
            created_by: row.created_by,
            updated_by: row.updated_by,
            brand_id: row.brand_id,
            brand,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
