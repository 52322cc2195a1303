// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const PRODUCTS_INDEX_NAME: &str = "products";

pub mod product_fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const SLUG: &str = "slug";
    pub const NAME_AUTOCOMPLETE: &str = "nameAutocomplete";
    pub const BRAND_ID: &str = "brandId";
    pub const BRAND_NAME: &str = "brandName";
    pub const BRAND_SLUG: &str = "brandSlug";
    pub const BRAND_NAME_AUTOCOMPLETE: &str = "brandNameAutocomplete";
    pub const CATEGORIES: &str = "categories";
    pub const TAGS: &str = "tags";
    pub const PRICE: &str = "price";
    pub const RATING: &str = "rating";
    pub const VIEW_COUNT: &str = "viewCount";
    pub const ORDER_COUNT: &str = "orderCount";
    pub const IS_ACTIVE: &str = "isActive";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const CREATED_BY: &str = "createdBy";
    pub const UPDATED_BY: &str = "updatedBy";
    pub const ATTRIBUTES: &str = "attributes";
}

const PRODUCT_SCHEMA_FIELDS: &[SearchSchemaField] = &[
    SearchSchemaField {
        path: product_fields::ID,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: product_fields::NAME,
        role: SearchSchemaFieldRole::Text {
            keyword_subfield: true,
        },
    },
    SearchSchemaField {
        path: product_fields::DESCRIPTION,
        role: SearchSchemaFieldRole::Text {
            keyword_subfield: false,
        },
    },
    SearchSchemaField {
        path: product_fields::SLUG,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: product_fields::NAME_AUTOCOMPLETE,
        role: SearchSchemaFieldRole::Autocomplete,
    },
    SearchSchemaField {
        path: product_fields::BRAND_ID,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: product_fields::BRAND_NAME,
        role: SearchSchemaFieldRole::Text {
            keyword_subfield: true,
        },
    },
    SearchSchemaField {
        path: product_fields::BRAND_SLUG,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: product_fields::BRAND_NAME_AUTOCOMPLETE,
        role: SearchSchemaFieldRole::Autocomplete,
    },
    SearchSchemaField {
        path: product_fields::CATEGORIES,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: product_fields::TAGS,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: product_fields::PRICE,
        role: SearchSchemaFieldRole::Price,
    },
    SearchSchemaField {
        path: product_fields::RATING,
        role: SearchSchemaFieldRole::Float,
    },
    SearchSchemaField {
        path: product_fields::VIEW_COUNT,
        role: SearchSchemaFieldRole::Integer,
    },
    SearchSchemaField {
        path: product_fields::ORDER_COUNT,
        role: SearchSchemaFieldRole::Integer,
    },
    SearchSchemaField {
        path: product_fields::IS_ACTIVE,
        role: SearchSchemaFieldRole::Boolean,
    },
    SearchSchemaField {
        path: product_fields::CREATED_AT,
        role: SearchSchemaFieldRole::DateTime,
    },
    SearchSchemaField {
        path: product_fields::UPDATED_AT,
        role: SearchSchemaFieldRole::DateTime,
    },
    SearchSchemaField {
        path: product_fields::CREATED_BY,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: product_fields::UPDATED_BY,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: product_fields::ATTRIBUTES,
        role: SearchSchemaFieldRole::Object,
    },
];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Denormalized product, as stored in the search index.
///
/// The name, the brand and their autocomplete copies can only be changed
/// together, so the copies never diverge from the originals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    pub id: ProductId,
    name: String,
    pub description: Option<String>,
    pub slug: String,
    name_autocomplete: String,
    brand_id: Option<BrandId>,
    brand_name: Option<String>,
    brand_slug: Option<String>,
    brand_name_autocomplete: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub price: Decimal,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub view_count: i32,
    #[serde(default)]
    pub order_count: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub attributes: Option<ProductAttributes>,
}

impl ProductDocument {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            name_autocomplete: name.clone(),
            name,
            description: None,
            slug: String::new(),
            brand_id: None,
            brand_name: None,
            brand_slug: None,
            brand_name_autocomplete: None,
            categories: Vec::new(),
            tags: Vec::new(),
            price: Decimal::ZERO,
            rating: 0.0,
            view_count: 0,
            order_count: 0,
            is_active: true,
            created_at: None,
            updated_at: None,
            created_by: None,
            updated_by: None,
            attributes: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_autocomplete(&self) -> &str {
        &self.name_autocomplete
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.name_autocomplete.clone_from(&self.name);
    }

    pub fn brand_id(&self) -> Option<BrandId> {
        self.brand_id
    }

    pub fn brand_name(&self) -> Option<&str> {
        self.brand_name.as_deref()
    }

    pub fn brand_slug(&self) -> Option<&str> {
        self.brand_slug.as_deref()
    }

    pub fn brand_name_autocomplete(&self) -> Option<&str> {
        self.brand_name_autocomplete.as_deref()
    }

    pub fn set_brand(&mut self, brand: &Brand) {
        self.brand_id = Some(brand.id);
        self.brand_name = Some(brand.name.clone());
        self.brand_slug = Some(brand.slug.clone());
        self.brand_name_autocomplete = Some(brand.name.clone());
    }

    pub fn clear_brand(&mut self) {
        self.brand_id = None;
        self.brand_name = None;
        self.brand_slug = None;
        self.brand_name_autocomplete = None;
    }
}

impl CatalogDocument for ProductDocument {
    const SCHEMA: CatalogIndexSchema = CatalogIndexSchema {
        index_name: PRODUCTS_INDEX_NAME,
        entity_kind: "product",
        fields: PRODUCT_SCHEMA_FIELDS,
    };

    fn document_id(&self) -> uuid::Uuid {
        self.id
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
