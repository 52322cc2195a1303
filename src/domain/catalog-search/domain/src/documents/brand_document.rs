// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BRANDS_INDEX_NAME: &str = "brands";

pub mod brand_fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const NAME_AUTOCOMPLETE: &str = "nameAutocomplete";
    pub const SLUG: &str = "slug";
    pub const IS_ACTIVE: &str = "isActive";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const CREATED_BY: &str = "createdBy";
    pub const UPDATED_BY: &str = "updatedBy";
    pub const PRODUCT_COUNT: &str = "productCount";
}

const BRAND_SCHEMA_FIELDS: &[SearchSchemaField] = &[
    SearchSchemaField {
        path: brand_fields::ID,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: brand_fields::NAME,
        role: SearchSchemaFieldRole::Text {
            keyword_subfield: true,
        },
    },
    SearchSchemaField {
        path: brand_fields::DESCRIPTION,
        role: SearchSchemaFieldRole::Text {
            keyword_subfield: false,
        },
    },
    SearchSchemaField {
        path: brand_fields::NAME_AUTOCOMPLETE,
        role: SearchSchemaFieldRole::Autocomplete,
    },
    SearchSchemaField {
        path: brand_fields::SLUG,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: brand_fields::IS_ACTIVE,
        role: SearchSchemaFieldRole::Boolean,
    },
    SearchSchemaField {
        path: brand_fields::CREATED_AT,
        role: SearchSchemaFieldRole::DateTime,
    },
    SearchSchemaField {
        path: brand_fields::UPDATED_AT,
        role: SearchSchemaFieldRole::DateTime,
    },
    SearchSchemaField {
        path: brand_fields::CREATED_BY,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: brand_fields::UPDATED_BY,
        role: SearchSchemaFieldRole::Keyword,
    },
    SearchSchemaField {
        path: brand_fields::PRODUCT_COUNT,
        role: SearchSchemaFieldRole::Integer,
    },
];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Brand as stored in the search index.
///
/// `product_count` is the number of active products at the time of the last
/// synchronization of this brand, it is not kept live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDocument {
    pub id: BrandId,
    name: String,
    pub description: Option<String>,
    name_autocomplete: String,
    pub slug: String,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    #[serde(default)]
    pub product_count: i64,
}

impl BrandDocument {
    pub fn new(id: BrandId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            name_autocomplete: name.clone(),
            name,
            description: None,
            slug: String::new(),
            is_active: true,
            created_at: None,
            updated_at: None,
            created_by: None,
            updated_by: None,
            product_count: 0,
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
}

impl CatalogDocument for BrandDocument {
    const SCHEMA: CatalogIndexSchema = CatalogIndexSchema {
        index_name: BRANDS_INDEX_NAME,
        entity_kind: "brand",
        fields: BRAND_SCHEMA_FIELDS,
    };

    fn document_id(&self) -> uuid::Uuid {
        self.id
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
