// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type SearchIndexName = &'static str;
pub type SearchFieldPath = &'static str;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A document type that lives in its own search index
pub trait CatalogDocument:
    Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static
{
    const SCHEMA: CatalogIndexSchema;

    fn document_id(&self) -> Uuid;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct CatalogIndexSchema {
    pub index_name: SearchIndexName,
    /// Singular entity name, used in logs
    pub entity_kind: &'static str,
    pub fields: &'static [SearchSchemaField],
}

impl CatalogIndexSchema {
    pub fn find_field(&self, path: &str) -> Option<&SearchSchemaField> {
        self.fields.iter().find(|f| f.path == path)
    }

    /// Tells whether the field is analyzed text, as opposed to values that
    /// are compared as they are stored
    pub fn is_text_field(&self, path: &str) -> bool {
        self.find_field(path).is_some_and(|f| {
            matches!(
                f.role,
                SearchSchemaFieldRole::Text { .. } | SearchSchemaFieldRole::Autocomplete
            )
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct SearchSchemaField {
    pub path: SearchFieldPath,
    pub role: SearchSchemaFieldRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSchemaFieldRole {
    /// Full-text field. A keyword sub-field allows sorting and aggregating on
    /// the exact value.
    Text { keyword_subfield: bool },
    /// Prefix-searchable copy of a text field
    Autocomplete,
    Keyword,
    Boolean,
    Integer,
    Float,
    /// Exact decimal amount with two fractional digits
    Price,
    DateTime,
    Object,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
