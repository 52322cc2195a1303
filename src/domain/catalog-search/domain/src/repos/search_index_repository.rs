// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use uuid::Uuid;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Storage of one document type in the search index
#[async_trait::async_trait]
pub trait SearchIndexRepository<D: CatalogDocument>: Send + Sync {
    /// Inserts the document or replaces the one with the same id
    async fn upsert(&self, document: D) -> Result<(), InternalError>;

    /// Deleting an absent document is not an error
    async fn delete(&self, id: Uuid) -> Result<(), InternalError>;

    /// Removes every document, returns the number of removed documents
    async fn delete_all(&self) -> Result<u64, InternalError>;

    async fn search(&self, query: &CatalogSearchQuery) -> Result<SearchHits<D>, InternalError>;

    async fn count(&self) -> Result<u64, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait SearchIndexAdmin: Send + Sync {
    /// Cluster health, as reported by the index backend
    async fn health(&self) -> Result<serde_json::Value, InternalError>;

    /// Creates missing indices with their mappings
    async fn ensure_indices(&self) -> Result<(), InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
