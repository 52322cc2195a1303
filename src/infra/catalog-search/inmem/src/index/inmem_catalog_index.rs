// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use catalog_search::*;
use dill::{Singleton, component, interface, scope};
use internal_error::{InternalError, ResultIntoInternal};
use serde_json::Value;
use uuid::Uuid;

use super::inmem_document_matcher::{self as matcher, ScoredDocument};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Search index kept in memory, one document map per index name.
///
/// Documents are stored in their serialized form, so filters and sorting see
/// the same field names and representations as a real index would.
pub struct InMemoryCatalogIndex {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    indices: HashMap<SearchIndexName, BTreeMap<Uuid, Value>>,
}

impl State {
    fn index_mut(&mut self, index_name: SearchIndexName) -> &mut BTreeMap<Uuid, Value> {
        self.indices.entry(index_name).or_default()
    }

    fn document_count(&self, index_name: SearchIndexName) -> usize {
        self.indices.get(index_name).map_or(0, BTreeMap::len)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[scope(Singleton)]
#[interface(dyn SearchIndexRepository<ProductDocument>)]
#[interface(dyn SearchIndexRepository<BrandDocument>)]
#[interface(dyn SearchIndexAdmin)]
impl InMemoryCatalogIndex {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    /// Stored form of a document, as a real index would return its source
    pub fn get_document_source(&self, index_name: SearchIndexName, id: &Uuid) -> Option<Value> {
        let guard = self.state.lock().unwrap();
        guard.indices.get(index_name)?.get(id).cloned()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl<D: CatalogDocument> SearchIndexRepository<D> for InMemoryCatalogIndex {
    async fn upsert(&self, document: D) -> Result<(), InternalError> {
        let id = document.document_id();
        let source = serde_json::to_value(&document).int_err()?;

        let mut guard = self.state.lock().unwrap();
        guard.index_mut(D::SCHEMA.index_name).insert(id, source);

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), InternalError> {
        let mut guard = self.state.lock().unwrap();
        guard.index_mut(D::SCHEMA.index_name).remove(&id);

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, InternalError> {
        let mut guard = self.state.lock().unwrap();
        let index = guard.index_mut(D::SCHEMA.index_name);
        let deleted = index.len() as u64;
        index.clear();

        Ok(deleted)
    }

    async fn search(&self, query: &CatalogSearchQuery) -> Result<SearchHits<D>, InternalError> {
        let guard = self.state.lock().unwrap();
        let Some(index) = guard.indices.get(D::SCHEMA.index_name) else {
            return Ok(SearchHits::default());
        };

        let mut matched: Vec<_> = index
            .iter()
            .filter(|(_, source)| matcher::filter_matches(source, &query.filter))
            .filter_map(|(id, source)| {
                matcher::text_score(&D::SCHEMA, source, query.text.as_ref()).map(|score| {
                    ScoredDocument {
                        id: *id,
                        source,
                        score,
                    }
                })
            })
            .collect();

        matched.sort_by(|a, b| matcher::compare_scored(a, b, &query.sort));

        let aggregations = matcher::aggregate(&matched, &query.aggregations);

        let hits = matched
            .iter()
            .skip(query.page.offset)
            .take(query.page.limit)
            .map(|doc| serde_json::from_value::<D>(doc.source.clone()).int_err())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchHits {
            total_hits: matched.len() as u64,
            hits,
            aggregations,
        })
    }

    async fn count(&self) -> Result<u64, InternalError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.document_count(D::SCHEMA.index_name) as u64)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SearchIndexAdmin for InMemoryCatalogIndex {
    async fn health(&self) -> Result<Value, InternalError> {
        let guard = self.state.lock().unwrap();

        Ok(serde_json::json!({
            "status": "green",
            "backend": "inmem",
            "indices": {
                PRODUCTS_INDEX_NAME: guard.document_count(PRODUCTS_INDEX_NAME),
                BRANDS_INDEX_NAME: guard.document_count(BRANDS_INDEX_NAME),
            },
        }))
    }

    async fn ensure_indices(&self) -> Result<(), InternalError> {
        let mut guard = self.state.lock().unwrap();
        guard.index_mut(PRODUCTS_INDEX_NAME);
        guard.index_mut(BRANDS_INDEX_NAME);

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
