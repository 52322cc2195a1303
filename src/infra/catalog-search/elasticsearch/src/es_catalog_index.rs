// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use catalog_search::*;
use dill::{Singleton, component, interface, scope};
use internal_error::{InternalError, ResultIntoInternal};
use uuid::Uuid;

use crate::es_client::ElasticsearchClient;
use crate::es_helpers::{
    ElasticsearchAggregationsParser,
    ElasticsearchIndexMappings,
    ElasticsearchQueryBuilder,
};
use crate::ElasticsearchConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Product and brand indices of an Elasticsearch cluster.
///
/// The client is created on first use, so wiring this component never
/// touches the network.
pub struct ElasticsearchCatalogIndex {
    config: Arc<ElasticsearchConfig>,
    client: tokio::sync::OnceCell<ElasticsearchClient>,
}

#[component(pub)]
#[scope(Singleton)]
#[interface(dyn SearchIndexRepository<ProductDocument>)]
#[interface(dyn SearchIndexRepository<BrandDocument>)]
#[interface(dyn SearchIndexAdmin)]
impl ElasticsearchCatalogIndex {
    pub fn new(config: Arc<ElasticsearchConfig>) -> Self {
        Self {
            config,
            client: tokio::sync::OnceCell::new(),
        }
    }

    async fn es_client(&self) -> Result<&ElasticsearchClient, InternalError> {
        let client = self
            .client
            .get_or_try_init(|| async { ElasticsearchClient::init(&self.config) })
            .await
            .int_err()?;
        Ok(client)
    }

    fn index_name<D: CatalogDocument>(&self) -> String {
        self.config.index_name(D::SCHEMA.index_name)
    }

    async fn ensure_index(&self, schema: &CatalogIndexSchema) -> Result<(), InternalError> {
        let client = self.es_client().await?;
        let index_name = self.config.index_name(schema.index_name);

        if client.index_exists(&index_name).await.int_err()? {
            tracing::debug!(%index_name, "Search index already exists");
            return Ok(());
        }

        let body = ElasticsearchIndexMappings::build_create_index_body(schema, &self.config);
        client.create_index(&index_name, &body).await.int_err()?;

        tracing::info!(%index_name, entity_kind = schema.entity_kind, "Created search index");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[common_macros::method_names_consts]
#[async_trait::async_trait]
impl<D: CatalogDocument> SearchIndexRepository<D> for ElasticsearchCatalogIndex {
    #[tracing::instrument(
        level = "debug",
        name = ElasticsearchCatalogIndex_upsert,
        skip_all,
        fields(index = D::SCHEMA.index_name, id = %document.document_id())
    )]
    async fn upsert(&self, document: D) -> Result<(), InternalError> {
        let client = self.es_client().await?;
        let source = serde_json::to_value(&document).int_err()?;

        client
            .index_document(
                &self.index_name::<D>(),
                &document.document_id().to_string(),
                &source,
            )
            .await
            .int_err()
    }

    #[tracing::instrument(
        level = "debug",
        name = ElasticsearchCatalogIndex_delete,
        skip_all,
        fields(index = D::SCHEMA.index_name, %id)
    )]
    async fn delete(&self, id: Uuid) -> Result<(), InternalError> {
        let client = self.es_client().await?;

        let found = client
            .delete_document(&self.index_name::<D>(), &id.to_string())
            .await
            .int_err()?;

        if !found {
            tracing::debug!("Document was not indexed, nothing to delete");
        }

        Ok(())
    }

    #[tracing::instrument(
        level = "info",
        name = ElasticsearchCatalogIndex_delete_all,
        skip_all,
        fields(index = D::SCHEMA.index_name)
    )]
    async fn delete_all(&self) -> Result<u64, InternalError> {
        let client = self.es_client().await?;

        let deleted = client
            .delete_all_documents(&self.index_name::<D>())
            .await
            .int_err()?;

        tracing::info!(deleted, "Deleted all documents");
        Ok(deleted)
    }

    #[tracing::instrument(
        level = "debug",
        name = ElasticsearchCatalogIndex_search,
        skip_all,
        fields(index = D::SCHEMA.index_name)
    )]
    async fn search(&self, query: &CatalogSearchQuery) -> Result<SearchHits<D>, InternalError> {
        let client = self.es_client().await?;

        let body = ElasticsearchQueryBuilder::build_search_query(&D::SCHEMA, query);
        tracing::trace!(%body, "Elasticsearch query");

        let es_response = client
            .search(&self.index_name::<D>(), &body)
            .await
            .int_err()?;

        let hits = es_response
            .hits
            .hits
            .into_iter()
            .map(|hit| {
                let Some(source) = hit.source else {
                    return InternalError::bail(format!(
                        "Hit {} in index {} carries no source",
                        hit.id.unwrap_or_default(),
                        hit.index
                    ));
                };
                serde_json::from_value::<D>(source).int_err()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_hits = es_response
            .hits
            .total
            .map_or(hits.len() as u64, |total| total.value);

        tracing::debug!(
            took_ms = es_response.took,
            total_hits,
            num_hits = hits.len(),
            "Search completed"
        );

        Ok(SearchHits {
            total_hits,
            hits,
            aggregations: ElasticsearchAggregationsParser::parse(
                &query.aggregations,
                es_response.aggregations.as_ref(),
            ),
        })
    }

    #[tracing::instrument(
        level = "debug",
        name = ElasticsearchCatalogIndex_count,
        skip_all,
        fields(index = D::SCHEMA.index_name)
    )]
    async fn count(&self) -> Result<u64, InternalError> {
        let client = self.es_client().await?;
        client.count(&self.index_name::<D>()).await.int_err()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[common_macros::method_names_consts]
#[async_trait::async_trait]
impl SearchIndexAdmin for ElasticsearchCatalogIndex {
    #[tracing::instrument(level = "debug", name = ElasticsearchCatalogIndex_health, skip_all)]
    async fn health(&self) -> Result<serde_json::Value, InternalError> {
        let client = self.es_client().await?;
        client.cluster_health().await.int_err()
    }

    #[tracing::instrument(
        level = "info",
        name = ElasticsearchCatalogIndex_ensure_indices,
        skip_all
    )]
    async fn ensure_indices(&self) -> Result<(), InternalError> {
        self.ensure_index(&ProductDocument::SCHEMA).await?;
        self.ensure_index(&BrandDocument::SCHEMA).await?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
