// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{CountResponse, DeleteByQueryResponse, SearchResponse};
use crate::ElasticsearchConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const ELASTIC_USER: &str = "elastic";

/// Thin wrapper over the Elasticsearch REST API
pub struct ElasticsearchClient {
    http: reqwest::Client,
    base_url: Url,
    password: Option<String>,
}

impl ElasticsearchClient {
    pub fn init(config: &ElasticsearchConfig) -> Result<Self, ElasticsearchClientError> {
        let mut base_url = Url::parse(&config.url)
            .map_err(|e| ElasticsearchClientError::InvalidUrl(format!("{}: {e}", config.url)))?;

        // Relative paths are resolved against the last segment otherwise
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            password: config.password.clone(),
        })
    }

    fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ElasticsearchClientError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ElasticsearchClientError::InvalidUrl(format!("{path}: {e}")))?;

        let builder = self.http.request(method, url);

        Ok(match &self.password {
            Some(password) => builder.basic_auth(ELASTIC_USER, Some(password)),
            None => builder,
        })
    }

    async fn ensure_success(response: Response) -> Result<Response, ElasticsearchClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ElasticsearchClientError::Status { status, body })
    }

    async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
    ) -> Result<T, ElasticsearchClientError> {
        let response = Self::ensure_success(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn cluster_health(&self) -> Result<serde_json::Value, ElasticsearchClientError> {
        Self::send_json(self.request(Method::GET, "_cluster/health")?).await
    }

    pub async fn index_exists(&self, index: &str) -> Result<bool, ElasticsearchClientError> {
        let response = self.request(Method::HEAD, index)?.send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            _ => Self::ensure_success(response).await.map(|_| true),
        }
    }

    pub async fn create_index(
        &self,
        index: &str,
        body: &serde_json::Value,
    ) -> Result<(), ElasticsearchClientError> {
        let request = self.request(Method::PUT, index)?.json(body);
        Self::ensure_success(request.send().await?).await?;
        Ok(())
    }

    /// Creates or replaces the document, visible to searches once this returns
    pub async fn index_document(
        &self,
        index: &str,
        id: &str,
        source: &serde_json::Value,
    ) -> Result<(), ElasticsearchClientError> {
        let request = self
            .request(Method::PUT, &format!("{index}/_doc/{id}"))?
            .query(&[("refresh", "wait_for")])
            .json(source);

        Self::ensure_success(request.send().await?).await?;
        Ok(())
    }

    /// Returns `false` if there was no such document
    pub async fn delete_document(
        &self,
        index: &str,
        id: &str,
    ) -> Result<bool, ElasticsearchClientError> {
        let response = self
            .request(Method::DELETE, &format!("{index}/_doc/{id}"))?
            .query(&[("refresh", "wait_for")])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            _ => Self::ensure_success(response).await.map(|_| true),
        }
    }

    pub async fn delete_all_documents(
        &self,
        index: &str,
    ) -> Result<u64, ElasticsearchClientError> {
        let response = self
            .request(Method::POST, &format!("{index}/_delete_by_query"))?
            .query(&[("refresh", "true"), ("conflicts", "proceed")])
            .json(&serde_json::json!({ "query": { "match_all": {} } }))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(0);
        }

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<DeleteByQueryResponse>().await?.deleted)
    }

    pub async fn search(
        &self,
        index: &str,
        body: &serde_json::Value,
    ) -> Result<SearchResponse, ElasticsearchClientError> {
        let request = self
            .request(Method::POST, &format!("{index}/_search"))?
            .json(body);

        Self::send_json(request).await
    }

    pub async fn count(&self, index: &str) -> Result<u64, ElasticsearchClientError> {
        let response = self
            .request(Method::GET, &format!("{index}/_count"))?
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(0);
        }

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<CountResponse>().await?.count)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum ElasticsearchClientError {
    #[error("Invalid Elasticsearch URL {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Elasticsearch responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
