use ai_chef_core::app_config::BackendConfig;
use ai_chef_core::backend::{RawResponse, RecipeBackend, TableQuery, TransportError};
use ai_chef_model::RecipeRequest;
use async_trait::async_trait;
use gloo_net::http;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to do some HTTP: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("Failed to do some JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<Error> for TransportError {
    fn from(err: Error) -> Self {
        TransportError::Request(err.to_string())
    }
}

async fn into_raw(resp: http::Response) -> Result<RawResponse, TransportError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|err| TransportError::Body(err.to_string()))?;
    Ok(RawResponse { status, body })
}

/// Talks to the managed backend: edge functions for generation, the table API for reads.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: BackendConfig,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        SupabaseClient { config }
    }

    async fn post_recipe(&self, request: &RecipeRequest) -> Result<http::Response, Error> {
        let url = self.config.function_url(ai_chef_core::backend::RECIPE_FUNCTION);
        let resp = http::Request::post(&url)
            .header("Content-Type", "application/json")
            .header("apikey", self.config.anon_key())
            .body(serde_json::to_string(request)?)?
            .send()
            .await?;
        Ok(resp)
    }

    async fn get_rows(&self, query: &TableQuery) -> Result<http::Response, Error> {
        let url = self.config.table_url(query.table);
        let pairs = query.query_pairs();
        let anon_key = self.config.anon_key();
        let resp = http::Request::get(&url)
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())))
            .header("apikey", anon_key)
            .header("Authorization", &format!("Bearer {anon_key}"))
            .header("Accept", "application/json")
            .send()
            .await?;
        Ok(resp)
    }
}

#[async_trait(?Send)]
impl RecipeBackend for SupabaseClient {
    async fn invoke_recipe(&self, request: &RecipeRequest) -> Result<RawResponse, TransportError> {
        let resp = self.post_recipe(request).await?;
        into_raw(resp).await
    }

    async fn select(&self, query: &TableQuery) -> Result<RawResponse, TransportError> {
        let resp = self.get_rows(query).await?;
        into_raw(resp).await
    }
}
