use ai_chef_model::{RecentRecipeRecord, RecipeRequest};
use async_trait::async_trait;
use log::debug;
use thiserror::Error as ThisError;

use crate::app_config::ConfigError;

pub const RECIPE_FUNCTION: &str = "recipe";
pub const RECIPES_TABLE: &str = "recipes";
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum TransportError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
}

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("Backend is not configured: {0}")]
    Unconfigured(#[from] ConfigError),
    #[error("Query failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Query transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("Failed to decode rows: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Status and body text of a finished HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        RawResponse {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

/// A read against one table, in the shape the PostgREST endpoint takes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: &'static str,
    pub columns: &'static str,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl TableQuery {
    pub fn recent_recipes() -> Self {
        TableQuery {
            table: RECIPES_TABLE,
            columns: "*",
            order: Some(Order {
                column: "created_at",
                ascending: false,
            }),
            limit: Some(RECENT_LIMIT),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("select", self.columns.to_string())];
        if let Some(Order { column, ascending }) = self.order {
            let direction = if ascending { "asc" } else { "desc" };
            pairs.push(("order", format!("{column}.{direction}")));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// The two calls the UI makes against the managed backend. Implementations only move
/// bytes; classification and decoding happen in this crate.
#[async_trait(?Send)]
pub trait RecipeBackend {
    async fn invoke_recipe(&self, request: &RecipeRequest) -> Result<RawResponse, TransportError>;

    async fn select(&self, query: &TableQuery) -> Result<RawResponse, TransportError>;
}

pub async fn fetch_rows<B: RecipeBackend + ?Sized>(
    backend: &B,
    query: &TableQuery,
) -> Result<Vec<RecentRecipeRecord>, QueryError> {
    let response = backend.select(query).await?;
    if !response.is_success() {
        return Err(QueryError::Status {
            status: response.status,
            body: response.body,
        });
    }
    let rows: Option<Vec<RecentRecipeRecord>> = serde_json::from_str(&response.body)?;
    let rows = rows.unwrap_or_default();
    debug!("Fetched {} rows from {}", rows.len(), query.table);
    Ok(rows)
}
