use serde::{Deserialize, Serialize};

pub use serde_json;

/// Body of the recipe generation call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeRequest {
    pub title: String,
}

/// A freshly generated recipe. Only ever held in UI state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeResult {
    pub title: String,
    pub recipe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One row of the `recipes` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RecentRecipeRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: String,
}

/// Error body of the recipe function. Every field is optional, the function is not
/// consistent about which ones it sends.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

pub const QUOTA_FAILURE_ERROR: &str = "openai_recipe_failed";
pub const QUOTA_FAILURE_DETAIL: &str = "Insufficient_quota";

impl ErrorResponse {
    /// Picks the usable fields out of any json body. A field of the wrong type counts
    /// as absent, so an odd `status` never hides the quota sentinel.
    pub fn from_json(value: &serde_json::Value) -> Self {
        ErrorResponse {
            status: value.get("status").and_then(serde_json::Value::as_i64),
            error: value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            detail: value.get("detail").cloned(),
        }
    }

    pub fn is_quota_exhausted(&self) -> bool {
        self.error.as_deref() == Some(QUOTA_FAILURE_ERROR)
            && matches!(&self.detail, Some(serde_json::Value::String(detail)) if detail == QUOTA_FAILURE_DETAIL)
    }
}

impl RecentRecipeRecord {
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

impl RecipeResult {
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}
