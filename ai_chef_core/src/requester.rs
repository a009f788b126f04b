use ai_chef_model::{ErrorResponse, RecipeRequest, RecipeResult};
use log::{debug, error, warn};
use serde_json::Value;

use crate::app_config::ConfigError;
use crate::backend::{RawResponse, RecipeBackend};
use crate::notice::{Notice, NoticeQueue};
use crate::StateSlot;

pub type Outcome = Result<RecipeResult, Notice>;

/// Identifies one generate action. Only the most recent ticket may touch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequesterState {
    pub title: String,
    pub notices: NoticeQueue,
    result: Option<RecipeResult>,
    loading: bool,
    issued: u64,
}

impl RequesterState {
    pub fn result(&self) -> Option<&RecipeResult> {
        self.result.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "로딩중..."
        } else {
            "레시피 만들기"
        }
    }

    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.loading = true;
        self.result = None;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Applies a finished request. Stale tickets are dropped without touching anything,
    /// the newer request still owns the loading flag.
    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        if !self.is_current(ticket) {
            debug!("Dropping stale recipe response {ticket:?}");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(notice) => {
                self.notices.push(notice);
            }
        }
        true
    }

    /// Refuses an action before anything was sent.
    pub fn reject(&mut self, notice: Notice) {
        self.loading = false;
        self.notices.push(notice);
    }
}

fn classify_failure(response: RawResponse) -> Notice {
    let RawResponse { status, body } = response;
    // any json at all counts as an error body, only the sentinel fields need a shape
    let parsed =
        serde_json::from_str::<Value>(&body).map(|value| ErrorResponse::from_json(&value));
    let quota = status == 429 || parsed.as_ref().is_ok_and(ErrorResponse::is_quota_exhausted);
    if quota {
        Notice::QuotaExhausted
    } else if parsed.is_ok() {
        Notice::HttpFailure { status, body }
    } else {
        Notice::UnparseableFailure { status, body }
    }
}

/// Turns a response of the recipe function into a result or the notice to show.
pub fn classify(response: RawResponse) -> Outcome {
    if !response.is_success() {
        warn!("Recipe function returned {}", response.status);
        return Err(classify_failure(response));
    }
    let value: Value = serde_json::from_str(&response.body).map_err(|err| {
        error!("Recipe response is not json: {err}");
        Notice::Unexpected
    })?;
    if let Some(reported) = value.get("error") {
        let message = match reported {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Err(Notice::FunctionError(message));
    }
    serde_json::from_value::<RecipeResult>(value).map_err(|err| {
        error!("Recipe response has an unexpected shape: {err}");
        Notice::Unexpected
    })
}

pub async fn request_recipe<B: RecipeBackend + ?Sized>(backend: &B, title: &str) -> Outcome {
    let request = RecipeRequest {
        title: title.to_string(),
    };
    match backend.invoke_recipe(&request).await {
        Ok(response) => classify(response),
        Err(err) => {
            error!("Recipe request failed: {err}");
            Err(Notice::Unexpected)
        }
    }
}

/// One press of the generate button, start to finish.
pub async fn generate_recipe<S, B>(slot: &S, backend: Result<&B, &ConfigError>)
where
    S: StateSlot<RequesterState> + ?Sized,
    B: RecipeBackend + ?Sized,
{
    let backend = match backend {
        Ok(backend) => backend,
        Err(err) => {
            warn!("Not requesting a recipe: {err}");
            slot.update_state(|state| state.reject(Notice::MissingConfig));
            return;
        }
    };
    let Some((ticket, title)) = slot.update_state(|state| (state.begin(), state.title.clone()))
    else {
        return;
    };
    let outcome = request_recipe(backend, &title).await;
    slot.update_state(|state| state.complete(ticket, outcome));
}
