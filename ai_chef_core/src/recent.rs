use ai_chef_model::RecentRecipeRecord;
use log::error;

use crate::app_config::ConfigError;
use crate::backend::{fetch_rows, QueryError, RecipeBackend, TableQuery};
use crate::StateSlot;

pub const LOAD_FAILED_MESSAGE: &str = "레시피를 불러오는 중 오류가 발생했습니다.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentState {
    records: Vec<RecentRecipeRecord>,
    loading: bool,
    error: Option<String>,
}

impl Default for RecentState {
    fn default() -> Self {
        RecentState {
            records: vec![],
            loading: true,
            error: None,
        }
    }
}

/// What the list should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Records(&'a [RecentRecipeRecord]),
}

impl RecentState {
    pub fn apply(&mut self, fetched: Result<Vec<RecentRecipeRecord>, QueryError>) {
        match fetched {
            Ok(records) => self.records = records,
            Err(err) => {
                error!("Error fetching recent recipes: {err}");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn view(&self) -> RecentView<'_> {
        if self.loading {
            RecentView::Loading
        } else if let Some(error) = &self.error {
            RecentView::Failed(error)
        } else if self.records.is_empty() {
            RecentView::Empty
        } else {
            RecentView::Records(&self.records)
        }
    }
}

pub async fn load_recent<S, B>(slot: &S, backend: Result<&B, &ConfigError>)
where
    S: StateSlot<RecentState> + ?Sized,
    B: RecipeBackend + ?Sized,
{
    let fetched = match backend {
        Ok(backend) => fetch_rows(backend, &TableQuery::recent_recipes()).await,
        Err(err) => Err(QueryError::Unconfigured(err.clone())),
    };
    slot.update_state(|state| state.apply(fetched));
}
