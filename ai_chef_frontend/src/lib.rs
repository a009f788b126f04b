pub mod api;
pub mod components;

use std::rc::Rc;

use ai_chef_core::app_config::{BackendConfig, ConfigError};
use ai_chef_core::StateSlot;
use leptos::*;

pub use api::SupabaseClient;
pub use components::{RecentRecipesList, RecipeRequester};

/// The backend client, or the reason there is none. Built once at startup and shared by
/// every component.
#[derive(Debug, Clone)]
pub struct Connection(Rc<Result<SupabaseClient, ConfigError>>);

impl Connection {
    pub fn from_config(config: Result<BackendConfig, ConfigError>) -> Self {
        Connection(Rc::new(config.map(SupabaseClient::new)))
    }

    pub fn backend(&self) -> Result<&SupabaseClient, &ConfigError> {
        (*self.0).as_ref()
    }
}

/// Component state held in a signal.
pub struct SignalSlot<T: 'static>(pub RwSignal<T>);

impl<T: 'static> StateSlot<T> for SignalSlot<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[component]
pub fn App(connection: Connection) -> impl IntoView {
    let requester_connection = connection.clone();
    view! {
        <RecipeRequester connection = requester_connection />
        <hr />
        <RecentRecipesList connection />
    }
}
