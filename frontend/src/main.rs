use ai_chef_core::app_config::BackendConfig;
use ai_chef_frontend::{App, Connection};
use leptos::*;
use log::{error, info};

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    info!("Starting");

    let config = BackendConfig::from_build_env();
    if let Err(err) = &config {
        error!("Backend configuration is invalid, recipe calls will be refused: {err}");
    }
    let connection = Connection::from_config(config);

    mount_to_body(move || {
        view! {
            <App connection />
        }
    })
}
