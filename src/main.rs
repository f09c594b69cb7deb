use log::error;
use std::process;
use storefront::server::{self, AppState};
use storefront::types::catalog::Catalog;
use storefront::utilities::{config::Settings, logger};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logger::init(settings.log_level) {
        eprintln!("Error initializing logger: {}", e);
        process::exit(1);
    }

    let app_state = match AppState::from_settings(&settings, Catalog::storefront()) {
        Ok(app_state) => app_state,
        Err(e) => {
            error!("Error setting up order sink: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = server::init(&settings, app_state).await {
        error!("Error starting server: {}", e);
        process::exit(1);
    }
}
