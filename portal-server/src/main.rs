// Portal Server - main.rs
use actix_web::{web, App, HttpServer};
use common::{setup_tracing, Config};
use portal_server::api;
use portal_server::state::PortalState;
use portal_server::static_files::{self, StaticFiles};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Setup tracing
    setup_tracing();

    // Load configuration
    let config = Config::from_env();

    // Save address before moving config into web::Data
    let server_addr = config.portal_server_addr.clone();
    let static_config = StaticFiles::from(&config.static_files);

    tracing::info!("Starting Portal Server on {}", server_addr);

    // Shared state: session manager over the file-backed store
    let state = web::Data::new(PortalState::from_config(&config));
    let config_data = web::Data::new(config);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .app_data(state.clone())
            .configure(api::configure)
            .configure(|cfg| static_files::configure(cfg, static_config.clone()))
    })
    .bind(&server_addr)?
    .run()
    .await
}
