mod routes;
mod settings;
mod singleton;
mod state;
mod store;

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::settings::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure only one instance is running
    let _lock = singleton::acquire_lock()?;

    let config = ServerConfig::load()?;
    let state = AppState::new(&config)?;

    // The calendar frontend runs in a browser
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::events::router())
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    println!("evcal-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
