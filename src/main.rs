use anyhow::Result;
use pitwall_voice::{create_router, AppState, Config};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = Config::load("config/pitwall")?;

    info!("{} v0.1.0", cfg.service.name);
    if cfg.livekit.url.is_empty() {
        warn!("LiveKit server URL is not configured; clients cannot connect");
    } else {
        info!("LiveKit server URL: {}", cfg.livekit.url);
    }

    if !cfg.livekit.has_credentials() {
        warn!("LiveKit signing credentials are not configured; token requests will fail");
    }

    let state = AppState::new(cfg.livekit.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
