use std::{net::SocketAddr, sync::Arc, time::Duration};

use agrisaarthi::{config, routes, store::JsonFileStore, templates, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrisaarthi=info,tower_http=info".into()),
        )
        .init();

    let settings = config::load();

    let hbs = match templates::build_handlebars(&settings.templates_dir) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("failed to load templates from {}: {}", settings.templates_dir, e);
            return;
        }
    };

    let blob = match JsonFileStore::open(&settings.data_dir) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("failed to open data dir {}: {}", settings.data_dir, e);
            return;
        }
    };

    let state = match AppState::new(settings.clone(), hbs, blob) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to load stored state: {}", e);
            return;
        }
    };

    // kept alive for the whole process; dropping it stops polling
    let _monitor = state
        .monitor()
        .spawn(Duration::from_secs(settings.alert_poll_secs));

    let app = routes::app(state);

    let addr = match settings.host.parse::<std::net::IpAddr>() {
        Ok(ip) => SocketAddr::from((ip, settings.port)),
        Err(e) => {
            tracing::error!("invalid HOST {}: {}", settings.host, e);
            return;
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            return;
        }
    };

    tracing::info!("listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
    }
}
