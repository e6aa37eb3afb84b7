/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (HTTP/CORS/Bearer など)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    extract::Path,
    routing::{any, get},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::AppError;
use crate::repos::memory::InMemoryProductStore;
use crate::repos::product_repo::PgProductStore;
use crate::repos::store::ProductStore;
use crate::services::auth::policy::PolicySet;
use crate::services::auth::{AuthService, TokenIssuer};
use crate::state::AppState;
use crate::{api, middleware};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,products_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost".
        tracing::error!(?info, "panic");

        // In development, fail fast. In production, keep the server running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting products API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let store: Arc<dyn ProductStore> = match &config.database_url {
        Some(url) => Arc::new(PgProductStore::connect(url).await?),
        None => {
            tracing::warn!("DATABASE_URL not set; using the seeded in-memory store");
            Arc::new(InMemoryProductStore::seeded())
        }
    };

    let auth = Arc::new(AuthService::new(
        config.jwt_secret_key.as_bytes(),
        &config.jwt_issuer,
        &config.jwt_audience,
    ));

    let issuer = Arc::new(TokenIssuer::new(
        config.jwt_secret_key.as_bytes(),
        config.jwt_issuer.clone(),
        config.jwt_audience.clone(),
        config.access_token_ttl_seconds,
    ));

    let policies = Arc::new(PolicySet::builtin());
    let create_delay = config.create_delay_ms.map(Duration::from_millis);

    Ok(AppState::new(store, auth, issuer, policies, create_delay))
}

fn build_router(state: AppState, config: &Config) -> Router {
    async fn health() -> &'static str {
        "ok"
    }

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/{culture}/v1", api::v1::routes(state.clone()))
        .nest("/api/{culture}/v2", api::v2::routes(state.clone()))
        // Unknown version tokens resolve here, before any handler dispatch.
        // Static segments (v1/v2) win over the {version} param.
        .route("/api/{culture}/{version}/{*rest}", any(unsupported_version))
        .with_state(state);

    let router = middleware::http::apply(router);
    middleware::cors::apply(router, config)
}

async fn unsupported_version(
    Path((_culture, version, _rest)): Path<(String, String, String)>,
) -> AppError {
    AppError::UnsupportedVersion { version }
}
