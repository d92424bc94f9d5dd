use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::bail;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use bosan_api::auth::{AppState, AppStateInner, hash_password};
use bosan_api::routes;
use bosan_api::sessions::{SessionStore, run_prune_loop};
use bosan_store::{Store, seed};
use bosan_types::models::{NewUser, Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bosan=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("BOSAN_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("BOSAN_PORT")
        .unwrap_or_else(|_| "5000".into())
        .parse()?;
    let session_ttl_hours: i64 = std::env::var("BOSAN_SESSION_TTL_HOURS")
        .unwrap_or_else(|_| "24".into())
        .parse()?;

    // The store is volatile; seed the starter content on every boot.
    let store = Store::new();
    seed::seed(&store);

    // A bootstrap admin exists only when explicitly configured, since
    // registration always produces plain members.
    if let Ok(admin_password) = std::env::var("BOSAN_ADMIN_PASSWORD") {
        let password = hash_password(&admin_password)?;
        match store.create_user(NewUser {
            username: "admin".into(),
            email: "admin@bosan.org".into(),
            password,
            full_name: "BOSAN Administrator".into(),
            role: Role::Admin,
            specialty: None,
            year_elevated: None,
            profile_image: None,
        }) {
            Ok(admin) => info!("Seeded bootstrap admin ({})", admin.id),
            Err(e) => bail!("Bootstrap admin seeding failed: {}", e),
        }
    }

    // Shared state
    let sessions = SessionStore::new(session_ttl_hours);
    tokio::spawn(run_prune_loop(sessions.clone(), 3600));

    let state: AppState = Arc::new(AppStateInner { store, sessions });

    let app = routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("BOSAN server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
