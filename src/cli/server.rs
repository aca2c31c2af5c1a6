use anyhow::Result;
use recipefinder_db::Storage;
use recipefinder_gateway::{MealDb, NutritionApi};
use recipefinder_nutrition::NutritionStore;
use recipefinder_planner::{DayCapacity, PlannerStore};
use recipefinder_profile::ProfileStore;
use recipefinder_recipe::FavoritesStore;
use recipefinder_shopping::ShoppingStore;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting recipefinder server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // Set up database connection pools with optimized PRAGMAs
    // Write pool: 1 connection for all write operations
    let write_pool = crate::db::create_write_pool(&config.database.url).await?;

    // Read pool: Multiple connections for read-only queries
    let read_pool_size = config.database.max_connections;
    let read_pool = crate::db::create_read_pool(&config.database.url, read_pool_size).await?;

    let storage = Storage::new(read_pool.clone(), write_pool.clone());

    let state = AppState {
        planner: PlannerStore::with_capacity(
            storage.clone(),
            DayCapacity::from_config(config.planner.day_capacity),
        ),
        favorites: FavoritesStore::new(storage.clone()),
        shopping: ShoppingStore::new(storage.clone()),
        nutrition: NutritionStore::new(storage.clone()),
        profile: ProfileStore::new(storage.clone()),
        mealdb: MealDb::new(&config.mealdb.base_url),
        nutrition_api: NutritionApi::new(
            &config.nutrition.base_url,
            &config.nutrition.app_id,
            &config.nutrition.app_key,
        ),
        config,
        pool: read_pool.clone(),
    };

    let app = crate::routes::router(state)
        // Add cache control middleware (no-cache for HTML, cache for static files)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        // Enable Brotli and Gzip compression for all text assets
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    // Set up graceful shutdown signal handler
    let shutdown_signal = async {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal");
            },
            _ = terminate => {
                tracing::info!("Received SIGTERM signal");
            },
        }

        tracing::info!("Starting graceful shutdown...");
    };

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    // Close database pools
    tracing::info!("Closing database pools...");
    read_pool.close().await;
    write_pool.close().await;
    tracing::info!("Database pools closed");

    tracing::info!("Graceful shutdown complete");

    Ok(())
}
