use hr_server::{build_router, cors_layer, logger, seed, state::AppState};

use hr_auth::{JwtValidator, TokenIssuer};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = hr_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = hr_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting hr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    hr_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Seed the admin account so a fresh install can log in
    seed::ensure_admin_user(&pool, &config.auth).await;

    // Uploads directory must exist before the static route serves it
    let uploads_dir = config.uploads_dir();
    std::fs::create_dir_all(&uploads_dir)?;

    // validate() already required the secret; this keeps the type honest
    let jwt_secret = config
        .auth
        .jwt_secret
        .clone()
        .ok_or_else(|| hr_config::ConfigError::invalid("auth.jwt_secret is required"))?;

    // Build application state
    let state = AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::with_hs256(
            jwt_secret.as_bytes(),
            config.auth.token_ttl_minutes,
        )),
        jwt_validator: Arc::new(JwtValidator::with_hs256(jwt_secret.as_bytes())),
        uploads_dir,
    };

    // Build router
    let app = build_router(state, cors_layer(&config.cors.allowed_origins));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
