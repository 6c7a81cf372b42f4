use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tc_api::{create_app, AppState, Integrations, Repositories};
use tc_core::repositories::InMemoryOtpStore;
use tc_core::services::OtpSweeper;
use tc_infra::ai::GeminiHintClient;
use tc_infra::cache::{RedisClient, RedisOtpStore};
use tc_infra::database::{
    DatabasePool, MySqlFavoriteRepository, MySqlMessageRepository, MySqlUserRepository,
};
use tc_infra::payment::RazorpayGateway;
use tc_infra::sms::create_sms_service;
use tc_shared::{AppConfig, LogFormat, LoggingConfig, OtpStoreKind};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting TutorConnect API server");

    let repos = build_repositories(&config).await?;
    let integrations = Integrations {
        sms: create_sms_service(&config.sms),
        payments: Arc::new(RazorpayGateway::new(config.payment.clone())?),
        hints: Arc::new(GeminiHintClient::new(config.ai.clone())?),
    };

    let state = web::Data::new(AppState::new(repos, integrations, &config));

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, max_payload_size));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("binding {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

/// MySQL when `DATABASE_URL` is set, in-memory otherwise; OTP challenges go
/// to Redis when `OTP_STORE=redis`
async fn build_repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
    let mut repos = match &config.database {
        Some(database) => {
            let pool = DatabasePool::new(database.clone())
                .await
                .context("connecting to MySQL")?;
            if pool.runs_migrations() {
                pool.run_migrations().await.context("running migrations")?;
            }
            info!(stats = %pool.get_statistics(), "Using MySQL storage");

            let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
            Repositories {
                users: users.clone(),
                reviews: users,
                messages: Arc::new(MySqlMessageRepository::new(pool.get_pool().clone())),
                favorites: Arc::new(MySqlFavoriteRepository::new(pool.get_pool().clone())),
                otp_store: Arc::new(InMemoryOtpStore::new()),
                backend: "mysql",
            }
        }
        None => {
            warn!("DATABASE_URL not set; data is kept in memory and lost on restart");
            Repositories::in_memory()
        }
    };

    match config.otp.store {
        OtpStoreKind::Redis => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .context("connecting to Redis")?;
            repos.otp_store = Arc::new(RedisOtpStore::new(client));
            info!("OTP challenges stored in Redis");
        }
        OtpStoreKind::Memory => {
            let interval = Duration::from_secs(config.otp.sweep_interval_seconds.max(1));
            let sweeper = Arc::new(OtpSweeper::new(repos.otp_store.clone(), interval));
            sweeper.start_background_task();
            info!(
                interval_secs = interval.as_secs(),
                "OTP challenges stored in memory; single instance only"
            );
        }
    }

    Ok(repos)
}
