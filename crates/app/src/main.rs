use std::net::SocketAddr;

use chrono_tz::Tz;
use migration::{Migrator, MigratorTrait};
use server::Clock;
use settings::Database;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;
    let mut tasks = tokio::task::JoinSet::new();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "budget_tracker={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let server = settings.server;
    let timezone: Tz = server
        .timezone
        .parse()
        .map_err(|err| format!("invalid timezone {:?}: {err}", server.timezone))?;
    let addr: SocketAddr = format!("{}:{}", server.bind, server.port).parse()?;

    tasks.spawn(async move {
        let db = match parse_database(&server.database).await {
            Ok(db) => db,
            Err(err) => {
                tracing::error!("failed to initialize database: {err}");
                return;
            }
        };

        let engine = match engine::Engine::builder().database(db).build().await {
            Ok(engine) => engine,
            Err(err) => {
                tracing::error!("failed to build engine from database: {err}");
                return;
            }
        };

        if server.seed_sample_data {
            match engine.seed_sample_data().await {
                Ok(true) => tracing::info!("database was empty, sample data loaded"),
                Ok(false) => tracing::info!("database already has transactions, skipping sample data"),
                Err(err) => tracing::warn!("failed to load sample data: {err}"),
            }
        }

        tracing::info!(%timezone, "starting budget tracker on {addr}");
        server::run(engine, Clock::System(timezone), addr).await;
    });

    while tasks.join_next().await.is_some() {
        tasks.shutdown().await;
    }

    Ok(())
}

async fn parse_database(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{path}?mode=rwc"),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
