//! Daylog Server - bootstraps the activity service.

use clap::Parser;
use futures::stream::{self, StreamExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daylog_server::config::DEFAULT_LOG_FILTER;
use daylog_server::{ActivityTopic, Args, DaylogService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting daylog server");

    let config = Args::parse().into_config();
    tracing::info!(
        seed_path = ?config.seed_path,
        id_length = config.store.id_length,
        "configuration loaded"
    );

    let service = DaylogService::from_config(&config)?;
    tracing::info!(
        users = service.users().len(),
        activities = service.activities().len(),
        "store ready"
    );

    // Log every activity event until shutdown.
    let mut events = stream::select_all(
        ActivityTopic::ALL.map(|topic| service.subscribe(topic).map(move |activity| (topic, activity))),
    );
    let logger = tokio::spawn(async move {
        while let Some((topic, activity)) = events.next().await {
            tracing::info!(
                %topic,
                activity_id = %activity.id,
                user_id = %activity.user_id,
                date = %activity.date,
                "activity event"
            );
        }
    });

    tracing::info!("service ready, waiting for shutdown signal");
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl+c");
    }
    tracing::info!("received shutdown signal");

    // Dropping the service closes every stream, which ends the logger.
    drop(service);
    if let Err(e) = logger.await {
        tracing::error!(error = %e, "event logger failed");
    }

    tracing::info!("shutdown complete");
    Ok(())
}
