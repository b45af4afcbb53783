//! Weekly pickup-duty notification entrypoint.
//!
//! Runs once per scheduled trigger. Delivery failures are logged, never
//! turned into a nonzero exit, so one bad run cannot wedge the external
//! scheduler; only missing configuration aborts.

use chrono::Local;
use tracing_subscriber::EnvFilter;

use herald_common::config::AppConfig;
use herald_common::types::{DeliveryTarget, DispatchResult};
use herald_notifier::dispatch::Dispatcher;
use herald_notifier::recipient::resolve_recipient;
use herald_schedule::compose::RosterComposer;
use herald_schedule::roster::DutyRoster;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("duty_notifier=info,herald_notifier=info,herald_schedule=info")
        }))
        .init();

    tracing::info!("Duty notifier starting...");

    let config = AppConfig::from_env()?;

    let recipient = resolve_recipient(
        &config.debug,
        config.line_user_id.as_deref(),
        config.driver_channel_id.as_deref(),
    )?;

    let today = if config.debug.use_debug_date {
        config.debug_date
    } else {
        Local::now().date_naive()
    };

    let composer = RosterComposer::new(
        DutyRoster::season_2025(),
        config.roster_doc_url.clone(),
        config.alert_mention.clone(),
    );
    let messages = composer.compose(today);

    let target = DeliveryTarget {
        recipient_id: recipient,
        token: config.line_api_token.clone(),
    };
    let dispatcher = Dispatcher::new(config.debug);

    match dispatcher.send(&target, &messages).await {
        Ok(DispatchResult::Sent) => tracing::info!("duty notification delivered"),
        Ok(DispatchResult::Logged { .. }) => {
            tracing::info!("duty notification logged (log-only mode)")
        }
        Ok(DispatchResult::Failed { status, body }) => {
            tracing::error!(status, body = %body, "duty notification rejected")
        }
        Err(e) => tracing::error!(error = %e, "duty notification not delivered"),
    }

    Ok(())
}
