//! Attendance-reminder notification entrypoint.
//!
//! Same run-to-completion shape as the duty notifier: one composition, one
//! dispatch, exit 0 whatever the delivery outcome.

use chrono::Local;
use tracing_subscriber::EnvFilter;

use herald_common::config::AppConfig;
use herald_common::types::{DeliveryTarget, DispatchResult};
use herald_notifier::dispatch::Dispatcher;
use herald_notifier::recipient::resolve_recipient;
use herald_schedule::compose::ReminderComposer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("attendance_notifier=info,herald_notifier=info,herald_schedule=info")
        }))
        .init();

    tracing::info!("Attendance notifier starting...");

    let config = AppConfig::from_env()?;

    let recipient = resolve_recipient(
        &config.debug,
        config.line_user_id.as_deref(),
        config.main_channel_id.as_deref(),
    )?;

    let today = if config.debug.use_debug_date {
        config.debug_date
    } else {
        Local::now().date_naive()
    };

    let composer = ReminderComposer::new(
        config.location_info_url.clone(),
        config.season_schedule_url.clone(),
    );
    let messages = composer.compose(today);

    let target = DeliveryTarget {
        recipient_id: recipient,
        token: config.line_api_token.clone(),
    };
    let dispatcher = Dispatcher::new(config.debug);

    match dispatcher.send(&target, &messages).await {
        Ok(DispatchResult::Sent) => tracing::info!("attendance reminder delivered"),
        Ok(DispatchResult::Logged { .. }) => {
            tracing::info!("attendance reminder logged (log-only mode)")
        }
        Ok(DispatchResult::Failed { status, body }) => {
            tracing::error!(status, body = %body, "attendance reminder rejected")
        }
        Err(e) => tracing::error!(error = %e, "attendance reminder not delivered"),
    }

    Ok(())
}
