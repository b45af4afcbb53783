use chrono::NaiveDate;
use serde::Deserialize;

/// Default document links, overridable per deployment.
const DEFAULT_ROSTER_DOC_URL: &str =
    "https://akashicsoftware.github.io/tclan_files/external_files/202504to202511.pdf";
const DEFAULT_LOCATION_INFO_URL: &str =
    "https://akashicsoftware.github.io/tclan_files/external_files/ground_map.pdf";
const DEFAULT_SEASON_SCHEDULE_URL: &str =
    "https://akashicsoftware.github.io/tclan_files/external_files/scr.pdf";

/// Debug switches, read once at startup and never mutated.
///
/// The three switches are independent: redirecting the recipient to the
/// debug user does not imply log-only mode, and vice versa.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DebugConfig {
    /// Log the payload instead of performing the network send.
    pub log_instead_of_send: bool,
    /// Deliver to the debug user id instead of the production channel.
    pub use_debug_recipient: bool,
    /// Use the pinned date instead of the wall-clock date.
    pub use_debug_date: bool,
}

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// LINE Messaging API channel access token
    pub line_api_token: String,

    /// Debug recipient: a personal LINE user id
    pub line_user_id: Option<String>,

    /// Production channel for pickup-duty notifications
    pub driver_channel_id: Option<String>,

    /// Production channel for attendance reminders
    pub main_channel_id: Option<String>,

    /// Duty roster document link
    pub roster_doc_url: String,

    /// Ground location link
    pub location_info_url: String,

    /// Season schedule document link
    pub season_schedule_url: String,

    /// Mention prepended to the missing-roster operator alert (default: "@ops")
    pub alert_mention: String,

    /// Debug switches
    pub debug: DebugConfig,

    /// Date used when `debug.use_debug_date` is set (default: 2025-04-28)
    pub debug_date: NaiveDate,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            line_api_token: std::env::var("LINE_API_TOKEN")
                .map_err(|_| anyhow::anyhow!("LINE_API_TOKEN environment variable is required"))?,
            line_user_id: std::env::var("LINE_USER_ID").ok(),
            driver_channel_id: std::env::var("LINE_GROUP_ID_DRIVER_CHANNEL").ok(),
            main_channel_id: std::env::var("LINE_GROUP_ID_MAIN_CHANNEL").ok(),
            roster_doc_url: std::env::var("ROSTER_DOC_URL")
                .unwrap_or_else(|_| DEFAULT_ROSTER_DOC_URL.to_string()),
            location_info_url: std::env::var("LOCATION_INFO_URL")
                .unwrap_or_else(|_| DEFAULT_LOCATION_INFO_URL.to_string()),
            season_schedule_url: std::env::var("SEASON_SCHEDULE_URL")
                .unwrap_or_else(|_| DEFAULT_SEASON_SCHEDULE_URL.to_string()),
            alert_mention: std::env::var("ALERT_MENTION").unwrap_or_else(|_| "@ops".to_string()),
            debug: DebugConfig {
                log_instead_of_send: env_bool("HERALD_DEBUG_LOG_ONLY")?,
                use_debug_recipient: env_bool("HERALD_DEBUG_RECIPIENT")?,
                use_debug_date: env_bool("HERALD_DEBUG_DATE")?,
            },
            debug_date: std::env::var("HERALD_DEBUG_DATE_VALUE")
                .unwrap_or_else(|_| "2025-04-28".to_string())
                .parse()
                .map_err(|_| {
                    anyhow::anyhow!("HERALD_DEBUG_DATE_VALUE must be a YYYY-MM-DD date")
                })?,
        })
    }
}

/// Read a boolean environment variable, defaulting to `false` when unset.
fn env_bool(name: &str) -> anyhow::Result<bool> {
    std::env::var(name)
        .unwrap_or_else(|_| "false".to_string())
        .parse()
        .map_err(|_| anyhow::anyhow!("{name} must be \"true\" or \"false\""))
}
