//! Recipient resolution — debug override vs production channel.

use herald_common::config::DebugConfig;
use herald_common::error::AppError;

/// Choose the outbound recipient identifier for this run.
///
/// When `use_debug_recipient` is set the debug user id always wins,
/// regardless of the production channel id and independently of log-only
/// mode. The selected identifier must be present; a missing one is a
/// configuration error and aborts the run.
pub fn resolve_recipient(
    debug: &DebugConfig,
    user_id: Option<&str>,
    channel_id: Option<&str>,
) -> Result<String, AppError> {
    if debug.use_debug_recipient {
        user_id.map(str::to_string).ok_or_else(|| {
            AppError::Config(
                "LINE_USER_ID is required when HERALD_DEBUG_RECIPIENT is set".to_string(),
            )
        })
    } else {
        channel_id.map(str::to_string).ok_or_else(|| {
            AppError::Config("production channel id is not configured".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debug_recipient(enabled: bool) -> DebugConfig {
        DebugConfig {
            use_debug_recipient: enabled,
            ..Default::default()
        }
    }

    #[test]
    fn test_debug_override_wins_regardless_of_channel_id() {
        let resolved = resolve_recipient(
            &debug_recipient(true),
            Some("dummy_user_id"),
            Some("dummy_channel_id"),
        )
        .unwrap();
        assert_eq!(resolved, "dummy_user_id");
    }

    #[test]
    fn test_production_channel_used_when_override_is_off() {
        let resolved = resolve_recipient(
            &debug_recipient(false),
            Some("dummy_user_id"),
            Some("dummy_channel_id"),
        )
        .unwrap();
        assert_eq!(resolved, "dummy_channel_id");
    }

    #[test]
    fn test_override_applies_independently_of_log_only_mode() {
        let debug = DebugConfig {
            log_instead_of_send: true,
            use_debug_recipient: true,
            use_debug_date: false,
        };
        let resolved =
            resolve_recipient(&debug, Some("dummy_user_id"), Some("dummy_channel_id")).unwrap();
        assert_eq!(resolved, "dummy_user_id");
    }

    #[test]
    fn test_missing_selected_identifier_is_a_config_error() {
        let err = resolve_recipient(&debug_recipient(true), None, Some("dummy_channel_id"))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = resolve_recipient(&debug_recipient(false), Some("dummy_user_id"), None)
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
