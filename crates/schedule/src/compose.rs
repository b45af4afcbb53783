//! Message composers — turn "today" plus static configuration into LINE
//! push payloads.
//!
//! Composers are pure functions of the date and their construction-time
//! configuration; the only clock access is the `ts` cache-buster appended to
//! document links.

use chrono::NaiveDate;

use herald_common::types::{MessageBlock, UriAction};
use herald_common::urls::with_timestamp;

/// Composes the weekly pickup-duty notification from the roster table.
pub struct RosterComposer {
    roster: crate::roster::DutyRoster,
    roster_doc_url: String,
    alert_mention: String,
}

impl RosterComposer {
    pub fn new(
        roster: crate::roster::DutyRoster,
        roster_doc_url: impl Into<String>,
        alert_mention: impl Into<String>,
    ) -> Self {
        Self {
            roster,
            roster_doc_url: roster_doc_url.into(),
            alert_mention: alert_mention.into(),
        }
    }

    /// Build the payload for `today`.
    ///
    /// On a roster match this is a buttons template naming the assignee with
    /// a single link to the duty roster document. When no interval covers
    /// `today` it degrades to a plain-text operator alert (mentioning the
    /// configured operator) so a hole in the table is noticed in the channel
    /// rather than silently skipped.
    pub fn compose(&self, today: NaiveDate) -> Vec<MessageBlock> {
        match self.roster.assignee_on(today) {
            Some(assignee) => {
                let text = format!(
                    "This week's pickup duty is {assignee}.\n\
                     Please check the managers' attendance replies and \
                     contact them by Thursday."
                );
                vec![MessageBlock::buttons(
                    text,
                    vec![UriAction::new(
                        "🚗 Duty roster",
                        with_timestamp(&self.roster_doc_url),
                    )],
                )]
            }
            None => {
                tracing::warn!(date = %today, "no duty interval covers today");
                let text = format!(
                    "{}\nNo pickup duty is configured for this week. \
                     Please update the duty roster.",
                    self.alert_mention
                );
                vec![MessageBlock::text(text)]
            }
        }
    }
}

/// Composes the fixed attendance reminder; no date dependency.
pub struct ReminderComposer {
    location_info_url: String,
    season_schedule_url: String,
}

impl ReminderComposer {
    pub fn new(
        location_info_url: impl Into<String>,
        season_schedule_url: impl Into<String>,
    ) -> Self {
        Self {
            location_info_url: location_info_url.into(),
            season_schedule_url: season_schedule_url.into(),
        }
    }

    /// Build the reminder payload. Always one buttons template with exactly
    /// two actions, in fixed order: ground location, then season schedule.
    pub fn compose(&self, _today: NaiveDate) -> Vec<MessageBlock> {
        let text = "If you have not answered the attendance survey yet, \
                    please reply by the end of today.\n\
                    For changes after tomorrow, post directly in the chat."
            .to_string();
        vec![MessageBlock::buttons(
            text,
            vec![
                UriAction::new(
                    "🧭 Ground location",
                    with_timestamp(&self.location_info_url),
                ),
                UriAction::new(
                    "📅 Season schedule",
                    with_timestamp(&self.season_schedule_url),
                ),
            ],
        )]
    }
}
