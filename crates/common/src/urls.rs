use chrono::Utc;

/// Append a cache-busting `ts` query parameter (unix seconds, wall clock at
/// call time) to a document URL.
pub fn with_timestamp(url: &str) -> String {
    format!("{url}?ts={}", Utc::now().timestamp())
}
