//! Duty roster table — calendar weeks mapped to the responsible person.
//!
//! The table is static configuration: built once at process start, ordered
//! ascending by start date, contiguous and non-overlapping, and never
//! mutated afterwards.

use chrono::NaiveDate;

/// One calendar week assigned to one responsible person.
///
/// Both bounds are inclusive: `start` is the Monday and `end` the Sunday of
/// the week.
#[derive(Debug, Clone)]
pub struct DutyInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub assignee: String,
}

/// An ordered set of duty intervals with point lookup.
#[derive(Debug, Clone)]
pub struct DutyRoster {
    intervals: Vec<DutyInterval>,
}

impl DutyRoster {
    pub fn new(intervals: Vec<DutyInterval>) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &[DutyInterval] {
        &self.intervals
    }

    /// Look up the person on duty for `today`.
    ///
    /// Linear scan in list order; returns the assignee of the first interval
    /// with `start <= today <= end` (inclusive both ends), or `None` when no
    /// interval covers the date. Intervals are non-overlapping by
    /// construction, so at most one match is expected; should the table ever
    /// be malformed, the first match in list order wins.
    pub fn assignee_on(&self, today: NaiveDate) -> Option<&str> {
        self.intervals
            .iter()
            .find(|interval| interval.start <= today && today <= interval.end)
            .map(|interval| interval.assignee.as_str())
    }

    /// The built-in 2025 season table: 35 consecutive Monday–Sunday weeks,
    /// 2025-03-31 through 2025-11-30.
    pub fn season_2025() -> Self {
        Self::new(vec![
            week(2025, 3, 31, 2025, 4, 6, "Wakabayashi"),
            week(2025, 4, 7, 2025, 4, 13, "Araki"),
            week(2025, 4, 14, 2025, 4, 20, "Sato"),
            week(2025, 4, 21, 2025, 4, 27, "Miyashita"),
            week(2025, 4, 28, 2025, 5, 4, "Sawa"),
            week(2025, 5, 5, 2025, 5, 11, "Sakano"),
            week(2025, 5, 12, 2025, 5, 18, "Endo"),
            week(2025, 5, 19, 2025, 5, 25, "Mori"),
            week(2025, 5, 26, 2025, 6, 1, "Fushiguro"),
            week(2025, 6, 2, 2025, 6, 8, "Ono"),
            week(2025, 6, 9, 2025, 6, 15, "Asano"),
            week(2025, 6, 16, 2025, 6, 22, "Wakabayashi"),
            week(2025, 6, 23, 2025, 6, 29, "Araki"),
            week(2025, 6, 30, 2025, 7, 6, "Ono"),
            week(2025, 7, 7, 2025, 7, 13, "Miyashita"),
            week(2025, 7, 14, 2025, 7, 20, "Sawa"),
            week(2025, 7, 21, 2025, 7, 27, "Sakano"),
            week(2025, 7, 28, 2025, 8, 3, "Endo"),
            week(2025, 8, 4, 2025, 8, 10, "Mori"),
            week(2025, 8, 11, 2025, 8, 17, "Fushiguro"),
            week(2025, 8, 18, 2025, 8, 24, "Ono"),
            week(2025, 8, 25, 2025, 8, 31, "Asano"),
            week(2025, 9, 1, 2025, 9, 7, "Wakabayashi"),
            week(2025, 9, 8, 2025, 9, 14, "Araki"),
            week(2025, 9, 15, 2025, 9, 21, "Fushiguro"),
            week(2025, 9, 22, 2025, 9, 28, "Miyashita"),
            week(2025, 9, 29, 2025, 10, 5, "Sawa"),
            week(2025, 10, 6, 2025, 10, 12, "Sakano"),
            week(2025, 10, 13, 2025, 10, 19, "Endo"),
            week(2025, 10, 20, 2025, 10, 26, "Mori"),
            week(2025, 10, 27, 2025, 11, 2, "Fushiguro"),
            week(2025, 11, 3, 2025, 11, 9, "Ono"),
            week(2025, 11, 10, 2025, 11, 16, "Asano"),
            week(2025, 11, 17, 2025, 11, 23, "Wakabayashi"),
            week(2025, 11, 24, 2025, 11, 30, "Araki"),
        ])
    }
}

fn week(sy: i32, sm: u32, sd: u32, ey: i32, em: u32, ed: u32, assignee: &str) -> DutyInterval {
    DutyInterval {
        start: date(sy, sm, sd),
        end: date(ey, em, ed),
        assignee: assignee.to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}
