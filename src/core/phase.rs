use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::DayLog;

/// Logged period days further apart than this start a new episode.
pub const EPISODE_GAP_DAYS: i64 = 5;

/// A run of logged period days, each no more than [`EPISODE_GAP_DAYS`]
/// after the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub logged_days: u32,
}

impl Episode {
    /// Calendar span from first to last logged day, inclusive.
    pub fn length_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Group period dates into episodes, oldest first. Input order does not matter.
pub fn cluster_episodes(dates: impl IntoIterator<Item = NaiveDate>) -> Vec<Episode> {
    let mut sorted: Vec<NaiveDate> = dates.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut episodes: Vec<Episode> = Vec::new();
    for date in sorted {
        match episodes.last_mut() {
            Some(ep) if (date - ep.end).num_days() <= EPISODE_GAP_DAYS => {
                ep.end = date;
                ep.logged_days += 1;
            }
            _ => episodes.push(Episode {
                start: date,
                end: date,
                logged_days: 1,
            }),
        }
    }
    episodes
}

/// Dates carrying a period entry. A `none` flow still counts as logged.
pub fn period_dates(days: &BTreeMap<NaiveDate, DayLog>) -> impl Iterator<Item = NaiveDate> + '_ {
    days.iter()
        .filter(|(_, log)| log.period.is_some())
        .map(|(date, _)| *date)
}

/// Start of the most recent period episode.
///
/// With no logged period days this is `initial` (possibly `None`). When an
/// onboarding date is known, only episodes starting strictly after it can
/// replace it.
pub fn last_period_start(
    days: &BTreeMap<NaiveDate, DayLog>,
    initial: Option<NaiveDate>,
) -> Option<NaiveDate> {
    let episodes = cluster_episodes(period_dates(days));
    if episodes.is_empty() {
        return initial;
    }

    match initial {
        None => episodes.last().map(|ep| ep.start),
        Some(initial) => episodes
            .iter()
            .rev()
            .map(|ep| ep.start)
            .find(|start| *start > initial)
            .or(Some(initial)),
    }
}

/// Whole days from `start` to `today`. Negative when `today` precedes `start`.
pub fn period_day(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days()
}
