use crate::catalog::MoodCatalog;
use crate::models::{
    HYDRATION_TARGET, MoodEntry, NO_MOOD, SleepStatus, StatsResponse, TrendPoint,
    WellnessResponse,
};
use crate::store::SessionData;
use std::{cmp::Reverse, collections::HashMap};

pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub fn build_stats(
    entries: &[MoodEntry],
    catalog: &MoodCatalog,
    recent_limit: usize,
) -> StatsResponse {
    let most_common = most_common_mood(entries, catalog);

    StatsResponse {
        trend: trend_series(entries, catalog).collect(),
        most_common_mood: most_common.unwrap_or(NO_MOOD).to_string(),
        // Taken from the stored entries so moods dropped from the catalog keep
        // their label.
        most_common_emoji: most_common.and_then(|mood| {
            entries
                .iter()
                .find(|entry| entry.mood == mood)
                .map(|entry| entry.emoji.clone())
        }),
        average_intensity: average_intensity(entries),
        total_entries: entries.len(),
        recent_entries: recent_entries(entries, recent_limit)
            .into_iter()
            .cloned()
            .collect(),
    }
}

/// Entries in ascending date order, same-day entries in insertion order.
/// The iterator is `Clone`, so a chart can walk it more than once.
pub fn trend_series<'a>(
    entries: &'a [MoodEntry],
    catalog: &'a MoodCatalog,
) -> impl Iterator<Item = TrendPoint> + Clone + 'a {
    let mut ordered: Vec<&'a MoodEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.date);

    ordered.into_iter().map(move |entry| TrendPoint {
        date: entry.date,
        mood: entry.mood.clone(),
        ordinal: catalog.ordinal(&entry.mood),
    })
}

/// Ties go to the mood listed first in the catalog. Moods since removed from
/// the catalog lose ties to every listed mood, then fall back to first
/// appearance.
pub fn most_common_mood<'a>(entries: &'a [MoodEntry], catalog: &MoodCatalog) -> Option<&'a str> {
    let mut counts: HashMap<&'a str, (usize, usize)> = HashMap::new();
    for (position, entry) in entries.iter().enumerate() {
        counts.entry(entry.mood.as_str()).or_insert((0, position)).0 += 1;
    }

    counts
        .into_iter()
        .min_by_key(|&(mood, (count, first_seen))| {
            (
                Reverse(count),
                catalog.ordinal(mood).unwrap_or(usize::MAX),
                first_seen,
            )
        })
        .map(|(mood, _)| mood)
}

pub fn average_intensity(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: u64 = entries.iter().map(|entry| u64::from(entry.intensity)).sum();
    total as f64 / entries.len() as f64
}

pub fn recent_entries(entries: &[MoodEntry], limit: usize) -> Vec<&MoodEntry> {
    // Reversing first makes the stable sort put later insertions ahead on ties.
    let mut ordered: Vec<&MoodEntry> = entries.iter().rev().collect();
    ordered.sort_by_key(|entry| Reverse(entry.date));
    ordered.truncate(limit);
    ordered
}

pub fn wellness_summary(session: &SessionData) -> WellnessResponse {
    WellnessResponse {
        daily_goal: session.daily_goal.clone(),
        hydration_glasses: session.hydration_glasses,
        hydration_target: HYDRATION_TARGET,
        hydration_percent: hydration_percent(session.hydration_glasses),
        sleep_hours: session.sleep_hours,
        sleep_status: sleep_status(session.sleep_hours),
    }
}

pub fn hydration_percent(glasses: u8) -> f64 {
    (f64::from(glasses) / f64::from(HYDRATION_TARGET) * 100.0).min(100.0)
}

pub fn sleep_status(hours: u8) -> SleepStatus {
    match hours {
        7.. => SleepStatus::Great,
        6 => SleepStatus::Fair,
        _ => SleepStatus::Poor,
    }
}
