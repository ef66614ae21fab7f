use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const INTENSITY_MIN: u8 = 1;
pub const INTENSITY_MAX: u8 = 10;
pub const NOTE_MAX_CHARS: usize = 200;
pub const SLIDER_MAX: u8 = 12;
pub const HYDRATION_TARGET: u8 = 8;

/// Sentinel shown in place of a mood when there are no entries.
pub const NO_MOOD: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: String,
    pub intensity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Resolved when the entry is created so old entries keep their label
    /// if the catalog changes later.
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub task: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepStatus {
    Great,
    Fair,
    Poor,
}

#[derive(Debug, Deserialize)]
pub struct NewMoodRequest {
    pub mood: String,
    pub intensity: u8,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewTodoRequest {
    pub task: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleTodoRequest {
    pub completed: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct WellnessUpdate {
    pub daily_goal: Option<String>,
    pub hydration_glasses: Option<u8>,
    pub sleep_hours: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub recent: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SongsQuery {
    pub mood: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mood: String,
    /// Position of `mood` in the catalog ordering, `None` once the mood has
    /// been dropped from the catalog.
    pub ordinal: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub trend: Vec<TrendPoint>,
    pub most_common_mood: String,
    pub most_common_emoji: Option<String>,
    pub average_intensity: f64,
    pub total_entries: usize,
    pub recent_entries: Vec<MoodEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WellnessResponse {
    pub daily_goal: String,
    pub hydration_glasses: u8,
    pub hydration_target: u8,
    pub hydration_percent: f64,
    pub sleep_hours: u8,
    pub sleep_status: SleepStatus,
}

#[derive(Debug, Serialize)]
pub struct SongsResponse {
    pub mood: String,
    pub songs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub date: NaiveDate,
    pub quote: String,
}
