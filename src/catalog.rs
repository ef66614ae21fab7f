use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use tokio::fs;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCategory {
    pub name: String,
    pub emoji: String,
}

/// Static lookup data the dashboard consumes by key. The order of `moods`
/// is the chart axis and the tie-break order for the most common mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodCatalog {
    pub moods: Vec<MoodCategory>,
    #[serde(default)]
    pub songs: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub quotes: Vec<String>,
}

impl MoodCatalog {
    pub fn find(&self, name: &str) -> Option<&MoodCategory> {
        self.moods.iter().find(|mood| mood.name == name)
    }

    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.moods.iter().position(|mood| mood.name == name)
    }

    pub fn emoji_for(&self, name: &str) -> Option<&str> {
        self.find(name).map(|mood| mood.emoji.as_str())
    }

    pub fn songs_for(&self, name: &str) -> &[String] {
        self.songs.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Same quote all day, rotating through the list one day at a time.
    pub fn quote_for(&self, date: NaiveDate) -> Option<&str> {
        if self.quotes.is_empty() {
            return None;
        }
        let index = date.num_days_from_ce().rem_euclid(self.quotes.len() as i32) as usize;
        Some(self.quotes[index].as_str())
    }
}

impl Default for MoodCatalog {
    fn default() -> Self {
        let moods = DEFAULT_MOODS
            .iter()
            .map(|(name, emoji)| MoodCategory {
                name: name.to_string(),
                emoji: emoji.to_string(),
            })
            .collect();
        let songs = DEFAULT_SONGS
            .iter()
            .map(|(mood, titles)| {
                (
                    mood.to_string(),
                    titles.iter().map(|title| title.to_string()).collect(),
                )
            })
            .collect();
        let quotes = DEFAULT_QUOTES.iter().map(|quote| quote.to_string()).collect();

        Self { moods, songs, quotes }
    }
}

pub async fn load_catalog(path: Option<&Path>) -> MoodCatalog {
    let Some(path) = path else {
        return MoodCatalog::default();
    };

    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<MoodCatalog>(&bytes) {
            Ok(catalog) if catalog.moods.is_empty() => {
                error!("mood catalog {} has no moods, using defaults", path.display());
                MoodCatalog::default()
            }
            Ok(catalog) => {
                info!("loaded {} moods from {}", catalog.moods.len(), path.display());
                catalog
            }
            Err(err) => {
                error!("failed to parse mood catalog: {err}");
                MoodCatalog::default()
            }
        },
        Err(err) => {
            error!("failed to read mood catalog {}: {err}", path.display());
            MoodCatalog::default()
        }
    }
}

const DEFAULT_MOODS: &[(&str, &str)] = &[
    ("Ecstatic", "🤩"),
    ("Happy", "😊"),
    ("Content", "😌"),
    ("Neutral", "😐"),
    ("Sad", "😢"),
    ("Angry", "😠"),
    ("Anxious", "😰"),
    ("Tired", "😴"),
    ("Excited", "🤗"),
    ("Grateful", "🙏"),
];

const DEFAULT_SONGS: &[(&str, &[&str])] = &[
    (
        "Ecstatic",
        &[
            "Don't Stop Me Now - Queen",
            "Happy - Pharrell Williams",
            "I Got a Feeling - Black Eyed Peas",
        ],
    ),
    (
        "Happy",
        &[
            "Good Vibes - Chris Janson",
            "Three Little Birds - Bob Marley",
            "Walking on Sunshine - Katrina",
        ],
    ),
    (
        "Content",
        &[
            "Perfect - Ed Sheeran",
            "Somewhere Over the Rainbow - Israel",
            "What a Wonderful World - Louis Armstrong",
        ],
    ),
    (
        "Neutral",
        &[
            "Weightless - Marconi Union",
            "Clair de Lune - Debussy",
            "Mad World - Gary Jules",
        ],
    ),
    (
        "Sad",
        &[
            "The Sound of Silence - Simon & Garfunkel",
            "Hurt - Johnny Cash",
            "Tears in Heaven - Eric Clapton",
        ],
    ),
    (
        "Angry",
        &[
            "Break Stuff - Limp Bizkit",
            "Chop Suey - System of a Down",
            "Bodies - Drowning Pool",
        ],
    ),
    (
        "Anxious",
        &[
            "Breathe - Pink Floyd",
            "The Scientist - Coldplay",
            "Fix You - Coldplay",
        ],
    ),
    (
        "Tired",
        &[
            "Sleepyhead - Passion Pit",
            "Mr. Sandman - The Chordettes",
            "Sleep - Eric Whitacre",
        ],
    ),
    (
        "Excited",
        &[
            "Uptown Funk - Bruno Mars",
            "Can't Stop the Feeling - Justin Timberlake",
            "Celebration - Kool & The Gang",
        ],
    ),
    (
        "Grateful",
        &[
            "Thank You - Dido",
            "Grateful - Rita Ora",
            "Count on Me - Bruno Mars",
        ],
    ),
];

const DEFAULT_QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Life is what happens to you while you're busy making other plans. - John Lennon",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "It is during our darkest moments that we must focus to see the light. - Aristotle",
    "The only impossible journey is the one you never begin. - Tony Robbins",
    "In the end, we will remember not the words of our enemies, but the silence of our friends. - Martin Luther King Jr.",
    "The purpose of our lives is to be happy. - Dalai Lama",
    "Life is really simple, but we insist on making it complicated. - Confucius",
    "The only person you are destined to become is the person you decide to be. - Ralph Waldo Emerson",
    "Be yourself; everyone else is already taken. - Oscar Wilde",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_keeps_mood_order() {
        let catalog = MoodCatalog::default();
        assert_eq!(catalog.moods.len(), 10);
        assert_eq!(catalog.ordinal("Ecstatic"), Some(0));
        assert_eq!(catalog.ordinal("Sad"), Some(4));
        assert_eq!(catalog.ordinal("Grateful"), Some(9));
        assert_eq!(catalog.ordinal("Bored"), None);
        assert_eq!(catalog.emoji_for("Happy"), Some("😊"));
    }

    #[test]
    fn every_default_mood_has_songs() {
        let catalog = MoodCatalog::default();
        for mood in &catalog.moods {
            assert_eq!(catalog.songs_for(&mood.name).len(), 3, "{}", mood.name);
        }
        assert!(catalog.songs_for("Bored").is_empty());
    }

    #[test]
    fn quote_of_the_day_is_stable_within_a_day() {
        let catalog = MoodCatalog::default();
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let next = day.succ_opt().unwrap();
        assert_eq!(catalog.quote_for(day), catalog.quote_for(day));
        assert_ne!(catalog.quote_for(day), catalog.quote_for(next));

        let empty = MoodCatalog {
            quotes: Vec::new(),
            ..MoodCatalog::default()
        };
        assert_eq!(empty.quote_for(day), None);
    }

    #[test]
    fn catalog_json_only_requires_moods() {
        let catalog: MoodCatalog =
            serde_json::from_str(r#"{"moods":[{"name":"Calm","emoji":"🌊"}]}"#).unwrap();
        assert_eq!(catalog.ordinal("Calm"), Some(0));
        assert!(catalog.quotes.is_empty());
        assert!(catalog.songs.is_empty());
    }

    #[tokio::test]
    async fn missing_catalog_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("mood_tracker_missing_catalog.json");
        let catalog = load_catalog(Some(path.as_path())).await;
        assert_eq!(catalog.moods.len(), 10);
        assert_eq!(load_catalog(None).await.moods.len(), 10);
    }
}
