use crate::stats::DEFAULT_RECENT_LIMIT;
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub recent_limit: usize,
}

impl AppConfig {
    /// Reads `PORT`, `MOOD_CATALOG_PATH` and `RECENT_LIMIT`. Unparsable
    /// numbers fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let catalog_path = lookup("MOOD_CATALOG_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let recent_limit = lookup("RECENT_LIMIT")
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(DEFAULT_RECENT_LIMIT);

        Self {
            port,
            catalog_path,
            recent_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn reads_overrides_and_ignores_garbage() {
        let config = config_from(&[
            ("PORT", "9191"),
            ("MOOD_CATALOG_PATH", "/etc/moods.json"),
            ("RECENT_LIMIT", "many"),
        ]);
        assert_eq!(config.port, 9191);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/moods.json")));
        assert_eq!(config.recent_limit, 5);
    }
}
