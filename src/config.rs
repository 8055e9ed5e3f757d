use crate::attendance::Threshold;
use std::{env, path::PathBuf};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/attendance.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub threshold: Threshold,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            threshold: Threshold::DEFAULT,
        }
    }
}

impl AppConfig {
    /// Reads `PORT`, `APP_DATA_PATH` and `ATTENDANCE_TARGET`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let threshold = match lookup("ATTENDANCE_TARGET") {
            Some(raw) => parse_target(&raw).unwrap_or_else(|| {
                warn!("ignoring invalid ATTENDANCE_TARGET {raw:?}, using {}", defaults.threshold);
                defaults.threshold
            }),
            None => defaults.threshold,
        };

        Self {
            port,
            data_path,
            threshold,
        }
    }
}

fn parse_target(raw: &str) -> Option<Threshold> {
    let percent = raw.trim().trim_end_matches('%').parse::<u32>().ok()?;
    Threshold::from_percent(percent).ok()
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
        assert_eq!(config.data_path, PathBuf::from("data/attendance.json"));
        assert_eq!(config.threshold, Threshold::DEFAULT);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("APP_DATA_PATH", "/tmp/subjects.json"),
            ("ATTENDANCE_TARGET", "80%"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/subjects.json"));
        assert_eq!(config.threshold, Threshold::from_percent(80).unwrap());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[("PORT", "http"), ("ATTENDANCE_TARGET", "100")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.threshold, Threshold::DEFAULT);
    }
}
