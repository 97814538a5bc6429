use std::env;
use std::path::PathBuf;

pub const HISTORY_ENV: &str = "MUCALC_HISTORY";
pub const PRECISION_ENV: &str = "MUCALC_PRECISION";

pub const DEFAULT_PRECISION: usize = 17;
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    // `None` disables history persistence.
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    pub precision: usize,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: None,
            history_size: DEFAULT_HISTORY_SIZE,
            precision: DEFAULT_PRECISION,
            prompt: String::from("> "),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let history_file = match lookup(HISTORY_ENV) {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => default_history_file(&lookup),
        };

        let precision = match lookup(PRECISION_ENV) {
            None => DEFAULT_PRECISION,
            Some(text) => match text.trim().parse::<usize>() {
                Ok(n) => n.max(1).min(DEFAULT_PRECISION),
                Err(e) => {
                    tracing::warn!(value = %text, error = %e, "ignoring {}", PRECISION_ENV);
                    DEFAULT_PRECISION
                }
            },
        };

        let config = Self {
            history_file,
            precision,
            ..Self::default()
        };
        tracing::debug!(?config, "configuration loaded");
        config
    }
}

// Without a home directory the file lands in the working directory.
#[cfg(windows)]
fn default_history_file<F: Fn(&str) -> Option<String>>(lookup: &F) -> Option<PathBuf> {
    let name = "mucalc_history.txt";
    Some(match lookup("APPDATA") {
        Some(dir) => PathBuf::from(dir).join(name),
        None => PathBuf::from(name),
    })
}

#[cfg(not(windows))]
fn default_history_file<F: Fn(&str) -> Option<String>>(lookup: &F) -> Option<PathBuf> {
    let name = ".mucalc_history";
    Some(match lookup("HOME") {
        Some(dir) => PathBuf::from(dir).join(name),
        None => PathBuf::from(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[cfg(not(windows))]
    #[test]
    fn defaults() {
        let c = config(&[]);
        assert_eq!(c.history_file, Some(PathBuf::from(".mucalc_history")));
        assert_eq!(c.precision, 17);
        assert_eq!(c.history_size, 1000);
        assert_eq!(c.prompt, "> ");
    }

    #[test]
    fn explicit_history_file() {
        let c = config(&[(HISTORY_ENV, "/tmp/h"), ("HOME", "/home/x")]);
        assert_eq!(c.history_file, Some(PathBuf::from("/tmp/h")));
        assert_eq!(config(&[(HISTORY_ENV, "")]).history_file, None);
    }

    #[cfg(not(windows))]
    #[test]
    fn history_in_home() {
        let c = config(&[("HOME", "/home/x")]);
        assert_eq!(c.history_file, Some(PathBuf::from("/home/x/.mucalc_history")));
    }

    #[test]
    fn precision_is_clamped() {
        assert_eq!(config(&[(PRECISION_ENV, "6")]).precision, 6);
        assert_eq!(config(&[(PRECISION_ENV, "0")]).precision, 1);
        assert_eq!(config(&[(PRECISION_ENV, "40")]).precision, 17);
        assert_eq!(config(&[(PRECISION_ENV, "many")]).precision, 17);
    }
}
