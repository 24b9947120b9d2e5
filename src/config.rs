//! Runtime settings
//!
//! Where state and statistics live, plus the secrets and identifiers read
//! from the environment.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Environment variable holding the stats report secret
pub const ADMIN_SECRET_ENV: &str = "CONNECTIONS_ADMIN_SECRET";

/// Environment variable overriding the client identifier
pub const CLIENT_ID_ENV: &str = "CONNECTIONS_CLIENT_ID";

const STATS_FILE: &str = "games.jsonl";
const LOG_FILE: &str = "connections.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub state_dir: PathBuf,
    pub admin_secret: Option<String>,
    /// Raw identifier of this client; anonymized before it is stored
    pub client_id: Option<String>,
}

impl Settings {
    /// Resolve settings, preferring an explicit state directory
    ///
    /// # Errors
    /// Returns `ConfigError::NoDataDir` if no directory was given and the
    /// platform has no data directory.
    pub fn resolve(state_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let state_dir = match state_dir {
            Some(dir) => dir,
            None => default_state_dir()?,
        };

        Ok(Self {
            state_dir,
            admin_secret: non_empty_env(ADMIN_SECRET_ENV),
            client_id: non_empty_env(CLIENT_ID_ENV)
                .or_else(|| non_empty_env("USER"))
                .or_else(|| non_empty_env("USERNAME")),
        })
    }

    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.state_dir.join(STATS_FILE)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join(LOG_FILE)
    }

    #[must_use]
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }
}

/// `<data dir>/connections` following XDG base directories
///
/// # Errors
/// Returns an error if the platform has no data directory.
pub fn default_state_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data_dir.join("connections"))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_state_dir_wins() {
        let settings = Settings::resolve(Some(PathBuf::from("/tmp/puzzle"))).unwrap();
        assert_eq!(settings.state_dir(), Path::new("/tmp/puzzle"));
        assert_eq!(settings.stats_path(), PathBuf::from("/tmp/puzzle/games.jsonl"));
        assert_eq!(settings.log_path(), PathBuf::from("/tmp/puzzle/connections.log"));
    }

    #[test]
    fn default_dir_ends_with_crate_name() {
        if let Ok(dir) = default_state_dir() {
            assert!(dir.ends_with("connections"));
        }
    }
}
