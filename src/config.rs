use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Client configuration, read from `config.toml`.
///
/// Every field has a default so a missing file or empty table still yields
/// a usable config; CLI flags override whatever was read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: String,
    /// Which session's tasks to show. Supplied here or via `--session`.
    pub session_id: Option<i64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: "http://127.0.0.1:5000".to_string(),
            session_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme overrides, `name = "#RRGGBB"` under `[ui.colors]`.
    pub colors: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default config location: `<config dir>/docket/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docket").join("config.toml"))
}

/// Load configuration. An explicit `path` must exist and parse; the default
/// path is optional, absent means defaults apply.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_path() {
            Some(p) => (p, false),
            None => return Ok(Config::default()),
        },
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) if !required && source.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Config::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r##"
            [server]
            url = "https://todo.example.net"
            session_id = 12

            [ui.colors]
            highlight = "#FB4196"
            "##,
        )
        .unwrap();
        assert_eq!(config.server.url, "https://todo.example.net");
        assert_eq!(config.server.session_id, Some(12));
        assert_eq!(config.ui.colors["highlight"], "#FB4196");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.url, "http://127.0.0.1:5000");
        assert_eq!(config.server.session_id, None);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nsession_id = 3\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.server.session_id, Some(3));
    }
}
