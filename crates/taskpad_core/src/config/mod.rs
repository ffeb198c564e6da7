use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKPAD_CONFIG_PATH";

/// Presentation settings for a session: a color theme and command aliases
/// for the interactive prompt.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// Result of a config load that never fails the session: a missing file
/// means defaults, an unusable one means defaults plus the error for the
/// caller to report.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub theme: Option<String>,
    pub aliases: HashMap<String, String>,
}

/// Where the config file lives: `$TASKPAD_CONFIG_PATH` wins, otherwise the
/// platform config directory.
pub fn config_path() -> Result<PathBuf, AppError> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_config_path(),
    }
}

fn default_config_path() -> Result<PathBuf, AppError> {
    let (base_var, dirs): (&str, &[&str]) = if cfg!(windows) {
        ("APPDATA", &["taskpad"])
    } else {
        ("HOME", &[".config", "taskpad"])
    };

    let base = std::env::var(base_var)
        .map_err(|_| AppError::config(format!("{base_var} is not set")))?;

    let mut path = PathBuf::from(base);
    for dir in dirs {
        path.push(dir);
    }
    path.push(CONFIG_FILE_NAME);
    Ok(path)
}

pub fn load_or_default() -> ConfigLoad {
    match config_path() {
        Ok(path) => load_or_default_from(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_or_default_from(path: &Path) -> ConfigLoad {
    let (config, error) = match read_config(path) {
        Ok(Some(config)) => (config, None),
        Ok(None) => (Config::default(), None),
        Err(err) => (Config::default(), Some(err)),
    };
    ConfigLoad { config, error }
}

/// Reads and normalizes the config file; `Ok(None)` means no file exists.
fn read_config(path: &Path) -> Result<Option<Config>, AppError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(AppError::config(format!("{}: {}", path.display(), err))),
    };

    let mut config: Config = serde_json::from_str(&content).map_err(|err| {
        AppError::config(format!("invalid JSON in {}: {}", path.display(), err))
    })?;
    config.theme = config.theme.as_deref().map(canonical_theme_name);
    Ok(Some(config))
}

/// Maps user-facing theme spellings onto the two supported schemes.
/// Unknown names pass through lowercased and are treated as light by the
/// renderer.
pub fn canonical_theme_name(raw: &str) -> String {
    let cleaned = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    match cleaned.as_str() {
        "" | "light" | "default" | "vanilla" => "light".to_string(),
        "dark" | "dark_mode" | "darkmode" | "noir" => "dark".to_string(),
        other => other.to_string(),
    }
}

pub fn merge_overrides(base: &Config, overrides: &ConfigOverrides) -> Config {
    let mut merged = base.clone();
    if let Some(theme) = overrides.theme.as_deref() {
        merged.theme = Some(canonical_theme_name(theme));
    }

    for (alias, value) in overrides.aliases.iter() {
        merged.aliases.insert(alias.clone(), value.clone());
    }

    merged
}
