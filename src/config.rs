// SPDX-License-Identifier: MIT
//
// Defaults for the command line, read from an optional JSON file.
//
// Nothing here is fatal: a missing file, an unreadable file, or a bad field
// is logged and replaced by the built-in default so the tool always starts.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use huekit_color::HexColor;
use huekit_palette::{BUILTIN_PRESETS, ExportFormat, Harmony};
use serde::Deserialize;
use tracing::{info, warn};

/// Where the config is looked for when the environment does not say.
const DEFAULT_CONFIG_PATH: &str = "huekit.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "HUEKIT_CONFIG_PATH";
const DEFAULT_PRESETS_PATH: &str = "huekit-presets.json";

/// Resolved defaults used when a subcommand flag is omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_color: HexColor,
    pub harmony: Harmony,
    pub format: ExportFormat,
    pub presets_path: PathBuf,
}

impl AppConfig {
    /// Load from `$HUEKIT_CONFIG_PATH` or `huekit.json`, falling back to
    /// built-in defaults.
    pub fn load() -> Self {
        Self::load_from(&resolve_config_path())
    }

    /// Load from an explicit path, falling back to built-in defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config = raw.resolve(path);
                    info!(
                        path = %path.display(),
                        base_color = %config.base_color,
                        harmony = %config.harmony,
                        format = %config.format,
                        "loaded config"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found; using built-in defaults");
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        // The first builtin is the `default` preset.
        let [preset, ..] = BUILTIN_PRESETS;
        Self {
            base_color: preset.base_color,
            harmony: preset.harmony,
            format: ExportFormat::Css,
            presets_path: PathBuf::from(DEFAULT_PRESETS_PATH),
        }
    }
}

/// On-disk shape. Every field is optional and parsed individually so one bad
/// value does not throw away the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    base_color: Option<String>,
    harmony: Option<String>,
    format: Option<String>,
    presets_path: Option<PathBuf>,
}

impl RawConfig {
    fn resolve(self, path: &Path) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            base_color: parse_field(path, "base_color", self.base_color, defaults.base_color),
            harmony: parse_field(path, "harmony", self.harmony, defaults.harmony),
            format: parse_field(path, "format", self.format, defaults.format),
            presets_path: self.presets_path.unwrap_or(defaults.presets_path),
        }
    }
}

fn parse_field<T>(path: &Path, field: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = value else {
        return default;
    };
    match value.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(
                path = %path.display(),
                field,
                value = %value,
                error = %err,
                "invalid config value; using default"
            );
            default
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
