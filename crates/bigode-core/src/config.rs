// Configuration loading and parsing (config/settings.toml).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::partition::TeamSize;

/// Built-in copy of `defaults/settings.toml`, used when no `defaults/`
/// directory is shipped next to the binary.
pub const DEFAULT_SETTINGS: &str = include_str!("../defaults/settings.toml");

const SETTINGS_FILE: &str = "settings.toml";

/// Upper bound for the render tick, in milliseconds.
pub const MAX_TICK_RATE_MS: u64 = 1000;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub draw: DrawConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct DrawConfig {
    /// Team size the session starts with.
    pub team_size: TeamSize,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Heading shown in the status bar.
    pub title: String,
    pub tick_rate_ms: u64,
    /// Paint each drawn team in a random kit.
    pub show_kits: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: "Fut Bigode".to_string(),
            tick_rate_ms: 33,
            show_kits: true,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            draw: DrawConfig {
                team_size: TeamSize::default(),
                seed: None,
            },
            ui: UiConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// settings.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for settings.toml.
#[derive(Debug, Clone, Deserialize)]
struct SettingsFile {
    draw: DrawSection,
    #[serde(default)]
    ui: UiConfig,
}

/// Team size is read signed so that `0` and negative values reach
/// validation instead of failing as a parse error.
#[derive(Debug, Clone, Deserialize)]
struct DrawSection {
    team_size: i64,
    #[serde(default)]
    seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/settings.toml` relative to `base_dir`.
///
/// Does not create missing files; see [`load_config`].
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let settings_path = base_dir.join("config").join(SETTINGS_FILE);
    let text = read_file(&settings_path)?;
    parse_settings(&text, &settings_path)
}

/// Parse and validate settings text. `path` is only used in error messages.
pub fn parse_settings(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let file: SettingsFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(file)
}

/// Make sure `config/` holds every settings file.
///
/// Files in `defaults/` are copied over when missing (`.example` files are
/// skipped). If `settings.toml` is still absent afterwards, the built-in
/// defaults are written. Returns the files that were created.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut created = Vec::new();

    if defaults_dir.is_dir() {
        let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
                message: format!("failed to read defaults entry: {e}"),
            })?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name() else {
                continue;
            };
            if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
                continue;
            }

            let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                message: format!("failed to read {}: {e}", path.display()),
            })?;
            let target = config_dir.join(file_name);
            if write_new(&target, &content)? {
                created.push(target);
            }
        }
    }

    let settings_path = config_dir.join(SETTINGS_FILE);
    if write_new(&settings_path, DEFAULT_SETTINGS.as_bytes())? {
        debug!("Wrote built-in settings to {}", settings_path.display());
        created.push(settings_path);
    }

    Ok(created)
}

/// Directory that holds (or will hold) `config/`.
///
/// The working directory wins when it already has `config/` or `defaults/`;
/// otherwise the per-user config directory is used.
pub fn resolve_base_dir() -> Result<PathBuf, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    if cwd.join("config").is_dir() || cwd.join("defaults").is_dir() {
        return Ok(cwd);
    }
    match directories::ProjectDirs::from("", "", "bigode") {
        Some(dirs) => Ok(dirs.config_dir().to_path_buf()),
        None => Ok(cwd),
    }
}

/// Resolve the base directory, seed missing files, and load the config.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_in(&resolve_base_dir()?)
}

/// Seed missing files under `base_dir`, then load the config from it.
pub fn load_config_in(base_dir: &Path) -> Result<Config, ConfigError> {
    let created = ensure_config_files(base_dir)?;
    for path in &created {
        info!("Created default config file {}", path.display());
    }
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

/// Create `target` with `content` unless it already exists. Returns whether
/// the file was written.
fn write_new(target: &Path, content: &[u8]) -> Result<bool, ConfigError> {
    match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
    {
        Ok(mut dest) => {
            std::io::Write::write_all(&mut dest, content).map_err(|e| {
                ConfigError::DefaultsCopyError {
                    message: format!("failed to write {}: {e}", target.display()),
                }
            })?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", target.display()),
        }),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(file: SettingsFile) -> Result<Config, ConfigError> {
    let team_size =
        TeamSize::try_from(file.draw.team_size).map_err(|e| ConfigError::ValidationError {
            field: "draw.team_size".into(),
            message: e.to_string(),
        })?;

    let tick = file.ui.tick_rate_ms;
    if tick == 0 || tick > MAX_TICK_RATE_MS {
        return Err(ConfigError::ValidationError {
            field: "ui.tick_rate_ms".into(),
            message: format!("must be between 1 and {MAX_TICK_RATE_MS}, got {tick}"),
        });
    }

    Ok(Config {
        draw: DrawConfig {
            team_size,
            seed: file.draw.seed,
        },
        ui: file.ui,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
