//! REPL configuration.
//!
//! Each setting resolves as command-line flag, then environment, then default.

use std::path::PathBuf;

use pathstore::Map;
use pathstore_serde::{Codec, JsonCodec, Value};

/// Environment variable forcing the edit mode (`vi` or `emacs`).
pub const EDIT_MODE_ENV: &str = "PATHSTORE_EDIT_MODE";

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "PATHSTORE_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid seed: {0}")]
    Seed(#[from] pathstore::Error),

    #[error("seed must be a JSON object, found {0}")]
    SeedNotObject(pathstore::Kind),

    #[error("invalid log level '{0}'")]
    LogLevel(String),
}

/// Line-editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Vi,
    Emacs,
}

/// Resolved REPL settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    pub edit_mode: EditMode,
    /// Initial store contents.
    pub seed: Map,
    /// Default log filter, used when `PATHSTORE_LOG` is unset.
    pub log_level: String,
    /// Where history is kept; `None` disables history.
    pub history_path: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            edit_mode: EditMode::Emacs,
            seed: Map::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            history_path: default_history_path(),
        }
    }
}

/// Raw settings as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub vi: bool,
    pub emacs: bool,
    pub seed: Option<String>,
    pub log_level: Option<String>,
    pub no_history: bool,
}

impl ReplConfig {
    /// Resolve settings from command-line overrides and the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let edit_mode = if overrides.vi {
            EditMode::Vi
        } else if overrides.emacs {
            EditMode::Emacs
        } else {
            edit_mode_from_env()
        };

        let seed = match overrides.seed.as_deref() {
            Some(text) => parse_seed(text)?,
            None => Map::new(),
        };

        let log_level = overrides
            .log_level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        if !is_level(&log_level) {
            return Err(ConfigError::LogLevel(log_level));
        }

        let history_path = if overrides.no_history {
            None
        } else {
            default_history_path()
        };

        Ok(Self {
            edit_mode,
            seed,
            log_level,
            history_path,
        })
    }
}

/// Decode a JSON object into the initial store contents.
pub fn parse_seed(text: &str) -> Result<Map, ConfigError> {
    match JsonCodec::compact().decode(text)? {
        Value::Map(map) => Ok(map),
        other => Err(ConfigError::SeedNotObject(other.kind())),
    }
}

fn is_level(level: &str) -> bool {
    matches!(
        level.to_ascii_lowercase().as_str(),
        "off" | "error" | "warn" | "info" | "debug" | "trace"
    )
}

fn default_history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("pathstore").join("history.txt"))
}

fn edit_mode_from_env() -> EditMode {
    if let Ok(mode) = std::env::var(EDIT_MODE_ENV) {
        match mode.to_lowercase().as_str() {
            "vi" | "vim" => return EditMode::Vi,
            "emacs" => return EditMode::Emacs,
            other => log::warn!("ignoring unknown {} '{}'", EDIT_MODE_ENV, other),
        }
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = std::env::var(var) {
            if is_vi_editor(&editor) {
                return EditMode::Vi;
            }
        }
    }

    if inputrc_wants_vi() {
        return EditMode::Vi;
    }

    EditMode::Emacs
}

fn is_vi_editor(editor: &str) -> bool {
    let editor = editor.to_lowercase();
    let name = editor.rsplit('/').next().unwrap_or(&editor);
    name.contains("vim") || name == "vi"
}

fn inputrc_wants_vi() -> bool {
    let candidates = [
        std::env::var("INPUTRC").ok().map(PathBuf::from),
        dirs::home_dir().map(|p| p.join(".inputrc")),
        Some(PathBuf::from("/etc/inputrc")),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|path| std::fs::read_to_string(path).ok())
        .any(|content| content.lines().any(sets_vi_mode))
}

fn sets_vi_mode(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    matches!(words.as_slice(), ["set", "editing-mode", "vi"])
}
