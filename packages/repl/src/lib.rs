//! # pathstore-repl
//!
//! An interactive shell over a single [`PathStore`].
//!
//! ## Features
//!
//! - Read and write values by plain or dotted key, with JSON values
//! - Create-only `set` and update-only `put`, for single keys or whole objects
//! - Flag rendering for the stored configuration
//! - Tab completion for commands and top-level keys
//! - Vi mode (`--vi`, `PATHSTORE_EDIT_MODE`, `EDITOR`, or `.inputrc`)
//! - Command history
//!
//! ## Usage
//!
//! ```bash
//! pathstore --seed '{"server": {"port": 8080}}'
//!
//! # Inside the REPL:
//! > get server.port
//! > put server.port 9090
//! > enable verbose
//! > flags
//! ```

pub mod commands;
pub mod completer;
pub mod config;
pub mod highlighter;
pub mod host;
pub mod io;
pub mod logging;
pub mod repl;

use pathstore::PathStore;

pub use config::{ConfigError, ConfigOverrides, EditMode, ReplConfig};
pub use repl::ReplCore;

use completer::KeyIndex;
use host::TerminalHost;
use io::{ExitReason, IoError};

#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// Run the interactive REPL on the terminal until the user exits.
pub fn run(config: ReplConfig) -> Result<ExitReason, ReplError> {
    let keys = KeyIndex::default();
    let mut host = TerminalHost::new(&config, keys.clone());
    let mut core = ReplCore::new(PathStore::with_data(config.seed)).with_key_index(keys);

    let reason = core.run(&mut host)?;
    log::debug!("repl exited: {:?}", reason);
    Ok(reason)
}
