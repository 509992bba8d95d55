//! Error types for `nerdy-build`.
//!
//! A tool that runs and exits non-zero is not an error here: its status is
//! handed back unchanged. `BuildError` only covers what stops a tool from
//! being launched at all.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced while preparing or launching an external tool.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configured module list contained no entries.
    #[error("module list is empty; configure at least one source module")]
    EmptyModuleList,

    /// The same module path was listed twice.
    #[error("module '{0}' appears more than once in the module list")]
    DuplicateModule(Utf8PathBuf),

    /// A tool command had no executable.
    #[error("{0} command is empty; configure an executable")]
    EmptyCommand(&'static str),

    /// Layered configuration could not be extracted.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The external executable could not be started.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        /// Executable that was requested.
        program: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },
}
