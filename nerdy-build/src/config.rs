//! Layered configuration for `nerdy-build`.
//!
//! Values are resolved with `figment`, lowest precedence first:
//!
//! 1. built-in defaults matching the library's own layout;
//! 2. `nerdy-build.toml` in the working directory, or the file named by
//!    `NERDY_BUILD_CONFIG_PATH` (a missing file is skipped);
//! 3. `NERDY_BUILD_*` environment variables, e.g.
//!    `NERDY_BUILD_OUTPUT_FILE=dist.min.js` or
//!    `NERDY_BUILD_COMPILER='[closure-compiler]'`.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::command::ToolCommand;
use crate::error::BuildError;
use crate::modules::{DEFAULT_MODULES, ModuleList};
use crate::orchestrator::{
    DEFAULT_COMPILER, DEFAULT_DOCS_DIR, DEFAULT_DOCUMENTER, DEFAULT_OUTPUT_FILE, DEFAULT_README,
    Orchestrator, ToolSettings,
};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "nerdy-build.toml";
/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "NERDY_BUILD_CONFIG_PATH";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "NERDY_BUILD_";

/// Keys under [`ENV_PREFIX`] that belong to the process rather than the build.
const RESERVED_ENV_KEYS: [&str; 2] = ["config_path", "log"];

/// Resolved build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Library sources in compilation order.
    pub modules: Vec<Utf8PathBuf>,
    /// Optimizing compiler command, executable first.
    pub compiler: Vec<String>,
    /// Bundle written by the compiler.
    pub output_file: String,
    /// Documentation generator command, executable first.
    pub documenter: Vec<String>,
    /// Readme passed to the documentation generator.
    pub readme: Utf8PathBuf,
    /// Documentation output directory.
    pub docs_dir: Utf8PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            modules: DEFAULT_MODULES.iter().map(Utf8PathBuf::from).collect(),
            compiler: DEFAULT_COMPILER.iter().map(|part| (*part).to_owned()).collect(),
            output_file: DEFAULT_OUTPUT_FILE.to_owned(),
            documenter: DEFAULT_DOCUMENTER.iter().map(|part| (*part).to_owned()).collect(),
            readme: Utf8PathBuf::from(DEFAULT_README),
            docs_dir: Utf8PathBuf::from(DEFAULT_DOCS_DIR),
        }
    }
}

impl BuildConfig {
    /// Loads configuration from the default file location and environment.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] when a layer cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, BuildError> {
        Self::load_from(&config_path())
    }

    /// Loads configuration using `path` as the file layer.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] when a layer cannot be parsed or a
    /// value has the wrong type.
    pub fn load_from(path: &Utf8Path) -> Result<Self, BuildError> {
        Self::figment(path).extract().map_err(|err| BuildError::Config(Box::new(err)))
    }

    /// Returns the layered figment without extracting it.
    #[must_use]
    pub fn figment(path: &Utf8Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&RESERVED_ENV_KEYS))
    }

    /// Validates the configuration and builds an [`Orchestrator`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyModuleList`] or
    /// [`BuildError::DuplicateModule`] for an invalid module list and
    /// [`BuildError::EmptyCommand`] when a tool has no executable.
    pub fn into_orchestrator(self) -> Result<Orchestrator, BuildError> {
        let modules = ModuleList::new(self.modules)?;
        let tools = ToolSettings {
            compiler: ToolCommand::from_parts("compiler", &self.compiler)?,
            output_file: self.output_file,
            documenter: ToolCommand::from_parts("documenter", &self.documenter)?,
            readme: self.readme,
            docs_dir: self.docs_dir,
        };
        Ok(Orchestrator::new(modules, tools))
    }
}

fn config_path() -> Utf8PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| Utf8PathBuf::from(CONFIG_FILE_NAME), Utf8PathBuf::from)
}
