//! Mode dispatch: pick the tool, build its command line, run it once.

use std::ffi::OsStr;

use camino::Utf8PathBuf;
use tracing::{debug, info};

use crate::command::{CommandLine, ToolCommand};
use crate::error::BuildError;
use crate::invoker::ProcessInvoker;
use crate::mode::{DOCS_FLAG, Mode};
use crate::modules::ModuleList;
use crate::status::ExitStatus;

/// Default optimizing compiler invocation.
pub const DEFAULT_COMPILER: [&str; 3] = ["java", "-jar", "build/compiler.jar"];
/// Default bundled output file.
pub const DEFAULT_OUTPUT_FILE: &str = "nerdy.min.js";
/// Default documentation generator.
pub const DEFAULT_DOCUMENTER: [&str; 1] = ["build/jsdoc/jsdoc"];
/// Default readme fed to the documentation generator.
pub const DEFAULT_README: &str = "README.md";
/// Default documentation output directory.
pub const DEFAULT_DOCS_DIR: &str = "./docs";

/// Executables and fixed paths used by both build modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    /// Optimizing compiler, with any leading arguments.
    pub compiler: ToolCommand,
    /// File the compiler writes the bundle to.
    pub output_file: String,
    /// Documentation generator, with any leading arguments.
    pub documenter: ToolCommand,
    /// Readme rendered as the documentation landing page.
    pub readme: Utf8PathBuf,
    /// Directory the documentation is written to.
    pub docs_dir: Utf8PathBuf,
}

impl Default for ToolSettings {
    fn default() -> Self {
        let [compiler, compiler_args @ ..] = DEFAULT_COMPILER;
        let [documenter] = DEFAULT_DOCUMENTER;
        Self {
            compiler: ToolCommand::new(compiler, compiler_args),
            output_file: DEFAULT_OUTPUT_FILE.to_owned(),
            documenter: ToolCommand::new(documenter, Vec::<String>::new()),
            readme: Utf8PathBuf::from(DEFAULT_README),
            docs_dir: Utf8PathBuf::from(DEFAULT_DOCS_DIR),
        }
    }
}

/// Runs one build for a fixed module list and tool configuration.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    modules: ModuleList,
    tools: ToolSettings,
}

impl Orchestrator {
    /// Creates an orchestrator over `modules` using `tools`.
    #[must_use]
    pub const fn new(modules: ModuleList, tools: ToolSettings) -> Self {
        Self { modules, tools }
    }

    /// Returns the module list.
    #[must_use]
    pub const fn modules(&self) -> &ModuleList {
        &self.modules
    }

    /// Returns the tool settings.
    #[must_use]
    pub const fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    /// Builds the command line for `mode` without running it.
    #[must_use]
    pub fn plan(&self, mode: Mode) -> CommandLine {
        match mode {
            Mode::Compile => {
                CommandLine::compile(&self.tools.compiler, &self.modules, &self.tools.output_file)
            }
            Mode::Document => CommandLine::document(
                &self.tools.documenter,
                &self.modules,
                &self.tools.readme,
                &self.tools.docs_dir,
            ),
        }
    }

    /// Selects the mode from `args`, runs the matching tool and returns its
    /// exit status unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Launch`] when the tool cannot be started.
    pub fn run<S, P>(&self, args: &[S], invoker: &P) -> Result<ExitStatus, BuildError>
    where
        S: AsRef<OsStr>,
        P: ProcessInvoker + ?Sized,
    {
        let mode = Mode::from_args(args);
        let ignored: Vec<_> = args
            .iter()
            .map(|arg| arg.as_ref())
            .filter(|arg| *arg != OsStr::new(DOCS_FLAG))
            .map(OsStr::to_string_lossy)
            .collect();
        if !ignored.is_empty() {
            debug!(?ignored, "ignoring unrecognised arguments");
        }

        let command = self.plan(mode);
        info!(mode = mode.as_str(), %command, "running external tool");
        let status = invoker.invoke(&command)?;
        if !status.success() {
            debug!(
                program = command.program(),
                code = status.code(),
                "external tool failed"
            );
        }
        Ok(status)
    }
}
