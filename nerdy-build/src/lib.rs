//! Build orchestration for the `nerdy` JavaScript library.
//!
//! `nerdy-build` owns no compiler of its own. It holds the ordered list of
//! library modules, decides from its arguments whether to bundle
//! ([`mode::Mode::Compile`]) or document ([`mode::Mode::Document`]), builds
//! the command line for Closure Compiler or jsdoc, runs it once and hands the
//! tool's exit status back unchanged.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod invoker;
pub mod logging;
pub mod mode;
pub mod modules;
pub mod orchestrator;
pub mod status;

pub use command::{CommandLine, Token, ToolCommand};
pub use config::BuildConfig;
pub use error::BuildError;
pub use invoker::{ProcessInvoker, SystemInvoker};
pub use mode::Mode;
pub use modules::ModuleList;
pub use orchestrator::{Orchestrator, ToolSettings};
pub use status::ExitStatus;
