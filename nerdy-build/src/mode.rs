//! Build mode selection.

use std::ffi::OsStr;

/// Argument that switches the build into documentation mode.
pub const DOCS_FLAG: &str = "-docs";

/// What a single invocation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bundle and minify the modules with the optimizing compiler.
    Compile,
    /// Render API documentation for the modules.
    Document,
}

impl Mode {
    /// Selects the mode from invocation arguments.
    ///
    /// [`DOCS_FLAG`] anywhere in `args` selects [`Mode::Document`]; every
    /// other argument, including ones that are not valid UTF-8, is ignored.
    #[must_use]
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Self {
        if args.iter().any(|arg| arg.as_ref() == OsStr::new(DOCS_FLAG)) {
            Self::Document
        } else {
            Self::Compile
        }
    }

    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Document => "document",
        }
    }
}
