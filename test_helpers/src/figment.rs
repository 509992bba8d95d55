//! Runs configuration loaders inside a `figment::Jail`.
//!
//! The jail gives each test a scratch working directory and restores the
//! environment afterwards, so `nerdy-build.toml` files and `NERDY_BUILD_*`
//! variables never leak between tests.

use anyhow::{Result, anyhow};

/// Files and environment variables to place in the jail before the loader
/// runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct JailSetup<'a> {
    /// `(relative path, contents)` pairs written into the scratch directory.
    pub files: &'a [(&'a str, &'a str)],
    /// `(name, value)` pairs exported for the duration of the jail.
    pub vars: &'a [(&'a str, &'a str)],
}

impl<'a> JailSetup<'a> {
    /// A setup that only writes `files`.
    #[must_use]
    pub const fn files(files: &'a [(&'a str, &'a str)]) -> Self {
        Self { files, vars: &[] }
    }

    /// Adds environment variables to the setup.
    #[must_use]
    pub const fn with_vars(self, vars: &'a [(&'a str, &'a str)]) -> Self {
        Self { vars, ..self }
    }
}

/// Prepares a jail from `setup`, then runs `load` inside it and returns its
/// value.
///
/// `load` sees the jail's directory as the working directory, and the jail's
/// variables layered over the real environment.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or a file cannot be
/// written. Whatever `load` returns is passed back unchanged, errors
/// included.
pub fn load_in_jail<T, F>(setup: JailSetup<'_>, load: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    let mut loaded = None;
    figment::Jail::try_with(|jail| {
        for (path, contents) in setup.files {
            jail.create_file(path, contents)?;
        }
        for (name, value) in setup.vars {
            jail.set_env(name, value);
        }
        loaded = Some(load());
        Ok(())
    })
    .map_err(|err| anyhow!("jail setup failed: {err}"))?;
    loaded.ok_or_else(|| anyhow!("loader did not run inside the jail"))
}
