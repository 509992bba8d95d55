//! Exit status of an external tool, as propagated by `nerdy-build`.

use std::process::ExitCode;

/// Exit status reported by a finished tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus(i32);

impl ExitStatus {
    /// Successful completion.
    pub const SUCCESS: Self = Self(0);
    /// Generic failure, used when no better code is available.
    pub const FAILURE: Self = Self(1);

    /// Wraps a raw exit code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns `true` for a zero exit code.
    #[must_use]
    pub const fn success(self) -> bool {
        self.0 == 0
    }

    /// Returns the byte reported to the operating system.
    ///
    /// Codes outside `0..=255` become the generic failure code.
    #[must_use]
    pub fn exit_byte(self) -> u8 {
        u8::try_from(self.0).unwrap_or(1)
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        status.code().map_or_else(|| terminated_by_signal(status), Self)
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.exit_byte())
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: std::process::ExitStatus) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;

    status
        .signal()
        .map_or(ExitStatus::FAILURE, |signal| ExitStatus(128 + signal))
}

#[cfg(not(unix))]
const fn terminated_by_signal(_status: std::process::ExitStatus) -> ExitStatus {
    ExitStatus::FAILURE
}
