// src/exit.rs
//! Standardized process exit codes for `ninja2cmake`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::GenerateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Ninja2CmakeExit {
    /// Generation completed successfully.
    Success = 0,
    /// Generic error (I/O, directory walk).
    Error = 1,
    /// Configuration error (missing ninja root, missing product name, bad config file).
    InvalidConfig = 2,
}

impl Ninja2CmakeExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<GenerateError>() {
            Some(e) if e.is_config() => Self::InvalidConfig,
            _ => Self::Error,
        }
    }
}

impl Termination for Ninja2CmakeExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
