//! Turning the result of a run into an exit code and what to print.

use std::process::ExitCode;

use qkk_core::error::{Error, Result};

use crate::cli_args;

/// The exit code of a run together with the text owed to each stream.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Report {
    pub code: u8,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl Report {
    fn success() -> Self {
        Self::default()
    }

    /// Prints the pending messages and yields the process exit code.
    #[must_use]
    pub fn emit(self) -> ExitCode {
        if let Some(text) = &self.stdout {
            print!("{text}");
        }
        if let Some(text) = &self.stderr {
            eprint!("{text}");
        }
        ExitCode::from(self.code)
    }
}

/// Maps a finished run onto its report.
///
/// A cancelled selection arrives here as `Ok(())`. An empty listing is
/// reported on stdout but still exits 0. A usage error is followed by the
/// usage text. Every other error exits 1 with its message on stderr.
#[must_use]
pub fn report(result: Result<()>) -> Report {
    match result {
        Ok(()) => Report::success(),
        Err(e) if e.is_clean_exit() => Report {
            stdout: Some(format!("{e}\n")),
            ..Report::success()
        },
        Err(Error::Usage(message)) => Report {
            code: 1,
            stdout: Some(format!("{message}\n{}", cli_args::usage())),
            stderr: None,
        },
        Err(e) => Report {
            code: 1,
            stdout: None,
            stderr: Some(format!("{e}\n")),
        },
    }
}
