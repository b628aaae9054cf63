//! Fetching and filtering the candidate rows for a resource kind.

use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Builds `<program> get <resource> --no-headers -n <namespace>`.
pub fn listing_command(program: &str, resource: &str, namespace: &str) -> Command {
    let mut command = Command::new(program);
    command
        .args(["get", resource, "--no-headers", "-n", namespace])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

/// Keeps the non-blank lines of `text` that contain `pattern`, ignoring case.
pub fn filter_rows(text: &str, pattern: &str) -> Vec<String> {
    let pattern = pattern.to_lowercase();

    text.trim_matches(['\n', '\r'])
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| pattern.is_empty() || line.to_lowercase().contains(&pattern))
        .map(ToString::to_string)
        .collect()
}

/// Runs the listing once and returns the filtered candidates.
///
/// # Errors
///
/// Returns [`Error::EmptyResult`] when nothing matches, which callers treat as a clean exit.
pub fn list_candidates(
    program: &str,
    resource: &str,
    namespace: &str,
    pattern: &str,
) -> Result<Vec<String>> {
    let mut command = listing_command(program, resource, namespace);
    debug!("Listing candidates with: {:?}", command);

    let output = command.output().map_err(|source| Error::ListingSpawn {
        resource: resource.to_string(),
        namespace: namespace.to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(Error::ListingExit {
            resource: resource.to_string(),
            namespace: namespace.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let candidates = filter_rows(&text, pattern);
    debug!(
        "{} of {} listed rows matched pattern `{}`",
        candidates.len(),
        text.lines().count(),
        pattern
    );

    if candidates.is_empty() {
        return Err(Error::empty_result(resource, pattern));
    }

    Ok(candidates)
}
