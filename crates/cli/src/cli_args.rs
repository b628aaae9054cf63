//! Command-line argument parsing and validation.
//!
//! `--resource` and the action are checked after parsing rather than by clap,
//! so a missing value is reported with the usage text and exit code 1.

use clap::{CommandFactory, Parser};
use qkk_core::config::DEFAULT_NAMESPACE;
use qkk_core::error::{Error, Result};

/// Command-line arguments for the `qkk` binary.
///
/// # Examples
///
/// ```bash
/// # Stream logs from a pod whose row mentions "web"
/// qkk -r pods -n prod -p web logs -f
///
/// # Edit a deployment in the default namespace
/// qkk -r deployments edit
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "qkk", version, term_width = 0)]
#[command(about = "Search a Kubernetes resource kind, pick one, and run a kubectl action on it.")]
pub struct Args {
    /// Search and take action on Kubernetes resource RESOURCE.
    #[arg(long, short = 'r', value_name = "RESOURCE")]
    pub resource: Option<String>,

    /// Search and take action in Kubernetes namespace NAMESPACE.
    #[arg(long, short = 'n', value_name = "NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Only offer rows containing PATTERN, ignoring case.
    #[arg(long, short = 'p', value_name = "PATTERN", default_value = "")]
    pub pattern: String,

    /// Print the kubectl invocation for the picked resource without running it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// The kubectl action and its flags, for example `logs -f` or `edit`.
    #[arg(
        value_name = "ACTION",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub action: Vec<String>,
}

impl Args {
    /// The resource kind, if one was given and is not blank.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref().filter(|r| !r.trim().is_empty())
    }

    /// Checks the inputs clap leaves optional.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] when the resource or the action is missing.
    pub fn validate(&self) -> Result<(&str, &[String])> {
        let Some(resource) = self.resource() else {
            return Err(Error::usage("missing required flag --resource or -r"));
        };

        if self.action.is_empty() {
            return Err(Error::usage("missing kubectl action like 'logs' or 'edit'"));
        }

        Ok((resource, &self.action))
    }
}

/// Usage text printed alongside usage errors.
#[must_use]
pub fn usage() -> String {
    Args::command().render_help().to_string()
}
