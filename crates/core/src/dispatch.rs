//! Turning a confirmed selection into exactly one action invocation.

use std::fmt::{Display, Formatter};
use std::io::Write;
use std::process::Command;

use itertools::Itertools;
use log::info;

use crate::config::{INTERACTIVE_ACTIONS, KUBECTL, LOGS_ACTION};
use crate::error::Result;
use crate::execution;

/// How the invocation's streams are wired.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RelayMode {
    /// Streams are the caller's own terminal; nothing is read back.
    Interactive,
    /// Both output streams are captured and re-emitted line by line.
    CaptureAndRelay,
}

/// A selection paired with the action to run against it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActionRequest {
    pub action: Vec<String>,
    pub resource_kind: String,
    pub selected_id: String,
    pub namespace: Option<String>,
}

impl ActionRequest {
    pub fn new(
        action: Vec<String>,
        resource_kind: impl Into<String>,
        selected_id: impl Into<String>,
        namespace: Option<String>,
    ) -> Self {
        Self {
            action,
            resource_kind: resource_kind.into(),
            selected_id: selected_id.into(),
            namespace,
        }
    }

    fn verb(&self) -> Option<&str> {
        self.action.first().map(String::as_str)
    }

    /// Arguments after the executable name.
    ///
    /// Log retrieval addresses the object by name alone; every other verb also
    /// needs the resource kind.
    #[must_use]
    pub fn arguments(&self) -> Vec<String> {
        let mut arguments = self.action.clone();

        if let Some(namespace) = &self.namespace {
            arguments.push("-n".to_string());
            arguments.push(namespace.clone());
        }

        if self.verb() != Some(LOGS_ACTION) {
            arguments.push(self.resource_kind.clone());
        }

        arguments.push(self.selected_id.clone());
        arguments
    }

    #[must_use]
    pub fn relay_mode(&self) -> RelayMode {
        match self.verb() {
            Some(verb) if INTERACTIVE_ACTIONS.contains(&verb) => RelayMode::Interactive,
            _ => RelayMode::CaptureAndRelay,
        }
    }

    /// The action tokens as the user typed them, used in error messages.
    #[must_use]
    pub fn action_label(&self) -> String {
        self.action.join(" ")
    }
}

/// Runs action requests against a fixed executable.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    program: String,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(KUBECTL)
    }
}

impl Dispatcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn command(&self, request: &ActionRequest) -> Command {
        let mut command = Command::new(&self.program);
        command.args(request.arguments());
        command
    }

    /// The full invocation as a single display line.
    #[must_use]
    pub fn describe(&self, request: &ActionRequest) -> String {
        Invocation {
            program: &self.program,
            arguments: &request.arguments(),
        }
        .to_string()
    }

    /// Runs the request once. Captured output is written to `output` as it arrives.
    pub fn dispatch<W: Write>(&self, request: &ActionRequest, output: &mut W) -> Result<()> {
        let command = self.command(request);

        match request.relay_mode() {
            RelayMode::Interactive => {
                info!("Running `{}` attached to the terminal", request.action_label());
                execution::execute_attached(command, request)
            }
            RelayMode::CaptureAndRelay => {
                info!("Running `{}` with output relay", request.action_label());
                execution::execute_relayed(command, request, output)
            }
        }
    }
}

struct Invocation<'a> {
    program: &'a str,
    arguments: &'a [String],
}

impl Display for Invocation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let arguments = self.arguments.iter().map(|a| quote(a)).join(" ");
        write!(f, "{} {}", self.program, arguments)
    }
}

fn quote(argument: &str) -> String {
    let plain = !argument.is_empty()
        && argument
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_./=:-".contains(c));

    if plain {
        argument.to_string()
    } else {
        format!("'{}'", argument.replace('\'', r"'\''"))
    }
}
