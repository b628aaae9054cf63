use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};

use crate::dispatch::ActionRequest;
use crate::error::{Error, Result};

/// Runs `command` with the caller's stdin, stdout and stderr attached.
pub fn execute_attached(mut command: Command, request: &ActionRequest) -> Result<()> {
    let child = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| spawn_error(request, source))?;

    wait_for(child, request)
}

/// Runs `command` with both output streams captured, writing each line to
/// `output` as soon as it is read. Lines from one stream keep their order; the
/// two streams interleave in arrival order.
///
/// Lines already written stay written if the command later fails.
pub fn execute_relayed<W: Write>(
    mut command: Command,
    request: &ActionRequest,
    output: &mut W,
) -> Result<()> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| spawn_error(request, source))?;

    let (sender, receiver) = mpsc::channel::<Vec<u8>>();
    let mut readers = Vec::with_capacity(2);
    if let Some(stdout) = child.stdout.take() {
        readers.push(spawn_line_reader("stdout", stdout, sender.clone()));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(spawn_line_reader("stderr", stderr, sender.clone()));
    }
    drop(sender);

    let mut relay_result = Ok(());
    for line in receiver {
        // Keep draining after a write failure so the child never blocks on a full pipe.
        if relay_result.is_ok() {
            relay_result = write_line(output, &line);
        }
    }

    for reader in readers {
        if reader.join().is_err() {
            warn!("Output reader thread panicked");
        }
    }

    wait_for(child, request)?;
    relay_result.map_err(|source| Error::Relay {
        action: request.action_label(),
        resource: request.resource_kind.clone(),
        source,
    })
}

fn spawn_line_reader<R: Read + Send + 'static>(
    name: &'static str,
    stream: R,
    sender: mpsc::Sender<Vec<u8>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        loop {
            let mut line = Vec::new();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Stopped reading child {}: {}", name, e);
                    break;
                }
            }
        }
        debug!("Child {} closed", name);
    })
}

fn write_line<W: Write>(output: &mut W, line: &[u8]) -> std::io::Result<()> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    output.write_all(line)?;
    output.write_all(b"\n")?;
    output.flush()
}

fn wait_for(mut child: Child, request: &ActionRequest) -> Result<()> {
    let status = child.wait().map_err(|source| Error::Wait {
        action: request.action_label(),
        resource: request.resource_kind.clone(),
        source,
    })?;

    check_status(status, request)
}

fn check_status(status: ExitStatus, request: &ActionRequest) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(Error::Exit {
            action: request.action_label(),
            resource: request.resource_kind.clone(),
            status,
        })
    }
}

fn spawn_error(request: &ActionRequest, source: std::io::Error) -> Error {
    Error::Spawn {
        action: request.action_label(),
        resource: request.resource_kind.clone(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_normalises_endings() {
        let mut output = Vec::new();
        write_line(&mut output, b"first\r\n").unwrap();
        write_line(&mut output, b"second\n").unwrap();
        write_line(&mut output, b"last without newline").unwrap();
        assert_eq!(output, b"first\nsecond\nlast without newline\n");
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure_names_action_and_resource() {
        let request = ActionRequest::new(vec!["describe".to_string()], "pods", "web-1", None);
        let mut command = Command::new("echo");
        command.args(request.arguments());

        let error = execute_relayed(command, &request, &mut ClosedOutput).unwrap_err();
        match &error {
            Error::Relay { action, resource, source } => {
                assert_eq!(action, "describe");
                assert_eq!(resource, "pods");
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected relay error, got {other:?}"),
        }
        assert_eq!(
            error.to_string(),
            "error relaying output of kubectl action 'describe' on resource 'pods': closed"
        );
    }

    #[test]
    fn test_spawn_failure_names_action() {
        let request = ActionRequest::new(vec!["logs".to_string()], "pods", "web-1", None);
        let command = Command::new("qkk-definitely-not-installed");
        let mut output = Vec::new();

        let error = execute_relayed(command, &request, &mut output).unwrap_err();
        assert!(matches!(error, Error::Spawn { .. }));
        assert!(error
            .to_string()
            .starts_with("error running kubectl action 'logs' on resource 'pods':"));
        assert!(output.is_empty());
    }
}
