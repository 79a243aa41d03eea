use std::io::{self, BufReader};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use log::debug;
use thiserror::Error;

use crate::ToolRequest;
use crate::codec::{read_message_line, write_message_line};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to launch tool process `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("tool process pipe failure: {0}")]
    Io(#[from] io::Error),

    #[error("tool process closed its output before responding")]
    Protocol,
}

/// The request/response channel to the tool process, reduced to line
/// granularity so the client can be exercised against an in-memory fake.
pub trait Transport {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// One response line, or `None` once the channel is closed.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Transport backed by a spawned child process's stdio pipes.
pub struct ProcessTransport {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ProcessTransport {
    /// Spawn `command` with `root` as its single argument; the tool process
    /// refuses operations outside that root.
    pub fn spawn(command: &str, root: &Path) -> io::Result<Self> {
        let mut child = Command::new(command)
            .arg(root)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("child stdin not piped"))?;
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .ok_or_else(|| io::Error::other("child stdout not piped"))?;

        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }
}

impl Transport for ProcessTransport {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        write_message_line(&mut self.stdin, line)
    }

    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        read_message_line(&mut self.stdout)
    }
}

impl Drop for ProcessTransport {
    fn drop(&mut self) {
        if let Err(err) = self.child.kill() {
            debug!("failed to stop tool process: {err}");
        }
        if let Err(err) = self.child.wait() {
            debug!("failed to reap tool process: {err}");
        }
    }
}

/// Client for one tool process. Calls are strictly sequential: each call
/// writes one request and consumes exactly one response line before
/// returning, so at most one call may be in flight per client. Response ids
/// are not correlated back to request ids; the next line on the pipe belongs
/// to the call in flight.
pub struct ToolClient<T: Transport> {
    transport: T,
    next_id: u64,
}

impl ToolClient<ProcessTransport> {
    /// Launch the tool process scoped to `root`.
    pub fn spawn(command: &str, root: &Path) -> Result<Self, ClientError> {
        let transport =
            ProcessTransport::spawn(command, root).map_err(|source| ClientError::Launch {
                command: command.to_owned(),
                source,
            })?;
        Ok(Self::new(transport))
    }
}

impl<T: Transport> ToolClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            next_id: 1,
        }
    }

    /// Id the next request will carry. Ids start at 1 and are never reused
    /// within the life of the client.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Invoke `tool` with `arguments` and return the raw response line.
    pub fn call(
        &mut self,
        tool: &str,
        arguments: serde_json::Value,
    ) -> Result<Vec<u8>, ClientError> {
        let request = ToolRequest::tool_call(self.next_id, tool, arguments);
        self.next_id += 1;

        let line = serde_json::to_vec(&request).map_err(io::Error::other)?;
        self.transport.write_line(&line)?;

        match self.transport.read_line()? {
            Some(response) => Ok(response),
            None => Err(ClientError::Protocol),
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
