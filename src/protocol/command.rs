//! Command definitions
//!
//! A parsed command frame: name plus positional typed arguments. The name is
//! case-normalized to uppercase before dispatch.

use super::TypedValue;

/// The commands the dispatcher knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Ping,
    /// redis-cli handshake no-op (`COMMAND DOCS` on connect)
    Command,
    Set,
    Get,
    Delete,
    Unknown,
}

impl From<&str> for CommandKind {
    fn from(name: &str) -> Self {
        match name {
            "PING" => Self::Ping,
            "COMMAND" => Self::Command,
            "SET" => Self::Set,
            "GET" => Self::Get,
            "DELETE" => Self::Delete,
            _ => Self::Unknown,
        }
    }
}

/// One parsed command, built fresh per frame and discarded after dispatch
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    args: Vec<TypedValue>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<TypedValue>) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self { name, args }
    }

    pub fn kind(&self) -> CommandKind {
        CommandKind::from(self.name.as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[TypedValue] {
        &self.args
    }

    pub fn into_args(self) -> Vec<TypedValue> {
        self.args
    }
}
