//! Command dispatch
//!
//! Maps a parsed command to its handler, validates the per-command argument
//! contract, and translates store outcomes into responses. Contract
//! violations are answered before the store lock is ever taken, so a bad
//! command can never mutate state.

use std::sync::Arc;

use bytes::Bytes;

use crate::error::KvError;
use crate::protocol::{Command, CommandKind, Response, TypedValue, ValueTag};
use crate::store::KeyValueStore;

/// Table-driven command dispatcher bound to one shared store
pub struct Dispatcher {
    store: Arc<KeyValueStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<KeyValueStore>) -> Self {
        Self { store }
    }

    /// Execute one command and produce its response
    pub fn dispatch(&self, command: Command) -> Response {
        tracing::trace!(name = command.name(), args = command.args().len(), "dispatching");

        match command.kind() {
            CommandKind::Ping => Response::Pong,
            // Returned so redis-cli's connect-time COMMAND DOCS probe succeeds
            CommandKind::Command => Response::Ok,
            CommandKind::Set => self.set(command.into_args()),
            CommandKind::Get => self.get(command.into_args()),
            CommandKind::Delete => self.delete(command.into_args()),
            CommandKind::Unknown => Response::Error(KvError::UnsupportedCommand),
        }
    }

    fn set(&self, args: Vec<TypedValue>) -> Response {
        let [key, value]: [TypedValue; 2] = match args.try_into() {
            Ok(pair) => pair,
            Err(_) => return Response::Error(KvError::SetArity),
        };

        let key = match bulk_key(&key) {
            Ok(key) => key,
            Err(err) => return Response::Error(err),
        };

        self.store.set(key, value);
        Response::Ok
    }

    fn get(&self, args: Vec<TypedValue>) -> Response {
        let [key]: [TypedValue; 1] = match args.try_into() {
            Ok(one) => one,
            Err(_) => return Response::Error(KvError::GetArity),
        };

        let key = match bulk_key(&key) {
            Ok(key) => key,
            Err(err) => return Response::Error(err),
        };

        match self.store.get(&key) {
            Some(value) => Response::Value(value),
            None => Response::Null,
        }
    }

    fn delete(&self, args: Vec<TypedValue>) -> Response {
        let [key]: [TypedValue; 1] = match args.try_into() {
            Ok(one) => one,
            Err(_) => return Response::Error(KvError::DeleteArity),
        };

        let key = match bulk_key(&key) {
            Ok(key) => key,
            Err(err) => return Response::Error(err),
        };

        self.store.delete(&key);
        Response::Ok
    }
}

/// Keys must be bulk strings; any other tag is a contract violation.
fn bulk_key(value: &TypedValue) -> Result<Bytes, KvError> {
    if value.tag() != ValueTag::BulkString {
        return Err(KvError::KeyNotBulkString);
    }
    Ok(value.data().clone())
}
