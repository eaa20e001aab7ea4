//! TCP Server
//!
//! Accepts connections and spawns one handler thread per client. Each thread
//! runs under a `catch_unwind` boundary: a panic while serving one client is
//! answered with a single generic server-side error on that connection, which
//! is then closed, leaving every other connection untouched.

use std::io::Write;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::{KvError, Result};
use crate::network::Connection;
use crate::protocol::Response;
use crate::store::KeyValueStore;

/// TCP server for respkv
pub struct Server {
    config: Config,
    store: Arc<KeyValueStore>,
    listener: TcpListener,
}

impl Server {
    /// Bind the listening socket for the configured address
    pub fn bind(config: Config, store: Arc<KeyValueStore>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)?;
        Ok(Self {
            config,
            store,
            listener,
        })
    }

    /// The bound local address (useful when binding port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever (blocking)
    pub fn run(&self) -> Result<()> {
        tracing::info!("Listening on {}", self.config.listen_addr);

        let active = Arc::new(AtomicUsize::new(0));

        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!("Error accepting a new client: {}", e);
                    continue;
                }
            };

            if active.load(Ordering::Acquire) >= self.config.max_connections {
                tracing::warn!(
                    "Connection limit ({}) reached, rejecting client",
                    self.config.max_connections
                );
                drop(stream);
                continue;
            }

            active.fetch_add(1, Ordering::AcqRel);
            let active = Arc::clone(&active);
            let store = Arc::clone(&self.store);
            let config = self.config.clone();

            thread::spawn(move || {
                handle_client(stream, store, &config);
                active.fetch_sub(1, Ordering::AcqRel);
            });
        }

        Ok(())
    }
}

/// Run one client to completion inside the per-connection fault boundary.
fn handle_client(stream: TcpStream, store: Arc<KeyValueStore>, config: &Config) {
    // Keep a handle for the one reply we owe the client if the handler panics
    let mut fault_handle = stream.try_clone().ok();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<()> {
        let mut connection = Connection::new(stream, Dispatcher::new(store))?;
        connection.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;
        connection.handle()
    }));

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            tracing::warn!("Connection handler failed: {}", err);
        }
        Err(_) => {
            tracing::error!("Panic while handling connection");
            if let Some(stream) = fault_handle.as_mut() {
                let _ = stream.write_all(&Response::Error(KvError::ServerFault).to_wire());
            }
        }
    }
}
