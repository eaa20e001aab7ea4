//! Connection Handler
//!
//! Handles a single client connection: a synchronous read-parse-dispatch-write
//! loop, repeated until the stream closes. Protocol errors are answered on the
//! wire and the loop continues; only transport failures end it.

use std::io::{BufReader, BufWriter, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::dispatch::Dispatcher;
use crate::error::{KvError, Result};
use crate::protocol::{Command, FrameReader, Response};

/// Handles a single client connection
pub struct Connection {
    /// Frame parser over the buffered read half
    reader: FrameReader<BufReader<TcpStream>>,

    /// Buffered write half
    writer: BufWriter<TcpStream>,

    /// Command dispatcher bound to the shared store
    dispatcher: Dispatcher,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// Sets up buffered I/O over split read/write handles.
    pub fn new(stream: TcpStream, dispatcher: Dispatcher) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: FrameReader::new(BufReader::new(read_stream)),
            writer: BufWriter::new(write_stream),
            dispatcher,
            peer_addr,
        })
    }

    /// Configure connection timeouts (0 disables)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let stream = self.writer.get_ref();

        if read_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads command frames in a loop and sends responses. Returns when the
    /// client disconnects or an unrecoverable transport error occurs.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        loop {
            let (name, args) = match self.reader.read_command() {
                Ok(frame) => frame,
                Err(KvError::ConnectionClosed) => {
                    tracing::debug!("Client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Err(KvError::Io(ref e)) if is_disconnect(e.kind()) => {
                    tracing::debug!("Connection lost to client {}: {}", self.peer_addr, e);
                    return Ok(());
                }
                Err(KvError::Io(ref e))
                    if matches!(
                        e.kind(),
                        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                    ) =>
                {
                    tracing::debug!("Read timeout for client {}", self.peer_addr);
                    return Ok(());
                }
                Err(err) if err.is_protocol_error() => {
                    // Answer the error on the same connection and keep serving
                    tracing::debug!("Protocol error from {}: {}", self.peer_addr, err);
                    self.send_response(&Response::Error(err))?;
                    continue;
                }
                Err(err) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, err);
                    return Err(err);
                }
            };

            tracing::trace!("Received command from {}: {}", self.peer_addr, name);

            let response = self.dispatcher.dispatch(Command::new(name, args));

            if let Err(err) = self.send_response(&response) {
                // Client may vanish between the read and the reply; that is a
                // disconnect, not a server error.
                if let KvError::Io(ref io_err) = err {
                    if is_disconnect(io_err.kind()) {
                        tracing::debug!(
                            "Client {} disconnected before response could be sent: {}",
                            self.peer_addr,
                            err
                        );
                        return Ok(());
                    }
                }
                tracing::warn!("Error writing to {}: {}", self.peer_addr, err);
                return Err(err);
            }
        }
    }

    /// Send a response frame to the client
    fn send_response(&mut self, response: &Response) -> Result<()> {
        self.writer.write_all(&response.to_wire())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

fn is_disconnect(kind: std::io::ErrorKind) -> bool {
    matches!(
        kind,
        std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::BrokenPipe
    )
}
