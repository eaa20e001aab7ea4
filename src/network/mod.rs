//! Network Module
//!
//! TCP server and connection handling.
//!
//! ## Architecture
//! - Single acceptor thread
//! - One worker thread per connection, all sharing one store
//! - A panic in one handler is contained to that connection

mod connection;
mod server;

pub use connection::Connection;
pub use server::Server;
