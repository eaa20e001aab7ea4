//! # respkv
//!
//! A minimal in-memory key-value store speaking a constrained RESP subset:
//! - Strict byte-exact frame validation (markers, lengths, CRLF terminators)
//! - Typed scalar values: integer, boolean, bulk string
//! - SET / GET / DELETE / PING over a persistent TCP connection
//! - One thread per connection, one coarse lock over the store
//!
//! ## Architecture Overview
//!
//! ```text
//! connection bytes
//!        │
//!        ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ FrameReader  │ ──▶ │  Dispatcher  │ ──▶ │KeyValueStore │
//! │ (ValueCodec) │     │ (arg checks) │     │ (Mutex map)  │
//! └──────────────┘     └──────┬───────┘     └──────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │   Response   │ ──▶ bytes back
//!                      └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod dispatch;
pub mod network;
pub mod protocol;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use dispatch::Dispatcher;
pub use error::{KvError, Result};
pub use store::KeyValueStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
