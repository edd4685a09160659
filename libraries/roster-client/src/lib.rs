//! Roster Client
//!
//! Fetches the raw user payload over HTTP, normalizes it and loads it into
//! a [`UserStore`](roster_core::UserStore).
//!
//! # Features
//!
//! - **Fetch**: single GET of the configured endpoint, decoded as a record array
//! - **Loading**: fetch, normalize and replace the store, failures logged and swallowed
//! - **Configuration**: TOML file plus `ROSTER_*` environment overrides
//! - **Timer**: one-second stopwatch and tick-counting delay
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, RosterClient, UserLoader};
//! use roster_core::UserStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RosterClient::new(ClientConfig::new("http://localhost:3000/"))?;
//!     let store = Arc::new(UserStore::new());
//!
//!     let loader = UserLoader::new(client, Arc::clone(&store));
//!     loader.load().await;
//!
//!     println!("Total fees paid: {}", store.total_fees_paid());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod loader;
mod source;
mod timer;

pub use crate::config::ClientConfig;
pub use client::RosterClient;
pub use error::{ClientError, Result};
pub use loader::{LoadOutcome, UserLoader};
pub use source::RecordSource;
pub use timer::{resolve_after_ticks, Stopwatch};
