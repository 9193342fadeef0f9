//! `SQLite` word store and its shared connection helpers.
//!
//! - `connection`: mutex acquisition with poison recovery, pragma setup
//! - `metrics`: per-operation counters and latency histograms
//! - `words`: the [`SqliteWordStore`] itself

mod connection;
mod metrics;
mod words;

pub use connection::{BUSY_TIMEOUT, acquire_lock, configure_connection};
pub use metrics::record_operation_metrics;
pub use words::SqliteWordStore;
