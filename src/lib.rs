//! # BackupWacht Library
//!
//! This is the core library for BackupWacht, a small Prometheus exporter that
//! watches a backup directory. A background task scans the directory on a
//! fixed interval, derives how recent and how large the newest backup is, and
//! publishes the result as gauges over HTTP.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: Modern web framework for HTTP server and routing
//! - **Walkdir**: Recursive directory traversal
//! - **Tokio**: Async runtime; scans run on the blocking pool
//! - **Serde**: Serialization for the JSON status endpoint
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`error`]: Scan error taxonomy
//! - [`metrics`]: The published gauge set and byte formatting
//! - [`routes`]: HTTP endpoint handlers
//! - [`scanner`]: Directory traversal and latest-file detection
//! - [`state`]: Shared application state
//! - [`types`]: Scan options shared between config and scanner
//! - [`watcher`]: The periodic scan loop

pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod scanner;
pub mod state;
pub mod types;
pub mod watcher;

#[cfg(test)]
mod tests;
