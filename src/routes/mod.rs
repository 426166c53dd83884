//! HTTP route handlers for the BackupWacht exporter.
//!
//! The exporter serves a deliberately small surface:
//!
//! - `health`: liveness/readiness probes, the Prometheus exposition, the JSON
//!   status snapshot and build info

pub mod health;
