//! Integration and unit tests for the BackupWacht exporter.
//!
//! This module organizes all test modules for the application, providing
//! coverage for the individual components and the HTTP surface.
//!
//! ## Test Modules
//!
//! - **scanner_tests**: Directory traversal, latest-file selection, excludes
//! - **metrics_tests**: Gauge publishing rules and byte formatting
//! - **watcher_tests**: The periodic scan loop and its cancellation
//! - **config_tests**: Configuration loading and validation tests
//! - **error_tests**: Scan error formatting and source chains
//! - **health_api_tests**: HTTP endpoint tests
//!
//! ## Running Tests
//!
//! Tests can be run using:
//! ```bash
//! cargo test
//! ```
//!
//! Individual test modules can be run with:
//! ```bash
//! cargo test scanner_tests
//! cargo test health_api_tests
//! # etc.
//! ```

pub mod config_tests;
