//! Snaplink - a minimalist in-memory URL shortener service
//!
//! This library provides the core functionality for the Snaplink service:
//! an HTTP API for shortening URLs and redirecting short codes to their
//! original destinations.
//!
//! # Architecture
//! - `config`: Environment-derived server configuration
//! - `errors`: Error types used across the crate
//! - `services`: HTTP services (shorten API, redirect)
//! - `storages`: Storage trait and backends
//! - `system`: Logging initialization
//! - `utils`: Short code generation and URL normalization

pub mod config;
pub mod errors;
pub mod services;
pub mod storages;
pub mod system;
pub mod utils;
