//! diskwatch - disk usage checker with email alerts
//!
//! This library provides the single-pass pipeline behind the `diskwatch`
//! binary: load configuration, sample filesystem usage, evaluate the limit,
//! send at most one alert email, and append a run record.
//!
//! # Modules
//!
//! - [`alerts`]: Threshold evaluation, alert composition, and notifiers
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain value types
//! - [`error`]: Error types
//! - [`probe`]: Filesystem capacity abstraction layer
//! - [`runlog`]: Append-only run log
//! - [`services`]: Sampling and run orchestration

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod probe;
pub mod runlog;
pub mod services;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
