//! Homework bot - Telegram bot that reports homework review status changes
//!
//! This library provides the full polling pipeline for the Yandex Practicum
//! homework status API: fetch, validate, parse, notify, with repeated-error
//! suppression and a cursor that only moves after a delivered message.
//!
//! # Module Structure
//!
//! - `config`: environment-driven startup configuration
//! - `api`: HTTP client for the status endpoint
//! - `response`: payload shape validation
//! - `status`: record parsing and verdict texts
//! - `notifier`: Telegram delivery behind the `Notify` trait
//! - `poller`: the poll loop itself

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod notifier;
pub mod poller;
pub mod response;
pub mod status;

// Re-export commonly used types for convenience
pub use api::{ApiError, StatusClient};
pub use config::{Config, ConfigError};
pub use notifier::{Notify, TelegramNotifier};
pub use poller::{CycleError, CycleOutcome, Poller};
