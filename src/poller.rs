//! Periodic poll loop
//!
//! One cycle is fetch, validate, parse, notify. Errors from any of those
//! stages are caught at the cycle boundary, reported to the chat as
//! `Сбой в работе программы: <error>` and never escape the loop, so a bad
//! cycle can only ever cost one interval. Repeats of the same error are
//! logged but not re-sent to the chat until the error text changes or a
//! cycle succeeds.
//!
//! The poll cursor starts at process start time and advances to the
//! server-reported `current_date` only after a delivered notification, so
//! a record is never dropped because Telegram was briefly down.

use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::api::{ApiError, StatusClient};
use crate::notifier::Notify;
use crate::response::{self, SchemaError};
use crate::status::{self, ParseError};

/// Everything that can fail a poll cycle.
///
/// The variants are the pipeline stages; each carries the stage's own error
/// and renders with its message, which then gets the `Сбой в работе
/// программы:` prefix when reported to the chat.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// How a single cycle ended.
#[derive(Debug)]
pub enum CycleOutcome {
    /// A status change was reported to the chat and the cursor advanced.
    Delivered,
    /// Nothing changed since the cursor.
    NoUpdates,
    /// A status change was parsed but Telegram did not accept the message.
    /// The cursor stays put, so the next cycle retries the same record.
    DeliveryFailed,
    /// The cycle failed; an error alert was sent unless suppressed as a
    /// repeat of the previous cycle's error.
    Faulted(CycleError),
}

/// Drives poll cycles against the status API.
pub struct Poller<N: Notify> {
    client: StatusClient,
    notifier: N,
    retry_period: Duration,
    cursor: i64,
    last_error: Option<String>,
}

impl<N: Notify> Poller<N> {
    /// Creates a poller whose cursor starts at the current time, so only
    /// changes that happen after startup are reported.
    pub fn new(client: StatusClient, notifier: N, retry_period: Duration) -> Self {
        Self {
            client,
            notifier,
            retry_period,
            cursor: Utc::now().timestamp(),
            last_error: None,
        }
    }

    /// Current poll cursor (Unix seconds).
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Runs cycles forever at the configured interval.
    ///
    /// The first cycle starts immediately; each subsequent one on the next
    /// tick of the interval. A cycle that overruns the period delays the
    /// following tick instead of triggering a burst of catch-up cycles.
    ///
    /// # Panics
    ///
    /// Panics if the retry period is zero; the interval timer requires a
    /// non-zero period. [`crate::config::Config::from_env`] never produces
    /// one.
    pub async fn run(&mut self) {
        log::info!("Homework poller started (interval: {}s)", self.retry_period.as_secs());

        let mut ticker = cycle_ticker(self.retry_period);
        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    /// Runs one complete cycle, including error reporting.
    ///
    /// This is the error boundary: a failed stage is logged, sent to the
    /// chat (unless it repeats the previous cycle's error verbatim) and
    /// folded into the returned outcome. Any successful cycle resets the
    /// repeat suppression.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => {
                self.last_error = None;
                outcome
            }
            Err(e) => {
                let message = format!("Сбой в работе программы: {e}");
                log::error!("{message}");

                if self.last_error.as_deref() == Some(message.as_str()) {
                    log::debug!("Повторная ошибка, уведомление не отправляется");
                } else {
                    self.notifier.notify(&message).await;
                }
                self.last_error = Some(message);

                CycleOutcome::Faulted(e)
            }
        }
    }

    /// One pass through the pipeline: fetch, validate, parse, notify.
    ///
    /// Only the first (most recent) record of the list is examined; the
    /// API is expected to return at most one pending item per interval.
    async fn poll_once(&mut self) -> Result<CycleOutcome, CycleError> {
        let payload = self.client.fetch(self.cursor).await?;
        let homeworks = response::validate(&payload)?;

        let record = match homeworks.first() {
            Some(record) => record,
            None => {
                log::debug!("В ответе нет новых статусов.");
                return Ok(CycleOutcome::NoUpdates);
            }
        };

        let text = status::parse_status(record)?;
        if !self.notifier.notify(&text).await {
            return Ok(CycleOutcome::DeliveryFailed);
        }

        self.cursor = response::current_date(&payload).unwrap_or(self.cursor);
        Ok(CycleOutcome::Delivered)
    }
}

/// Ticker for the poll loop: first tick immediate, missed ticks delayed so
/// an overrunning cycle never causes back-to-back cycles.
fn cycle_ticker(period: Duration) -> Interval {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
