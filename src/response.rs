//! API response shape validation
//!
//! The status endpoint is expected to answer with an object carrying a
//! `homeworks` list and a `current_date` timestamp:
//!
//! ```json
//! {
//!   "homeworks": [ { "homework_name": "...", "status": "..." } ],
//!   "current_date": 1700000000
//! }
//! ```
//!
//! [`validate`] checks that shape before any record is touched, so a broken
//! payload fails the cycle with one precise message instead of surfacing as
//! a confusing lookup error deeper in. Individual records are checked later
//! by [`crate::status::parse_status`].

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Ответ API не является объектом")]
    NotAnObject,

    #[error("В ответе API отсутствует ключ \"homeworks\"")]
    MissingHomeworks,

    #[error("Значение \"homeworks\" в ответе API не является списком")]
    HomeworksNotAList,
}

/// Validates the payload shape and borrows the homework list out of it.
///
/// The records themselves are passed through untouched; an empty list is
/// valid and simply means nothing changed since the cursor.
pub fn validate(payload: &Value) -> Result<&[Value], SchemaError> {
    let object = payload.as_object().ok_or(SchemaError::NotAnObject)?;
    let homeworks = object.get("homeworks").ok_or(SchemaError::MissingHomeworks)?;
    let list = homeworks.as_array().ok_or(SchemaError::HomeworksNotAList)?;
    Ok(list)
}

/// Server-side timestamp from the payload, if present and integral.
///
/// Used to advance the poll cursor; `None` leaves the cursor where it was.
pub fn current_date(payload: &Value) -> Option<i64> {
    payload.get("current_date").and_then(Value::as_i64)
}
