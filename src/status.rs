//! Homework record parsing
//!
//! Turns a single homework record into the notification text sent to the
//! chat. The review service reports three statuses; anything else is treated
//! as an error so that a new server-side status shows up as an explicit
//! alert instead of being silently dropped.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A required field is absent, or present with a non-string value.
    #[error("В ответе API у домашней работы отсутствует поле \"{0}\"")]
    MissingField(&'static str),

    #[error("Неожиданный статус домашней работы: {0}")]
    UnknownVerdict(String),
}

/// Human-readable verdict for a review status code.
pub fn verdict_text(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Builds the notification text for one homework record.
///
/// Requires string `homework_name` and `status` fields and a known status
/// code. The output depends only on the record, so re-parsing the same
/// record always yields the same text.
pub fn parse_status(record: &Value) -> Result<String, ParseError> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField("homework_name"))?;
    let status = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField("status"))?;
    let verdict = verdict_text(status).ok_or_else(|| ParseError::UnknownVerdict(status.to_string()))?;

    Ok(format!("Изменился статус проверки работы \"{name}\". {verdict}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_verdict_table() {
        assert_eq!(
            verdict_text("approved"),
            Some("Работа проверена: ревьюеру всё понравилось. Ура!")
        );
        assert_eq!(verdict_text("reviewing"), Some("Работа взята на проверку ревьюером."));
        assert_eq!(
            verdict_text("rejected"),
            Some("Работа проверена: у ревьюера есть замечания.")
        );
        assert_eq!(verdict_text("archived"), None);
        assert_eq!(verdict_text(""), None);
    }

    #[test]
    fn test_parse_approved_record() {
        let record = json!({"homework_name": "hw123", "status": "approved"});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw123\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let record = json!({"homework_name": "hw123", "status": "rejected"});
        assert_eq!(parse_status(&record).unwrap(), parse_status(&record).unwrap());
    }

    #[test]
    fn test_missing_name_field() {
        let record = json!({"status": "approved"});
        assert_eq!(parse_status(&record).unwrap_err(), ParseError::MissingField("homework_name"));
    }

    #[test]
    fn test_missing_status_field() {
        let record = json!({"homework_name": "hw123"});
        assert_eq!(parse_status(&record).unwrap_err(), ParseError::MissingField("status"));
    }

    #[test]
    fn test_non_string_status_counts_as_missing() {
        let record = json!({"homework_name": "hw123", "status": 42});
        assert_eq!(parse_status(&record).unwrap_err(), ParseError::MissingField("status"));
    }

    #[test]
    fn test_unknown_status() {
        let record = json!({"homework_name": "hw123", "status": "archived"});
        assert_eq!(
            parse_status(&record).unwrap_err(),
            ParseError::UnknownVerdict("archived".to_string())
        );
    }

    #[test]
    fn test_unknown_status_message() {
        let err = ParseError::UnknownVerdict("paused".to_string());
        assert_eq!(err.to_string(), "Неожиданный статус домашней работы: paused");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let record = json!({
            "homework_name": "hw123",
            "status": "reviewing",
            "reviewer_comment": "",
            "id": 7,
        });
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw123\". Работа взята на проверку ревьюером."
        );
    }
}
