//! Notification texts

use serde_json::Value;
use std::fmt::Display;

use crate::domain::homework::Homework;
use crate::error::Result;

/// Builds the status-change notification for a homework record
///
/// Fails if the record is malformed or its status is not a known verdict,
/// so a verdict-shaped message is only ever produced for known statuses.
pub fn describe(record: &Value) -> Result<String> {
    let homework = Homework::from_record(record)?;
    let status = homework.status()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name,
        status.verdict()
    ))
}

/// Builds the notification sent when a poll cycle fails
pub fn failure_message(error: &impl Display) -> String {
    format!("Сбой в работе программы: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    #[test]
    fn test_describe_approved() {
        let message = describe(&json!({"status": "approved", "homework_name": "proj1"})).unwrap();
        assert!(message.contains("proj1"));
        assert!(message.ends_with("Работа проверена: ревьюеру всё понравилось. Ура!"));
    }

    #[test]
    fn test_describe_template() {
        let message = describe(&json!({"status": "reviewing", "homework_name": "hw05"})).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw05\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_describe_unknown_status() {
        let err = describe(&json!({"status": "in_review", "homework_name": "proj1"})).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownStatus(ref s) if s == "in_review"));
        assert!(err.is_contract_change());
    }

    #[test]
    fn test_failure_message() {
        let err = ValidationError::UnknownStatus("in_review".to_string());
        assert_eq!(
            failure_message(&err),
            "Сбой в работе программы: unknown homework status: in_review"
        );
    }
}
