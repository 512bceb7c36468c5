//! Homework domain types

use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use crate::error::{Result, ValidationError};

/// Review status of a submitted homework
///
/// This is a closed set: any other code reported by the API is treated as
/// a contract change and rejected with [`ValidationError::UnknownStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All known statuses, in the order the API documents them
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Wire code used by the status API
    pub fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Fixed human-readable verdict for this status
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| ValidationError::UnknownStatus(s.to_string()))
    }
}

/// A single homework record as reported by the status API
///
/// Only the fields the notifier needs are kept; anything else in the
/// record (reviewer comment, dates, ids) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
}

impl Homework {
    /// Reads a homework out of a raw JSON record
    ///
    /// The status is kept as the raw code here; use [`Homework::status`] to
    /// resolve it against the known set.
    pub fn from_record(record: &Value) -> Result<Self> {
        Self::deserialize(record).map_err(|e| ValidationError::MalformedRecord(e.to_string()))
    }

    /// Resolves the raw status code
    pub fn status(&self) -> Result<HomeworkStatus> {
        self.status.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes_parse() {
        for status in HomeworkStatus::ALL {
            assert_eq!(status.code().parse::<HomeworkStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "in_review".parse::<HomeworkStatus>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownStatus(ref s) if s == "in_review"));
    }

    #[test]
    fn test_status_codes_are_case_sensitive() {
        assert!("Approved".parse::<HomeworkStatus>().is_err());
    }

    #[test]
    fn test_from_record_ignores_extra_fields() {
        let record = json!({
            "id": 124,
            "status": "rejected",
            "homework_name": "username__hw_python_oop.zip",
            "reviewer_comment": "Код не по PEP8",
            "date_updated": "2020-02-13T16:42:47Z",
            "lesson_name": "Итоговый проект"
        });

        let homework = Homework::from_record(&record).unwrap();
        assert_eq!(homework.homework_name, "username__hw_python_oop.zip");
        assert_eq!(homework.status().unwrap(), HomeworkStatus::Rejected);
    }

    #[test]
    fn test_from_record_requires_status() {
        let record = json!({ "homework_name": "proj1" });
        let err = Homework::from_record(&record).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedRecord(ref msg) if msg.contains("status")));
    }

    #[test]
    fn test_from_record_requires_mapping() {
        assert!(Homework::from_record(&json!("approved")).is_err());
    }
}
