use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::planner::{PlanRequest, SubjectInput};

/// Wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A subject as submitted on the wire, dates still unparsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectForm {
    pub name: String,
    pub chapters: Vec<String>,
    pub exam_date: String,
    pub difficulty: u8,
}

/// A plan request as submitted on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequestForm {
    pub subjects: Vec<SubjectForm>,
    pub daily_hours: f64,
    pub start_date: String,
}

/// Checks every field rule and converts the form into typed planner input.
///
/// The planner itself assumes these rules hold; nothing past this function
/// re-validates shape or ranges.
pub fn validate_request(form: &PlanRequestForm) -> Result<PlanRequest, ValidationError> {
    if form.subjects.is_empty() {
        return Err(ValidationError::NoSubjects);
    }
    if form.daily_hours <= 0.0 {
        return Err(ValidationError::NonPositiveDailyHours);
    }
    let start_date = parse_date(&form.start_date)
        .ok_or_else(|| ValidationError::InvalidStartDate(form.start_date.clone()))?;

    let mut subjects = Vec::with_capacity(form.subjects.len());
    for subject in &form.subjects {
        let name = subject.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptySubjectName);
        }
        if subject.chapters.is_empty() {
            return Err(ValidationError::NoChapters(name.to_string()));
        }
        let exam_date = parse_date(&subject.exam_date)
            .ok_or_else(|| ValidationError::InvalidExamDate(subject.exam_date.clone()))?;
        if !(1..=5).contains(&subject.difficulty) {
            return Err(ValidationError::DifficultyOutOfRange(subject.difficulty));
        }
        subjects.push(SubjectInput {
            name: name.to_string(),
            chapters: subject.chapters.clone(),
            exam_date,
            difficulty: subject.difficulty,
        });
    }

    Ok(PlanRequest {
        subjects,
        daily_hours: form.daily_hours,
        start_date,
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Loads and validates a plan request from a JSON file (CLI mode)
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<PlanRequest, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let form: PlanRequestForm = serde_json::from_str(&contents)?;
    Ok(validate_request(&form)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PlanRequestForm {
        PlanRequestForm {
            subjects: vec![SubjectForm {
                name: "Mathematics".to_string(),
                chapters: vec!["Algebra".to_string(), "Geometry".to_string()],
                exam_date: "2025-06-10".to_string(),
                difficulty: 3,
            }],
            daily_hours: 4.0,
            start_date: "2025-06-01".to_string(),
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let request = validate_request(&valid_form()).unwrap();
        assert_eq!(request.subjects.len(), 1);
        assert_eq!(request.subjects[0].name, "Mathematics");
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(
            request.subjects[0].exam_date,
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
        );
    }

    #[test]
    fn test_subject_name_is_trimmed() {
        let mut form = valid_form();
        form.subjects[0].name = "  Mathematics  ".to_string();
        let request = validate_request(&form).unwrap();
        assert_eq!(request.subjects[0].name, "Mathematics");
    }

    #[test]
    fn test_rejects_empty_subject_list() {
        let mut form = valid_form();
        form.subjects.clear();
        assert!(matches!(
            validate_request(&form),
            Err(ValidationError::NoSubjects)
        ));
    }

    #[test]
    fn test_rejects_blank_subject_name() {
        let mut form = valid_form();
        form.subjects[0].name = "   ".to_string();
        assert!(matches!(
            validate_request(&form),
            Err(ValidationError::EmptySubjectName)
        ));
    }

    #[test]
    fn test_rejects_subject_without_chapters() {
        let mut form = valid_form();
        form.subjects[0].chapters.clear();
        assert!(matches!(
            validate_request(&form),
            Err(ValidationError::NoChapters(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_exam_date() {
        let mut form = valid_form();
        form.subjects[0].exam_date = "10/06/2025".to_string();
        assert!(matches!(
            validate_request(&form),
            Err(ValidationError::InvalidExamDate(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_start_date() {
        let mut form = valid_form();
        form.start_date = "June 1st".to_string();
        assert!(matches!(
            validate_request(&form),
            Err(ValidationError::InvalidStartDate(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_difficulty() {
        let mut form = valid_form();
        form.subjects[0].difficulty = 0;
        assert!(matches!(
            validate_request(&form),
            Err(ValidationError::DifficultyOutOfRange(0))
        ));

        form.subjects[0].difficulty = 6;
        assert!(matches!(
            validate_request(&form),
            Err(ValidationError::DifficultyOutOfRange(6))
        ));
    }

    #[test]
    fn test_rejects_non_positive_daily_hours() {
        let mut form = valid_form();
        form.daily_hours = 0.0;
        assert!(matches!(
            validate_request(&form),
            Err(ValidationError::NonPositiveDailyHours)
        ));
    }
}
