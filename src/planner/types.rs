use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A subject with its unfinished chapters, as seen by the planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInput {
    pub name: String,
    /// Chapters still to cover, in the order they should be studied
    pub chapters: Vec<String>,
    pub exam_date: NaiveDate,
    pub difficulty: u8, // 1 (easy) to 5 (very difficult)
}

/// A fully validated plan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub subjects: Vec<SubjectInput>,
    pub daily_hours: f64,
    pub start_date: NaiveDate,
}

/// One study session committed on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub subject: String,
    pub chapter: String,
    pub hours: f64,
}

/// All sessions committed for one calendar day, in priority order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub plan: Vec<Assignment>,
}

/// The full schedule; one entry per day that received at least one session
pub type StudyPlan = Vec<DayPlan>;
