use thiserror::Error;

/// Failures surfaced by the plan generator.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("no study sessions could be scheduled within the exam window")]
    EmptyPlan,
}

/// Field-level rejections for an incoming plan request.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("At least one subject is required")]
    NoSubjects,

    #[error("Subject name is required")]
    EmptySubjectName,

    #[error("At least one chapter is required for subject '{0}'")]
    NoChapters(String),

    #[error("Invalid exam date '{0}'. Please use YYYY-MM-DD")]
    InvalidExamDate(String),

    #[error("Invalid start date '{0}'. Please use YYYY-MM-DD")]
    InvalidStartDate(String),

    #[error("Difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(u8),

    #[error("Daily hours must be greater than 0")]
    NonPositiveDailyHours,
}
