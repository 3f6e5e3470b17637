pub mod generate;
pub mod state;
pub mod types;

pub use generate::generate_study_plan;
pub use types::{Assignment, DayPlan, PlanRequest, StudyPlan, SubjectInput};
