use chrono::Duration;

use crate::error::PlanError;

use super::state::SubjectState;
use super::types::{Assignment, DayPlan, PlanRequest, StudyPlan};

/// Generates a study plan that:
/// 1. Prioritizes subjects by exam date (closest first), then difficulty (hardest first)
/// 2. Removes subjects once their exam date has passed
/// 3. Weights each session's hours by subject difficulty
///
/// The simulation advances one calendar day per iteration. Each day the daily
/// budget is split evenly across every remaining chapter of every active
/// subject, and each subject's front chapter is funded in priority order with
/// a difficulty bonus of `1 + difficulty_factor` over the even split. Once a
/// subject's request no longer fits in what is left of the day, allocation
/// stops for that day entirely; lower-priority subjects wait for the next day.
///
/// Chapters still unfinished when a subject's exam passes are dropped from
/// the plan without an error. Fails with [`PlanError::EmptyPlan`] when no
/// session could be scheduled at all.
pub fn generate_study_plan(request: &PlanRequest) -> Result<StudyPlan, PlanError> {
    let mut active: Vec<SubjectState> = request.subjects.iter().map(SubjectState::from_input).collect();

    let mut study_plan: StudyPlan = Vec::new();
    let mut current_date = request.start_date;

    while !active.is_empty() {
        // Subjects whose exam has already passed get no further study time
        active.retain(|s| s.exam_date >= current_date);
        if active.is_empty() {
            break;
        }

        let total_remaining: usize = active.iter().map(|s| s.chapter_count()).sum();
        if total_remaining == 0 {
            break;
        }
        let per_chapter_share = request.daily_hours / total_remaining as f64;

        // The day's priority order is a sorted index view over the active set,
        // so removals below never alias the sequence being iterated
        let order = priority_order(&active);

        let mut remaining_budget = request.daily_hours;
        let mut day_sessions: Vec<Assignment> = Vec::new();

        for idx in order {
            let subject = &mut active[idx];
            if !subject.is_active_on(current_date) {
                continue;
            }

            let hours_needed = per_chapter_share * (1.0 + subject.difficulty_factor);
            if hours_needed > remaining_budget {
                // Once one subject no longer fits, the day is closed for every
                // subject after it as well
                break;
            }

            if let Some(chapter) = subject.take_next_chapter() {
                day_sessions.push(Assignment {
                    subject: subject.name.clone(),
                    chapter,
                    hours: hours_needed,
                });
                remaining_budget -= hours_needed;
            }
        }

        // Completed subjects leave the active set before the next day starts
        active.retain(|s| s.chapter_count() > 0);

        if !day_sessions.is_empty() {
            study_plan.push(DayPlan {
                date: current_date,
                plan: day_sessions,
            });
        }

        current_date = current_date + Duration::days(1);

        // Nothing can be scheduled past the latest remaining exam
        let Some(last_exam) = active.iter().map(|s| s.exam_date).max() else {
            break;
        };
        if current_date > last_exam {
            break;
        }
    }

    if study_plan.is_empty() {
        return Err(PlanError::EmptyPlan);
    }
    Ok(study_plan)
}

/// Indices of `active` sorted by exam date ascending, then difficulty factor
/// descending. Recomputed every day because the active set shrinks daily.
fn priority_order(active: &[SubjectState]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..active.len()).collect();
    order.sort_by(|&a, &b| {
        active[a]
            .exam_date
            .cmp(&active[b].exam_date)
            .then_with(|| active[b].difficulty_factor.total_cmp(&active[a].difficulty_factor))
    });
    order
}
