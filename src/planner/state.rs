use std::collections::VecDeque;

use chrono::NaiveDate;

use super::types::SubjectInput;

/// Mutable per-subject bookkeeping for one simulation run.
///
/// `chapter_count` mirrors the length of `remaining_chapters` and is
/// refreshed on every pop so the generator can sum remaining work without
/// walking the deques.
#[derive(Debug, Clone)]
pub struct SubjectState {
    pub name: String,
    remaining_chapters: VecDeque<String>,
    pub exam_date: NaiveDate,
    /// Difficulty normalized to (0, 1] by dividing by 5
    pub difficulty_factor: f64,
    chapter_count: usize,
}

impl SubjectState {
    pub fn from_input(subject: &SubjectInput) -> Self {
        let remaining_chapters: VecDeque<String> = subject.chapters.iter().cloned().collect();
        let chapter_count = remaining_chapters.len();
        Self {
            name: subject.name.clone(),
            remaining_chapters,
            exam_date: subject.exam_date,
            difficulty_factor: f64::from(subject.difficulty) / 5.0,
            chapter_count,
        }
    }

    /// Chapters still waiting to be scheduled
    pub fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    /// Pops the next chapter in study order, keeping the cached count in sync
    pub fn take_next_chapter(&mut self) -> Option<String> {
        let chapter = self.remaining_chapters.pop_front();
        self.chapter_count = self.remaining_chapters.len();
        chapter
    }

    /// A subject stays active while it has material left and its exam has not passed
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.chapter_count > 0 && self.exam_date >= date
    }
}
