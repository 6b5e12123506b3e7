//! A multi-question quiz run.
//!
//! ```
//! use bizboard::board::CompanyLevel;
//! use bizboard::core::{GameRng, QuizSpec};
//! use bizboard::quiz::{Question, QuestionBank, QuizSeries, SeriesStep};
//!
//! let q = Question {
//!     id: 1,
//!     text: "2 + 2?".into(),
//!     options: vec!["3".into(), "4".into()],
//!     correct_index: 1,
//! };
//! let bank = QuestionBank::new(vec![q], vec![], vec![]);
//! let mut rng = GameRng::new(0);
//!
//! let mut series = QuizSeries::new(CompanyLevel::Founded, QuizSpec::new(1, 1));
//! let SeriesStep::Ask(question) = series.next(&bank, &mut rng) else { unreachable!() };
//! assert!(series.answer(question.correct_index).unwrap());
//! assert_eq!(series.next(&bank, &mut rng), SeriesStep::Finished { passed: true, correct: 1 });
//! ```

use rustc_hash::FxHashSet;

use super::{Question, QuestionBank};
use crate::board::CompanyLevel;
use crate::core::{FlowError, GameRng, QuizSpec};

/// What a series wants next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesStep {
    /// Present this question and call [`QuizSeries::answer`].
    Ask(Question),
    /// The series is over.
    Finished { passed: bool, correct: u8 },
}

/// State of one quiz run.
///
/// Questions never repeat within a series. When the bank runs out of
/// unused questions the series finishes early with what it has.
#[derive(Clone, Debug)]
pub struct QuizSeries {
    level: CompanyLevel,
    spec: QuizSpec,
    asked: u8,
    correct: u8,
    used: FxHashSet<u32>,
    current: Option<Question>,
}

impl QuizSeries {
    #[must_use]
    pub fn new(level: CompanyLevel, spec: QuizSpec) -> Self {
        Self {
            level,
            spec,
            asked: 0,
            correct: 0,
            used: FxHashSet::default(),
            current: None,
        }
    }

    /// Draw the next question, or finish.
    ///
    /// Calling this while a question is unanswered asks it again.
    pub fn next(&mut self, bank: &QuestionBank, rng: &mut GameRng) -> SeriesStep {
        if let Some(current) = &self.current {
            return SeriesStep::Ask(current.clone());
        }
        if self.asked >= self.spec.questions {
            return self.finished();
        }

        let unused: Vec<&Question> = bank
            .questions(self.level)
            .iter()
            .filter(|q| !self.used.contains(&q.id))
            .collect();
        match rng.choose(&unused) {
            Some(question) => {
                let question = (*question).clone();
                self.used.insert(question.id);
                self.current = Some(question.clone());
                SeriesStep::Ask(question)
            }
            None => self.finished(),
        }
    }

    /// Lock in an answer for the current question.
    pub fn answer(&mut self, option: usize) -> Result<bool, FlowError> {
        let question = self.current.take().ok_or(FlowError::NoActiveQuestion)?;
        self.asked += 1;
        let correct = question.is_correct(option);
        if correct {
            self.correct += 1;
        }
        Ok(correct)
    }

    /// Correct answers so far.
    #[must_use]
    pub fn correct(&self) -> u8 {
        self.correct
    }

    /// Questions answered so far.
    #[must_use]
    pub fn asked(&self) -> u8 {
        self.asked
    }

    fn finished(&self) -> SeriesStep {
        // A series that asked nothing never passes
        let passed = self.asked > 0 && self.correct >= self.spec.required;
        SeriesStep::Finished {
            passed,
            correct: self.correct,
        }
    }
}
