use chrono::{
    DateTime,
    Utc,
};
use rand::Rng;
use serde::Serialize;
use tracing::{
    debug,
    info,
};
use uuid::Uuid;

use super::{
    config::{
        QuizMode,
        QuizSettings,
    },
    generator::make_questions,
    grader::is_correct_choice,
    pool::build_pool,
    question::{
        Question,
        QuestionMeta,
    },
};
use crate::core::YomikataError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: Uuid,
    pub mode: QuizMode,
    pub given: String,
    pub correct: bool,
    pub expected: String,
    pub meta: QuestionMeta,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn grade(question: &Question, given: &str) -> Self {
        Self {
            question_id: question.id,
            mode: question.mode(),
            given: given.to_string(),
            correct: is_correct_choice(given, &question.correct_value),
            expected: question.correct_value.clone(),
            meta: question.meta.clone(),
            answered_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percent: u32,
    pub answers: Vec<AnswerRecord>,
}

impl QuizSummary {
    pub fn mistakes(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.answers.iter().filter(|a| !a.correct)
    }
}

fn percent(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

/// One run through a question batch. Owns its questions and the ordered
/// answer log; nothing is shared between sessions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    settings: QuizSettings,
    questions: Vec<Question>,
    index: usize,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(settings: QuizSettings, rng: &mut R) -> Result<Self, YomikataError> {
        settings.validate()?;

        let pool = build_pool(&settings.study)?;
        let questions =
            make_questions(&pool, &settings.enabled_modes(), settings.question_count, rng)?;

        info!(
            questions = questions.len(),
            pool_size = pool.len(),
            "quiz session started"
        );
        Ok(Self { settings, questions, index: 0, answers: Vec::new() })
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Zero-based index of the question at the cursor.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    fn current_is_answered(&self) -> bool {
        self.answers.len() > self.index
    }

    /// Grade `given` against the current question and log it. The cursor
    /// stays put until `advance`.
    pub fn answer(&mut self, given: &str) -> Result<&AnswerRecord, YomikataError> {
        let question = self.current().ok_or(YomikataError::SessionFinished)?;
        if self.current_is_answered() {
            return Err(YomikataError::AlreadyAnswered(question.id));
        }

        let record = AnswerRecord::grade(question, given);
        debug!(
            question = %record.question_id,
            mode = %record.mode,
            correct = record.correct,
            "answer recorded"
        );
        self.answers.push(record);
        Ok(&self.answers[self.answers.len() - 1])
    }

    pub fn advance(&mut self) -> Result<(), YomikataError> {
        let question = self.current().ok_or(YomikataError::SessionFinished)?;
        if !self.current_is_answered() {
            return Err(YomikataError::NotAnswered(question.id));
        }

        self.index += 1;
        if self.is_finished() {
            info!(score = self.score(), total = self.questions.len(), "quiz session finished");
        }
        Ok(())
    }

    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    pub fn summary(&self) -> QuizSummary {
        let score = self.score();
        let total = self.questions.len();
        QuizSummary { score, total, percent: percent(score, total), answers: self.answers.clone() }
    }

    /// Fresh batch with the same settings.
    pub fn retake<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, YomikataError> {
        Self::start(self.settings.clone(), rng)
    }
}
