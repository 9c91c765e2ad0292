pub mod config;
pub mod generator;
pub mod grader;
pub mod pool;
pub mod question;
pub mod session;

pub use config::{
    QuizMode,
    QuizSettings,
    StudyConfig,
};
pub use generator::{
    make_questions,
    pick_distractors,
};
pub use grader::is_correct_choice;
pub use pool::{
    build_pool,
    QuestionPool,
};
pub use question::{
    Choice,
    Question,
    QuestionKind,
};
pub use session::{
    AnswerRecord,
    QuizSession,
    QuizSummary,
};
