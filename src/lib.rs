pub mod core;
pub mod dictionary;
pub mod kana;
pub mod persistence;
pub mod quiz;
pub mod segmentation;

pub use crate::core::{
    init_tracing,
    YomikataError,
};
pub use kana::{
    kana_items,
    KanaChart,
    KanaItem,
    Script,
};
pub use quiz::{
    build_pool,
    is_correct_choice,
    make_questions,
    pick_distractors,
    Question,
    QuizMode,
    QuizSession,
    QuizSettings,
    StudyConfig,
};
pub use segmentation::{
    romanize,
    romanize_sentence,
    AnalyzerConfig,
    RomanizedSentence,
};
