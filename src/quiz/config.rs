use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::YomikataError,
    kana::Script,
};

pub const DEFAULT_QUESTION_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizMode {
    #[serde(rename = "kana→romaji")]
    KanaToRomaji,
    #[serde(rename = "romaji→kana")]
    RomajiToKana,
    #[serde(rename = "typing")]
    Typing,
}

impl QuizMode {
    pub const ALL: [QuizMode; 3] = [QuizMode::KanaToRomaji, QuizMode::RomajiToKana, QuizMode::Typing];

    pub fn is_multiple_choice(&self) -> bool {
        !matches!(self, QuizMode::Typing)
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            QuizMode::KanaToRomaji => "kana→romaji",
            QuizMode::RomajiToKana => "romaji→kana",
            QuizMode::Typing => "typing",
        };
        write!(f, "{}", readable)
    }
}

/// Which part of the inventory to study. Handakuten rides on `include_dakuten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyConfig {
    pub scripts: Vec<Script>,
    #[serde(default)]
    pub include_dakuten: bool,
    #[serde(default)]
    pub include_youon: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self { scripts: vec![Script::Hiragana], include_dakuten: false, include_youon: false }
    }
}

impl StudyConfig {
    pub fn new(scripts: impl IntoIterator<Item = Script>) -> Self {
        let mut config = Self { scripts: Vec::new(), ..Self::default() };
        for script in scripts {
            if !config.scripts.contains(&script) {
                config.scripts.push(script);
            }
        }
        config
    }

    pub fn with_dakuten(mut self, include: bool) -> Self {
        self.include_dakuten = include;
        self
    }

    pub fn with_youon(mut self, include: bool) -> Self {
        self.include_youon = include;
        self
    }

    pub fn validate(&self) -> Result<(), YomikataError> {
        if self.scripts.is_empty() {
            return Err(YomikataError::EmptyScripts);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    pub modes: Vec<QuizMode>,
    #[serde(flatten)]
    pub study: StudyConfig,
    #[serde(default = "default_question_count")]
    pub question_count: usize,
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            modes: vec![QuizMode::KanaToRomaji],
            study: StudyConfig::default(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl QuizSettings {
    /// Modes in canonical generator order, deduplicated.
    pub fn enabled_modes(&self) -> Vec<QuizMode> {
        QuizMode::ALL.into_iter().filter(|mode| self.modes.contains(mode)).collect()
    }

    pub fn validate(&self) -> Result<(), YomikataError> {
        if self.enabled_modes().is_empty() {
            return Err(YomikataError::NoModes);
        }
        self.study.validate()
    }
}
