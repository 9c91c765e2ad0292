use thiserror::Error;

#[derive(Error, Debug)]
pub enum YomikataError {
    #[error("At least one script (hiragana or katakana) must be selected")]
    EmptyScripts,

    #[error("At least one quiz mode must be enabled")]
    NoModes,

    #[error("Cannot generate questions from an empty kana pool")]
    EmptyPool,

    #[error("Question {0} has already been answered")]
    AlreadyAnswered(uuid::Uuid),

    #[error("Question {0} must be answered before advancing")]
    NotAnswered(uuid::Uuid),

    #[error("Quiz session is finished")]
    SessionFinished,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Vibrato error: {0}")]
    Vibrato(Box<vibrato::errors::VibratoError>),

    #[error("Failed to initialize analyzer: {0}")]
    AnalyzerInit(String),

    #[error("YomikataError: {0}")]
    Custom(String),
}

impl YomikataError {
    /// True for caller contract violations (bad study or quiz configuration).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::EmptyScripts | Self::NoModes | Self::EmptyPool)
    }
}

impl From<std::io::Error> for YomikataError {
    fn from(error: std::io::Error) -> Self {
        YomikataError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for YomikataError {
    fn from(error: reqwest::Error) -> Self {
        YomikataError::Reqwest(Box::new(error))
    }
}

impl From<vibrato::errors::VibratoError> for YomikataError {
    fn from(error: vibrato::errors::VibratoError) -> Self {
        YomikataError::Vibrato(Box::new(error))
    }
}

impl From<tokio::task::JoinError> for YomikataError {
    fn from(error: tokio::task::JoinError) -> Self {
        YomikataError::AnalyzerInit(format!("initialization task failed: {error}"))
    }
}
