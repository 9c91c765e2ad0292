use serde::Serialize;
use uuid::Uuid;

use super::config::QuizMode;
use crate::kana::{
    Col,
    KanaItem,
    Row,
    Script,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: Uuid,
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(value: &str) -> Self {
        Self { id: Uuid::new_v4(), label: value.to_string(), value: value.to_string() }
    }
}

/// Descriptive fields of the kana item a question was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionMeta {
    pub script: Script,
    pub row: Row,
    pub col: Col,
    pub kana: String,
    pub romaji: String,
}

impl From<&KanaItem> for QuestionMeta {
    fn from(item: &KanaItem) -> Self {
        Self {
            script: item.script,
            row: item.row,
            col: item.col,
            kana: item.kana.clone(),
            romaji: item.romaji.clone(),
        }
    }
}

/// Mode-specific payload. Only the multiple-choice modes carry choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode")]
pub enum QuestionKind {
    #[serde(rename = "kana→romaji")]
    KanaToRomaji { choices: Vec<Choice> },
    #[serde(rename = "romaji→kana")]
    RomajiToKana { choices: Vec<Choice> },
    #[serde(rename = "typing")]
    Typing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub prompt: String,
    pub correct_value: String,
    pub meta: QuestionMeta,
}

impl Question {
    pub fn mode(&self) -> QuizMode {
        match self.kind {
            QuestionKind::KanaToRomaji { .. } => QuizMode::KanaToRomaji,
            QuestionKind::RomajiToKana { .. } => QuizMode::RomajiToKana,
            QuestionKind::Typing => QuizMode::Typing,
        }
    }

    pub fn choices(&self) -> Option<&[Choice]> {
        match &self.kind {
            QuestionKind::KanaToRomaji { choices } | QuestionKind::RomajiToKana { choices } => {
                Some(choices)
            }
            QuestionKind::Typing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kana::find_kana;

    fn question(kind: QuestionKind) -> Question {
        let item = find_kana("か").unwrap();
        Question {
            id: Uuid::new_v4(),
            kind,
            prompt: item.kana.clone(),
            correct_value: item.romaji.clone(),
            meta: item.into(),
        }
    }

    #[test]
    fn typing_serializes_without_choices() {
        let json = serde_json::to_value(question(QuestionKind::Typing)).unwrap();
        assert_eq!(json["mode"], "typing");
        assert_eq!(json["prompt"], "か");
        assert_eq!(json["correctValue"], "ka");
        assert!(json.get("choices").is_none());
    }

    #[test]
    fn multiple_choice_serializes_choices() {
        let q = question(QuestionKind::KanaToRomaji { choices: vec![Choice::new("ka"), Choice::new("sa")] });
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["mode"], "kana→romaji");
        assert_eq!(json["choices"].as_array().unwrap().len(), 2);
        assert_eq!(json["meta"]["row"], "k");
        assert_eq!(q.mode(), QuizMode::KanaToRomaji);
        assert_eq!(q.choices().map(|c| c.len()), Some(2));
    }
}
