use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
        };
        write!(f, "{}", readable)
    }
}

/// Consonant row of the syllabary grid, a voiced row, or one of the two
/// pseudo-rows used for ん and digraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    Vowel,
    K,
    S,
    T,
    N,
    H,
    M,
    Y,
    R,
    W,
    G, // dakuten
    Z,
    D,
    B,
    P, // handakuten
    Special,
    Youon,
}

impl Row {
    pub fn key(&self) -> &'static str {
        match self {
            Row::Vowel => "vowel",
            Row::K => "k",
            Row::S => "s",
            Row::T => "t",
            Row::N => "n",
            Row::H => "h",
            Row::M => "m",
            Row::Y => "y",
            Row::R => "r",
            Row::W => "w",
            Row::G => "g",
            Row::Z => "z",
            Row::D => "d",
            Row::B => "b",
            Row::P => "p",
            Row::Special => "special",
            Row::Youon => "youon",
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Vowel column, the nasal column (only ん), or a small-kana column for youon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Col {
    A,
    I,
    U,
    E,
    O,
    N,
    Ya,
    Yu,
    Yo,
}

impl Col {
    pub fn key(&self) -> &'static str {
        match self {
            Col::A => "a",
            Col::I => "i",
            Col::U => "u",
            Col::E => "e",
            Col::O => "o",
            Col::N => "n",
            Col::Ya => "ya",
            Col::Yu => "yu",
            Col::Yo => "yo",
        }
    }

    /// Vowel a youon column contributes to the romaji (ゃ -> a).
    pub fn youon_vowel(&self) -> Option<&'static str> {
        match self {
            Col::Ya => Some("a"),
            Col::Yu => Some("u"),
            Col::Yo => Some("o"),
            _ => None,
        }
    }
}

impl fmt::Display for Col {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanaTag {
    Basic,
    Special,
    Dakuten,
    Handakuten,
    Youon,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanaItem {
    pub kana: String,
    pub romaji: String,
    pub script: Script,
    pub row: Row,
    pub col: Col,
    pub tags: Vec<KanaTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youon_base: Option<String>,
}

impl KanaItem {
    pub fn has_tag(&self, tag: KanaTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_basic(&self) -> bool {
        self.has_tag(KanaTag::Basic)
    }

    /// Dakuten or handakuten; both are gated by the same study toggle.
    pub fn is_voiced(&self) -> bool {
        self.has_tag(KanaTag::Dakuten) || self.has_tag(KanaTag::Handakuten)
    }

    pub fn is_youon(&self) -> bool {
        self.has_tag(KanaTag::Youon)
    }

    /// Shares either its kana or its romaji with `other`. か and カ overlap on
    /// "ka", as do じ and ぢ on "ji".
    pub fn overlaps(&self, other: &KanaItem) -> bool {
        self.kana == other.kana || self.romaji == other.romaji
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_as_lowercase_keys() {
        assert_eq!(serde_json::to_string(&Script::Katakana).unwrap(), "\"katakana\"");
        assert_eq!(serde_json::to_string(&Row::Vowel).unwrap(), "\"vowel\"");
        assert_eq!(serde_json::to_string(&Col::Yu).unwrap(), "\"yu\"");
        assert_eq!(serde_json::to_string(&KanaTag::Handakuten).unwrap(), "\"handakuten\"");
    }

    #[test]
    fn youon_base_is_omitted_for_plain_items() {
        let item = KanaItem {
            kana: "か".into(),
            romaji: "ka".into(),
            script: Script::Hiragana,
            row: Row::K,
            col: Col::A,
            tags: vec![KanaTag::Basic],
            youon_base: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("youonBase").is_none());
        assert_eq!(json["row"], "k");
        assert!(item.is_basic());
        assert!(!item.is_voiced());
    }

    #[test]
    fn overlap_on_either_value() {
        let ka = |kana: &str, script| KanaItem {
            kana: kana.into(),
            romaji: "ka".into(),
            script,
            row: Row::K,
            col: Col::A,
            tags: vec![KanaTag::Basic],
            youon_base: None,
        };
        let hira = ka("か", Script::Hiragana);
        let kata = ka("カ", Script::Katakana);
        let ki = KanaItem { kana: "き".into(), romaji: "ki".into(), col: Col::I, ..hira.clone() };

        assert!(hira.overlaps(&hira));
        assert!(hira.overlaps(&kata));
        assert!(!hira.overlaps(&ki));
    }
}
