//! Canonical kana data for both scripts.
//!
//! - Base gojūon grid (tags: `Basic`, plus `Special` for ん/ン)
//! - Dakuten rows g/z/d/b (tag: `Dakuten`)
//! - Handakuten row p (tag: `Handakuten`)
//! - Youon digraphs (tag: `Youon`)
//!
//! Romaji for every row is spelled out in explicit tables. The voiced rows in
//! particular are irregular (じ/ぢ are both "ji", づ is "zu") and must not be
//! derived from consonant + vowel.

use std::sync::OnceLock;

use super::types::{
    Col,
    KanaItem,
    KanaTag,
    Row,
    Script,
};

pub const COL_ORDER: [Col; 5] = [Col::A, Col::I, Col::U, Col::E, Col::O];
pub const ROW_ORDER: [Row; 10] =
    [Row::Vowel, Row::K, Row::S, Row::T, Row::N, Row::H, Row::M, Row::Y, Row::R, Row::W];
pub const YOUON_COL_ORDER: [Col; 3] = [Col::Ya, Col::Yu, Col::Yo];
pub const DAKUTEN_ROW_ORDER: [Row; 4] = [Row::G, Row::Z, Row::D, Row::B];
pub const HANDAKUTEN_ROW_ORDER: [Row; 1] = [Row::P];

/// One grid row; an empty string marks a cell that does not exist (yi, ye, wu...).
type GridRow = (Row, [&'static str; 5]);

/* ---------------- Base tables ---------------- */

const HIRA_TABLE: [GridRow; 10] = [
    (Row::Vowel, ["あ", "い", "う", "え", "お"]),
    (Row::K, ["か", "き", "く", "け", "こ"]),
    (Row::S, ["さ", "し", "す", "せ", "そ"]),
    (Row::T, ["た", "ち", "つ", "て", "と"]),
    (Row::N, ["な", "に", "ぬ", "ね", "の"]),
    (Row::H, ["は", "ひ", "ふ", "へ", "ほ"]),
    (Row::M, ["ま", "み", "む", "め", "も"]),
    (Row::Y, ["や", "", "ゆ", "", "よ"]),
    (Row::R, ["ら", "り", "る", "れ", "ろ"]),
    (Row::W, ["わ", "", "", "", "を"]),
];

const KATA_TABLE: [GridRow; 10] = [
    (Row::Vowel, ["ア", "イ", "ウ", "エ", "オ"]),
    (Row::K, ["カ", "キ", "ク", "ケ", "コ"]),
    (Row::S, ["サ", "シ", "ス", "セ", "ソ"]),
    (Row::T, ["タ", "チ", "ツ", "テ", "ト"]),
    (Row::N, ["ナ", "ニ", "ヌ", "ネ", "ノ"]),
    (Row::H, ["ハ", "ヒ", "フ", "ヘ", "ホ"]),
    (Row::M, ["マ", "ミ", "ム", "メ", "モ"]),
    (Row::Y, ["ヤ", "", "ユ", "", "ヨ"]),
    (Row::R, ["ラ", "リ", "ル", "レ", "ロ"]),
    (Row::W, ["ワ", "", "", "", "ヲ"]),
];

const ROMAJI_TABLE: [GridRow; 10] = [
    (Row::Vowel, ["a", "i", "u", "e", "o"]),
    (Row::K, ["ka", "ki", "ku", "ke", "ko"]),
    (Row::S, ["sa", "shi", "su", "se", "so"]),
    (Row::T, ["ta", "chi", "tsu", "te", "to"]),
    (Row::N, ["na", "ni", "nu", "ne", "no"]),
    (Row::H, ["ha", "hi", "fu", "he", "ho"]),
    (Row::M, ["ma", "mi", "mu", "me", "mo"]),
    (Row::Y, ["ya", "", "yu", "", "yo"]),
    (Row::R, ["ra", "ri", "ru", "re", "ro"]),
    (Row::W, ["wa", "", "", "", "wo"]),
];

const HIRA_SPECIAL: &str = "ん";
const KATA_SPECIAL: &str = "ン";
const ROMAJI_SPECIAL: &str = "n";

/* ---------------- Dakuten / Handakuten rows ---------------- */

const HIRA_DAKUTEN: [GridRow; 4] = [
    (Row::G, ["が", "ぎ", "ぐ", "げ", "ご"]),
    (Row::Z, ["ざ", "じ", "ず", "ぜ", "ぞ"]),
    (Row::D, ["だ", "ぢ", "づ", "で", "ど"]),
    (Row::B, ["ば", "び", "ぶ", "べ", "ぼ"]),
];
const HIRA_HANDAKUTEN: [GridRow; 1] = [(Row::P, ["ぱ", "ぴ", "ぷ", "ぺ", "ぽ"])];

const KATA_DAKUTEN: [GridRow; 4] = [
    (Row::G, ["ガ", "ギ", "グ", "ゲ", "ゴ"]),
    (Row::Z, ["ザ", "ジ", "ズ", "ゼ", "ゾ"]),
    (Row::D, ["ダ", "ヂ", "ヅ", "デ", "ド"]),
    (Row::B, ["バ", "ビ", "ブ", "ベ", "ボ"]),
];
const KATA_HANDAKUTEN: [GridRow; 1] = [(Row::P, ["パ", "ピ", "プ", "ペ", "ポ"])];

const ROMAJI_DAKUTEN: [GridRow; 4] = [
    (Row::G, ["ga", "gi", "gu", "ge", "go"]),
    (Row::Z, ["za", "ji", "zu", "ze", "zo"]),
    // ぢ/づ merged with じ/ず in modern pronunciation
    (Row::D, ["da", "ji", "zu", "de", "do"]),
    (Row::B, ["ba", "bi", "bu", "be", "bo"]),
];
const ROMAJI_HANDAKUTEN: [GridRow; 1] = [(Row::P, ["pa", "pi", "pu", "pe", "po"])];

/* ---------------- Youon (digraphs) ---------------- */

struct YouonBase {
    row: Row,
    hiragana: &'static str,
    katakana: &'static str,
    stem: &'static str,
}

const YOUON_BASES: [YouonBase; 12] = [
    YouonBase { row: Row::K, hiragana: "き", katakana: "キ", stem: "ky" },
    YouonBase { row: Row::S, hiragana: "し", katakana: "シ", stem: "sh" },
    YouonBase { row: Row::T, hiragana: "ち", katakana: "チ", stem: "ch" },
    YouonBase { row: Row::N, hiragana: "に", katakana: "ニ", stem: "ny" },
    YouonBase { row: Row::H, hiragana: "ひ", katakana: "ヒ", stem: "hy" },
    YouonBase { row: Row::M, hiragana: "み", katakana: "ミ", stem: "my" },
    YouonBase { row: Row::R, hiragana: "り", katakana: "リ", stem: "ry" },
    YouonBase { row: Row::G, hiragana: "ぎ", katakana: "ギ", stem: "gy" },
    YouonBase { row: Row::Z, hiragana: "じ", katakana: "ジ", stem: "j" },
    YouonBase { row: Row::D, hiragana: "ぢ", katakana: "ヂ", stem: "j" },
    YouonBase { row: Row::B, hiragana: "び", katakana: "ビ", stem: "by" },
    YouonBase { row: Row::P, hiragana: "ぴ", katakana: "ピ", stem: "py" },
];

const SMALL_HIRA: [&str; 3] = ["ゃ", "ゅ", "ょ"];
const SMALL_KATA: [&str; 3] = ["ャ", "ュ", "ョ"];

/* ---------------- Expand helpers ---------------- */

fn lookup_row<'a>(table: &'a [GridRow], row: Row) -> Option<&'a [&'static str; 5]> {
    table.iter().find(|(key, _)| *key == row).map(|(_, cells)| cells)
}

fn expand_grid(
    script: Script,
    kana_rows: &[GridRow],
    romaji_rows: &[GridRow],
    tags: &[KanaTag],
) -> Vec<KanaItem> {
    let mut items = Vec::new();

    for (row, kana_row) in kana_rows {
        let Some(romaji_row) = lookup_row(romaji_rows, *row) else {
            continue;
        };

        for (c, col) in COL_ORDER.iter().enumerate() {
            let (kana, romaji) = (kana_row[c], romaji_row[c]);
            if kana.is_empty() || romaji.is_empty() {
                continue;
            }

            items.push(KanaItem {
                kana: kana.to_string(),
                romaji: romaji.to_string(),
                script,
                row: *row,
                col: *col,
                tags: tags.to_vec(),
                youon_base: None,
            });
        }
    }

    items
}

fn expand_base(script: Script) -> Vec<KanaItem> {
    let (table, special) = match script {
        Script::Hiragana => (&HIRA_TABLE, HIRA_SPECIAL),
        Script::Katakana => (&KATA_TABLE, KATA_SPECIAL),
    };

    let mut items = expand_grid(script, table, &ROMAJI_TABLE, &[KanaTag::Basic]);
    items.push(KanaItem {
        kana: special.to_string(),
        romaji: ROMAJI_SPECIAL.to_string(),
        script,
        row: Row::Special,
        col: Col::N,
        tags: vec![KanaTag::Basic, KanaTag::Special],
        youon_base: None,
    });
    items
}

fn expand_dakuten(script: Script) -> Vec<KanaItem> {
    let table = match script {
        Script::Hiragana => &HIRA_DAKUTEN,
        Script::Katakana => &KATA_DAKUTEN,
    };
    expand_grid(script, table, &ROMAJI_DAKUTEN, &[KanaTag::Dakuten])
}

fn expand_handakuten(script: Script) -> Vec<KanaItem> {
    let table = match script {
        Script::Hiragana => &HIRA_HANDAKUTEN,
        Script::Katakana => &KATA_HANDAKUTEN,
    };
    expand_grid(script, table, &ROMAJI_HANDAKUTEN, &[KanaTag::Handakuten])
}

fn expand_youon(script: Script) -> Vec<KanaItem> {
    let small = match script {
        Script::Hiragana => &SMALL_HIRA,
        Script::Katakana => &SMALL_KATA,
    };

    let mut items = Vec::with_capacity(YOUON_BASES.len() * YOUON_COL_ORDER.len());
    for base in &YOUON_BASES {
        let base_kana = match script {
            Script::Hiragana => base.hiragana,
            Script::Katakana => base.katakana,
        };

        for (c, col) in YOUON_COL_ORDER.iter().enumerate() {
            let Some(vowel) = col.youon_vowel() else {
                continue;
            };

            items.push(KanaItem {
                kana: format!("{}{}", base_kana, small[c]),
                romaji: format!("{}{}", base.stem, vowel),
                script,
                row: Row::Youon,
                col: *col,
                tags: vec![KanaTag::Youon],
                youon_base: Some(base_kana.to_string()),
            });
        }
    }
    items
}

fn build_inventory() -> Vec<KanaItem> {
    let mut items = Vec::new();
    items.extend(expand_base(Script::Hiragana));
    items.extend(expand_base(Script::Katakana));
    items.extend(expand_dakuten(Script::Hiragana));
    items.extend(expand_handakuten(Script::Hiragana));
    items.extend(expand_dakuten(Script::Katakana));
    items.extend(expand_handakuten(Script::Katakana));
    items.extend(expand_youon(Script::Hiragana));
    items.extend(expand_youon(Script::Katakana));
    items
}

/// The full, immutable inventory. Built on first access.
pub fn kana_items() -> &'static [KanaItem] {
    static INSTANCE: OnceLock<Vec<KanaItem>> = OnceLock::new();
    INSTANCE.get_or_init(build_inventory)
}

pub fn items_for_script(script: Script) -> impl Iterator<Item = &'static KanaItem> {
    kana_items().iter().filter(move |item| item.script == script)
}

/// Grid cell lookup. Youon cells are keyed by the base consonant row
/// (e.g. `Row::K`, `Col::Ya` -> きゃ) since their own row is `Row::Youon`.
pub fn find(script: Script, row: Row, col: Col) -> Option<&'static KanaItem> {
    if matches!(col, Col::Ya | Col::Yu | Col::Yo) {
        let base = YOUON_BASES.iter().find(|b| b.row == row)?;
        let base_kana = match script {
            Script::Hiragana => base.hiragana,
            Script::Katakana => base.katakana,
        };
        return items_for_script(script).find(|item| {
            item.is_youon() && item.col == col && item.youon_base.as_deref() == Some(base_kana)
        });
    }

    items_for_script(script).find(|item| item.row == row && item.col == col)
}

pub fn find_kana(kana: &str) -> Option<&'static KanaItem> {
    kana_items().iter().find(|item| item.kana == kana)
}

/// Base consonant rows that have youon digraphs, in table order.
pub fn youon_rows() -> impl Iterator<Item = Row> {
    YOUON_BASES.iter().map(|b| b.row)
}
