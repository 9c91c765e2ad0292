use std::collections::HashSet;

use rand::{
    seq::{
        IndexedRandom,
        SliceRandom,
    },
    Rng,
};
use tracing::debug;
use uuid::Uuid;

use super::{
    config::QuizMode,
    question::{
        Choice,
        Question,
        QuestionKind,
    },
};
use crate::{
    core::YomikataError,
    kana::KanaItem,
};

pub const DISTRACTOR_COUNT: usize = 3;

/// Pool entries that could pass for wrong answers, most confusable first:
/// same column (vowel), then same row, then the rest. Anything sharing the
/// target's kana or romaji is left out, so neither カ nor ぢ can sit next to
/// か or じ on a card. Each tier is shuffled on its own and the result is
/// deduplicated by (kana, romaji), keeping the first occurrence.
fn ranked_candidates<'a, R: Rng + ?Sized>(
    pool: &[&'a KanaItem],
    target: &KanaItem,
    rng: &mut R,
) -> Vec<&'a KanaItem> {
    let others: Vec<&'a KanaItem> =
        pool.iter().copied().filter(|item| !item.overlaps(target)).collect();

    let mut same_col: Vec<&'a KanaItem> =
        others.iter().copied().filter(|item| item.col == target.col).collect();
    let mut same_row: Vec<&'a KanaItem> =
        others.iter().copied().filter(|item| item.row == target.row).collect();
    let mut rest = others;

    same_col.shuffle(rng);
    same_row.shuffle(rng);
    rest.shuffle(rng);

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut ranked = Vec::with_capacity(rest.len());
    for item in same_col.into_iter().chain(same_row).chain(rest) {
        if seen.insert((item.kana.as_str(), item.romaji.as_str())) {
            ranked.push(item);
        }
    }
    ranked
}

/// Up to `count` wrong answers for `target`. Returns fewer when the pool runs
/// out; never pads.
pub fn pick_distractors<'a, R: Rng + ?Sized>(
    pool: &[&'a KanaItem],
    target: &KanaItem,
    count: usize,
    rng: &mut R,
) -> Vec<&'a KanaItem> {
    let mut candidates = ranked_candidates(pool, target, rng);
    candidates.truncate(count);
    candidates
}

// Distractors may still share a value with each other (か and カ behind a さ
// card both read "ka"); repeats of a shown value are skipped.
fn build_choices<R: Rng + ?Sized>(
    pool: &[&KanaItem],
    target: &KanaItem,
    value_of: fn(&KanaItem) -> &str,
    rng: &mut R,
) -> Vec<Choice> {
    let correct = value_of(target);
    let mut shown: HashSet<String> = HashSet::from([correct.to_string()]);
    let mut choices = vec![Choice::new(correct)];

    for candidate in ranked_candidates(pool, target, rng) {
        if choices.len() > DISTRACTOR_COUNT {
            break;
        }
        let value = value_of(candidate);
        if shown.insert(value.to_string()) {
            choices.push(Choice::new(value));
        }
    }

    choices.shuffle(rng);
    choices
}

fn romaji_of(item: &KanaItem) -> &str {
    &item.romaji
}

fn kana_of(item: &KanaItem) -> &str {
    &item.kana
}

/// Build a question of `mode` about a specific item.
pub fn question_for<R: Rng + ?Sized>(
    mode: QuizMode,
    item: &KanaItem,
    pool: &[&KanaItem],
    rng: &mut R,
) -> Question {
    let (kind, prompt, correct_value) = match mode {
        QuizMode::KanaToRomaji => (
            QuestionKind::KanaToRomaji { choices: build_choices(pool, item, romaji_of, rng) },
            item.kana.clone(),
            item.romaji.clone(),
        ),
        QuizMode::RomajiToKana => (
            QuestionKind::RomajiToKana { choices: build_choices(pool, item, kana_of, rng) },
            item.romaji.clone(),
            item.kana.clone(),
        ),
        QuizMode::Typing => (QuestionKind::Typing, item.kana.clone(), item.romaji.clone()),
    };

    Question { id: Uuid::new_v4(), kind, prompt, correct_value, meta: item.into() }
}

/// Build a question of `mode` about a random pool item.
pub fn make_question<R: Rng + ?Sized>(
    mode: QuizMode,
    pool: &[&KanaItem],
    rng: &mut R,
) -> Result<Question, YomikataError> {
    let item = *pool.choose(rng).ok_or(YomikataError::EmptyPool)?;
    Ok(question_for(mode, item, pool, rng))
}

pub fn make_kana_to_romaji_question<R: Rng + ?Sized>(
    pool: &[&KanaItem],
    rng: &mut R,
) -> Result<Question, YomikataError> {
    make_question(QuizMode::KanaToRomaji, pool, rng)
}

pub fn make_romaji_to_kana_question<R: Rng + ?Sized>(
    pool: &[&KanaItem],
    rng: &mut R,
) -> Result<Question, YomikataError> {
    make_question(QuizMode::RomajiToKana, pool, rng)
}

pub fn make_typing_question<R: Rng + ?Sized>(
    pool: &[&KanaItem],
    rng: &mut R,
) -> Result<Question, YomikataError> {
    make_question(QuizMode::Typing, pool, rng)
}

/// A batch of `count` questions. Slots are assigned to `modes` round-robin,
/// then the batch is shuffled once so the mode order is not periodic.
pub fn make_questions<R: Rng + ?Sized>(
    pool: &[&KanaItem],
    modes: &[QuizMode],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, YomikataError> {
    if pool.is_empty() {
        return Err(YomikataError::EmptyPool);
    }
    if modes.is_empty() {
        return Err(YomikataError::NoModes);
    }

    let mut questions = (0..count)
        .map(|slot| make_question(modes[slot % modes.len()], pool, rng))
        .collect::<Result<Vec<_>, _>>()?;
    questions.shuffle(rng);

    debug!(count, pool_size = pool.len(), ?modes, "generated question batch");
    Ok(questions)
}
