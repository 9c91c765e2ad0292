use tracing::debug;

use super::config::StudyConfig;
use crate::{
    core::YomikataError,
    kana::{
        kana_items,
        KanaItem,
    },
};

/// Ordered, read-only view over the inventory for one quiz session.
pub type QuestionPool = Vec<&'static KanaItem>;

/// Basic items of a selected script are always in; voiced and youon items
/// only when their toggle is on.
pub fn build_pool(config: &StudyConfig) -> Result<QuestionPool, YomikataError> {
    config.validate()?;

    let pool: QuestionPool =
        kana_items().iter().filter(|item| is_selected(item, config)).collect();

    debug!(
        scripts = ?config.scripts,
        dakuten = config.include_dakuten,
        youon = config.include_youon,
        size = pool.len(),
        "built kana pool"
    );
    Ok(pool)
}

fn is_selected(item: &KanaItem, config: &StudyConfig) -> bool {
    if !config.scripts.contains(&item.script) {
        return false;
    }

    item.is_basic()
        || (item.is_voiced() && config.include_dakuten)
        || (item.is_youon() && config.include_youon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kana::{
        KanaTag,
        Script,
    };

    fn all_configs() -> Vec<StudyConfig> {
        let script_sets =
            [vec![Script::Hiragana], vec![Script::Katakana], vec![Script::Hiragana, Script::Katakana]];
        let mut configs = Vec::new();
        for scripts in script_sets {
            for dakuten in [false, true] {
                for youon in [false, true] {
                    configs.push(
                        StudyConfig::new(scripts.clone()).with_dakuten(dakuten).with_youon(youon),
                    );
                }
            }
        }
        configs
    }

    #[test]
    fn basic_only_pool_is_exactly_the_basic_items() {
        for scripts in [vec![Script::Hiragana], vec![Script::Katakana], vec![Script::Hiragana, Script::Katakana]] {
            let config = StudyConfig::new(scripts.clone());
            let pool = build_pool(&config).unwrap();

            let expected: Vec<&KanaItem> = kana_items()
                .iter()
                .filter(|i| scripts.contains(&i.script) && i.has_tag(KanaTag::Basic))
                .collect();

            assert!(!pool.is_empty());
            assert_eq!(pool, expected);
        }
    }

    #[test]
    fn dakuten_toggle_never_shrinks_the_pool() {
        for config in all_configs().into_iter().filter(|c| !c.include_dakuten) {
            let without = build_pool(&config).unwrap().len();
            let with = build_pool(&config.clone().with_dakuten(true)).unwrap().len();
            assert!(with >= without);
        }
    }

    #[test]
    fn toggles_add_the_expected_counts() {
        let hira = StudyConfig::new([Script::Hiragana]);
        assert_eq!(build_pool(&hira).unwrap().len(), 46);
        assert_eq!(build_pool(&hira.clone().with_dakuten(true)).unwrap().len(), 46 + 25);
        assert_eq!(build_pool(&hira.clone().with_youon(true)).unwrap().len(), 46 + 36);

        let both = StudyConfig::new([Script::Hiragana, Script::Katakana])
            .with_dakuten(true)
            .with_youon(true);
        assert_eq!(build_pool(&both).unwrap(), kana_items().iter().collect::<Vec<_>>());
    }

    #[test]
    fn unselected_scripts_never_leak_in() {
        let pool = build_pool(&StudyConfig::new([Script::Katakana]).with_youon(true)).unwrap();
        assert!(pool.iter().all(|i| i.script == Script::Katakana));
    }

    #[test]
    fn empty_scripts_is_rejected() {
        let config = StudyConfig { scripts: vec![], include_dakuten: true, include_youon: true };
        assert!(matches!(build_pool(&config), Err(YomikataError::EmptyScripts)));
    }
}
