use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::{
    core::YomikataError,
    quiz::QuizSettings,
};

const APP_NAME: &str = "yomikata";

pub const QUIZ_SETTINGS_FILE: &str = "quiz_settings.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            warn!("Failed to create app data dir {}: {}", app_dir.display(), e);
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json_to<T: Serialize>(data: &T, file_path: &Path) -> Result<(), YomikataError> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    debug!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    file_path: &Path,
) -> Result<T, YomikataError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    debug!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn load_json_or_default_from<T: for<'de> Deserialize<'de> + Default>(file_path: &Path) -> T {
    match load_json_from::<T>(file_path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", file_path.display(), e);
            T::default()
        }
    }
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), YomikataError> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    load_json_or_default_from(&get_data_file_path(filename))
}

/// Last quiz setup chosen by the user, or the defaults.
pub fn load_quiz_settings() -> QuizSettings {
    load_quiz_settings_from(&get_data_file_path(QUIZ_SETTINGS_FILE))
}

/// A file that no longer validates (say every mode was removed by hand) is
/// treated like a missing one.
pub fn load_quiz_settings_from(file_path: &Path) -> QuizSettings {
    let settings: QuizSettings = load_json_or_default_from(file_path);
    match settings.validate() {
        Ok(()) => settings,
        Err(e) => {
            warn!("Ignoring saved quiz settings in {}: {}", file_path.display(), e);
            QuizSettings::default()
        }
    }
}

pub fn save_quiz_settings(settings: &QuizSettings) -> Result<(), YomikataError> {
    save_quiz_settings_to(settings, &get_data_file_path(QUIZ_SETTINGS_FILE))
}

pub fn save_quiz_settings_to(settings: &QuizSettings, file_path: &Path) -> Result<(), YomikataError> {
    settings.validate()?;
    save_json_to(settings, file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        kana::Script,
        quiz::{
            QuizMode,
            StudyConfig,
        },
    };

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("yomikata-persist-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let path = scratch_file(QUIZ_SETTINGS_FILE);
        let settings = QuizSettings {
            modes: vec![QuizMode::Typing],
            study: StudyConfig::new([Script::Katakana]).with_youon(true),
            question_count: 20,
        };

        save_json_to(&settings, &path).unwrap();
        let loaded: QuizSettings = load_json_from(&path).unwrap();
        assert_eq!(loaded, settings);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = scratch_file("absent.json");
        let loaded: QuizSettings = load_json_from(&path).unwrap();
        assert_eq!(loaded, QuizSettings::default());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let path = scratch_file("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_json_from::<QuizSettings>(&path), Err(YomikataError::Json(_))));
        assert_eq!(load_json_or_default_from::<QuizSettings>(&path), QuizSettings::default());

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn invalid_settings_are_not_saved() {
        let path = scratch_file(QUIZ_SETTINGS_FILE);
        let settings = QuizSettings { modes: vec![], ..QuizSettings::default() };
        assert!(matches!(save_quiz_settings_to(&settings, &path), Err(YomikataError::NoModes)));
        assert!(!path.exists());
    }

    #[test]
    fn quiz_settings_round_trip() {
        let path = scratch_file(QUIZ_SETTINGS_FILE);
        assert_eq!(load_quiz_settings_from(&path), QuizSettings::default());

        let settings = QuizSettings {
            modes: vec![QuizMode::RomajiToKana, QuizMode::KanaToRomaji],
            study: StudyConfig::new([Script::Hiragana]).with_dakuten(true),
            question_count: 15,
        };
        save_quiz_settings_to(&settings, &path).unwrap();
        assert_eq!(load_quiz_settings_from(&path), settings);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn hand_edited_invalid_settings_load_as_defaults() {
        let path = scratch_file(QUIZ_SETTINGS_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "modes": [], "scripts": ["katakana"], "questionCount": 5 }"#).unwrap();

        assert_eq!(load_quiz_settings_from(&path), QuizSettings::default());

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
