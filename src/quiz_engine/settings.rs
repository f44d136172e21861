use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::{QuizError, Result};

/// Tunables for one quiz run.
///
/// Missing fields fall back to the defaults when deserialized, so a settings
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub question_count: usize,
    pub choices_per_question: usize,
    pub seconds_per_question: u32,
    pub points_per_correct: u32,
    /// Final score at or above which the results screen celebrates.
    pub celebrate_score: u32,
    pub manifest_path: PathBuf,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            question_count: 10,
            choices_per_question: 5,
            seconds_per_question: 60,
            points_per_correct: 10,
            celebrate_score: 80,
            manifest_path: PathBuf::from("data/cars.json"),
        }
    }
}

impl QuizSettings {
    /// Defaults overridden by `CAR_PICKER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut settings = QuizSettings::default();
        if let Some(v) = get_env_parse("CAR_PICKER_QUESTION_COUNT")? {
            settings.question_count = v;
        }
        if let Some(v) = get_env_parse("CAR_PICKER_CHOICES")? {
            settings.choices_per_question = v;
        }
        if let Some(v) = get_env_parse("CAR_PICKER_SECONDS")? {
            settings.seconds_per_question = v;
        }
        if let Ok(path) = env::var("CAR_PICKER_MANIFEST") {
            settings.manifest_path = PathBuf::from(path);
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.choices_per_question == 0 {
            return Err(QuizError::Config("choices_per_question must be at least 1".into()));
        }
        if self.question_count == 0 {
            return Err(QuizError::Config("question_count must be at least 1".into()));
        }
        if self.seconds_per_question == 0 {
            return Err(QuizError::Config("seconds_per_question must be at least 1".into()));
        }
        Ok(())
    }

    /// Highest reachable score for a quiz of `questions` questions.
    pub fn max_score(&self, questions: usize) -> u32 {
        questions as u32 * self.points_per_correct
    }
}

fn get_env_parse<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| QuizError::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_quiz() {
        let s = QuizSettings::default();
        assert_eq!(s.question_count, 10);
        assert_eq!(s.choices_per_question, 5);
        assert_eq!(s.seconds_per_question, 60);
        assert_eq!(s.max_score(10), 100);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s: QuizSettings = serde_json::from_str(r#"{"question_count": 3}"#).unwrap();
        assert_eq!(s.question_count, 3);
        assert_eq!(s.choices_per_question, 5);
        assert_eq!(s.manifest_path, PathBuf::from("data/cars.json"));
    }

    #[test]
    fn zero_choices_is_rejected() {
        let s = QuizSettings { choices_per_question: 0, ..QuizSettings::default() };
        assert!(matches!(s.validate(), Err(QuizError::Config(_))));
    }
}
