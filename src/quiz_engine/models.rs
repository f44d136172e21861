use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pool items
// ---------------------------------------------------------------------------

/// One quiz picture and the label that answers it.
///
/// Serialized with the manifest's field names (`imagePath`, `make`), so a
/// `cars.json` entry deserializes straight into an `Item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display text and the correct answer, e.g. "Toyota Corolla".
    pub label: String,
    /// Grouping key used to diversify distractors (the manufacturer).
    #[serde(rename = "make")]
    pub category: String,
    #[serde(rename = "imagePath")]
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Item {
    pub fn new(
        label: impl Into<String>,
        category: impl Into<String>,
        image_path: impl Into<String>,
    ) -> Self {
        Item {
            label: label.into(),
            category: category.into(),
            image_path: image_path.into(),
            model: None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label, self.category)
    }
}

// ---------------------------------------------------------------------------
// Questions and answers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub item: Item,
    /// Labels in display order; always contains `item.label`.
    pub choices: Vec<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, label: &str) -> bool {
        self.item.label == label
    }
}

/// How a choice button is drawn once the question is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceMark {
    Correct,
    Wrong,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Wrong,
    Timeout,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => write!(f, "Correct! Nicely done."),
            Feedback::Wrong   => write!(f, "Not quite. On to the next one."),
            Feedback::Timeout => write!(f, "Time's up! Check the right answer."),
        }
    }
}

/// One finished question, as kept for the review screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// 1-based question number.
    pub index: usize,
    pub image_path: String,
    pub correct_label: String,
    /// `None` when the question timed out.
    pub selected_label: Option<String>,
    pub is_correct: bool,
    pub is_timeout: bool,
    pub elapsed_seconds: u32,
}

/// What the UI needs right after a question locks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub feedback: Feedback,
    pub record: AnswerRecord,
    /// Every choice label with its reveal mark, in display order.
    pub marks: Vec<(String, ChoiceMark)>,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: u32,
    pub max_score: u32,
    pub elapsed_seconds: u64,
    /// Score reached the celebration threshold.
    pub celebrate: bool,
    pub missed: Vec<AnswerRecord>,
}

// ---------------------------------------------------------------------------
// Session screens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    Quiz,
    Results,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Start   => write!(f, "start"),
            Screen::Quiz    => write!(f, "quiz"),
            Screen::Results => write!(f, "results"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_reads_manifest_field_names() {
        let raw = r#"{"imagePath":"images/cars/x.JPG","make":"Kia","model":"Rio","label":"Kia Rio"}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.category, "Kia");
        assert_eq!(item.image_path, "images/cars/x.JPG");
        assert_eq!(item.model.as_deref(), Some("Rio"));
    }

    #[test]
    fn item_without_model_omits_it_when_serialized() {
        let json = serde_json::to_value(Item::new("Kia Rio", "Kia", "a.JPG")).unwrap();
        assert!(json.get("model").is_none());
        assert_eq!(json["make"], "Kia");
    }
}
