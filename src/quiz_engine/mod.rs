//! Core quiz engine: choice generation, sessions, and the item manifest.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: items, questions, answer records, summaries |
//! | `shuffle`   | Fisher-Yates shuffle over any `rand::Rng` |
//! | `choices`   | Label normalization and distractor selection |
//! | `generator` | `generate_quiz()`: picks questions and builds their choices |
//! | `session`   | `QuizSession` state machine: countdown, answers, scoring |
//! | `settings`  | `QuizSettings` with defaults and environment overrides |
//! | `manifest`  | Loads and validates the `cars.json` manifest |
//! | `catalog`   | Builds the manifest from `Make_Model_Year.JPG` file names |
//! | `format`    | Countdown and duration strings |
//! | `error`     | `QuizError` and the crate `Result` alias |

pub mod catalog;
pub mod choices;
pub mod error;
pub mod format;
pub mod generator;
pub mod manifest;
pub mod models;
pub mod session;
pub mod settings;
pub mod shuffle;

// Re-export the public API surface so callers can use
// `quiz_engine::build_choices` without reaching into sub-modules.
pub use choices::{build_choices, normalize_label};
pub use error::{QuizError, Result};
pub use generator::{generate_quiz, QuizRequest};
pub use manifest::load_manifest;
pub use models::{
    AnswerOutcome, AnswerRecord, ChoiceMark, Feedback, Item, QuizQuestion, QuizSummary, Screen,
};
pub use session::{QuizSession, TickOutcome};
pub use settings::QuizSettings;
