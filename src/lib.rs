//! # car_picker
//!
//! An offline image quiz engine: show a car photo, pick the right model from
//! a handful of labels.
//!
//! The interesting part is choosing the wrong answers. [`build_choices`]
//! takes the correct item and the whole pool and picks distractors that
//! prefer other manufacturers, never repeat a label (even one spelled with
//! different case, spacing or hyphens), and still fill the set from the same
//! manufacturer when the pool is too narrow.
//!
//! ## How it works
//!
//! 1. Load a pool of [`Item`]s with [`load_manifest`] (or build the manifest
//!    from a folder of `Make_Model_Year.JPG` files with
//!    [`catalog::build_manifest`](quiz_engine::catalog::build_manifest)).
//! 2. Create a [`QuizSession`] with [`QuizSettings`] and call `start`.
//! 3. Drive it from the UI: `tick()` once per second, `answer(label)` on a
//!    click, `advance()` after the feedback pause, `summary()` at the end.
//!
//! ## Quick start
//!
//! ```rust
//! use car_picker::{build_choices, Item};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let pool = vec![
//!     Item::new("Ford Focus", "Ford", "images/cars/a.JPG"),
//!     Item::new("Ford Fiesta", "Ford", "images/cars/b.JPG"),
//!     Item::new("Toyota Corolla", "Toyota", "images/cars/c.JPG"),
//!     Item::new("Honda Civic", "Honda", "images/cars/d.JPG"),
//! ];
//! let mut rng = StdRng::seed_from_u64(7);
//! let choices = build_choices(&pool[0], &pool, 3, &mut rng);
//!
//! assert_eq!(choices.len(), 3);
//! assert!(choices.contains(&"Ford Focus".to_string()));
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `car_picker::build_choices`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    build_choices, generate_quiz, load_manifest, normalize_label, AnswerOutcome, AnswerRecord,
    ChoiceMark, Feedback, Item, QuizError, QuizQuestion, QuizRequest, QuizSession, QuizSettings,
    QuizSummary, Screen, TickOutcome,
};
