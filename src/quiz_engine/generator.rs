use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    choices::build_choices,
    error::{QuizError, Result},
    models::{Item, QuizQuestion},
    settings::QuizSettings,
    shuffle::shuffled,
};

/// Parameters for one batch of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub question_count: usize,
    pub choices_per_question: usize,
    /// `Some(seed)` reproduces the exact same quiz; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    pub fn new(settings: &QuizSettings) -> Self {
        QuizRequest {
            question_count: settings.question_count,
            choices_per_question: settings.choices_per_question,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Build a quiz from `pool` as described by `request`.
pub fn generate_quiz(pool: &[Item], request: &QuizRequest) -> Result<Vec<QuizQuestion>> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_questions(pool, request.question_count, request.choices_per_question, &mut rng)
}

/// Pick up to `question_count` distinct pool items as questions and build a
/// choice set for each from the whole pool.
///
/// Fails when the quiz would have fewer questions than choices per question,
/// the point at which the pool is too thin to be worth playing.
pub fn generate_questions<R: Rng + ?Sized>(
    pool: &[Item],
    question_count: usize,
    choices_per_question: usize,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>> {
    let available = question_count.min(pool.len());
    if available < choices_per_question {
        return Err(QuizError::InsufficientItems {
            available,
            required: choices_per_question,
        });
    }

    let questions: Vec<QuizQuestion> = shuffled(pool, rng)
        .into_iter()
        .take(available)
        .map(|item| {
            let choices = build_choices(&item, pool, choices_per_question, rng);
            QuizQuestion { item, choices }
        })
        .collect();

    info!(
        "generated {} questions with {} choices each from a pool of {}",
        questions.len(),
        choices_per_question,
        pool.len()
    );
    Ok(questions)
}
