//! One quiz run from the start screen to the results screen.
//!
//! `QuizSession` holds every piece of mutable quiz state so the UI layer only
//! renders what it reads back. Time is driven by the caller: `tick()` once
//! per second while a question is open.
//!
//! ```text
//! Start --start()--> Quiz --answer()/timeout--> locked --advance()--> Quiz ...
//!                                                        \--after last--> Results
//! ```

use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::quiz_engine::{
    error::Result,
    format::format_countdown,
    generator::generate_questions,
    manifest::ensure_playable,
    models::{
        AnswerOutcome, AnswerRecord, ChoiceMark, Feedback, Item, QuizQuestion, QuizSummary, Screen,
    },
    settings::QuizSettings,
};

/// Result of one countdown tick.
#[derive(Debug, Clone)]
pub enum TickOutcome {
    /// No open question; nothing happened.
    Idle,
    /// Still counting; seconds left.
    Running(u32),
    /// The question just ran out of time.
    TimedOut(AnswerOutcome),
}

#[derive(Debug)]
pub struct QuizSession {
    settings: QuizSettings,
    pool: Vec<Item>,
    screen: Screen,
    questions: Vec<QuizQuestion>,
    current: usize,
    score: u32,
    seconds_remaining: u32,
    timer_running: bool,
    locked: bool,
    results: Vec<AnswerRecord>,
    started_at: Option<Instant>,
}

impl QuizSession {
    /// New session on the start screen.
    ///
    /// Fails when `pool` cannot fill a single choice set.
    pub fn new(pool: Vec<Item>, settings: QuizSettings) -> Result<Self> {
        settings.validate()?;
        ensure_playable(&pool, &settings)?;
        let seconds = settings.seconds_per_question;
        Ok(QuizSession {
            settings,
            pool,
            screen: Screen::Start,
            questions: Vec::new(),
            current: 0,
            score: 0,
            seconds_remaining: seconds,
            timer_running: false,
            locked: false,
            results: Vec::new(),
            started_at: None,
        })
    }

    /// Generate a fresh set of questions and open the first one.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let questions = generate_questions(
            &self.pool,
            self.settings.question_count,
            self.settings.choices_per_question,
            rng,
        )?;

        self.questions = questions;
        self.current = 0;
        self.score = 0;
        self.results.clear();
        self.started_at = Some(Instant::now());
        self.screen = Screen::Quiz;
        info!("quiz started with {} questions", self.questions.len());
        self.open_question();
        Ok(())
    }

    /// Back to the start screen with all quiz state cleared.
    pub fn reset(&mut self) {
        self.questions.clear();
        self.current = 0;
        self.score = 0;
        self.results.clear();
        self.started_at = None;
        self.seconds_remaining = self.settings.seconds_per_question;
        self.timer_running = false;
        self.locked = false;
        self.screen = Screen::Start;
    }

    fn open_question(&mut self) {
        self.locked = false;
        self.seconds_remaining = self.settings.seconds_per_question;
        self.timer_running = true;
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.screen != Screen::Quiz || !self.timer_running {
            return TickOutcome::Idle;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining > 0 {
            return TickOutcome::Running(self.seconds_remaining);
        }

        self.timer_running = false;
        match self.lock_question(None) {
            Some(outcome) => TickOutcome::TimedOut(outcome),
            None => TickOutcome::Idle,
        }
    }

    /// Submit `label` for the open question.
    ///
    /// Returns `None` when no question is open or it is already locked.
    pub fn answer(&mut self, label: &str) -> Option<AnswerOutcome> {
        if self.screen != Screen::Quiz {
            return None;
        }
        self.timer_running = false;
        self.lock_question(Some(label))
    }

    /// Lock the current question and record it. `selected == None` is a
    /// timeout.
    fn lock_question(&mut self, selected: Option<&str>) -> Option<AnswerOutcome> {
        if self.locked {
            return None;
        }
        let question = self.questions.get(self.current)?;
        self.locked = true;

        let is_timeout = selected.is_none();
        let is_correct = selected.map_or(false, |label| question.is_correct(label));
        let per_question = self.settings.seconds_per_question;
        let elapsed_seconds = if is_timeout {
            self.seconds_remaining = 0;
            per_question
        } else {
            per_question.saturating_sub(self.seconds_remaining).min(per_question)
        };

        let feedback = match (is_correct, is_timeout) {
            (true, _)      => Feedback::Correct,
            (false, true)  => Feedback::Timeout,
            (false, false) => Feedback::Wrong,
        };

        let record = AnswerRecord {
            index: self.current + 1,
            image_path: question.item.image_path.clone(),
            correct_label: question.item.label.clone(),
            selected_label: selected.map(str::to_string),
            is_correct,
            is_timeout,
            elapsed_seconds,
        };
        let marks = reveal(&question.choices, &question.item.label, selected);

        if is_correct {
            self.score += self.settings.points_per_correct;
        }
        debug!(
            "question {} locked: {:?}, selected {:?}, score {}",
            record.index, feedback, record.selected_label, self.score
        );
        self.results.push(record.clone());

        Some(AnswerOutcome { feedback, record, marks, score: self.score })
    }

    /// Move past a locked question. Opens the next one, or switches to the
    /// results screen after the last.
    pub fn advance(&mut self) -> Screen {
        if self.screen != Screen::Quiz || !self.locked {
            return self.screen;
        }
        self.current += 1;
        if self.current >= self.questions.len() {
            self.timer_running = false;
            self.screen = Screen::Results;
            info!("quiz finished: {} / {}", self.score, self.max_score());
        } else {
            self.open_question();
        }
        self.screen
    }

    /// Final tally; `None` until the results screen.
    pub fn summary(&self) -> Option<QuizSummary> {
        if self.screen != Screen::Results {
            return None;
        }
        let elapsed_seconds = self
            .started_at
            .map(|t| t.elapsed().as_secs_f64().round() as u64)
            .unwrap_or(0);
        Some(QuizSummary {
            score: self.score,
            max_score: self.max_score(),
            elapsed_seconds,
            celebrate: self.score >= self.settings.celebrate_score,
            missed: self.results.iter().filter(|r| !r.is_correct).cloned().collect(),
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.settings.max_score(self.questions.len())
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Countdown as shown on screen, `mm:ss`.
    pub fn countdown(&self) -> String {
        format_countdown(self.seconds_remaining)
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.screen {
            Screen::Quiz => self.questions.get(self.current),
            _ => None,
        }
    }

    /// `(question number, total)`; `(0, question_count)` before a quiz starts.
    pub fn progress(&self) -> (usize, usize) {
        match self.screen {
            Screen::Start => (0, self.settings.question_count),
            Screen::Quiz => (self.current + 1, self.questions.len()),
            Screen::Results => (self.questions.len(), self.questions.len()),
        }
    }

    pub fn results(&self) -> &[AnswerRecord] {
        &self.results
    }
}

/// Mark every choice once a question locks: the right answer, the wrong
/// pick (if any), and everything else.
pub fn reveal(choices: &[String], correct: &str, selected: Option<&str>) -> Vec<(String, ChoiceMark)> {
    choices
        .iter()
        .map(|label| {
            let mark = if label == correct {
                ChoiceMark::Correct
            } else if Some(label.as_str()) == selected {
                ChoiceMark::Wrong
            } else {
                ChoiceMark::Neutral
            };
            (label.clone(), mark)
        })
        .collect()
}
