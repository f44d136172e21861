//! Distractor selection for one quiz question.
//!
//! [`build_choices`] starts from the correct label and fills the remaining
//! slots in three passes over a shuffled copy of the pool:
//!
//! 1. items from a **different** category than the correct one,
//! 2. items from the **same** category,
//! 3. every remaining item, as a last resort.
//!
//! A candidate is always rejected when its normalized label is already on
//! the list. A candidate whose category is already on the list is also
//! rejected while enough untried different-category candidates remain to
//! fill the open slots, which spreads the choices across manufacturers
//! without starving a narrow pool.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::quiz_engine::{models::Item, shuffle::shuffled};

/// Canonical form used to detect duplicate labels.
///
/// Lowercases, collapses whitespace runs to one space, then collapses hyphen
/// runs to one space, then trims. The two collapses run in that order, so
/// `"Model-X"`, `"model x"` and `" Model   X "` all become `"model x"`.
pub fn normalize_label(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = collapse_runs(&lowered, char::is_whitespace);
    let dehyphenated = collapse_runs(&spaced, |c| c == '-');
    dehyphenated.trim().to_string()
}

/// Replace every run of characters matching `pred` with a single space.
fn collapse_runs(text: &str, pred: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if pred(c) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn category_key(category: &str) -> String {
    category.to_lowercase()
}

/// Running state of one `build_choices` call.
struct ChoicePicker {
    target: usize,
    seen_labels: HashSet<String>,
    used_categories: HashSet<String>,
    chosen: Vec<String>,
}

impl ChoicePicker {
    fn new(correct: &Item, target: usize) -> Self {
        ChoicePicker {
            target,
            seen_labels: HashSet::from([normalize_label(&correct.label)]),
            used_categories: HashSet::from([category_key(&correct.category)]),
            chosen: vec![correct.label.clone()],
        }
    }

    fn is_full(&self) -> bool {
        self.chosen.len() >= self.target
    }

    /// Try to add `candidate`; `untried_different` is how many
    /// different-category candidates are still ahead of it.
    fn admit(&mut self, candidate: &Item, untried_different: usize) -> bool {
        let normalized = normalize_label(&candidate.label);
        if self.seen_labels.contains(&normalized) {
            return false;
        }

        let category = category_key(&candidate.category);
        let open_slots = self.target.saturating_sub(self.chosen.len());
        if self.used_categories.contains(&category) && untried_different >= open_slots {
            return false;
        }

        self.seen_labels.insert(normalized);
        self.used_categories.insert(category);
        self.chosen.push(candidate.label.clone());
        true
    }

    /// Run one pass over `candidates`. `diversify` marks the
    /// different-category pass, the only one with untried
    /// different-category candidates left to wait for.
    fn fill_from(&mut self, candidates: &[&Item], diversify: bool) {
        for (pos, candidate) in candidates.iter().enumerate() {
            if self.is_full() {
                return;
            }
            let untried_different = if diversify { candidates.len() - pos - 1 } else { 0 };
            self.admit(candidate, untried_different);
        }
    }
}

/// Pick `target_count` answer labels for `correct`, drawing distractors
/// from `pool`.
///
/// The result always holds `correct.label` (for `target_count >= 1`), never
/// holds two labels that normalize alike, and comes back in random order.
/// When the pool cannot supply enough distinct labels the result is shorter
/// than `target_count`; callers must tolerate that.
///
/// `correct` does not have to be an element of `pool`; pool entries equal to
/// it are skipped.
pub fn build_choices<R: Rng + ?Sized>(
    correct: &Item,
    pool: &[Item],
    target_count: usize,
    rng: &mut R,
) -> Vec<String> {
    if target_count == 0 {
        return Vec::new();
    }

    let mut picker = ChoicePicker::new(correct, target_count);

    let remainder: Vec<&Item> = pool.iter().filter(|item| *item != correct).collect();
    let others = shuffled(&remainder, rng);
    let correct_category = category_key(&correct.category);
    let (different, same): (Vec<&Item>, Vec<&Item>) = others
        .iter()
        .copied()
        .partition(|item| category_key(&item.category) != correct_category);

    picker.fill_from(&different, true);
    if !picker.is_full() {
        picker.fill_from(&same, false);
    }
    if !picker.is_full() {
        picker.fill_from(&others, false);
    }

    let mut choices = shuffled(&picker.chosen, rng);
    choices.truncate(target_count);

    if choices.len() < target_count {
        warn!(
            "only {} of {} choices available for '{}'",
            choices.len(),
            target_count,
            correct.label
        );
    }
    debug!(
        "choices for '{}' ({} different-category, {} same-category candidates): {:?}",
        correct.label,
        different.len(),
        same.len(),
        choices
    );

    choices
}
