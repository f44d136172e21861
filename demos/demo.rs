//! Play a full quiz in the terminal against a scripted player.
//!
//! Run with: `cargo run --example demo [path/to/cars.json]`
//!
//! Without an argument the demo uses a small built-in showroom. Set
//! `RUST_LOG=debug` to watch each choice set being built.
//!
//! ## Key concepts demonstrated
//!
//! - `QuizSettings::from_env()` — defaults plus `CAR_PICKER_*` overrides.
//! - `load_manifest()` — reads `cars.json`, silently dropping broken entries.
//! - `QuizSession` — `start`, `tick`, `answer`, `advance`, `summary`; the
//!   caller owns the clock and the pause between questions.
//! - A seeded `StdRng` makes every run identical.

use car_picker::{
    load_manifest, quiz_engine::format::format_duration, ChoiceMark, Item, QuizSession,
    QuizSettings, Screen, TickOutcome,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn showroom() -> Vec<Item> {
    [
        ("Ford Focus", "Ford"), ("Ford Puma", "Ford"), ("Toyota Corolla", "Toyota"),
        ("Toyota Yaris", "Toyota"), ("Honda Civic", "Honda"), ("Honda CR-V", "Honda"),
        ("Kia Rio", "Kia"), ("Kia Sportage", "Kia"), ("Audi A3", "Audi"),
        ("Audi Q5", "Audi"), ("Tesla Model 3", "Tesla"), ("Volvo XC60", "Volvo"),
    ]
    .iter()
    .map(|(label, make)| Item::new(*label, *make, format!("images/cars/{label}.JPG")))
    .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let settings = QuizSettings::from_env()?;
    let pool = match std::env::args().nth(1) {
        Some(path) => load_manifest(path)?,
        None => showroom(),
    };

    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = QuizSession::new(pool, settings)?;
    session.start(&mut rng)?;

    while session.screen() == Screen::Quiz {
        let Some(question) = session.current_question().cloned() else { break };
        let (n, total) = session.progress();

        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  Question {n} / {total}   Score: {}", session.score());
        println!("  Photo: {}", question.item.image_path);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        // The scripted player thinks for a few seconds, then picks at random.
        // A slow enough player runs out the clock.
        let think = rng.gen_range(1..=session.settings().seconds_per_question + 5);
        let mut outcome = None;
        for _ in 0..think {
            if let TickOutcome::TimedOut(timed_out) = session.tick() {
                outcome = Some(timed_out);
                break;
            }
        }
        let outcome = match outcome {
            Some(timed_out) => timed_out,
            None => {
                let pick = question.choices[rng.gen_range(0..question.choices.len())].clone();
                match session.answer(&pick) {
                    Some(answered) => answered,
                    None => break,
                }
            }
        };

        for (label, mark) in &outcome.marks {
            let marker = match mark {
                ChoiceMark::Correct => "✓",
                ChoiceMark::Wrong   => "✗",
                ChoiceMark::Neutral => " ",
            };
            println!("  [{marker}] {label}");
        }
        println!("  {}  ({} s, clock {})", outcome.feedback, outcome.record.elapsed_seconds, session.countdown());
        println!();

        session.advance();
    }

    if let Some(summary) = session.summary() {
        println!("══ Results ══");
        println!("  Score: {} / {}", summary.score, summary.max_score);
        println!("  Time:  {}", format_duration(summary.elapsed_seconds));
        if summary.celebrate {
            println!("  🎆 Fireworks!");
        }
        if summary.missed.is_empty() {
            println!("  Every question answered correctly.");
        }
        for missed in &summary.missed {
            let selected = missed.selected_label.as_deref().unwrap_or("no answer");
            println!(
                "  #{}: answer {}, picked {}",
                missed.index, missed.correct_label, selected
            );
        }
    }
    Ok(())
}
