//! Session Walkthrough
//!
//! Drives a session log through a short shoe and prints what a view
//! binding would draw after each command.
//!
//! Key concepts:
//! - Commands (`submit`, `undo`, `reset`) mutate one owned log
//! - Views re-render from a fresh snapshot after every command
//! - `Tie` is refused without touching the log
//!
//! Run with: RUST_LOG=debug cargo run --example walkthrough

use natural_win::core::Outcome;
use natural_win::session::SessionBuilder;
use natural_win::view::{render, ViewConfig, ViewModel};
use tracing_subscriber::EnvFilter;

fn print_view(view: &ViewModel) {
    println!(
        "  next: {}  score: {}  log: {}",
        view.indicator.glyph(),
        view.score,
        view.log_count
    );
    for row in &view.rows {
        println!(
            "    {} {:<6} {:<3} pred {} {:<4} {}",
            row.label, row.winner, row.badge, row.predicted, row.grade, row.score
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Natural Win Walkthrough ===\n");

    let config = ViewConfig::default();
    let mut log = SessionBuilder::new().build();
    println!("Session {}\n", log.id());

    let shoe = [
        (Outcome::Banker, false),
        (Outcome::Player, false),
        (Outcome::Player, true),
        (Outcome::Player, false),
        (Outcome::Banker, false),
    ];

    for (outcome, four) in shoe {
        match log.submit(outcome, four) {
            Ok(hand) => println!(
                "submit {} ({}): {}",
                outcome,
                if four { "4 cards" } else { "5+ cards" },
                hand.grade
            ),
            Err(err) => println!("submit {} failed: {}", outcome, err),
        }
        print_view(&render(&log.snapshot(), &config));
    }

    println!("\nsubmit Tie:");
    if let Err(err) = log.submit(Outcome::Tie, false) {
        println!("  refused: {}", err);
    }

    println!("\nundo: {}", log.undo());
    print_view(&render(&log.snapshot(), &config));

    let tally = log.tally();
    println!(
        "\nwins {} / losses {} / pushes {}",
        tally.wins, tally.losses, tally.pushes
    );

    log.reset();
    println!("\nreset:");
    print_view(&render(&log.snapshot(), &config));

    println!("\n=== Walkthrough Complete ===");
}
