//! CLI cribbage hand counter (type 'q' to quit, pass `--crib` to count a crib).

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use cribbage::{Card, Hand, HandScore, ScoreOptions};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "cribbage=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let crib = std::env::args().skip(1).any(|arg| arg == "--crib");
    let options = ScoreOptions::default().with_crib(crib);
    info!(crib, "counting hands");

    println!("Cribbage hand counter (type 'q' to quit)");

    loop {
        let Some(cards) = prompt_line("Enter hand cards: ") else {
            break;
        };
        let Some(cut) = prompt_line("Enter cut card: ") else {
            break;
        };

        let hand = match Hand::parse(&cards, &cut) {
            Ok(hand) => hand,
            Err(err) => {
                warn!(%err, "could not read hand");
                println!("Error: {err}");
                continue;
            }
        };

        match hand.score_with(&options) {
            Ok(score) => print_score(&hand, &score),
            Err(err) => println!("Error: {err}"),
        }
        println!();
    }

    println!("Goodbye.");
}

/// Reads one line; `None` on quit or end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return None,
        Ok(_) => {}
    }

    let input = input.trim().to_uppercase();
    if input == "Q" || input == "QUIT" {
        return None;
    }
    Some(input)
}

fn print_score(hand: &Hand, score: &HandScore) {
    let cards = hand
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Score for {} ({}) is {}.",
        cards,
        format_card(&hand.cut()),
        score.total()
    );

    println!("Score breakdown:");
    for (name, points) in score.categories() {
        println!("{name:>15}: {points}");
    }
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit().is_red() { "31" } else { "30" };
    colorize(&card.short().to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
