//! Interactive showdown between two poker hands.
//!
//! Run with `RUST_LOG=pkrs=trace` to see how each hand is ranked.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pkrs::{Deck, HAND_SIZE, Hand, HandError};

fn main() {
    env_logger::init();
    println!("Poker showdown example (type 'd' to deal, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(seed);

    loop {
        let Some(input) = prompt_line("Black hand: ") else {
            break;
        };
        let (black, white) = match input.to_ascii_lowercase().as_str() {
            "" => continue,
            "q" | "quit" => break,
            "d" | "deal" => {
                if deck.remaining() < 2 * HAND_SIZE {
                    deck.reshuffle();
                    println!("Deck reshuffled.");
                }
                match (deck.deal("Black"), deck.deal("White")) {
                    (Some(black), Some(white)) => (black, white),
                    _ => continue,
                }
            }
            _ => {
                let black = match Hand::parse("Black", &input) {
                    Ok(hand) => hand,
                    Err(err) => {
                        print_error(&err);
                        continue;
                    }
                };
                let Some(input) = prompt_line("White hand: ") else {
                    break;
                };
                let white = match Hand::parse("White", &input) {
                    Ok(hand) => hand,
                    Err(err) => {
                        print_error(&err);
                        continue;
                    }
                };
                (black, white)
            }
        };

        print_hand(&black);
        print_hand(&white);
        println!("{}\n", black.compare(&white));
    }

    println!("Goodbye.");
}

/// Reads a trimmed line, `None` on end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn print_hand(hand: &Hand) {
    let cards = hand
        .cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "{:>5}: {cards}  rank {:>3}  {}",
        hand.owner(),
        hand.rank(),
        hand.reason()
    );
}

fn print_error(err: &HandError) {
    match err {
        HandError::MalformedHand(_) => println!("Error: {err}"),
        HandError::InvalidToken { source, .. } => println!("Error: {err}: {source}"),
    }
}
