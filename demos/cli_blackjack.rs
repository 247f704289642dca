//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Card, Chip, GameOptions, GameSession, Phase, RoundOutcome, RoundView, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = GameSession::new(GameOptions::default(), seed);

    loop {
        if game.is_broke() {
            println!("Ha! You lost all your money. Good thing this is only a game.");
            match prompt_line("Start over? (y/n): ").as_str() {
                "y" | "yes" => {
                    let _ = game.reset_bankroll();
                    continue;
                }
                _ => break,
            }
        }

        if !place_bets(&game) {
            println!("Goodbye.");
            break;
        }

        let mut view = match game.start_round() {
            Ok(view) => view,
            Err(err) => {
                println!("Start error: {err}");
                continue;
            }
        };

        while view.phase == Phase::PlayerTurn && view.pending.is_none() {
            print_table(&view);
            let result = match prompt_line("Action: [h]it [s]tand: ").as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };
            match result {
                Ok(next) => view = next,
                Err(err) => println!("Action error: {err}"),
            }
        }

        // Pace the scheduled steps the way a rendering layer would.
        while let Some(step) = view.pending {
            print_table(&view);
            thread::sleep(step.delay);
            match game.advance(step) {
                Ok(next) => view = next,
                Err(err) => {
                    println!("Step error: {err}");
                    break;
                }
            }
        }

        print_table(&view);
        if let Some(outcome) = view.outcome {
            println!("{}", describe(outcome));
        }
        if let Some(settlement) = game.last_settlement() {
            println!("Payout: {} (wager {})", settlement.payout, settlement.wager);
        }

        if let Err(err) = game.return_to_main() {
            println!("Return error: {err}");
        }
    }
}

/// Collects chips until the player deals. Returns `false` to quit.
fn place_bets(game: &GameSession) -> bool {
    loop {
        println!(
            "\nBankroll: {} | Wagered: {}",
            game.bankroll(),
            game.wagered()
        );
        let input = prompt_line("Chip (1/5/10/25/100), 'u' to undo, 'd' to deal: ");
        match input.as_str() {
            "q" | "quit" => return false,
            "d" | "deal" => {
                if game.wagered() > 0 {
                    return true;
                }
                println!("Place a bet first.");
            }
            "u" | "undo" => {
                if let Some(last) = game.placed_chips().last() {
                    let _ = game.retract_chip(last.id);
                }
            }
            value => {
                let chip = Chip::ALL
                    .into_iter()
                    .find(|chip| value.parse::<usize>().ok() == Some(chip.value()));
                match chip.map(|chip| game.place_chip(chip)) {
                    Some(Ok(_)) => {}
                    Some(Err(err)) => println!("Bet error: {err}"),
                    None => println!("Unknown chip."),
                }
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &RoundView) {
    let mut dealer = format_cards(&view.dealer_cards);
    if !view.hole_revealed && !view.dealer_cards.is_empty() {
        dealer.push_str(" ??");
    }
    println!("\nDealer: {dealer} (value {})", view.dealer_value);
    println!(
        "Player: {} (value {})",
        format_cards(&view.player_cards),
        view.player_value
    );
    println!("Bankroll: {} | Wagered: {}", view.bankroll, view.wagered);
}

const fn describe(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "You win!",
        RoundOutcome::Blackjack => "Blackjack!",
        RoundOutcome::Bust => "Bust.",
        RoundOutcome::Lose => "Dealer wins.",
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };
    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
