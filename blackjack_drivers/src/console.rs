//! The text surface of the game: prompts that block on stdin and a
//! renderer for engine events. The engine never sees raw input; every
//! prompt loops until the line parses and passes its bound.

use std::io::{self, Write};

use blackjack::{Action, Card, Decisions, EventHandler, Hand, Outcome, RoundSummary, Session};

/// Prints the prompt and reads one lowercased line. `None` means stdin
/// is closed and no more input will ever come.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

/// Asks for a bet until it is a number within [1, balance]. `None` on
/// end of input.
pub fn request_bet(session: &Session) -> Option<u32> {
    loop {
        let line = prompt("Enter your bet: $")?;
        let bet = match line.parse::<u32>() {
            Ok(bet) => bet,
            Err(_) => {
                println!("⚠️ Invalid input. Please enter a number.");
                continue;
            }
        };
        match session.validate_bet(bet) {
            Ok(()) => return Some(bet),
            Err(_) => {
                println!("⚠️ Bet must be between $1 and ${}", session.balance());
            }
        }
    }
}

/// Asks whether to play another round. Anything but yes stops.
pub fn request_continue() -> bool {
    matches!(
        prompt("Play again? (Y/N): ").as_deref(),
        Some("y") | Some("yes")
    )
}

fn hand_line(hand: &Hand) -> String {
    let cards = hand
        .cards()
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} = {}", cards, hand.value())
}

fn show_player_hand(hand: &Hand) {
    println!("Your Hand:");
    println!("{}", hand_line(hand));
    println!();
}

/// The dealer's hole card stays face down until her turn; only the
/// rendering hides it, the hand itself always knows both cards.
fn show_dealer_hand(hand: &Hand, reveal: bool) {
    println!("Dealer's Hand:");
    if reveal {
        println!("{}", hand_line(hand));
    } else {
        println!("[Hidden] {}", hand.cards()[1]);
    }
    println!();
}

/// Turns the hit/stand prompt into an [`Action`]. Unrecognized tokens
/// re-prompt without touching the round's state.
pub struct ConsolePlayer;

impl Decisions for ConsolePlayer {
    fn next_action(&mut self, _player: &Hand, _dealer_up: Card) -> Action {
        loop {
            // Closed stdin means no decision is ever coming; standing
            // lets the round finish instead of spinning on the prompt.
            let Some(line) = prompt("Hit (H) or Stand (S)? ") else {
                return Action::Stand;
            };
            let action = match line.as_str() {
                "h" => Ok(Action::Hit),
                "s" => Ok(Action::Stand),
                other => other.parse::<Action>(),
            };
            match action {
                Ok(action) => return action,
                Err(_) => println!("⚠️ Please answer with H or S."),
            }
        }
    }
}

/// Renders engine events on the console.
pub struct ConsoleHandler;

impl EventHandler for ConsoleHandler {
    fn on_deal(&mut self, player: &Hand, dealer: &Hand) {
        show_player_hand(player);
        show_dealer_hand(dealer, false);
    }

    fn on_player_hit(&mut self, player: &Hand) {
        show_player_hand(player);
    }

    fn on_dealer_reveal(&mut self, dealer: &Hand) {
        show_dealer_hand(dealer, true);
    }

    fn on_round_summary(&mut self, summary: &RoundSummary) {
        match summary.outcome {
            Outcome::BlackjackWin => {
                println!("🎉 Blackjack! You win ${}!", summary.delta)
            }
            Outcome::PlayerWin => println!("✅ You win!"),
            Outcome::PlayerBust => println!("❌ You busted! You lose your bet."),
            Outcome::DealerWin => println!("❌ Dealer wins."),
            Outcome::Tie => println!("⚖️ It's a tie!"),
        }
    }
}

/// Final report once the session loop ends.
pub fn show_final_report(session: &Session) {
    println!("\n🏁 Final Balance: ${}", session.balance());
    println!(
        "📊 Game Stats: Wins: {} | Losses: {} | Ties: {}",
        session.wins(),
        session.losses(),
        session.ties()
    );
    println!("Thanks for playing!");
}
