//! CLI Spider example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use spiders::{Board, Card, GameOptions, MoveOutcome, ParseError, Suit};

enum Command {
    Move(Card, Card),
    Deal,
    Draw,
    Exit,
}

impl Command {
    fn parse(input: &str) -> Result<Option<Self>, ParseError> {
        match input {
            "" => Ok(None),
            "deal" => Ok(Some(Self::Deal)),
            "draw" | "clear" => Ok(Some(Self::Draw)),
            "exit" | "quit" | "q" => Ok(Some(Self::Exit)),
            _ => {
                let Some((from, to)) = input.split_once(" to ") else {
                    return Ok(None);
                };
                Ok(Some(Self::Move(parse_card(from)?, parse_card(to)?)))
            }
        }
    }
}

/// Parses `<rank><h|c|d|s>`, e.g. `10d` or `qs`.
fn parse_card(token: &str) -> Result<Card, ParseError> {
    let token = token.trim();
    let code = token.chars().next_back().ok_or(ParseError::Empty)?;
    let symbol = Suit::from_code(code)?.symbol();
    let head = &token[..token.len() - code.len_utf8()];
    format!("{head}{symbol}").parse()
}

fn main() {
    println!("Spider CLI example (type 'exit' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut board = Board::new(GameOptions::default(), seed);

    clear_screen();
    loop {
        println!("{board}");
        let input = prompt_line("command: ");

        match Command::parse(&input) {
            Ok(Some(Command::Move(card, onto))) => {
                clear_screen();
                match board.move_card(&card, &onto) {
                    Ok(outcome) => print_outcome(&card, &onto, &outcome),
                    Err(err) => println!("ERROR: {err}"),
                }
            }
            Ok(Some(Command::Deal)) => {
                clear_screen();
                println!("Dealing from the reserve is not supported.");
            }
            Ok(Some(Command::Draw)) => clear_screen(),
            Ok(Some(Command::Exit)) => break,
            Ok(None) => {
                clear_screen();
                println!("Unknown command. Try '7h to 8s', 'draw', or 'exit'.");
            }
            Err(err) => {
                clear_screen();
                println!("ERROR: {err}\n invalid move: {input}");
            }
        }
    }

    println!("\tGame Over");
}

fn print_outcome(card: &Card, onto: &Card, outcome: &MoveOutcome) {
    println!(
        "{card} -> {onto}: moved {} card(s) from pile {} to pile {}",
        outcome.moved, outcome.from, outcome.to
    );
    if let Some(completion) = outcome.completed {
        println!("Completed {}!", completion.suit);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
        return "exit".to_string();
    }
    input.trim().to_lowercase()
}

fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
    let _ = io::stdout().flush();
}
