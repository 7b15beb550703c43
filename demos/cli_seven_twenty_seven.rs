//! CLI 7-27 card counter.
//!
//! Asks for the players at the table, then for every card dealt and drawn,
//! and advises the controlled player on each of their turns. Type `q` (or
//! close the input) to leave. Pass `--sim` to watch a seeded table play
//! itself instead.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use seven27::{Action, Advice, Card, CounterOptions, ShuffledTable, TableIo, parse_card, play};

const CARD_HELP: &str = r#"Enter card as rank followed by suit, e.g. "AS", "7D", "QH", "10C"."#;

fn main() {
    env_logger::init();

    let options = CounterOptions::default();

    if std::env::args().any(|arg| arg == "--sim") {
        simulate(&options);
        return;
    }

    let Some((players, me)) = prompt_players() else {
        return;
    };
    println!("Game is ready to begin.");

    let mut io = Prompter;
    loop {
        match play(&players, &me, &mut io, &options) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }
    }
    quit();
}

fn quit() -> ! {
    println!("All right, then. Goodbye!");
    std::process::exit(0)
}

fn simulate(options: &CounterOptions) {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let players = ["North", "East", "South", "West"];
    let mut table = ShuffledTable::new(options.clone(), seed, 1);

    if let Err(err) = play(&players, "South", &mut table, options) {
        println!("Round error: {err}");
        return;
    }

    println!("Seed {seed}");
    for player in players {
        if let Some(hand) = table.hands().hand(player) {
            println!("{player:>5}: {hand} (total {})", hand.value());
        }
    }
}

struct Prompter;

impl TableIo for Prompter {
    fn deal(&mut self, player: &str, controlled: bool) -> Vec<Card> {
        if controlled {
            let showing = prompt_card("What card do I have showing? ");
            let hidden = prompt_card("What card do I have hidden? ");
            vec![showing, hidden]
        } else {
            vec![prompt_card(&format!("What card does {player} have? "))]
        }
    }

    fn turn(&mut self, player: &str, advice: Option<&Advice>) -> Option<Card> {
        let Some(advice) = advice else {
            return prompt_draw(&format!(
                r#"What card did {player} draw? "-" for no draw. "#
            ));
        };

        println!(
            "My total is {}. Odds of improving: {:.0}%, likely to reach {}. Best opponent odds: {:.0}%.",
            advice.total,
            advice.odds.improvement * 100.0,
            advice.odds.threshold,
            advice.max_opponent * 100.0
        );

        match advice.action {
            Action::Draw => Some(prompt_card("I will draw. What did I get? ")),
            Action::Stay => {
                println!("I do not think I will draw a card.");
                None
            }
            Action::Fold => {
                println!("I do not think I will draw a card.");
                println!("In fact, I fold.");
                None
            }
        }
    }

    fn another_round(&mut self) -> bool {
        prompt_line("So, we're done now? Or do you want another round?\n ('y' for another round): ")
            .is_some_and(|answer| answer == "y")
    }
}

fn prompt_players() -> Option<(Vec<String>, String)> {
    let line = prompt_line(
        "Please list the names of all players, in the order that they will take their turns.\n(space-separated): ",
    )?;
    let mut players: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if players.is_empty() {
        println!("No players, no game.");
        return None;
    }

    let mut me = prompt_line("Which player is this one?\n(by name): ")?;
    while !players.contains(&me) {
        let answer = prompt_line(&format!(
            "\"{me}\" wasn't in your previous list. Add as new player, going last?\n(y/n): "
        ))?;
        match answer.as_str() {
            "y" => {
                players.push(me.clone());
                println!("Player list is {players:?}");
            }
            "n" => me = prompt_line("Which player is this one?\n(by name): ")?,
            _ => println!("Please input 'y' or 'n'."),
        }
    }

    Some((players, me))
}

/// Reads one trimmed line. `None` at end of input or when the user quits.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let input = input.trim();
            (input != "q" && input != "quit").then(|| input.to_string())
        }
    }
}

fn prompt_card(prompt: &str) -> Card {
    loop {
        let entry = prompt_line(prompt).unwrap_or_else(|| quit());
        match parse_card(&entry) {
            Ok(card) => return card,
            Err(err) => println!("Invalid card ({err}). {CARD_HELP}"),
        }
    }
}

fn prompt_draw(prompt: &str) -> Option<Card> {
    loop {
        let entry = prompt_line(prompt).unwrap_or_else(|| quit());
        if entry == "-" {
            return None;
        }
        match parse_card(&entry) {
            Ok(card) => return Some(card),
            Err(err) => println!("Invalid card ({err}). {CARD_HELP}"),
        }
    }
}
