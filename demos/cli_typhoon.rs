//! CLI Color Typhoon example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use typhoon::{Game, GameError, GameRules, Randomize, Snapshot, SystemScheduler};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Color Typhoon CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameRules::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Configuration error: {err}");
            return;
        }
    };

    if let Err(err) = game.init() {
        println!("Init error: {err}");
        return;
    }

    loop {
        settle(&mut game);
        print_cards(&game.snapshot());

        let input = prompt_line("[1-11] flip, (r)andomize, (a)ll, (n)ames, (s)tart over, (q)uit: ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "r" => match game.randomize() {
                Ok(Randomize::Immediate) => println!("Shuffled."),
                Ok(Randomize::Deferred(_)) => {
                    print_cards(&game.snapshot());
                    println!("Flipping back...");
                }
                Err(GameError::Busy) => {}
                Err(err) => println!("Randomize error: {err}"),
            },
            "a" => {
                if let Err(err) = game.reveal_all_cards() {
                    println!("Reveal error: {err}");
                }
            }
            "n" => {
                let visible = game.names_visible();
                game.set_names_visible(!visible);
            }
            "s" => {
                if let Err(err) = game.init() {
                    println!("Init error: {err}");
                }
            }
            other => match other.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    if let Err(err) = game.request_reveal(number - 1) {
                        println!("Flip error: {err}");
                    }
                }
                _ => println!("Unknown command."),
            },
        }
    }
}

/// Waits out a pending flip-back so the next render shows the new deck.
fn settle(game: &mut Game<SystemScheduler>) {
    let delay = game.rules().animation_duration;
    while game.is_busy() {
        std::thread::sleep(delay);
        if let Err(err) = game.poll() {
            println!("Randomize error: {err}");
            break;
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

fn print_cards(snapshot: &Snapshot) {
    println!();
    for (index, card) in snapshot.cards.iter().enumerate() {
        let face = if card.revealed {
            card.point_label.clone()
        } else if snapshot.names_visible {
            card.color_name.to_string()
        } else {
            String::new()
        };
        println!("{:>2}. {} {face}", index + 1, swatch(card.hex));
    }
    println!(
        "Revealed: {}/{}",
        snapshot.revealed_count,
        snapshot.cards.len()
    );
}

fn swatch(hex: &str) -> String {
    let channel = |range: core::ops::Range<usize>| {
        u8::from_str_radix(hex.get(range).unwrap_or("00"), 16).unwrap_or(0)
    };
    let (r, g, b) = (channel(1..3), channel(3..5), channel(5..7));
    format!("\u{1b}[48;2;{r};{g};{b}m    \u{1b}[0m")
}
