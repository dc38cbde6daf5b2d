use std::io::{self, BufRead, Write};
use std::time::Instant;

use minichess::chess::piece::{PieceKind, Player};
use minichess::core::coord::Coord;
use minichess::game::Game;
use minichess::search::config::SearchConfig;
use minichess::search::minimax::Outcome;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut cfg = SearchConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--horizon" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--horizon requires an integer argument");
                    std::process::exit(2);
                };
                cfg.horizon = match v.parse::<u32>() {
                    Ok(h) => h,
                    Err(e) => {
                        eprintln!("invalid --horizon {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "--alpha-beta" => {
                cfg.alpha_beta = true;
                i += 1;
            }
            x => {
                eprintln!("Unknown option: {x}");
                eprintln!("Usage: play [--horizon <plies>] [--alpha-beta]");
                std::process::exit(2);
            }
        }
    }

    let mut game = Game::new().with_config(cfg);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut white_to_play = true;

    loop {
        println!("{}", game.board());

        if let Some(result) = game.terminal_result() {
            if result > 0 {
                println!("White wins!");
            } else if result < 0 {
                println!("Black wins!");
            } else {
                println!("It's a tie!");
            }
            return;
        }

        if white_to_play {
            println!("White plays, evaluating possible moves...");
            let started = Instant::now();
            let outcome = match game.search(Player::White) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            };
            println!("Evaluation time: {:.3}s", started.elapsed().as_secs_f64());
            match outcome {
                Outcome::Best { score, kind, dest } => {
                    println!(
                        "Recommended move: piece = {}, destination = {dest} (score {score})",
                        kind.symbol()
                    );
                }
                Outcome::Terminal { .. } | Outcome::NoMoves { .. } => {
                    println!("No recommendation available.");
                }
            }

            loop {
                let Some((kind, dest)) = prompt_move(&mut input) else {
                    return;
                };
                match game.validate_move(kind, Player::White, dest) {
                    Ok(act) if act.is_valid() => {
                        if let Err(e) = game.apply(&act) {
                            eprintln!("Failed to apply move: {e}");
                            std::process::exit(1);
                        }
                        println!("{} to {dest}", kind.symbol());
                        println!();
                        white_to_play = false;
                        break;
                    }
                    Ok(act) => {
                        if let Some(r) = act.reject() {
                            println!("The move is not valid ({r}). Try again.");
                        }
                    }
                    Err(r) => println!("The move is not valid ({r}). Try again."),
                }
            }
        } else {
            println!("Black plays, evaluating possible moves...");
            let outcome = match game.search(Player::Black) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            };
            match outcome {
                Outcome::Best { kind, dest, .. } => {
                    let act = match game.validate_move(kind, Player::Black, dest) {
                        Ok(a) => a,
                        Err(e) => {
                            eprintln!("Engine recommended an impossible move: {e}");
                            std::process::exit(1);
                        }
                    };
                    if let Err(e) = game.apply(&act) {
                        eprintln!("Failed to apply engine move: {e}");
                        std::process::exit(1);
                    }
                    println!("{} to {dest}", kind.symbol());
                    println!();
                    white_to_play = true;
                }
                Outcome::Terminal { .. } | Outcome::NoMoves { .. } => {
                    println!("Black has no move to play.");
                    return;
                }
            }
        }
    }
}

/// Prompt for a piece letter and a destination; `None` on closed stdin.
fn prompt_move(input: &mut impl BufRead) -> Option<(PieceKind, Coord)> {
    let kind = loop {
        let line = prompt(input, "Piece to move - king (k), rook (r) or bishop (b): ")?;
        match line.chars().next().and_then(PieceKind::from_symbol) {
            Some(k) => break k,
            None => println!("Please answer k, r or b."),
        }
    };
    let row = prompt_int(input, "Row: ")?;
    let col = prompt_int(input, "Column: ")?;
    Some((kind, Coord::new(row, col)))
}

fn prompt_int(input: &mut impl BufRead, label: &str) -> Option<i32> {
    loop {
        let line = prompt(input, label)?;
        match line.parse::<i32>() {
            Ok(v) => return Some(v),
            Err(_) => println!("Please enter an integer."),
        }
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
