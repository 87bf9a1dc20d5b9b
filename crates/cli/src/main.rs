//! Interactive terminal driver
//!
//! Renders the board as text, reads four-character moves (`e2e4`) from
//! stdin and lets either color be driven by an engine instead.

use game_core::{
    legal_moves, move_text, parse_square_pair, square_text, Color, Engine, Move, Position, Square,
};
use negamax_engine::NegamaxEngine;
use random_engine::{random_move, RandomEngine};
use std::env;
use std::io::{self, BufRead, Write};

enum Seat {
    Human,
    Engine(Box<dyn Engine>),
}

fn parse_seat(spec: &str, depth: u8) -> Seat {
    match spec.to_lowercase().as_str() {
        "human" | "h" => Seat::Human,
        "negamax" | "nm" => Seat::Engine(Box::new(NegamaxEngine::with_depth(depth))),
        "random" | "rand" => Seat::Engine(Box::new(RandomEngine::new())),
        _ => {
            eprintln!("Unknown controller: {} (using human)", spec);
            Seat::Human
        }
    }
}

fn side_label(c: Color) -> &'static str {
    match c {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn render_board(pos: &Position) -> String {
    let mut out = String::new();
    for row in 0..8u8 {
        let mut cells: Vec<String> = Vec::with_capacity(8);
        for col in 0..8u8 {
            cells.push(match pos.piece_at(Square::new(row, col)) {
                Some(pc) => pc.code(),
                None => "--".to_string(),
            });
        }
        out.push_str(&format!("{} {}\n", 8 - row, cells.join(" ")));
    }
    out.push_str("  a  b  c  d  e  f  g  h\n");
    out
}

fn print_usage() {
    println!("Terminal chess");
    println!();
    println!("Usage:");
    println!("  chess-cli [--white CTRL] [--black CTRL] [--depth D]");
    println!();
    println!("Controllers:");
    println!("  human         - Moves come from stdin (default for white)");
    println!("  negamax       - Fixed-depth negamax (default for black)");
    println!("  random        - Uniform random mover");
    println!();
    println!("During the game:");
    println!("  e2e4          - Play a move (from-square then to-square)");
    println!("  u, undo       - Take back the last half-move");
    println!("  r, new        - Start a fresh game");
    println!("  q, quit       - Leave");
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut white_spec = String::from("human");
    let mut black_spec = String::from("negamax");
    let mut depth = negamax_engine::DEFAULT_DEPTH;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--white" | "-w" => {
                if i + 1 < args.len() {
                    white_spec = args[i + 1].clone();
                    i += 1;
                }
            }
            "--black" | "-b" => {
                if i + 1 < args.len() {
                    black_spec = args[i + 1].clone();
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    depth = args[i + 1].parse().unwrap_or(depth);
                    i += 1;
                }
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                return;
            }
        }
        i += 1;
    }

    let mut white = parse_seat(&white_spec, depth);
    let mut black = parse_seat(&black_spec, depth);

    println!("Type moves as four characters, e.g. e2e4.");
    println!("Commands: u = undo, r = new game, q = quit.");
    println!();

    let mut pos = Position::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // The legal set is refreshed after every state change; it also
        // keeps the checkmate/stalemate flags current.
        let legal = legal_moves(&mut pos);
        print!("{}", render_board(&pos));

        let game_over = legal.is_empty();
        if game_over {
            if pos.checkmate {
                match pos.side_to_move {
                    Color::White => println!("Black wins by checkmate"),
                    Color::Black => println!("White wins by checkmate"),
                }
            } else if pos.stalemate {
                println!("Stalemate");
            }
        }

        if !game_over {
            let seat = match pos.side_to_move {
                Color::White => &mut white,
                Color::Black => &mut black,
            };
            if let Seat::Engine(engine) = seat {
                let chosen = engine
                    .choose_move(&mut pos, &legal)
                    .or_else(|| random_move(&legal));
                if let Some(mv) = chosen {
                    println!("{} plays {}", engine.name(), move_text(mv));
                    println!();
                    pos.make_move(mv);
                    continue;
                }
            }
        }

        print!("{} > ", side_label(pos.side_to_move));
        io::stdout().flush().ok();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            _ => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "q" | "quit" | "exit" => break,
            "u" | "undo" => {
                // Undo also clears a checkmate/stalemate verdict, so a
                // finished game can be rewound and continued.
                pos.undo();
                continue;
            }
            "r" | "new" => {
                pos = Position::new();
                continue;
            }
            _ => {}
        }

        let (from, to) = match parse_square_pair(input) {
            Some(pair) => pair,
            None => {
                println!("Could not read {} as a move", input);
                continue;
            }
        };

        // Echo every attempted move in notation, legal or not.
        println!("{}{}", square_text(from), square_text(to));

        let probe = match Move::describe(from, to, &pos) {
            Some(p) => p,
            None => continue,
        };
        if let Some(&chosen) = legal.iter().find(|m| **m == probe) {
            // Apply the generated twin so the special-move flags
            // (castle, en passant, promotion) ride along.
            pos.make_move(chosen);
        }
        // Anything not in the legal set just prompts again.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_start_position() {
        let pos = Position::new();
        let text = render_board(&pos);
        let mut rows = text.lines();
        assert_eq!(rows.next().unwrap(), "8 bR bN bB bQ bK bB bN bR");
        assert!(text.contains("2 wP wP wP wP wP wP wP wP"));
        assert!(text.contains("5 -- -- -- -- -- -- -- --"));
        assert!(text.ends_with("  a  b  c  d  e  f  g  h\n"));
    }

    #[test]
    fn test_seat_parsing() {
        assert!(matches!(parse_seat("human", 2), Seat::Human));
        match parse_seat("negamax", 3) {
            Seat::Engine(e) => assert_eq!(e.name(), "Negamax v1.0"),
            Seat::Human => panic!("expected an engine seat"),
        }
        match parse_seat("random", 2) {
            Seat::Engine(e) => assert_eq!(e.name(), "Random v1.0"),
            Seat::Human => panic!("expected an engine seat"),
        }
    }
}
