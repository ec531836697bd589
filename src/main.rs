//! Interactive driver: a human plays White against the engine on stdin.
//!
//! Moves are entered in coordinate form (`e2e4`, `e1g1` to castle) and
//! validated against the current legal-move list. The engine reply runs on
//! a worker thread over a cloned state, so the driver owns the live state
//! throughout.

use std::io::{self, BufRead, Lines, StdinLock, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use tracing::info;

use tarrasch_core::{Coord, GameState, Move};
use tarrasch_engine::{DEFAULT_DEPTH, random_move, search_best};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let depth = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u8>()
            .context("search depth must be a small integer")?,
        None => DEFAULT_DEPTH,
    };
    info!(depth, "tarrasch starting");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = GameState::new();

    loop {
        let moves = state.legal_moves();
        println!("{}\n", state.pretty());
        if announce_if_over(&state) {
            break;
        }

        print!("your move> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let input = line?.trim().to_string();
        match input.as_str() {
            "" => continue,
            "quit" => break,
            "undo" => {
                // Take back the engine's reply and the player's move.
                state.undo();
                state.undo();
                continue;
            }
            _ => {}
        }

        let Some(mv) = parse_move(&input, &moves) else {
            println!("illegal or unrecognized move: {input}");
            continue;
        };
        state.make_with(mv, || prompt_promotion(&mut lines));

        let reply_moves = state.legal_moves();
        if announce_if_over(&state) {
            println!("{}", state.pretty());
            break;
        }

        let (tx, rx) = mpsc::channel();
        let mut snapshot = state.clone();
        let mut worker_moves = reply_moves.clone();
        thread::spawn(move || {
            let chosen = search_best(&mut snapshot, &mut worker_moves, depth);
            let _ = tx.send(chosen);
        });

        let reply = rx
            .recv()
            .context("search worker dropped its channel")?
            .or_else(|| random_move(&reply_moves));
        let Some(reply) = reply else {
            break;
        };
        println!("engine plays {}", reply.to_chess_notation());
        state.make(reply);
    }

    info!("tarrasch shutting down");
    Ok(())
}

/// Report a finished game. Returns `true` when play should stop.
fn announce_if_over(state: &GameState) -> bool {
    if state.is_checkmate() {
        let winner = state.side_to_move().flip();
        println!("checkmate — {winner} wins");
        true
    } else if state.is_stalemate() {
        println!("stalemate");
        true
    } else if state.is_draw() {
        println!("draw");
        true
    } else {
        false
    }
}

/// Match coordinate input like `e2e4` against the legal-move list.
fn parse_move(input: &str, legal: &[Move]) -> Option<Move> {
    if input.len() != 4 {
        return None;
    }
    let start = Coord::from_algebraic(&input[..2])?;
    let end = Coord::from_algebraic(&input[2..])?;
    legal
        .iter()
        .copied()
        .find(|m| m.start() == start && m.end() == end)
}

/// Ask for a promotion piece; defaults to a queen if input ends.
fn prompt_promotion(lines: &mut Lines<StdinLock<'_>>) -> char {
    print!("promote to [Q/N/B/R]> ");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => line.trim().chars().next().unwrap_or('Q'),
        _ => 'Q',
    }
}
