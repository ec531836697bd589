//! Fixed-depth negamax search with alpha-beta pruning.

use std::sync::mpsc::Sender;

use tracing::debug;

use tarrasch_core::{Color, GameState, Move};

use crate::eval::{MATE, evaluate};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Search the root moves to `depth` plies and return the chosen move.
///
/// The root list is shuffled first so equally scored moves vary between
/// games. Returns `None` only when `moves` is empty, i.e. in a terminal
/// position; the caller should consult the state's terminal flags before
/// asking for a move.
pub fn search_best(state: &mut GameState, moves: &mut Vec<Move>, depth: u8) -> Option<Move> {
    fastrand::shuffle(moves);
    let sign = match state.side_to_move() {
        Color::White => 1.0,
        Color::Black => -1.0,
    };
    let mut chosen = None;
    let score = negamax(state, moves, depth, depth, -MATE, MATE, sign, &mut chosen);
    debug!(
        depth,
        score,
        chosen = ?chosen.map(|m| m.to_chess_notation()),
        "search finished"
    );
    chosen
}

/// Worker-thread entry point: search at the default depth and write the
/// chosen move (or `None`) into the caller's channel.
///
/// The driver hands this a clone of the state and may simply drop the
/// receiver to abandon the result; the send error is ignored for that
/// reason.
pub fn best_move(state: &mut GameState, mut moves: Vec<Move>, tx: Sender<Option<Move>>) {
    let chosen = search_best(state, &mut moves, DEFAULT_DEPTH);
    let _ = tx.send(chosen);
}

/// Uniformly random legal move, the driver's fallback when the search
/// returns nothing.
pub fn random_move(moves: &[Move]) -> Option<Move> {
    if moves.is_empty() {
        None
    } else {
        Some(moves[fastrand::usize(..moves.len())])
    }
}

/// Negamax over the legal-move tree.
///
/// Scores are always from the side to move's perspective (`sign` flips the
/// White-anchored evaluation). The move chosen at the root is captured into
/// `chosen` whenever a new best score appears at `depth == max_depth`. An
/// empty move list falls through to `-MATE` without recursing.
#[allow(clippy::too_many_arguments)]
fn negamax(
    state: &mut GameState,
    moves: &[Move],
    depth: u8,
    max_depth: u8,
    mut alpha: f32,
    beta: f32,
    sign: f32,
    chosen: &mut Option<Move>,
) -> f32 {
    if depth == 0 {
        return sign * evaluate(state);
    }

    let mut best = -MATE;
    for &mv in moves {
        state.make(mv);
        let replies = state.legal_moves();
        let score = -negamax(
            state,
            &replies,
            depth - 1,
            max_depth,
            -beta,
            -alpha,
            -sign,
            chosen,
        );
        state.undo();

        if score > best {
            best = score;
            if depth == max_depth {
                *chosen = Some(mv);
            }
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}
