//! King move generation.

use crate::chess_move::Move;
use crate::coord::Coord;
use crate::scan::{RAY_DIRS, square_attacked};
use crate::state::GameState;

pub(super) fn gen_king(state: &GameState, from: Coord, moves: &mut Vec<Move>) {
    let us = state.side_to_move();
    let them = us.flip();

    for &(dr, dc) in &RAY_DIRS {
        let Some(dest) = from.offset(dr, dc) else {
            continue;
        };
        if state.piece_at(dest).is_some_and(|p| p.is(us)) {
            continue;
        }
        // The origin square is transparent so that stepping away along a
        // checker's ray is still seen as attacked.
        if !square_attacked(state, dest, them, Some(from)) {
            moves.push(Move::new(from, dest, state.board()));
        }
    }
}
