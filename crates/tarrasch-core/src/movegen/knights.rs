//! Knight move generation.

use crate::chess_move::Move;
use crate::coord::Coord;
use crate::scan::{KNIGHT_JUMPS, ScanReport};
use crate::state::GameState;

pub(super) fn gen_knight(
    state: &GameState,
    report: &ScanReport,
    from: Coord,
    moves: &mut Vec<Move>,
) {
    // A knight can never move along its pin line.
    if report.pin_on(from).is_some() {
        return;
    }

    let us = state.side_to_move();
    for &(dr, dc) in &KNIGHT_JUMPS {
        if let Some(dest) = from.offset(dr, dc)
            && !state.piece_at(dest).is_some_and(|p| p.is(us))
        {
            moves.push(Move::new(from, dest, state.board()));
        }
    }
}
