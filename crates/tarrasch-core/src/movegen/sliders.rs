//! Bishop, rook, and queen move generation.

use crate::chess_move::Move;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;
use crate::scan::{RAY_DIRS, ScanReport};
use crate::state::GameState;

pub(super) fn gen_slider(
    state: &GameState,
    report: &ScanReport,
    from: Coord,
    kind: PieceKind,
    moves: &mut Vec<Move>,
) {
    let dirs: &[(i8, i8)] = match kind {
        PieceKind::Rook => &RAY_DIRS[..4],
        PieceKind::Bishop => &RAY_DIRS[4..],
        _ => &RAY_DIRS[..],
    };

    let us = state.side_to_move();
    let pin = report.pin_on(from);

    for &(dr, dc) in dirs {
        // A pinned slider stays on its pin line, in either sense.
        if let Some(p) = pin
            && p != (dr, dc)
            && p != (-dr, -dc)
        {
            continue;
        }
        for i in 1..8i8 {
            let Some(dest) = from.offset(dr * i, dc * i) else {
                break;
            };
            match state.piece_at(dest) {
                None => moves.push(Move::new(from, dest, state.board())),
                Some(target) if !target.is(us) => {
                    moves.push(Move::new(from, dest, state.board()));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
