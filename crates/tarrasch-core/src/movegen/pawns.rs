//! Pawn move generation.

use crate::chess_move::Move;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;
use crate::scan::ScanReport;
use crate::state::GameState;

pub(super) fn gen_pawn(
    state: &GameState,
    report: &ScanReport,
    from: Coord,
    moves: &mut Vec<Move>,
) {
    let us = state.side_to_move();
    let forward = us.forward();
    let pin = report.pin_on(from);
    let along_pin =
        |d: (i8, i8)| pin.is_none() || pin == Some(d) || pin == Some((-d.0, -d.1));

    // Single and double pushes need empty squares ahead.
    if let Some(one) = from.offset(forward, 0)
        && state.piece_at(one).is_none()
        && along_pin((forward, 0))
    {
        moves.push(Move::new(from, one, state.board()));
        if from.row() == us.pawn_row()
            && let Some(two) = from.offset(2 * forward, 0)
            && state.piece_at(two).is_none()
        {
            moves.push(Move::new(from, two, state.board()));
        }
    }

    // Diagonal captures, including en passant onto the skipped square.
    for dc in [-1i8, 1] {
        let Some(dest) = from.offset(forward, dc) else {
            continue;
        };
        if !along_pin((forward, dc)) {
            continue;
        }
        if let Some(target) = state.piece_at(dest) {
            if !target.is(us) {
                moves.push(Move::new(from, dest, state.board()));
            }
        } else if state.ep_target() == Some(dest) && ep_keeps_king_safe(state, from, dest) {
            moves.push(Move::new_en_passant(from, dest, state.board()));
        }
    }
}

/// Guard against the en passant discovered check: capturing removes two
/// pawns from one rank at once, which can uncover a rook or queen against a
/// king standing on that same rank.
///
/// Walks from the king toward the pawn pair, skipping both pawns; the
/// capture is unsafe iff the first occupied square beyond them holds an
/// enemy rook or queen.
fn ep_keeps_king_safe(state: &GameState, from: Coord, dest: Coord) -> bool {
    let us = state.side_to_move();
    let king = state.king_coord(us);
    if king.row() != from.row() {
        return true;
    }

    let step: i8 = if from.col() > king.col() { 1 } else { -1 };
    let mut sq = king;
    while let Some(next) = sq.offset(0, step) {
        sq = next;
        // Both the capturing pawn and the captured pawn leave this rank.
        if sq.col() == from.col() || sq.col() == dest.col() {
            continue;
        }
        if let Some(piece) = state.piece_at(sq) {
            return piece.is(us)
                || !matches!(piece.kind, PieceKind::Rook | PieceKind::Queen);
        }
    }
    true
}
