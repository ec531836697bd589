//! Legal move generation.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::debug;

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;
use crate::scan::{Ray, ScanReport, scan_pins_checks, square_attacked};
use crate::state::GameState;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

impl GameState {
    /// All legal moves for the side to move.
    ///
    /// Also refreshes the terminal flags: `checkmate` or `stalemate` when
    /// the list is empty, and `draw` on move-cycle repetition or when either
    /// side's quiet-ply counter reaches fifty.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let us = self.side_to_move;
        let report = scan_pins_checks(self, us);
        let king = self.king_coord(us);

        let mut moves;
        if report.in_check {
            if report.checks.len() >= 2 {
                // Double check: nothing but the king can resolve it.
                moves = Vec::new();
                gen_king(self, king, &mut moves);
            } else {
                moves = generate_all(self, &report);
                let allowed = check_resolution_squares(self, king, &report.checks[0]);
                moves.retain(|m| {
                    m.piece_moved().kind == PieceKind::King || allowed.contains(&m.end())
                });
            }
        } else {
            moves = generate_all(self, &report);
            self.castle_moves(king, &mut moves);
        }

        if moves.is_empty() {
            if report.in_check {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
            debug!(
                side = %us,
                checkmate = self.checkmate,
                stalemate = self.stalemate,
                "no legal moves"
            );
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        // A move repeated at a four-ply cycle, twice over, counts as a draw.
        let log = &self.move_log;
        if log.len() >= 8 {
            for i in 0..log.len() - 8 {
                if log[i] == log[i + 4] && log[i] == log[i + 8] {
                    self.draw = true;
                    break;
                }
            }
        }

        if self.quiet_white >= 50 || self.quiet_black >= 50 {
            self.draw = true;
        }

        moves
    }

    /// Append castling moves for a king standing on `king`. Only called when
    /// the king is not in check.
    fn castle_moves(&self, king: Coord, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let them = us.flip();

        if self.castle_rights.has(us, CastleSide::KingSide)
            && let (Some(pass), Some(dest)) = (king.offset(0, 1), king.offset(0, 2))
            && self.piece_at(pass).is_none()
            && self.piece_at(dest).is_none()
            && !square_attacked(self, pass, them, None)
            && !square_attacked(self, dest, them, None)
        {
            moves.push(Move::new_castle(king, dest, self.board()));
        }

        if self.castle_rights.has(us, CastleSide::QueenSide)
            && let (Some(pass), Some(dest), Some(rook_path)) =
                (king.offset(0, -1), king.offset(0, -2), king.offset(0, -3))
            && self.piece_at(pass).is_none()
            && self.piece_at(dest).is_none()
            && self.piece_at(rook_path).is_none()
            && !square_attacked(self, pass, them, None)
            && !square_attacked(self, dest, them, None)
        {
            moves.push(Move::new_castle(king, dest, self.board()));
        }
    }
}

/// Generate every piece move consistent with the pin report (legal except
/// for the single-check destination restriction applied by the caller).
fn generate_all(state: &GameState, report: &ScanReport) -> Vec<Move> {
    let us = state.side_to_move();
    let mut moves = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let sq = Coord::new(row, col);
            let Some(piece) = state.piece_at(sq) else {
                continue;
            };
            if !piece.is(us) {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => gen_pawn(state, report, sq, &mut moves),
                PieceKind::Knight => gen_knight(state, report, sq, &mut moves),
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    gen_slider(state, report, sq, piece.kind, &mut moves);
                }
                PieceKind::King => gen_king(state, sq, &mut moves),
            }
        }
    }
    moves
}

/// Squares a non-king move may land on to resolve a single check: just the
/// checker for a knight, otherwise the ray from the king up to and including
/// the checker.
fn check_resolution_squares(state: &GameState, king: Coord, check: &Ray) -> Vec<Coord> {
    if state.piece_at(check.square).map(|p| p.kind) == Some(PieceKind::Knight) {
        return vec![check.square];
    }

    let (dr, dc) = check.dir;
    let mut squares = Vec::new();
    for i in 1..8i8 {
        let Some(sq) = king.offset(dr * i, dc * i) else {
            break;
        };
        squares.push(sq);
        if sq == check.square {
            break;
        }
    }
    squares
}
