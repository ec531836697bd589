//! Applying and reversing moves.

use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, Promotion};
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::state::GameState;

impl GameState {
    /// Apply a move, trusting it came from the most recent legal-move list.
    ///
    /// Promotions use the choice recorded on the move (the engine default is
    /// a queen). Use [`make_with`](GameState::make_with) to let a human pick.
    pub fn make(&mut self, mv: Move) {
        self.apply(mv);
    }

    /// Apply a move, resolving a promotion through `choose`.
    ///
    /// `choose` is called until it returns a letter in `Q`/`N`/`B`/`R`
    /// (case-insensitive); the resolved choice replaces the move's default
    /// before it is applied and logged. Non-promotion moves never invoke the
    /// callback.
    pub fn make_with(&mut self, mv: Move, mut choose: impl FnMut() -> char) {
        let mv = if mv.is_promotion() {
            let choice = loop {
                if let Some(promo) = Promotion::from_letter(choose()) {
                    break promo;
                }
            };
            mv.with_promotion(choice)
        } else {
            mv
        };
        self.apply(mv);
    }

    fn apply(&mut self, mv: Move) {
        let us = mv.piece_moved().color;
        let start = mv.start();
        let end = mv.end();

        self.board[start.row()][start.col()] = None;
        self.board[end.row()][end.col()] = Some(mv.piece_moved());

        if let Some(promo) = mv.promotion() {
            self.board[end.row()][end.col()] = Some(Piece::new(us, promo.kind()));
        }

        if mv.is_en_passant() {
            // The captured pawn sits beside the start square, not on the
            // destination.
            self.board[start.row()][end.col()] = None;
        }

        // A double pawn push opens the skipped square to en passant for one
        // ply; any other move clears it.
        if mv.piece_moved().kind == PieceKind::Pawn && start.row().abs_diff(end.row()) == 2 {
            self.ep_target = Some(Coord::new((start.row() + end.row()) / 2, start.col()));
        } else {
            self.ep_target = None;
        }

        if mv.is_castle() {
            if end.col() == start.col() + 2 {
                // Kingside: rook hops from the corner to the king's left.
                self.board[end.row()][end.col() - 1] =
                    self.board[end.row()][end.col() + 1].take();
            } else {
                // Queenside: rook hops from the far corner to the king's right.
                self.board[end.row()][end.col() + 1] =
                    self.board[end.row()][end.col() - 2].take();
            }
        }

        self.ep_target_log.push(self.ep_target);

        self.update_castle_rights(&mv);
        self.castle_rights_log.push(self.castle_rights);

        if mv.piece_moved().kind == PieceKind::King {
            self.set_king_coord(us, end);
        }

        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.flip();

        // Quiet-ply counters belong to the side that just moved: captures
        // reset, anything else counts toward the fifty-move rule.
        let counter = match us {
            Color::White => &mut self.quiet_white,
            Color::Black => &mut self.quiet_black,
        };
        if mv.is_capture() {
            *counter = 0;
        } else {
            *counter += 1;
        }
        self.quiet_log.push((self.quiet_white, self.quiet_black));
    }

    /// Undo the most recent move; a no-op on an empty log.
    pub fn undo(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let us = mv.piece_moved().color;
        let start = mv.start();
        let end = mv.end();

        self.board[start.row()][start.col()] = Some(mv.piece_moved());
        self.board[end.row()][end.col()] = mv.piece_captured();

        if mv.is_en_passant() {
            self.board[end.row()][end.col()] = None;
            self.board[start.row()][end.col()] = mv.piece_captured();
        }

        self.ep_target_log.pop();
        self.ep_target = *self
            .ep_target_log
            .last()
            .expect("en passant log always retains the initial entry");

        self.castle_rights_log.pop();
        self.castle_rights = *self
            .castle_rights_log
            .last()
            .expect("castle rights log always retains the initial entry");

        if mv.is_castle() {
            if end.col() == start.col() + 2 {
                self.board[end.row()][end.col() + 1] =
                    self.board[end.row()][end.col() - 1].take();
            } else {
                self.board[end.row()][end.col() - 2] =
                    self.board[end.row()][end.col() + 1].take();
            }
        }

        if mv.piece_moved().kind == PieceKind::King {
            self.set_king_coord(us, start);
        }

        self.side_to_move = self.side_to_move.flip();
        self.checkmate = false;
        self.stalemate = false;
        self.draw = false;

        self.quiet_log.pop();
        let (white, black) = *self
            .quiet_log
            .last()
            .expect("quiet counter log always retains the initial entry");
        self.quiet_white = white;
        self.quiet_black = black;
    }

    /// Revoke castling rights affected by `mv`: any king move, a rook moving
    /// off its home corner, or a rook captured on its home corner.
    fn update_castle_rights(&mut self, mv: &Move) {
        let moved = mv.piece_moved();
        if moved.kind == PieceKind::King {
            self.castle_rights = self.castle_rights.remove_color(moved.color);
        } else if moved.kind == PieceKind::Rook && mv.start().row() == moved.color.home_row() {
            if mv.start().col() == 0 {
                self.castle_rights = self
                    .castle_rights
                    .remove(queen_side_flag(moved.color));
            } else if mv.start().col() == 7 {
                self.castle_rights = self.castle_rights.remove(king_side_flag(moved.color));
            }
        }

        if let Some(captured) = mv.piece_captured()
            && captured.kind == PieceKind::Rook
            && mv.end().row() == captured.color.home_row()
        {
            if mv.end().col() == 0 {
                self.castle_rights = self
                    .castle_rights
                    .remove(queen_side_flag(captured.color));
            } else if mv.end().col() == 7 {
                self.castle_rights = self.castle_rights.remove(king_side_flag(captured.color));
            }
        }
    }
}

fn king_side_flag(color: Color) -> CastleRights {
    match color {
        Color::White => CastleRights::WHITE_KING,
        Color::Black => CastleRights::BLACK_KING,
    }
}

fn queen_side_flag(color: Color) -> CastleRights {
    match color {
        Color::White => CastleRights::WHITE_QUEEN,
        Color::Black => CastleRights::BLACK_QUEEN,
    }
}
