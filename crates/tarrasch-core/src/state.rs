//! The game state: board, side to move, logs, and terminal flags.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::StateError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::scan::scan_pins_checks;

/// The 8x8 piece grid. Row 0 is Black's back rank, row 7 is White's.
pub type Board = [[Option<Piece>; 8]; 8];

/// Complete game state, including everything needed to undo any move.
///
/// The per-ply logs (`castle_rights_log`, `ep_target_log`, `quiet_log`) are
/// always one entry longer than `move_log`; index 0 describes the initial
/// position. All operations on one state must be serialized by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) move_log: Vec<Move>,
    pub(crate) white_king: Coord,
    pub(crate) black_king: Coord,
    pub(crate) castle_rights: CastleRights,
    pub(crate) castle_rights_log: Vec<CastleRights>,
    pub(crate) ep_target: Option<Coord>,
    pub(crate) ep_target_log: Vec<Option<Coord>>,
    /// Consecutive non-capturing plies by each side, for the fifty-move rule.
    pub(crate) quiet_white: u16,
    pub(crate) quiet_black: u16,
    pub(crate) quiet_log: Vec<(u16, u16)>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) draw: bool,
}

impl GameState {
    /// The standard initial position, White to move.
    pub fn new() -> GameState {
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board: Board = [[None; 8]; 8];
        for (col, &kind) in back.iter().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, kind));
            board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[7][col] = Some(Piece::new(Color::White, kind));
        }

        GameState {
            board,
            side_to_move: Color::White,
            move_log: Vec::new(),
            white_king: Coord::new(7, 4),
            black_king: Coord::new(0, 4),
            castle_rights: CastleRights::ALL,
            castle_rights_log: vec![CastleRights::ALL],
            ep_target: None,
            ep_target_log: vec![None],
            quiet_white: 0,
            quiet_black: 0,
            quiet_log: vec![(0, 0)],
            checkmate: false,
            stalemate: false,
            draw: false,
        }
    }

    /// Build a state from an explicit piece placement, for analysis of
    /// arbitrary positions.
    ///
    /// Castling rights start empty and the en passant target clear; both can
    /// only arise from played moves. Placements without exactly one king per
    /// side are rejected.
    pub fn from_pieces(
        pieces: &[(Piece, Coord)],
        side_to_move: Color,
    ) -> Result<GameState, StateError> {
        let mut board: Board = [[None; 8]; 8];
        for &(piece, sq) in pieces {
            board[sq.row()][sq.col()] = Some(piece);
        }

        let mut state = GameState {
            board,
            side_to_move,
            move_log: Vec::new(),
            // Placeholder caches, fixed up below once validated.
            white_king: Coord::new(0, 0),
            black_king: Coord::new(0, 0),
            castle_rights: CastleRights::NONE,
            castle_rights_log: vec![CastleRights::NONE],
            ep_target: None,
            ep_target_log: vec![None],
            quiet_white: 0,
            quiet_black: 0,
            quiet_log: vec![(0, 0)],
            checkmate: false,
            stalemate: false,
            draw: false,
        };

        for color in Color::ALL {
            let king = state.find_king(color)?;
            state.set_king_coord(color, king);
        }
        Ok(state)
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Coord) -> Option<Piece> {
        self.board[sq.row()][sq.col()]
    }

    /// The full board grid.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Cached location of the given side's king.
    #[inline]
    pub fn king_coord(&self, color: Color) -> Coord {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[inline]
    pub(crate) fn set_king_coord(&mut self, color: Color, sq: Coord) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Current castling rights.
    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// The square a pawn just skipped, capturable en passant this ply only.
    #[inline]
    pub fn ep_target(&self) -> Option<Coord> {
        self.ep_target
    }

    /// All applied moves, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Return `true` if the last legal-move query found mate.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Return `true` if the last legal-move query found stalemate.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Return `true` if the last legal-move query found a draw.
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// Return `true` if the side to move is currently in check.
    pub fn in_check(&self) -> bool {
        scan_pins_checks(self, self.side_to_move).in_check
    }

    /// Locate the sole king of `color` on the board.
    fn find_king(&self, color: Color) -> Result<Coord, StateError> {
        let mut found = None;
        let mut count = 0;
        for row in 0..8 {
            for col in 0..8 {
                if let Some(p) = self.board[row][col]
                    && p.kind == PieceKind::King
                    && p.is(color)
                {
                    found = Some(Coord::new(row, col));
                    count += 1;
                }
            }
        }
        match (found, count) {
            (Some(sq), 1) => Ok(sq),
            _ => Err(StateError::InvalidKingCount {
                color: color_name(color),
                count,
            }),
        }
    }

    /// Check the structural invariants: one king per side with a matching
    /// cache, and per-ply logs one entry longer than the move log.
    pub fn validate(&self) -> Result<(), StateError> {
        for color in Color::ALL {
            let actual = self.find_king(color)?;
            let cached = self.king_coord(color);
            if cached != actual {
                return Err(StateError::StaleKingCache {
                    color: color_name(color),
                    cached,
                    actual,
                });
            }
        }

        let expected = self.move_log.len() + 1;
        for (name, len) in [
            ("castle rights", self.castle_rights_log.len()),
            ("en passant", self.ep_target_log.len()),
            ("quiet counter", self.quiet_log.len()),
        ] {
            if len != expected {
                return Err(StateError::LogLengthMismatch {
                    log: name,
                    len,
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for the board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Wrapper for printing the board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a GameState);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8 {
                let c = match self.0.board[row][col] {
                    Some(piece) => piece.display_char(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
