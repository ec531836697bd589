//! Pin and check detection by scanning outward from the king.
//!
//! One pass over the eight sliding rays plus the knight jumps classifies the
//! position before any moves are generated: which friendly pieces are
//! absolutely pinned (and along which line), and which enemy pieces give
//! check. Generators consult the resulting report instead of trying moves
//! and testing the king afterwards.

use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;
use crate::state::GameState;

/// The eight ray directions: indices 0-3 orthogonal, 4-7 diagonal.
pub(crate) const RAY_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The eight knight jump offsets.
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A pinned piece or a checking piece, with the direction of the line from
/// the king through (or to) it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    /// The square of the pinned friendly piece, or of the checker.
    pub square: Coord,
    /// (row, col) step from the king along the line.
    pub dir: (i8, i8),
}

/// Result of a pin/check scan for one side.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Whether that side's king is attacked.
    pub in_check: bool,
    /// Absolutely pinned friendly pieces.
    pub pins: Vec<Ray>,
    /// Enemy pieces delivering check.
    pub checks: Vec<Ray>,
}

impl ScanReport {
    /// The pin line through the piece on `sq`, if it is pinned.
    pub fn pin_on(&self, sq: Coord) -> Option<(i8, i8)> {
        self.pins.iter().find(|p| p.square == sq).map(|p| p.dir)
    }
}

/// Whether a pawn of `color` on a ray with direction index `j` (from the
/// defender's king outward) attacks the king one square away.
#[inline]
fn pawn_attacks_along(color: Color, j: usize) -> bool {
    // White pawns attack toward row 0, so they check from below the king
    // (directions (1, -1) and (1, 1)); black pawns from above.
    match color {
        Color::White => j == 6 || j == 7,
        Color::Black => j == 4 || j == 5,
    }
}

/// Scan from `side`'s king for checks and absolute pins.
pub fn scan_pins_checks(state: &GameState, side: Color) -> ScanReport {
    let king = state.king_coord(side);
    let them = side.flip();
    let mut report = ScanReport::default();

    for (j, &(dr, dc)) in RAY_DIRS.iter().enumerate() {
        let orthogonal = j < 4;
        let mut possible_pin: Option<Ray> = None;

        for i in 1..8i8 {
            let Some(sq) = king.offset(dr * i, dc * i) else {
                break;
            };
            let Some(piece) = state.piece_at(sq) else {
                continue;
            };

            if piece.is(side) {
                // The scanning king itself is transparent so that trial king
                // destinations behind it along a check ray are still seen as
                // attacked.
                if piece.kind == PieceKind::King {
                    continue;
                }
                if possible_pin.is_none() {
                    possible_pin = Some(Ray {
                        square: sq,
                        dir: (dr, dc),
                    });
                    continue;
                }
                // Second friendly piece: nothing on this ray.
                break;
            }

            let attacks = match piece.kind {
                PieceKind::Rook => orthogonal,
                PieceKind::Bishop => !orthogonal,
                PieceKind::Queen => true,
                PieceKind::Pawn => i == 1 && pawn_attacks_along(them, j),
                PieceKind::King => i == 1,
                PieceKind::Knight => false,
            };
            if attacks {
                match possible_pin {
                    None => {
                        report.in_check = true;
                        report.checks.push(Ray {
                            square: sq,
                            dir: (dr, dc),
                        });
                    }
                    Some(pin) => report.pins.push(pin),
                }
            }
            break;
        }
    }

    for &(dr, dc) in &KNIGHT_JUMPS {
        if let Some(sq) = king.offset(dr, dc)
            && let Some(piece) = state.piece_at(sq)
            && piece.is(them)
            && piece.kind == PieceKind::Knight
        {
            report.in_check = true;
            report.checks.push(Ray {
                square: sq,
                dir: (dr, dc),
            });
        }
    }

    report
}

/// Return `true` if `by` attacks `sq`.
///
/// `transparent` is a square treated as empty during ray walks. The king
/// generator passes the king's current square so that a trial destination
/// directly behind the king on a checker's ray is still reported attacked.
pub(crate) fn square_attacked(
    state: &GameState,
    sq: Coord,
    by: Color,
    transparent: Option<Coord>,
) -> bool {
    for (j, &(dr, dc)) in RAY_DIRS.iter().enumerate() {
        let orthogonal = j < 4;
        for i in 1..8i8 {
            let Some(cur) = sq.offset(dr * i, dc * i) else {
                break;
            };
            if Some(cur) == transparent {
                continue;
            }
            let Some(piece) = state.piece_at(cur) else {
                continue;
            };
            if piece.is(by) {
                let attacks = match piece.kind {
                    PieceKind::Rook => orthogonal,
                    PieceKind::Bishop => !orthogonal,
                    PieceKind::Queen => true,
                    PieceKind::Pawn => i == 1 && pawn_attacks_along(by, j),
                    PieceKind::King => i == 1,
                    PieceKind::Knight => false,
                };
                if attacks {
                    return true;
                }
            }
            break;
        }
    }

    for &(dr, dc) in &KNIGHT_JUMPS {
        if let Some(cur) = sq.offset(dr, dc)
            && let Some(piece) = state.piece_at(cur)
            && piece.is(by)
            && piece.kind == PieceKind::Knight
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{scan_pins_checks, square_attacked};
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::state::GameState;

    fn sq(name: &str) -> Coord {
        Coord::from_algebraic(name).unwrap()
    }

    fn piece(color: Color, kind: PieceKind) -> Piece {
        Piece::new(color, kind)
    }

    #[test]
    fn quiet_start_has_no_pins_or_checks() {
        let state = GameState::new();
        let report = scan_pins_checks(&state, Color::White);
        assert!(!report.in_check);
        assert!(report.pins.is_empty());
        assert!(report.checks.is_empty());
    }

    #[test]
    fn rook_check_reports_direction() {
        // White Ke1, black Re8: check straight down the e-file.
        let state = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Rook), sq("e8")),
            ],
            Color::White,
        )
        .unwrap();
        let report = scan_pins_checks(&state, Color::White);
        assert!(report.in_check);
        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].square, sq("e8"));
        assert_eq!(report.checks[0].dir, (-1, 0));
        assert!(report.pins.is_empty());
    }

    #[test]
    fn blocker_becomes_a_pin() {
        // White Ke1, white Ne4, black Re8: the knight is pinned on the file.
        let state = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::White, PieceKind::Knight), sq("e4")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Rook), sq("e8")),
            ],
            Color::White,
        )
        .unwrap();
        let report = scan_pins_checks(&state, Color::White);
        assert!(!report.in_check);
        assert_eq!(report.pins.len(), 1);
        assert_eq!(report.pins[0].square, sq("e4"));
        assert_eq!(report.pins[0].dir, (-1, 0));
        assert_eq!(report.pin_on(sq("e4")), Some((-1, 0)));
        assert_eq!(report.pin_on(sq("e5")), None);
    }

    #[test]
    fn two_blockers_are_no_pin() {
        let state = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::White, PieceKind::Knight), sq("e4")),
                (piece(Color::White, PieceKind::Bishop), sq("e6")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Rook), sq("e8")),
            ],
            Color::White,
        )
        .unwrap();
        let report = scan_pins_checks(&state, Color::White);
        assert!(!report.in_check);
        assert!(report.pins.is_empty());
    }

    #[test]
    fn bishop_only_checks_diagonally() {
        // Bishop on the same file is no check; bishop on the diagonal is.
        let on_file = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Bishop), sq("e8")),
            ],
            Color::White,
        )
        .unwrap();
        assert!(!scan_pins_checks(&on_file, Color::White).in_check);

        let on_diag = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Bishop), sq("a5")),
            ],
            Color::White,
        )
        .unwrap();
        assert!(scan_pins_checks(&on_diag, Color::White).in_check);
    }

    #[test]
    fn pawn_checks_only_from_its_attacking_side() {
        // A black pawn on d2 attacks e1; a black pawn on e2 does not.
        let attacking = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Pawn), sq("d2")),
            ],
            Color::White,
        )
        .unwrap();
        assert!(scan_pins_checks(&attacking, Color::White).in_check);

        let blocking = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Pawn), sq("e2")),
            ],
            Color::White,
        )
        .unwrap();
        assert!(!scan_pins_checks(&blocking, Color::White).in_check);
    }

    #[test]
    fn knight_check_is_found_after_rays() {
        let state = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Knight), sq("f3")),
            ],
            Color::White,
        )
        .unwrap();
        let report = scan_pins_checks(&state, Color::White);
        assert!(report.in_check);
        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].square, sq("f3"));
    }

    #[test]
    fn double_check_collects_both_checkers() {
        let state = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Rook), sq("e8")),
                (piece(Color::Black, PieceKind::Knight), sq("f3")),
            ],
            Color::White,
        )
        .unwrap();
        let report = scan_pins_checks(&state, Color::White);
        assert!(report.in_check);
        assert_eq!(report.checks.len(), 2);
    }

    #[test]
    fn square_attacked_basics() {
        let state = GameState::new();
        // f3 is covered by the g1 knight and the e2/g2 pawns.
        assert!(square_attacked(&state, sq("f3"), Color::White, None));
        // e4 is attacked by neither side at the start.
        assert!(!square_attacked(&state, sq("e4"), Color::White, None));
        assert!(!square_attacked(&state, sq("e4"), Color::Black, None));
    }

    #[test]
    fn square_attacked_transparency() {
        // Black Ra1, white Ke1: with the king transparent, the rook's attack
        // extends through e1 to f1; without, e1 blocks it.
        let state = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::Black, PieceKind::King), sq("a8")),
                (piece(Color::Black, PieceKind::Rook), sq("a1")),
            ],
            Color::White,
        )
        .unwrap();
        assert!(!square_attacked(&state, sq("f1"), Color::Black, None));
        assert!(square_attacked(
            &state,
            sq("f1"),
            Color::Black,
            Some(sq("e1"))
        ));
    }
}
