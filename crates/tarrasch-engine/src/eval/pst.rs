//! Piece-square tables for the five non-king piece kinds.
//!
//! Tables are written from White's perspective, indexed `[row][col]` with
//! row 0 = Black's back rank (so a White pawn's values grow as it climbs
//! toward row 0). Black uses the same tables mirrored vertically through
//! [`bonus`]. The king carries no positional term.

use tarrasch_core::{Color, Coord, PieceKind};

#[rustfmt::skip]
const PAWN_PST: [[f32; 8]; 8] = [
    [0.8,  0.8,  0.8,  0.8,  0.8,  0.8,  0.8,  0.8],
    [0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7],
    [0.3,  0.3,  0.4,  0.5,  0.5,  0.4,  0.3,  0.3],
    [0.25, 0.25, 0.3,  0.45, 0.45, 0.3,  0.25, 0.25],
    [0.2,  0.2,  0.2,  0.4,  0.4,  0.2,  0.2,  0.2],
    [0.25, 0.15, 0.1,  0.2,  0.2,  0.1,  0.15, 0.25],
    [0.25, 0.3,  0.3,  0.0,  0.0,  0.3,  0.3,  0.25],
    [0.2,  0.2,  0.2,  0.2,  0.2,  0.2,  0.2,  0.2],
];

#[rustfmt::skip]
const KNIGHT_PST: [[f32; 8]; 8] = [
    [0.0, 0.1,  0.2,  0.2,  0.2,  0.2,  0.1,  0.0],
    [0.1, 0.3,  0.5,  0.5,  0.5,  0.5,  0.3,  0.1],
    [0.2, 0.5,  0.6,  0.65, 0.65, 0.6,  0.5,  0.2],
    [0.2, 0.55, 0.65, 0.7,  0.7,  0.65, 0.55, 0.2],
    [0.2, 0.5,  0.65, 0.7,  0.7,  0.65, 0.5,  0.2],
    [0.2, 0.55, 0.6,  0.65, 0.65, 0.6,  0.55, 0.2],
    [0.1, 0.3,  0.5,  0.55, 0.55, 0.5,  0.3,  0.1],
    [0.0, 0.1,  0.2,  0.2,  0.2,  0.2,  0.1,  0.0],
];

#[rustfmt::skip]
const BISHOP_PST: [[f32; 8]; 8] = [
    [0.0, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.0],
    [0.2, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.2],
    [0.2, 0.4, 0.5, 0.6, 0.6, 0.5, 0.4, 0.2],
    [0.2, 0.5, 0.5, 0.6, 0.6, 0.5, 0.5, 0.2],
    [0.2, 0.4, 0.6, 0.6, 0.6, 0.6, 0.4, 0.2],
    [0.2, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.2],
    [0.2, 0.5, 0.4, 0.4, 0.4, 0.4, 0.5, 0.2],
    [0.0, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.0],
];

#[rustfmt::skip]
const ROOK_PST: [[f32; 8]; 8] = [
    [0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.25],
    [0.5,  0.75, 0.75, 0.75, 0.75, 0.75, 0.75, 0.5],
    [0.0,  0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.0],
    [0.0,  0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.0],
    [0.0,  0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.0],
    [0.0,  0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.0],
    [0.0,  0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.0],
    [0.25, 0.25, 0.25, 0.5,  0.5,  0.25, 0.25, 0.25],
];

#[rustfmt::skip]
const QUEEN_PST: [[f32; 8]; 8] = [
    [0.0, 0.2, 0.2, 0.3, 0.3, 0.2, 0.2, 0.0],
    [0.2, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.2],
    [0.2, 0.4, 0.5, 0.5, 0.5, 0.5, 0.4, 0.2],
    [0.3, 0.4, 0.5, 0.5, 0.5, 0.5, 0.4, 0.3],
    [0.4, 0.4, 0.5, 0.5, 0.5, 0.5, 0.4, 0.3],
    [0.2, 0.5, 0.5, 0.5, 0.5, 0.5, 0.4, 0.2],
    [0.2, 0.4, 0.5, 0.4, 0.4, 0.4, 0.4, 0.2],
    [0.0, 0.2, 0.2, 0.3, 0.3, 0.2, 0.2, 0.0],
];

/// Positional bonus for a piece of `kind` and `color` on `sq`.
///
/// Black looks the tables up through a vertical mirror, so each side scores
/// higher on its own advanced ranks. Kings always return zero.
pub(crate) fn bonus(kind: PieceKind, color: Color, sq: Coord) -> f32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_PST,
        PieceKind::Knight => &KNIGHT_PST,
        PieceKind::Bishop => &BISHOP_PST,
        PieceKind::Rook => &ROOK_PST,
        PieceKind::Queen => &QUEEN_PST,
        PieceKind::King => return 0.0,
    };
    let row = match color {
        Color::White => sq.row(),
        Color::Black => 7 - sq.row(),
    };
    table[row][sq.col()]
}

#[cfg(test)]
mod tests {
    use tarrasch_core::{Color, Coord, PieceKind};

    use super::bonus;

    #[test]
    fn king_has_no_positional_term() {
        for row in 0..8 {
            for col in 0..8 {
                for color in Color::ALL {
                    assert_eq!(bonus(PieceKind::King, color, Coord::new(row, col)), 0.0);
                }
            }
        }
    }

    #[test]
    fn black_mirrors_white_vertically() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ] {
            for row in 0..8 {
                for col in 0..8 {
                    assert_eq!(
                        bonus(kind, Color::White, Coord::new(row, col)),
                        bonus(kind, Color::Black, Coord::new(7 - row, col)),
                        "mirror mismatch for {kind:?} at ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn advanced_pawns_score_higher() {
        // A white pawn one step from promotion beats one on its start row.
        let near_promotion = bonus(PieceKind::Pawn, Color::White, Coord::new(1, 4));
        let at_home = bonus(PieceKind::Pawn, Color::White, Coord::new(6, 4));
        assert!(near_promotion > at_home);
    }

    #[test]
    fn knights_prefer_the_center() {
        let center = bonus(PieceKind::Knight, Color::White, Coord::new(3, 3));
        let corner = bonus(PieceKind::Knight, Color::White, Coord::new(0, 0));
        assert!(center > corner);
        assert_eq!(corner, 0.0);
    }
}
