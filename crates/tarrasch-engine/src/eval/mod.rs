//! Static evaluation: material plus piece-square bonuses.

mod pst;

use tarrasch_core::{Color, Coord, GameState, PieceKind};

/// Checkmate score magnitude, also the initial alpha/beta bounds.
pub const MATE: f32 = 10_000.0;

/// Base material value of a piece kind, in pawns.
pub(crate) fn material(kind: PieceKind) -> f32 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

/// Score the position from White's perspective: positive favors White.
///
/// Terminal flags (as refreshed by the last legal-move query) override the
/// material count: mate scores `±MATE` against the side to move, stalemates
/// and draws score zero.
pub fn evaluate(state: &GameState) -> f32 {
    if state.is_checkmate() {
        return match state.side_to_move() {
            Color::White => -MATE,
            Color::Black => MATE,
        };
    }
    if state.is_stalemate() || state.is_draw() {
        return 0.0;
    }

    let mut score = 0.0;
    for row in 0..8 {
        for col in 0..8 {
            let sq = Coord::new(row, col);
            let Some(piece) = state.piece_at(sq) else {
                continue;
            };
            let value = material(piece.kind) + pst::bonus(piece.kind, piece.color, sq);
            match piece.color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use tarrasch_core::{Color, Coord, GameState, Move, Piece, PieceKind};

    use super::{MATE, evaluate};

    fn sq(name: &str) -> Coord {
        Coord::from_algebraic(name).unwrap()
    }

    fn piece(color: Color, kind: PieceKind) -> Piece {
        Piece::new(color, kind)
    }

    fn play(state: &mut GameState, from: &str, to: &str) {
        let mv = Move::new(sq(from), sq(to), state.board());
        state.make(mv);
    }

    #[test]
    fn starting_position_is_balanced() {
        let state = GameState::new();
        assert_eq!(evaluate(&state), 0.0);
    }

    #[test]
    fn winning_a_pawn_shifts_the_score() {
        // 1.e4 d5 2.exd5 — White is a pawn up.
        let mut state = GameState::new();
        play(&mut state, "e2", "e4");
        play(&mut state, "d7", "d5");
        play(&mut state, "e4", "d5");
        assert!(evaluate(&state) > 0.5);
    }

    #[test]
    fn mirrored_positions_score_opposite() {
        let state = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::White, PieceKind::Rook), sq("d4")),
                (piece(Color::White, PieceKind::Pawn), sq("b3")),
                (piece(Color::Black, PieceKind::King), sq("e8")),
                (piece(Color::Black, PieceKind::Knight), sq("g6")),
            ],
            Color::White,
        )
        .unwrap();
        // Same pieces reflected through the board's horizontal midline with
        // the colors swapped.
        let mirrored = GameState::from_pieces(
            &[
                (piece(Color::Black, PieceKind::King), sq("e8")),
                (piece(Color::Black, PieceKind::Rook), sq("d5")),
                (piece(Color::Black, PieceKind::Pawn), sq("b6")),
                (piece(Color::White, PieceKind::King), sq("e1")),
                (piece(Color::White, PieceKind::Knight), sq("g3")),
            ],
            Color::Black,
        )
        .unwrap();
        let a = evaluate(&state);
        let b = evaluate(&mirrored);
        assert!(
            (a + b).abs() < 1e-6,
            "expected opposite scores, got {a} and {b}"
        );
    }

    #[test]
    fn checkmate_scores_mate_against_the_loser() {
        let mut state = GameState::new();
        play(&mut state, "f2", "f3");
        play(&mut state, "e7", "e5");
        play(&mut state, "g2", "g4");
        play(&mut state, "d8", "h4");
        let _ = state.legal_moves();
        assert!(state.is_checkmate());
        // White to move and mated: the position is lost for White.
        assert_eq!(evaluate(&state), -MATE);
    }

    #[test]
    fn stalemate_scores_zero() {
        let mut state = GameState::from_pieces(
            &[
                (piece(Color::White, PieceKind::King), sq("a1")),
                (piece(Color::Black, PieceKind::King), sq("c2")),
                (piece(Color::Black, PieceKind::Queen), sq("b3")),
            ],
            Color::White,
        )
        .unwrap();
        let _ = state.legal_moves();
        assert!(state.is_stalemate());
        assert_eq!(evaluate(&state), 0.0);
    }
}
