use crate::chess::{Move, Promotion, Square};

/// The moves in `moves` that start from `square`, in their original order.
pub fn moves_from(moves: &[Move], square: Option<Square>) -> Vec<Move> {
    match square {
        None => Vec::new(),
        Some(s) => moves.iter().filter(|m| m.whence() == s).copied().collect(),
    }
}

/// Whether any of `moves` lands on `square`.
pub fn is_legal_destination(moves: &[Move], square: Square) -> bool {
    moves.iter().any(|m| m.whither() == square)
}

/// The move in `moves` from `whence` to `whither`.
///
/// A pawn reaching the last rank has one move per promotion, in which case
/// the queen promotion is chosen.
pub fn find_move(moves: &[Move], whence: Square, whither: Square) -> Option<Move> {
    let mut candidates = moves.iter().filter(|m| m.connects(whence, whither)).copied();
    let first = candidates.next()?;

    match first.promotion() {
        Promotion::None | Promotion::Queen => Some(first),
        _ => Some(candidates.find(|m| m.promotion() == Promotion::Queen).unwrap_or(first)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Position;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn moves_from_nothing_is_empty() {
        assert_eq!(moves_from(&Position::default().moves(), None), vec![]);
    }

    #[test]
    fn pawn_on_e2_can_advance_one_or_two_squares() {
        let moves = moves_from(&Position::default().moves(), Some(sq("e2")));
        let mut moves: Vec<_> = moves.iter().map(Move::to_string).collect();
        moves.sort();
        assert_eq!(moves, ["e2e3", "e2e4"]);
    }

    #[test]
    fn empty_and_opponent_squares_have_no_moves() {
        let moves = Position::default().moves();
        assert_eq!(moves_from(&moves, Some(sq("e4"))), vec![]);
        assert_eq!(moves_from(&moves, Some(sq("e7"))), vec![]);
    }

    #[proptest]
    fn moves_from_preserves_order_and_origin(pos: Position, s: Square) {
        let moves = pos.moves();
        let expected: Vec<_> = moves.iter().filter(|m| m.whence() == s).copied().collect();
        assert_eq!(moves_from(&moves, Some(s)), expected);
    }

    #[proptest]
    fn is_legal_destination_agrees_with_moves_from(pos: Position, a: Square, b: Square) {
        let moves = moves_from(&pos.moves(), Some(a));
        assert_eq!(
            is_legal_destination(&moves, b),
            moves.iter().any(|m| m.connects(a, b))
        );
    }

    #[proptest]
    fn find_move_returns_a_move_connecting_the_squares(pos: Position, a: Square, b: Square) {
        let moves = pos.moves();
        match find_move(&moves, a, b) {
            Some(m) => assert!(moves.contains(&m) && m.connects(a, b)),
            None => assert!(!moves.iter().any(|m| m.connects(a, b))),
        }
    }

    #[test]
    fn find_move_prefers_promoting_to_queen() {
        let pos: Position = "8/4P3/8/8/8/8/k7/4K3 w - - 0 1".parse().unwrap();
        let m = find_move(&pos.moves(), sq("e7"), sq("e8"));
        assert_eq!(m.map(|m| m.to_string()), Some("e7e8q".into()));
    }
}
