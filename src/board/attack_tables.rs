use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (2, -1),
    (2, 1),
    (1, 2),
    (1, -2),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = KING_DELTAS;

fn step_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect()
    })
}

/// On-board knight destinations per square, in `KNIGHT_DELTAS` order.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(&KNIGHT_DELTAS));

/// On-board king steps per square, in `KING_DELTAS` order.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| step_targets(&KING_DELTAS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_and_center_counts() {
        let a8 = Square::new(0, 0).unwrap();
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(KNIGHT_TARGETS[a8.index()].len(), 2);
        assert_eq!(KNIGHT_TARGETS[d4.index()].len(), 8);
        assert_eq!(KING_TARGETS[a8.index()].len(), 3);
        assert_eq!(KING_TARGETS[d4.index()].len(), 8);
    }
}
