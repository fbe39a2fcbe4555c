//! Precomputed per-cell move tables.
//!
//! Slider tables hold, for every cell, one ray per direction listing the
//! reachable cells in order of distance. A ray ends at the board edge; a
//! cell's ray list ends after its last direction. Leaper tables hold the
//! in-board neighbour cells.

use once_cell::sync::Lazy;

/// Rays from one cell, nearest cell first.
pub(crate) type Rays = Vec<Vec<u8>>;

const DIAGONAL_DELTAS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const STRAIGHT_DELTAS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];
const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[inline]
fn offset(sq: usize, dr: isize, df: isize) -> Option<u8> {
    let r = (sq / 8) as isize + dr;
    let f = (sq % 8) as isize + df;
    if (0..8).contains(&r) && (0..8).contains(&f) {
        Some((r * 8 + f) as u8)
    } else {
        None
    }
}

fn build_rays(deltas: &[(isize, isize)]) -> [Rays; 64] {
    std::array::from_fn(|sq| {
        deltas
            .iter()
            .map(|&(dr, df)| {
                let mut ray = Vec::with_capacity(7);
                let mut cur = sq;
                while let Some(next) = offset(cur, dr, df) {
                    ray.push(next);
                    cur = next as usize;
                }
                ray
            })
            .filter(|ray| !ray.is_empty())
            .collect()
    })
}

fn build_leaps(deltas: &[(isize, isize)]) -> [Vec<u8>; 64] {
    std::array::from_fn(|sq| {
        deltas
            .iter()
            .filter_map(|&(dr, df)| offset(sq, dr, df))
            .collect()
    })
}

pub(crate) static DIAGONAL_RAYS: Lazy<[Rays; 64]> = Lazy::new(|| build_rays(&DIAGONAL_DELTAS));

pub(crate) static STRAIGHT_RAYS: Lazy<[Rays; 64]> = Lazy::new(|| build_rays(&STRAIGHT_DELTAS));

pub(crate) static KNIGHT_STEPS: Lazy<[Vec<u8>; 64]> = Lazy::new(|| build_leaps(&KNIGHT_DELTAS));

pub(crate) static KING_STEPS: Lazy<[Vec<u8>; 64]> = Lazy::new(|| build_leaps(&KING_DELTAS));

#[cfg(test)]
mod tests {
    use super::*;

    fn reach(rays: &Rays) -> usize {
        rays.iter().map(Vec::len).sum()
    }

    #[test]
    fn leaper_counts() {
        assert_eq!(KNIGHT_STEPS[0].len(), 2); // a8
        assert_eq!(KNIGHT_STEPS[27].len(), 8); // d5
        assert_eq!(KING_STEPS[63].len(), 3); // h1
        assert_eq!(KING_STEPS[36].len(), 8); // e4
    }

    #[test]
    fn slider_reach() {
        assert_eq!(reach(&STRAIGHT_RAYS[0]), 14);
        assert_eq!(reach(&STRAIGHT_RAYS[36]), 14);
        assert_eq!(reach(&DIAGONAL_RAYS[0]), 7);
        assert_eq!(reach(&DIAGONAL_RAYS[27]), 13);
        // corners only have one diagonal direction
        assert_eq!(DIAGONAL_RAYS[63].len(), 1);
    }

    #[test]
    fn rays_are_ordered_by_distance() {
        // a8 towards h1
        let ray = DIAGONAL_RAYS[0]
            .iter()
            .find(|ray| ray[0] == 9)
            .expect("a8 has a diagonal through b7");
        assert_eq!(ray.as_slice(), &[9, 18, 27, 36, 45, 54, 63]);
    }
}
