//! Data masking and the penalty rules used to pick a mask.

use log::trace;

use crate::format;
use crate::matrix::{ModuleGrid, SymbolMatrix};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// Dark-light runs in a 1:1:3:1:1 ratio with four light modules on one side.
const FINDER_LIKE: [[bool; 11]; 2] = [
    [true, false, true, true, true, false, true, false, false, false, false],
    [false, false, false, false, true, false, true, true, true, false, true],
];

/// A mask pattern (0–7).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Mask(u8);

impl Mask {
    /// Creates a mask object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [0, 7].
    pub const fn new(mask: u8) -> Self {
        assert!(mask <= 7, "Mask value out of range");
        Self(mask)
    }

    /// Returns the value, which is in the range [0, 7].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All eight patterns in order.
    pub fn all() -> impl Iterator<Item = Mask> {
        (0u8..8).map(Mask)
    }

    /// Whether the module at column `x`, row `y` is flipped by this pattern.
    pub fn inverts(self, x: usize, y: usize) -> bool {
        match self.0 {
            0 => (x + y) % 2 == 0,
            1 => y % 2 == 0,
            2 => x % 3 == 0,
            3 => (x + y) % 3 == 0,
            4 => (x / 3 + y / 2) % 2 == 0,
            5 => ((x * y) % 2) + ((x * y) % 3) == 0,
            6 => (((x * y) % 2) + ((x * y) % 3)) % 2 == 0,
            7 => (((x + y) % 2) + ((x * y) % 3)) % 2 == 0,
            _ => unreachable!(),
        }
    }
}

/// One masked candidate and its penalty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MaskTrial {
    pub mask: Mask,
    pub grid: ModuleGrid,
    pub score: u32,
}

/// Returns a copy of the symbol's grid with every unreserved module XORed by `mask`.
pub fn apply_mask(matrix: &SymbolMatrix, mask: Mask) -> ModuleGrid {
    let mut grid = matrix.modules().clone();
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            if !matrix.is_reserved(x, y) && mask.inverts(x, y) {
                grid.toggle(x, y);
            }
        }
    }
    grid
}

/// Masks the symbol and scores the result. With `format_info`, the format bits for the mask
/// are drawn before scoring.
pub fn trial(matrix: &SymbolMatrix, mask: Mask, format_info: bool) -> MaskTrial {
    let mut grid = apply_mask(matrix, mask);
    if format_info {
        format::draw_format_bits(&mut grid, mask);
    }
    let score = penalty_score(&grid);
    trace!("mask trial mask={} score={}", mask.value(), score);
    MaskTrial { mask, grid, score }
}

/// Tries all eight masks and keeps the lowest score. Ties go to the lower mask number.
pub fn choose_mask(matrix: &SymbolMatrix, format_info: bool) -> MaskTrial {
    let mut best: Option<MaskTrial> = None;
    for mask in Mask::all() {
        let candidate = trial(matrix, mask, format_info);
        if best.as_ref().map_or(true, |b| candidate.score < b.score) {
            best = Some(candidate);
        }
    }
    best.unwrap_or_else(|| unreachable!("Mask::all() yields eight masks"))
}

/// Sum of the four penalty rules.
pub fn penalty_score(grid: &ModuleGrid) -> u32 {
    run_penalty(grid) + block_penalty(grid) + finder_like_penalty(grid) + balance_penalty(grid)
}

/// Each row or column run of five or more same-colored modules costs 3, plus 1 per module
/// beyond five.
pub fn run_penalty(grid: &ModuleGrid) -> u32 {
    let mut result: u32 = 0;
    for line in lines(grid) {
        let mut runcolor = false;
        let mut runlen: u32 = 0;
        for module in line {
            if module == runcolor && runlen > 0 {
                runlen += 1;
                if runlen == 5 {
                    result += PENALTY_N1;
                } else if runlen > 5 {
                    result += 1;
                }
            } else {
                runcolor = module;
                runlen = 1;
            }
        }
    }
    result
}

/// Each 2x2 square of one color costs 3. Overlapping squares count separately.
pub fn block_penalty(grid: &ModuleGrid) -> u32 {
    let mut result: u32 = 0;
    let size = grid.size();
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color: bool = grid.get(x, y);
            if color == grid.get(x + 1, y)
                && color == grid.get(x, y + 1)
                && color == grid.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }
    result
}

/// Each 11-module window in a row or column matching a finder-like sequence costs 40.
pub fn finder_like_penalty(grid: &ModuleGrid) -> u32 {
    let mut result: u32 = 0;
    for line in lines(grid) {
        for window in line.windows(11) {
            if FINDER_LIKE.iter().any(|pattern| window == pattern) {
                result += PENALTY_N3;
            }
        }
    }
    result
}

/// Costs 10 for every 5% step the dark-module share sits away from 50%.
pub fn balance_penalty(grid: &ModuleGrid) -> u32 {
    let total = grid.size() * grid.size();
    let percent = grid.dark_count() * 100 / total;
    let prev = percent - percent % 5;
    let next = prev + 5;
    let steps = (prev.abs_diff(50) / 5).min(next.abs_diff(50) / 5);
    steps as u32 * PENALTY_N4
}

/// Every row, then every column, as owned lines.
fn lines(grid: &ModuleGrid) -> impl Iterator<Item = Vec<bool>> + '_ {
    let size = grid.size();
    let rows = grid.rows().map(<[bool]>::to_vec);
    let columns = (0..size)
        .map(move |x| (0..size).map(|y| grid.get(x, y)).collect::<Vec<bool>>());
    rows.chain(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    fn grid_from(rows: &[&str]) -> ModuleGrid {
        let mut grid = ModuleGrid::new(rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                grid.set(x, y, c == '#');
            }
        }
        grid
    }

    #[test]
    fn test_mask_patterns() {
        assert!(Mask::new(0).inverts(0, 0) && !Mask::new(0).inverts(1, 0));
        assert!(Mask::new(1).inverts(5, 0) && !Mask::new(1).inverts(0, 1));
        assert!(Mask::new(2).inverts(0, 5) && !Mask::new(2).inverts(1, 0));
        assert!(Mask::new(3).inverts(1, 2) && !Mask::new(3).inverts(1, 1));
        assert!(Mask::new(4).inverts(2, 1) && !Mask::new(4).inverts(3, 0));
        assert!(Mask::new(5).inverts(0, 7) && !Mask::new(5).inverts(1, 1));
        assert!(Mask::new(6).inverts(1, 1) && !Mask::new(6).inverts(1, 3));
        assert!(Mask::new(7).inverts(0, 0) && !Mask::new(7).inverts(1, 0));
        assert_eq!(Mask::all().count(), 8);
    }

    #[test]
    #[should_panic]
    fn test_mask_out_of_range() {
        Mask::new(8);
    }

    #[test]
    fn test_run_penalty() {
        // Row 0: a run of 7 dark; all columns alternate.
        let mut grid = ModuleGrid::new(7);
        for x in 0..7 {
            grid.set(x, 0, true);
        }
        for y in 1..7 {
            for x in 0..7 {
                grid.set(x, y, (x + y) % 2 == 0);
            }
        }
        assert_eq!(run_penalty(&grid), 3 + 2);
    }

    #[test]
    fn test_run_penalty_counts_rows_and_columns() {
        let grid = ModuleGrid::new(5);
        // Five light rows and five light columns of length 5.
        assert_eq!(run_penalty(&grid), 10 * 3);
    }

    #[test]
    fn test_block_penalty() {
        let grid = grid_from(&["##.", "##.", "..#"]);
        assert_eq!(block_penalty(&grid), 3);
        let all_light = ModuleGrid::new(3);
        assert_eq!(block_penalty(&all_light), 4 * 3);
    }

    #[test]
    fn test_finder_like_penalty() {
        let mut rows = vec!["#.###.#...."];
        rows.extend(std::iter::repeat("#.#.#.#.#.#").take(10));
        let grid = grid_from(&rows);
        assert_eq!(finder_like_penalty(&grid), 40);

        let grid = grid_from(&[
            "....#.###.#", "...........", "...........", "...........", "...........",
            "...........", "...........", "...........", "...........", "...........",
            "...........",
        ]);
        assert_eq!(finder_like_penalty(&grid), 40);
    }

    #[test]
    fn test_balance_penalty() {
        let mut grid = ModuleGrid::new(10);
        // 0%: the nearer neighbour 5% is nine steps away.
        assert_eq!(balance_penalty(&grid), 90);
        for i in 0..50 {
            grid.set(i % 10, i / 10, true);
        }
        assert_eq!(balance_penalty(&grid), 0);
        for i in 50..57 {
            grid.set(i % 10, i / 10, true);
        }
        // 57%: neighbours 55 and 60 are one and two steps away.
        assert_eq!(balance_penalty(&grid), 10);
        let mut grid = ModuleGrid::new(10);
        for i in 0..43 {
            grid.set(i % 10, i / 10, true);
        }
        // 43%: neighbours 40 and 45 are two and one steps away.
        assert_eq!(balance_penalty(&grid), 10);
    }

    #[test]
    fn test_apply_mask_skips_reserved() {
        let matrix = SymbolMatrix::new(Version::MIN);
        let masked = apply_mask(&matrix, Mask::new(0));
        for y in 0..21 {
            for x in 0..21 {
                let expected = matrix.modules().get(x, y)
                    ^ (!matrix.is_reserved(x, y) && Mask::new(0).inverts(x, y));
                assert_eq!(masked.get(x, y), expected);
            }
        }
    }

    #[test]
    fn test_apply_mask_twice_restores() {
        let matrix = SymbolMatrix::new(Version::new(3));
        for mask in Mask::all() {
            let mut grid = apply_mask(&matrix, mask);
            for y in 0..grid.size() {
                for x in 0..grid.size() {
                    if !matrix.is_reserved(x, y) && mask.inverts(x, y) {
                        grid.toggle(x, y);
                    }
                }
            }
            assert_eq!(&grid, matrix.modules());
        }
    }

    #[test]
    fn test_choose_mask_is_minimal_and_first() {
        let matrix = SymbolMatrix::new(Version::new(2));
        let best = choose_mask(&matrix, false);
        let scores: Vec<u32> = Mask::all().map(|m| trial(&matrix, m, false).score).collect();
        let min = *scores.iter().min().unwrap();
        assert_eq!(best.score, min);
        let first = scores.iter().position(|&s| s == min).unwrap();
        assert_eq!(best.mask, Mask::new(first as u8));
        assert_eq!(best.grid, apply_mask(&matrix, best.mask));
    }
}
