//! Module grid construction: function patterns first, then the zig-zag data fill.

use log::trace;

use crate::bits::BitBuffer;
use crate::error::EncodeError;
use crate::format;
use crate::version::Version;

/// A square grid of modules addressed by (column, row), with (0, 0) at the top left.
/// `true` is a dark module and `false` a light one.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// An all-light grid of `size` by `size` modules.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![false; size * size],
        }
    }

    /// Width and height in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the module at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules[self.index(x, y)]
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Coordinates outside the grid return `false`, which lets callers draw a quiet zone by
    /// reading past the edges.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let range = 0..self.size as i32;
        range.contains(&x) && range.contains(&y) && self.get(x as usize, y as usize)
    }

    pub fn set(&mut self, x: usize, y: usize, isdark: bool) {
        let index = self.index(x, y);
        self.modules[index] = isdark;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        let index = self.index(x, y);
        self.modules[index] ^= true;
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.modules.chunks(self.size)
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.size && y < self.size, "Module coordinates out of range");
        y * self.size + x
    }
}

/// A symbol under construction: the module grid plus which modules belong to function
/// patterns. Reserved modules are never written by the data fill and never masked.
#[derive(Clone, Debug)]
pub struct SymbolMatrix {
    version: Version,
    modules: ModuleGrid,
    reserved: Vec<bool>,
}

impl SymbolMatrix {
    /// Lays out every function pattern of `version` and reserves the format and version
    /// information areas, which are left light.
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut result = Self {
            version,
            modules: ModuleGrid::new(size),
            reserved: vec![false; size * size],
        };
        result.draw_finder_pattern(0, 0);
        result.draw_finder_pattern(size - 7, 0);
        result.draw_finder_pattern(0, size - 7);
        result.reserve_separators();
        result.draw_alignment_patterns();
        result.draw_timing_patterns();

        let dark_y = 4 * usize::from(version.value()) + 9;
        result.modules.set(8, dark_y, true);
        result.reserve(8, dark_y);

        result.reserve_information_areas();
        result
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn size(&self) -> usize {
        self.modules.size()
    }

    pub fn modules(&self) -> &ModuleGrid {
        &self.modules
    }

    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        self.reserved[y * self.size() + x]
    }

    /// Modules still free for data.
    pub fn data_module_count(&self) -> usize {
        self.reserved.iter().filter(|&&r| !r).count()
    }

    /// Writes `stream` into every unreserved module, two columns at a time from the right
    /// edge, alternating upward and downward sweeps and skipping the vertical timing column.
    ///
    /// # Errors
    ///
    /// Fails with [`EncodeError::InternalTable`] unless the stream has exactly one bit per
    /// unreserved module.
    pub fn draw_codewords(&mut self, stream: &BitBuffer) -> Result<(), EncodeError> {
        let size = self.size() as i32;
        let mut bits = stream.iter();
        let mut i: usize = 0;
        let mut right: i32 = size - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            let upward: bool = ((right + 1) & 2) == 0;
            for vert in 0..size {
                for j in 0..2 {
                    let x = (right - j) as usize;
                    let y = (if upward { size - 1 - vert } else { vert }) as usize;
                    if self.is_reserved(x, y) {
                        continue;
                    }
                    let bit = bits.next().ok_or_else(|| {
                        EncodeError::table(
                            self.version.value(),
                            format!("bit stream of {} bits is too short", stream.len()),
                        )
                    })?;
                    self.modules.set(x, y, bit);
                    i += 1;
                }
            }
            right -= 2;
        }
        if i != stream.len() {
            return Err(EncodeError::table(
                self.version.value(),
                format!("{} data modules for a {}-bit stream", i, stream.len()),
            ));
        }
        trace!("draw_codewords version={} bits={}", self.version.value(), i);
        Ok(())
    }

    /// Fills the reserved version information blocks (version 7 and up).
    pub fn draw_version_bits(&mut self) {
        format::draw_version_bits(&mut self.modules, self.version);
    }

    fn reserve(&mut self, x: usize, y: usize) {
        let size = self.size();
        self.reserved[y * size + x] = true;
    }

    fn reserve_rectangle(&mut self, left: usize, top: usize, width: usize, height: usize) {
        for dy in 0..height {
            for dx in 0..width {
                self.reserve(left + dx, top + dy);
            }
        }
    }

    /// 7x7: dark outer ring, light ring, dark 3x3 center.
    fn draw_finder_pattern(&mut self, left: usize, top: usize) {
        for dy in 0..7 {
            for dx in 0..7 {
                let dist = (dx as i32 - 3).abs().max((dy as i32 - 3).abs());
                self.modules.set(left + dx, top + dy, dist != 2);
                self.reserve(left + dx, top + dy);
            }
        }
    }

    fn reserve_separators(&mut self) {
        let size = self.size();
        for i in 0..8 {
            self.reserve(7, i);
            self.reserve(i, 7);
            self.reserve(size - 8, i);
            self.reserve(size - 1 - i, 7);
            self.reserve(7, size - 1 - i);
            self.reserve(i, size - 8);
        }
    }

    /// 5x5: dark outer ring, light ring, dark center. Candidates touching an already
    /// reserved module (the finder corners) are skipped.
    fn draw_alignment_patterns(&mut self) {
        let positions = self.version.alignment_positions();
        for &cx in positions {
            for &cy in positions {
                let (left, top) = (usize::from(cx) - 2, usize::from(cy) - 2);
                let overlaps =
                    (0..5).any(|dy| (0..5).any(|dx| self.is_reserved(left + dx, top + dy)));
                if overlaps {
                    continue;
                }
                for dy in 0..5 {
                    for dx in 0..5 {
                        let dist = (dx as i32 - 2).abs().max((dy as i32 - 2).abs());
                        self.modules.set(left + dx, top + dy, dist != 1);
                    }
                }
                self.reserve_rectangle(left, top, 5, 5);
            }
        }
    }

    fn draw_timing_patterns(&mut self) {
        for i in 0..self.size() {
            for (x, y) in [(i, 6), (6, i)] {
                if !self.is_reserved(x, y) {
                    self.modules.set(x, y, i % 2 == 0);
                    self.reserve(x, y);
                }
            }
        }
    }

    fn reserve_information_areas(&mut self) {
        let size = self.size();
        // Format information next to each finder
        self.reserve_rectangle(8, 0, 1, 9);
        self.reserve_rectangle(0, 8, 9, 1);
        self.reserve_rectangle(size - 8, 8, 8, 1);
        self.reserve_rectangle(8, size - 8, 1, 8);
        if self.version.value() >= 7 {
            self.reserve_rectangle(size - 11, 0, 3, 6);
            self.reserve_rectangle(0, size - 11, 6, 3);
        }
    }
}
