//! Line module - the single-line collapse rule
//!
//! A move decomposes the grid into independent lines ordered from the leading edge
//! (the edge tiles travel toward) to the trailing edge. Each line is collapsed in one
//! forward pass:
//!
//! - tiles slide into the first empty slot ahead of them
//! - a tile merges into the last written tile when the values match, unless that tile
//!   was itself produced by a merge during this pass
//!
//! So `[2, 2, 2, 2]` becomes `[4, 4, _, _]`, never `[8, _, _, _]`. Two `MAX_TILE`
//! tiles do not merge.

use crate::types::{Tile, GOAL, MAX_TILE};

/// What happened to a line (or, aggregated, to a whole grid) during a collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collapse {
    /// At least one tile shifted or merged
    pub changed: bool,
    /// A merge produced the goal value
    pub reached_goal: bool,
    /// Number of merges performed
    pub merges: u32,
}

impl Collapse {
    /// Fold another line's report into this one.
    pub fn absorb(&mut self, other: Collapse) {
        self.changed |= other.changed;
        self.reached_goal |= other.reached_goal;
        self.merges += other.merges;
    }
}

/// The value two `value` tiles merge into, if it stays within `MAX_TILE`.
fn doubled(value: u32) -> Option<u32> {
    value.checked_mul(2).filter(|&merged| merged <= MAX_TILE)
}

/// Collapse `line` in place toward index 0.
pub fn collapse_line(line: &mut [Tile]) -> Collapse {
    let mut report = Collapse::default();
    let mut first_empty: Option<usize> = None;
    let mut last_filled: Option<usize> = None;
    // Whether the tile at `last_filled` came out of a merge in this pass.
    let mut last_merged = false;

    for i in 0..line.len() {
        let Some(value) = line[i] else {
            if first_empty.is_none() {
                first_empty = Some(i);
            }
            continue;
        };

        let merge = last_filled
            .filter(|&t| !last_merged && line[t] == Some(value))
            .zip(doubled(value));

        if let Some((target, merged)) = merge {
            line[target] = Some(merged);
            line[i] = None;
            last_merged = true;
            report.changed = true;
            report.merges += 1;
            if merged == GOAL {
                report.reached_goal = true;
            }
            if first_empty.is_none() {
                first_empty = Some(i);
            }
        } else if let Some(slot) = first_empty {
            line[slot] = Some(value);
            line[i] = None;
            first_empty = Some(slot + 1);
            last_filled = Some(slot);
            last_merged = false;
            report.changed = true;
        } else {
            last_filled = Some(i);
            last_merged = false;
        }
    }

    report
}
