//! Board module - the 4x4 grid and the slide/merge engine
//!
//! The board is a flat row-major array of 16 cells. A cell holds 0 (empty) or
//! a power of two >= 2. Coordinates are `Pos { row, col }` with row 0 on top.
//!
//! Every direction runs through one line routine ([`slide_line`]). A line is
//! read from the board in *edge-first* order (the cell tiles travel toward
//! comes first), slid and merged, and written back. The four directions differ
//! only in which cells make up a line and in which order they are visited.

use arrayvec::ArrayVec;

use crate::types::{Direction, Displacement, MergeEvent, Pos, CELL_COUNT, GRID_SIZE};

/// Displacements produced by one move (at most one per tile).
pub type Displacements = ArrayVec<Displacement, CELL_COUNT>;

/// Effects produced by one move: merges, plus the spawn added by the caller.
pub type MergeEvents = ArrayVec<MergeEvent, CELL_COUNT>;

/// Outcome of sliding the board in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// True iff any tile moved or merged.
    pub changed: bool,
    /// Sum of all merge results in this move.
    pub score_delta: u32,
    pub displacements: Displacements,
    pub merges: MergeEvents,
}

/// Result of sliding a single edge-first line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSlide {
    pub cells: [u32; GRID_SIZE],
    /// `(from, to, value)` slot indices for every tile that moved.
    pub moves: ArrayVec<(u8, u8, u32), GRID_SIZE>,
    /// `(slot, value)` for every merge product.
    pub merges: ArrayVec<(u8, u32), GRID_SIZE>,
    pub score: u32,
}

/// Slide and merge one line toward index 0.
///
/// Tiles are visited from the edge inward. A tile merges into the nearest
/// edge-ward tile when both values are equal and that tile is not itself the
/// product of a merge in this pass, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`.
pub fn slide_line(line: [u32; GRID_SIZE]) -> LineSlide {
    let mut out = LineSlide::default();
    let mut write = 0usize;
    let mut last_merge: Option<usize> = None;

    for (read, &value) in line.iter().enumerate() {
        if value == 0 {
            continue;
        }

        let target = write.checked_sub(1);
        match target {
            Some(t) if out.cells[t] == value && last_merge != Some(t) => {
                let merged = value * 2;
                out.cells[t] = merged;
                out.score += merged;
                out.merges.push((t as u8, merged));
                out.moves.push((read as u8, t as u8, value));
                last_merge = Some(t);
            }
            _ => {
                out.cells[write] = value;
                if write != read {
                    out.moves.push((read as u8, write as u8, value));
                }
                write += 1;
            }
        }
    }

    out
}

/// Board cells of line `line` for `dir`, in edge-first order.
fn line_positions(dir: Direction, line: usize) -> [Pos; GRID_SIZE] {
    let mut out = [Pos::default(); GRID_SIZE];
    for (i, slot) in out.iter_mut().enumerate() {
        let along = if dir.toward_start() {
            i
        } else {
            GRID_SIZE - 1 - i
        };
        *slot = if dir.is_horizontal() {
            Pos::new(line as u8, along as u8)
        } else {
            Pos::new(along as u8, line as u8)
        };
    }
    out
}

#[inline(always)]
fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// The 4x4 game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u32; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from rows (top to bottom).
    ///
    /// Every value must be 0 or a power of two >= 2.
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board.set(Pos::new(r as u8, c as u8), value);
            }
        }
        board
    }

    pub fn rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (i, &value) in self.cells.iter().enumerate() {
            out[i / GRID_SIZE][i % GRID_SIZE] = value;
        }
        out
    }

    pub fn get(&self, pos: Pos) -> u32 {
        self.cells[pos.index()]
    }

    pub fn set(&mut self, pos: Pos, value: u32) {
        debug_assert!(is_tile_value(value), "not a tile value: {}", value);
        self.cells[pos.index()] = value;
    }

    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| Pos::from_index(i))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    pub fn has_tile(&self, value: u32) -> bool {
        self.cells.contains(&value)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// True if any two horizontally or vertically adjacent tiles are equal.
    pub fn has_adjacent_pair(&self) -> bool {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let v = self.cells[r * GRID_SIZE + c];
                if v == 0 {
                    continue;
                }
                if c + 1 < GRID_SIZE && self.cells[r * GRID_SIZE + c + 1] == v {
                    return true;
                }
                if r + 1 < GRID_SIZE && self.cells[(r + 1) * GRID_SIZE + c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no adjacent equal pair: no move can change the board.
    pub fn is_stuck(&self) -> bool {
        self.is_full() && !self.has_adjacent_pair()
    }

    /// Whether sliding in `dir` would change anything.
    pub fn can_move(&self, dir: Direction) -> bool {
        (0..GRID_SIZE).any(|line| {
            let positions = line_positions(dir, line);
            let values = positions.map(|p| self.get(p));
            !slide_line(values).moves.is_empty()
        })
    }

    /// Slide every line in `dir`, returning the new board and what happened.
    ///
    /// This is pure; `self` is untouched. When nothing moves the returned
    /// board equals `self` and `changed` is false.
    pub fn slide(&self, dir: Direction) -> (Board, MoveResult) {
        let mut next = *self;
        let mut result = MoveResult::default();

        for line in 0..GRID_SIZE {
            let positions = line_positions(dir, line);
            let values = positions.map(|p| self.get(p));
            let slid = slide_line(values);

            for (pos, &value) in positions.iter().zip(slid.cells.iter()) {
                next.cells[pos.index()] = value;
            }
            for &(from, to, value) in &slid.moves {
                result.displacements.push(Displacement {
                    from: positions[from as usize],
                    to: positions[to as usize],
                    value,
                });
            }
            for &(slot, value) in &slid.merges {
                result.merges.push(MergeEvent {
                    cell: positions[slot as usize],
                    value,
                    is_newly_spawned: false,
                });
            }
            result.score_delta += slid.score;
        }

        result.changed = !result.displacements.is_empty();
        (next, result)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
