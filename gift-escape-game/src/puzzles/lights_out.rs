//! Chapter three: a 3×3 Lights Out board guarding the tool chest.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::{HashMap, VecDeque};

pub const GRID_WIDTH: usize = 3;
pub const GRID_LEN: usize = GRID_WIDTH * GRID_WIDTH;

/// Starting board: lit corners and center.
pub const INITIAL_PATTERN: [bool; GRID_LEN] =
    [true, false, true, false, true, false, true, false, true];

/// Which cells a press flips besides the pressed cell itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborRule {
    /// `i-1`, `i+1`, `i-3`, `i+3`, bounded only by the board length.
    /// Horizontal neighbors wrap into the adjacent row (pressing 2 flips 3).
    #[default]
    IndexWrap,
    /// Up, down, left and right within the 3×3 layout.
    Orthogonal,
}

impl NeighborRule {
    /// The pressed cell followed by every neighbor it flips.
    #[must_use]
    pub fn affected(self, index: usize) -> SmallVec<[usize; 5]> {
        let mut cells = SmallVec::new();
        if index >= GRID_LEN {
            return cells;
        }
        cells.push(index);
        match self {
            Self::IndexWrap => {
                let candidates = [
                    index.checked_sub(1),
                    Some(index + 1),
                    index.checked_sub(GRID_WIDTH),
                    Some(index + GRID_WIDTH),
                ];
                cells.extend(candidates.into_iter().flatten().filter(|&j| j < GRID_LEN));
            }
            Self::Orthogonal => {
                let (row, col) = (index / GRID_WIDTH, index % GRID_WIDTH);
                if col > 0 {
                    cells.push(index - 1);
                }
                if col + 1 < GRID_WIDTH {
                    cells.push(index + 1);
                }
                if row > 0 {
                    cells.push(index - GRID_WIDTH);
                }
                if row + 1 < GRID_WIDTH {
                    cells.push(index + GRID_WIDTH);
                }
            }
        }
        cells
    }

    fn press_mask(self, index: usize) -> u16 {
        self.affected(index)
            .into_iter()
            .fold(0, |mask, cell| mask | (1 << cell))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightsOut {
    cells: [bool; GRID_LEN],
    rule: NeighborRule,
}

impl Default for LightsOut {
    fn default() -> Self {
        Self::new(NeighborRule::default())
    }
}

impl LightsOut {
    #[must_use]
    pub const fn new(rule: NeighborRule) -> Self {
        Self::with_cells(INITIAL_PATTERN, rule)
    }

    #[must_use]
    pub const fn with_cells(cells: [bool; GRID_LEN], rule: NeighborRule) -> Self {
        Self { cells, rule }
    }

    #[must_use]
    pub const fn cells(&self) -> &[bool; GRID_LEN] {
        &self.cells
    }

    #[must_use]
    pub const fn rule(&self) -> NeighborRule {
        self.rule
    }

    #[must_use]
    pub fn is_lit(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// Press cell `index` and report whether the board is now dark.
    /// Presses outside the board change nothing.
    pub fn toggle(&mut self, index: usize) -> bool {
        for cell in self.rule.affected(index) {
            self.cells[cell] = !self.cells[cell];
        }
        self.is_solved()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|lit| !lit)
    }

    fn mask(&self) -> u16 {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Shortest press sequence that darkens the board from its current
    /// state, or `None` when no sequence exists under this rule.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<usize>> {
        let presses: Vec<u16> = (0..GRID_LEN).map(|i| self.rule.press_mask(i)).collect();
        let start = self.mask();
        let mut came_from: HashMap<u16, Option<(u16, usize)>> = HashMap::new();
        came_from.insert(start, None);
        let mut queue = VecDeque::from([start]);

        while let Some(state) = queue.pop_front() {
            if state == 0 {
                break;
            }
            for (index, press) in presses.iter().enumerate() {
                let next = state ^ press;
                if let std::collections::hash_map::Entry::Vacant(slot) = came_from.entry(next) {
                    slot.insert(Some((state, index)));
                    queue.push_back(next);
                }
            }
        }

        let mut path = Vec::new();
        let mut cursor = 0_u16;
        loop {
            match came_from.get(&cursor)? {
                Some((prev, index)) => {
                    path.push(*index);
                    cursor = *prev;
                }
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }
}
