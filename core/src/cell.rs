use serde::{Deserialize, Serialize};

/// What a cell holds, or for [`Cell::appearance`], what a view should draw for it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Not yet discovered by the player. Only produced by [`Cell::appearance`].
    Undiscovered,
    Mine,
    /// Safe cell with no adjacent mines.
    #[default]
    Empty,
    /// Safe cell with at least one adjacent mine.
    Number,
    /// The mine the player stepped on.
    Exploded,
    /// A mine uncovered by the sweep after a loss. Only produced by [`Cell::appearance`].
    MineRevealed,
}

/// One grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    adjacent_mines: u8,
    discovered: bool,
}

impl Cell {
    pub const fn mine() -> Self {
        Self {
            kind: CellKind::Mine,
            adjacent_mines: 0,
            discovered: false,
        }
    }

    pub const fn empty() -> Self {
        Self {
            kind: CellKind::Empty,
            adjacent_mines: 0,
            discovered: false,
        }
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    /// Meaningful only for `Empty` and `Number` cells.
    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_discovered(&self) -> bool {
        self.discovered
    }

    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn is_number(&self) -> bool {
        matches!(self.kind, CellKind::Number)
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, CellKind::Empty)
    }

    /// Whether the cell is a mine, exploded or not.
    pub const fn has_mine(&self) -> bool {
        matches!(self.kind, CellKind::Mine | CellKind::Exploded)
    }

    /// The kind a view should draw, hiding everything not yet discovered.
    pub const fn appearance(&self) -> CellKind {
        use CellKind::*;

        match (self.discovered, self.kind) {
            (false, _) => Undiscovered,
            (true, Mine) => MineRevealed,
            (true, kind) => kind,
        }
    }

    pub fn set_discovered(&mut self, discovered: bool) {
        self.discovered = discovered;
    }

    /// Stores the neighbor count and settles the safe kind: zero is `Empty`, anything else `Number`.
    pub fn set_adjacent_count(&mut self, count: u8) {
        self.adjacent_mines = count;
        self.kind = if count == 0 {
            CellKind::Empty
        } else {
            CellKind::Number
        };
    }

    pub(crate) fn explode(&mut self) {
        self.kind = CellKind::Exploded;
    }
}
