use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Active,
    Lost,
}

impl GameState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A single play session: owns the board and tracks whether the player is still alive.
///
/// There is no win state, clearing every safe cell leaves the game `Active`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    difficulty: Difficulty,
    state: GameState,
    seed: Option<u64>,
    triggered_mine: Option<Coord2>,
}

impl Game {
    /// Starts a default-sized game at `difficulty` with a fresh random layout.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::generate(
            &BoardConfig::for_difficulty(difficulty),
            difficulty,
            ShuffleMinefieldGenerator::from_entropy(),
        )
    }

    pub fn with_settings(settings: &GameSettings, difficulty: Difficulty) -> Result<Self> {
        let config = settings.board_config(difficulty)?;
        Ok(Self::generate(
            &config,
            difficulty,
            ShuffleMinefieldGenerator::from_entropy(),
        ))
    }

    /// Reproducible game, the same `config` and `seed` always lay out the same board.
    pub fn with_seed(config: &BoardConfig, difficulty: Difficulty, seed: u64) -> Self {
        Self::generate(config, difficulty, ShuffleMinefieldGenerator::new(seed))
    }

    /// Wraps an already finalized board, e.g. one from [`Board::from_mine_coords`].
    pub fn from_board(board: Board, difficulty: Difficulty) -> Self {
        Self {
            board,
            difficulty,
            state: GameState::default(),
            seed: None,
            triggered_mine: None,
        }
    }

    fn generate(
        config: &BoardConfig,
        difficulty: Difficulty,
        generator: ShuffleMinefieldGenerator,
    ) -> Self {
        let seed = generator.seed();
        let mut game = Self::from_board(generator.generate(config), difficulty);
        game.seed = Some(seed);
        game
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        self.board.get(coords)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Seed the board was generated from, `None` for boards built by hand.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Reveals the cell at `(row, col)`.
    ///
    /// An empty cell opens its whole connected empty region together with the numbered cells
    /// bordering it. A mine explodes, uncovers every other mine, and ends the game.
    ///
    /// This does not check [`Game::is_running`], callers are expected to stop sending moves
    /// once the game is lost.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        let cell = self.board[coords];

        if cell.is_discovered() {
            return Ok(RevealOutcome::NoChange);
        }

        self.board.cell_mut(coords).set_discovered(true);
        log::trace!("Revealed {:?} at {:?}", cell.kind(), coords);

        Ok(match cell.kind() {
            CellKind::Mine => {
                self.board.cell_mut(coords).explode();
                self.reveal_mines();
                self.triggered_mine = Some(coords);
                self.state = GameState::Lost;
                log::debug!("Mine hit at {:?}, game over", coords);
                RevealOutcome::HitMine
            }
            CellKind::Empty => RevealOutcome::Revealed(1 + self.reveal_adjacent_empties(coords)),
            _ => RevealOutcome::Revealed(1),
        })
    }

    /// Discovers the region of empty cells connected to `origin` plus their numbered border,
    /// returning how many cells were newly discovered.
    fn reveal_adjacent_empties(&mut self, origin: Coord2) -> CellCount {
        let mut discovered: CellCount = 0;
        let mut to_visit = vec![origin];

        while let Some(coords) = to_visit.pop() {
            for pos in self.board.iter_neighbors(coords) {
                let neighbor = self.board.cell_mut(pos);
                if neighbor.has_mine() || neighbor.is_discovered() {
                    continue;
                }

                neighbor.set_discovered(true);
                discovered += 1;

                if neighbor.is_empty() {
                    to_visit.push(pos);
                }
            }
        }

        discovered
    }

    fn reveal_mines(&mut self) {
        for cell in self.board.iter_cells_mut().filter(|cell| cell.is_mine()) {
            cell.set_discovered(true);
        }
    }
}
