use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Places exactly `config.mine_count()` mines by uniformly shuffling a row-major run of cells.
///
/// The seed is the only source of randomness, the same seed and config always give the same
/// board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShuffleMinefieldGenerator {
    seed: u64,
}

impl ShuffleMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for ShuffleMinefieldGenerator {
    fn generate(self, config: &BoardConfig) -> Board {
        let total_cells = config.total_cells();
        let mine_count = config.mine_count();

        if mine_count == total_cells {
            log::warn!(
                "Minefield is full, every one of the {} cells is a mine",
                total_cells
            );
        }

        let mut cells: Vec<Cell> = (0..total_cells)
            .map(|i| if i < mine_count { Cell::mine() } else { Cell::empty() })
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        cells.shuffle(&mut rng);

        let (_, cols) = config.size();
        let cols = usize::from(cols);
        let cells = Array2::from_shape_fn(config.size().to_nd_index(), |(row, col)| {
            cells[row * cols + col]
        });

        let mut board = Board::from_array(cells);
        board.finalize();

        log::debug!(
            "Generated {}x{} minefield with {} mines from seed {:#018x}",
            board.rows(),
            board.cols(),
            board.mine_count(),
            self.seed
        );
        board
    }
}
