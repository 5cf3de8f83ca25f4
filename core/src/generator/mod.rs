use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait MinefieldGenerator {
    /// Lays out a finalized board for `config`.
    fn generate(self, config: &BoardConfig) -> Board;
}
