use mineclear_core::{Board, Cell, CellKind, Game};

pub fn cell_glyph(cell: &Cell) -> char {
    use CellKind::*;

    match cell.appearance() {
        Undiscovered => '#',
        Empty => '.',
        Number => char::from_digit(cell.adjacent_mine_count().into(), 10).unwrap_or('?'),
        Mine | MineRevealed => '*',
        Exploded => 'X',
    }
}

/// Draws the board with row numbers down the left and the last digit of each column on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..board.cols() {
        out.push_str(&format!(" {}", col % 10));
    }
    out.push('\n');

    for (row, cells) in board.iter_rows().enumerate() {
        out.push_str(&format!("{row:>3}"));
        for cell in cells.iter() {
            out.push(' ');
            out.push(cell_glyph(cell));
        }
        out.push('\n');
    }
    out
}

pub fn render_status(game: &Game) -> String {
    let board = game.board();
    let state = if game.is_running() {
        "running"
    } else {
        "game over"
    };
    format!(
        "{} | {} mines | {}/{} discovered | {}",
        game.difficulty(),
        board.mine_count(),
        board.discovered_count(),
        board.total_cells(),
        state
    )
}

#[cfg(test)]
mod tests {
    use mineclear_core::Difficulty;

    use super::*;

    fn game(mines: &[(u8, u8)]) -> Game {
        let board = Board::from_mine_coords((3, 4), mines).unwrap();
        Game::from_board(board, Difficulty::Easy)
    }

    #[test]
    fn hidden_board_renders_all_hashes() {
        let game = game(&[(1, 1)]);

        assert_eq!(
            render_board(game.board()),
            "    0 1 2 3\n  0 # # # #\n  1 # # # #\n  2 # # # #\n"
        );
    }

    #[test]
    fn revealed_cells_show_counts() {
        let mut game = game(&[(0, 0)]);
        game.reveal_cell((2, 3)).unwrap();

        assert_eq!(
            render_board(game.board()),
            "    0 1 2 3\n  0 # 1 . .\n  1 1 1 . .\n  2 . . . .\n"
        );
    }

    #[test]
    fn loss_shows_explosion_and_mines() {
        let mut game = game(&[(0, 0), (2, 3)]);
        game.reveal_cell((2, 3)).unwrap();

        let rendered = render_board(game.board());
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows[1], "  0 * # # #");
        assert_eq!(rows[3], "  2 # # # X");
        assert!(render_status(&game).ends_with("game over"));
    }

    #[test]
    fn wide_board_header_repeats_last_digit() {
        let board = Board::from_mine_coords((3, 12), &[]).unwrap();
        let rendered = render_board(&board);

        assert_eq!(rendered.lines().next(), Some("    0 1 2 3 4 5 6 7 8 9 0 1"));
        assert_eq!(rendered.lines().nth(3), Some("  2 # # # # # # # # # # # #"));
    }

    #[test]
    fn status_summarizes_progress() {
        let mut game = game(&[(1, 1)]);
        game.reveal_cell((0, 0)).unwrap();

        assert_eq!(
            render_status(&game),
            "easy | 1 mines | 1/12 discovered | running"
        );
    }
}
