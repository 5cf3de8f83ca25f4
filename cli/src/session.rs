use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use mineclear_core::{Coord, Coord2, Difficulty, Game, GameSettings, RevealOutcome};
use thiserror::Error;

use crate::render::{render_board, render_status};

const HELP: &str = "commands: <row> <col> | new [easy|medium|hard] | help | quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    NewGame(Option<Difficulty>),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("expected `<row> <col>`, got `{0}`")]
    BadMove(String),
    #[error("unknown difficulty `{0}`")]
    BadDifficulty(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        match first.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(Self::Quit),
            "h" | "help" | "?" => Ok(Self::Help),
            "n" | "new" => match words.next() {
                None => Ok(Self::NewGame(None)),
                Some(name) => name
                    .parse::<Difficulty>()
                    .map(|difficulty| Self::NewGame(Some(difficulty)))
                    .map_err(|_| ParseCommandError::BadDifficulty(name.to_owned())),
            },
            _ => {
                let bad_move = || ParseCommandError::BadMove(line.trim().to_owned());
                let row = first.parse::<Coord>().map_err(|_| bad_move())?;
                let col = words
                    .next()
                    .and_then(|word| word.parse::<Coord>().ok())
                    .ok_or_else(bad_move)?;
                if words.next().is_some() {
                    return Err(bad_move());
                }
                Ok(Self::Reveal((row, col)))
            }
        }
    }
}

/// Owns the current game and forwards moves into it, like a per-player session.
pub struct Session {
    settings: GameSettings,
    game: Game,
}

impl Session {
    pub fn new(settings: GameSettings, game: Game) -> Self {
        Self { settings, game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        self.draw(&mut output)?;
        writeln!(output, "{HELP}")?;

        for line in input.lines() {
            let line = line?;
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(ParseCommandError::Empty) => continue,
                Err(err) => {
                    writeln!(output, "{err}")?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => writeln!(output, "{HELP}")?,
                Command::NewGame(difficulty) => {
                    let difficulty = difficulty.unwrap_or(self.game.difficulty());
                    self.game = Game::with_settings(&self.settings, difficulty)?;
                    log::info!(
                        "Starting {} game, seed {:?}",
                        difficulty,
                        self.game.seed()
                    );
                    self.draw(&mut output)?;
                }
                Command::Reveal(coords) => self.play(coords, &mut output)?,
            }
        }

        Ok(())
    }

    fn play(&mut self, coords: Coord2, output: &mut impl Write) -> Result<()> {
        if !self.game.is_running() {
            writeln!(output, "The game is over, type `new` to play again")?;
            return Ok(());
        }

        match self.game.reveal_cell(coords) {
            Ok(RevealOutcome::NoChange) => writeln!(output, "Already revealed")?,
            Ok(RevealOutcome::Revealed(_)) => self.draw(output)?,
            Ok(RevealOutcome::HitMine) => {
                self.draw(output)?;
                writeln!(output, "Boom! You hit a mine at {} {}", coords.0, coords.1)?;
            }
            Err(err) => {
                let (rows, cols) = self.game.board().size();
                writeln!(output, "{err}: the board is {rows} rows by {cols} columns")?;
            }
        }
        Ok(())
    }

    fn draw(&self, output: &mut impl Write) -> Result<()> {
        write!(output, "{}", render_board(self.game.board()))?;
        writeln!(output, "{}", render_status(&self.game))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use mineclear_core::Board;

    use super::*;

    fn session(mines: &[Coord2]) -> Session {
        let board = Board::from_mine_coords((3, 3), mines).unwrap();
        Session::new(
            GameSettings::default(),
            Game::from_board(board, Difficulty::Hard),
        )
    }

    fn run(session: &mut Session, input: &str) -> String {
        let mut output = Vec::new();
        session.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!("3 7".parse::<Command>(), Ok(Command::Reveal((3, 7))));
        assert_eq!("  0   12 ".parse::<Command>(), Ok(Command::Reveal((0, 12))));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("new".parse::<Command>(), Ok(Command::NewGame(None)));
        assert_eq!(
            "new EASY".parse::<Command>(),
            Ok(Command::NewGame(Some(Difficulty::Easy)))
        );
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
    }

    #[test]
    fn rejects_malformed_moves() {
        assert_eq!(
            "3".parse::<Command>(),
            Err(ParseCommandError::BadMove("3".into()))
        );
        assert!("3 x".parse::<Command>().is_err());
        assert!("1 2 3".parse::<Command>().is_err());
        assert!("-1 2".parse::<Command>().is_err());
        assert!("999 2".parse::<Command>().is_err());
        assert_eq!(
            "new nightmare".parse::<Command>(),
            Err(ParseCommandError::BadDifficulty("nightmare".into()))
        );
    }

    #[test]
    fn moves_are_forwarded_until_loss() {
        let mut session = session(&[(1, 1)]);

        let output = run(&mut session, "0 0\n1 1\n2 2\n");

        assert!(output.contains("Boom! You hit a mine at 1 1"));
        assert!(output.contains("The game is over"));
        assert!(!session.game().is_running());
        assert!(!session.game().board()[(2, 2)].is_discovered());
    }

    #[test]
    fn reports_out_of_range_and_repeats() {
        let mut session = session(&[(1, 1)]);

        let output = run(&mut session, "5 0\n0 0\n0 0\nquit\n0 1\n");

        assert!(output.contains("Invalid coordinates: the board is 3 rows by 3 columns"));
        assert!(output.contains("Already revealed"));
        assert!(!session.game().board()[(0, 1)].is_discovered());
        assert!(session.game().is_running());
    }

    #[test]
    fn new_game_replaces_the_board() {
        let mut session = session(&[(1, 1)]);

        run(&mut session, "1 1\nnew easy\n");

        assert!(session.game().is_running());
        assert_eq!(session.game().difficulty(), Difficulty::Easy);
        assert_eq!(session.game().board().size(), (10, 20));
        assert_eq!(session.game().board().mine_count(), 40);
    }
}
