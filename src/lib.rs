//! A boggle-style word game library for Rust.
//! <br>
//! Two players take turns finding words on a shared grid of letters. A word
//! counts when it is in the dictionary, has not been found before, and can be
//! traced on the grid: each next letter on a neighbouring cell (diagonals included),
//! no cell used twice.
//! It can use the `rayon` crate to check a list of words in parallel.
//!
//! # How to use `biggle`
//! The core is two pure functions: [`locate`] finds the cells of each letter of a word,
//! [`is_traceable`] searches those cells for a route spelling the word.
//! A [`Board`] combines them with a [`Codec`] that normalizes words and splits them into
//! grid symbols; the classic dice have a `QU` face that counts as a single cell.
//! A [`Game`] adds turns and scoring on top, asking a [`Dictionary`] whether a word exists.
//!
//! # Basic usage
//!  ```
//! # use biggle::{is_traceable, locate, points_for, Board, Grid, Error};
//! let grid = Grid::from_strings(&["A B", "C D"])?;
//! let word = ["A", "D", "C"];
//! assert!(is_traceable(&word, &locate(&word, &grid)));
//!
//! let board = Board::new(grid);
//! assert!(board.check_word("bad"));
//! assert!(!board.check_word("dad"));
//! assert_eq!(points_for("BAD"), 1);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod codec;
pub mod dice;
mod error;
mod game;
mod grid;
mod locate;
mod path;
mod score;
mod wordlist;

pub use crate::board::Board;
pub use crate::codec::{Codec, Token, Tokens};
pub use crate::error::Error;
pub use crate::game::{
    average_turns_remaining, games_of, rankings, Game, GameResult, Move, Ranking, Verdict,
    DEFAULT_TURNS,
};
pub use crate::grid::{Coord, Grid};
pub use crate::locate::{locate, LetterMap};
pub use crate::path::{find_path, is_traceable, Path};
pub use crate::score::points_for;
pub use crate::wordlist::{Dictionary, Wordlist};
