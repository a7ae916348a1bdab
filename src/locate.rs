use crate::codec::Token;
use crate::grid::{Coord, Grid};
use std::collections::BTreeMap;

/// For each distinct symbol of a word, the coordinates of all grid cells showing it, in row-major order.
pub type LetterMap = BTreeMap<Token, Vec<Coord>>;

/// Find the coordinates of each distinct symbol of `word` on `grid`.
///
/// Every symbol of the word is a key in the result. A symbol that does not
/// occur on the grid maps to an empty list.
/// ## Examples
/// ```
/// # use biggle::{locate, Coord, Grid, Error};
/// let grid = Grid::from_strings(&["A B", "B A"])?;
/// let letters = locate(&["A", "B", "C"], &grid);
/// assert_eq!(letters["A"], vec![Coord::new(0, 0), Coord::new(1, 1)]);
/// assert_eq!(letters["B"], vec![Coord::new(1, 0), Coord::new(0, 1)]);
/// assert!(letters["C"].is_empty());
/// # Ok::<(), Error>(())
/// ```
pub fn locate<S: AsRef<str>>(word: &[S], grid: &Grid) -> LetterMap {
    let mut letters = LetterMap::new();
    for symbol in word.iter().map(AsRef::as_ref) {
        if letters.contains_key(symbol) {
            continue;
        }
        let coords = grid
            .cells()
            .filter(|&(_, cell)| cell == symbol)
            .map(|(coord, _)| coord)
            .collect();
        letters.insert(Token::from(symbol), coords);
    }
    letters
}
