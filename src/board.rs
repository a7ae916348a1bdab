use crate::codec::{Token, Tokens};
use crate::dice::{self, CLASSIC_DICE};
use crate::locate::{locate, LetterMap};
use crate::path::{find_path, Path};
use crate::{Codec, Error, Grid, Wordlist};
use log::debug;
use multiset::HashMultiSet;
use rand::Rng;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::fmt;

/// Display the grid, symbols separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

/// A letter grid ready to check words against.
/// * The [`Grid`](crate::Grid) of symbols,
/// * The [`Codec`](crate::Codec) that splits words into symbols,
/// * An inventory of the symbols on the grid, to reject impossible words early.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    codec: Codec,
    inventory: HashMultiSet<String>,
}

impl Board {
    /// Create a board for `grid`, using the default codec (with a `QU` face).
    ///
    /// ## Examples
    ///```
    /// use biggle::{Board, Grid};
    ///
    /// let board = Board::new(Grid::default());
    /// assert!(board.check_word("foe"));
    ///```
    #[must_use]
    pub fn new(grid: Grid) -> Board {
        let inventory = grid.cells().map(|(_, symbol)| String::from(symbol)).collect();
        Board {
            grid,
            codec: Codec::default(),
            inventory,
        }
    }

    /// Create a board from a fresh roll of the classic dice.
    /// ## Errors
    /// Never for the classic dice, see [`dice::roll`](crate::dice::roll).
    pub fn random<R: Rng>(rng: &mut R) -> Result<Board, Error> {
        Ok(Board::new(dice::roll(&CLASSIC_DICE, rng)?))
    }

    /// Specify the codec used to split words into symbols, and returns the modified board.
    #[must_use]
    pub fn with_codec(mut self, codec: Codec) -> Board {
        self.codec = codec;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Normalize `word` and split it into grid symbols.
    pub fn tokenize(&self, word: &str) -> Tokens {
        self.codec.tokenize(&self.codec.normalize(word))
    }

    /// Returns false if the grid does not hold enough copies of the symbols in `tokens`.
    fn could_fit(&self, tokens: &[Token]) -> bool {
        if tokens.is_empty() || tokens.len() > self.grid.cell_count() {
            return false;
        }
        let needed: HashMultiSet<&Token> = tokens.iter().collect();
        needed
            .distinct_elements()
            .all(|&token| needed.count_of(&token) <= self.inventory.count_of(token))
    }

    /// Coordinates of each symbol of `word` on the grid.
    pub fn locate(&self, word: &str) -> LetterMap {
        locate(&self.tokenize(word), &self.grid)
    }

    /// Find a route tracing `word` on the grid, or None if there is none.
    /// ## Examples
    /// ```
    /// use biggle::{Board, Coord};
    /// let board = Board::default();
    /// let path = board.find_path("idea").unwrap();
    /// assert_eq!(path.len(), 4);
    /// assert_eq!(path[0], Coord::new(0, 0));
    /// ```
    pub fn find_path(&self, word: &str) -> Option<Path> {
        let tokens = self.tokenize(word);
        if !self.could_fit(&tokens) {
            return None;
        }
        find_path(&tokens, &locate(&tokens, &self.grid))
    }

    /// Check if `word` can be traced on the grid. The word is normalized first.
    pub fn check_word(&self, word: &str) -> bool {
        self.find_path(word).is_some()
    }

    /// All words from `words` that can be traced on the grid, normalized and sorted.
    #[cfg(not(feature = "rayon"))]
    pub fn traceable_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let mut found: Vec<String> = words
            .iter()
            .filter(|word| self.check_word(word.as_ref()))
            .map(|word| self.codec.normalize(word.as_ref()))
            .collect();
        found.sort_unstable();
        found.dedup();
        debug!("{} of {} words on the board", found.len(), words.len());
        found
    }

    /// All words from `words` that can be traced on the grid, normalized and sorted.
    #[cfg(feature = "rayon")]
    pub fn traceable_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        let mut found: Vec<String> = words
            .par_iter()
            .filter(|word| self.check_word(word.as_ref()))
            .map(|word| self.codec.normalize(word.as_ref()))
            .collect();
        found.sort_unstable();
        found.dedup();
        debug!("{} of {} words on the board", found.len(), words.len());
        found
    }

    /// All words of `wordlist` that can be traced on the grid.
    pub fn find_words(&self, wordlist: &Wordlist) -> Vec<String> {
        self.traceable_words(&wordlist.words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;
    use rand::{rngs::StdRng, SeedableRng};

    type Result<T> = std::result::Result<T, Error>;

    const QU_BOARD: &[&str] = &["QU I E T", "S U Q A", "R E N T", "X Y Z O"];

    #[test]
    fn test_check_word() {
        let board = Board::default();
        for &word in &["foe", "IDEA", "feet", " toe", "ten", "Vat"] {
            assert!(board.check_word(word), "{}", word);
        }
        for &word in &["deed", "fend", "dole", "zoo", "", "food"] {
            assert!(!board.check_word(word), "{}", word);
        }
    }

    #[test]
    fn test_find_path() {
        let board = Board::default();
        let path = board.find_path("feet").unwrap();
        assert_eq!(
            path.as_slice(),
            &[
                Coord::new(2, 0),
                Coord::new(2, 1),
                Coord::new(2, 2),
                Coord::new(3, 2)
            ][..]
        );
    }

    #[test]
    fn test_qu_is_one_symbol() -> Result<()> {
        let board = Board::new(Grid::from_strings(QU_BOARD)?);
        // QU + I + E + T along the top row
        assert!(board.check_word("quiet"));
        assert_eq!(board.find_path("quiet").unwrap().len(), 4);
        // the separate Q and U cells are never used for "QU"
        assert!(!board.check_word("quen"));
        // a lone Q does not match the QU cell
        let board = Board::new(Grid::from_strings(&["QU I"])?);
        assert!(board.check_word("qui"));
        assert!(!board.check_word("qi"));
        Ok(())
    }

    #[test]
    fn test_qu_as_letters() -> Result<()> {
        let codec = Codec::new(&[]);
        let board = Board::new(Grid::from_strings(QU_BOARD)?).with_codec(codec.clone());
        assert!(board.check_word("quen"));
        let board = Board::new(Grid::from_strings(&["QU I"])?).with_codec(codec);
        assert!(!board.check_word("qui"));
        Ok(())
    }

    #[test]
    fn test_could_fit() {
        let board = Board::default();
        assert!(board.could_fit(&board.tokenize("fool")));
        assert!(!board.could_fit(&board.tokenize("foooo")));
        assert!(!board.could_fit(&board.tokenize("")));
        assert!(!board.could_fit(&board.tokenize("ioiioiioiioiioiio")));
    }

    #[test]
    fn test_locate() {
        let board = Board::default();
        let letters = board.locate("vat");
        assert_eq!(letters["V"], vec![Coord::new(3, 0)]);
        assert_eq!(letters["A"], vec![Coord::new(3, 1)]);
        assert_eq!(letters["T"], vec![Coord::new(3, 2)]);
    }

    #[test]
    fn test_traceable_words() {
        let board = Board::default();
        let words = &["toe", "FOE", "zebra", "foe", "idea", "eon"];
        assert_eq!(board.traceable_words(words), vec!["EON", "FOE", "IDEA", "TOE"]);
    }

    #[test]
    fn test_find_words() {
        let board = Board::default();
        let wordlist = Wordlist::from_words(&["feta", "fate", "dent", "tone"], board.codec());
        assert_eq!(board.find_words(&wordlist), vec!["FATE", "FETA", "TONE"]);
    }

    #[test]
    fn test_random() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(123);
        let board = Board::random(&mut rng)?;
        assert_eq!(board.grid().cell_count(), 16);
        for (_, symbol) in board.grid().cells() {
            assert!(board.check_word(symbol));
        }
        println!("{}", board);
        Ok(())
    }
}
