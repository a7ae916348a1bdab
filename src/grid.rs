use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

/// The fixed 4x4 board used before random boards were rolled.
const DEFAULT_BOARD: [&str; 4] = ["I O F V", "I D E A", "F O E T", "L N O L"];

/// Position of a cell on the grid: column `x` and row `y`, both zero based.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Coord {
        Coord { x, y }
    }

    /// Check if `other` is one king move away: horizontally, vertically or diagonally.
    /// A cell is never adjacent to itself.
    /// ## Examples
    /// ```
    /// use biggle::Coord;
    /// assert!(Coord::new(0, 0).is_adjacent(Coord::new(1, 1)));
    /// assert!(!Coord::new(0, 0).is_adjacent(Coord::new(2, 0)));
    /// assert!(!Coord::new(1, 1).is_adjacent(Coord::new(1, 1)));
    /// ```
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

type Inner = Vec<Vec<String>>;

/// A grid of cells, each showing a symbol: a letter like `"A"` or a multi-letter face like `"QU"`.
///
/// Rows are stored top to bottom. Game boards are square, but any rectangular
/// arrangement is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<String>>")
)]
pub struct Grid(Inner);

impl TryFrom<Inner> for Grid {
    type Error = Error;
    fn try_from(rows: Inner) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The fixed 4x4 demo board
    /// ## Example
    /// ```
    /// # use biggle::Grid;
    /// let grid = Grid::default();
    /// println!("{}", grid);
    /// ```
    fn default() -> Grid {
        // DEFAULT_BOARD is a valid square grid
        Grid::from_strings(&DEFAULT_BOARD).unwrap()
    }
}

impl Grid {
    /// Create a `Grid` from rows of symbols.
    ///
    /// ## Errors
    /// If the grid has no cells, the rows differ in length or a symbol is empty.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Grid, Error> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(Error::EmptyGrid);
        }
        for row in &rows {
            if row.len() != width {
                return Err(Error::InvalidRowLength(row.join(" "), row.len(), width));
            }
            if let Some(symbol) = row.iter().find(|s| s.trim().is_empty()) {
                return Err(Error::InvalidSymbol(symbol.clone()));
            }
        }
        Ok(Grid(rows))
    }

    /// Create a `Grid` from strings.
    /// Each string is a row of symbols separated by whitespace.
    ///
    /// ## Errors
    /// See [`from_rows`](Grid::from_rows).
    /// ## Examples
    /// ```
    /// # use biggle::{Grid, Error};
    /// let grid = Grid::from_strings(&["A B", "C QU"])?;
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid[1][1], "QU");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Grid, Error> {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.as_ref().split_whitespace().map(String::from).collect())
            .collect();
        Grid::from_rows(rows)
    }

    /// Get grid rows as strings, symbols joined by spaces
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|row| row.join(" ")).collect()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// Symbol at `coord`, or None when outside the grid.
    pub fn get(&self, coord: Coord) -> Option<&str> {
        self.0
            .get(coord.y)
            .and_then(|row| row.get(coord.x))
            .map(String::as_str)
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &str)> + '_ {
        self.0.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, symbol)| (Coord::new(x, y), symbol.as_str()))
        })
    }
}
