use crate::grid::Coord;
use crate::locate::LetterMap;
use log::trace;
use tinyvec::TinyVec;

/// A traced route over the grid, one coordinate per symbol of the word.
/// Stored inline for words up to the size of a 4x4 grid.
pub type Path = TinyVec<[Coord; 16]>;

/// Check if `word` can be traced on the grid described by `letters`
/// (the result of [`locate`](crate::locate)).
///
/// A trace visits one cell per symbol, every step goes to an adjacent cell
/// (diagonals included) and no cell is visited twice.
/// ## Examples
/// ```
/// # use biggle::{is_traceable, locate, Grid, Error};
/// let grid = Grid::from_strings(&["A B", "C D"])?;
/// let word = ["A", "D", "B"];
/// assert!(is_traceable(&word, &locate(&word, &grid)));
/// let word = ["A", "D", "A"];
/// assert!(!is_traceable(&word, &locate(&word, &grid)));
/// # Ok::<(), Error>(())
/// ```
pub fn is_traceable<S: AsRef<str>>(word: &[S], letters: &LetterMap) -> bool {
    find_path(word, letters).is_some()
}

/// Find the first route tracing `word`, or None if there is none.
///
/// Candidates are tried in the order given by `letters`, so the result is
/// the same for every call with the same input. An empty word has no route.
pub fn find_path<S: AsRef<str>>(word: &[S], letters: &LetterMap) -> Option<Path> {
    if word.is_empty() {
        return None;
    }
    let mut candidates: Vec<&[Coord]> = Vec::with_capacity(word.len());
    for symbol in word.iter().map(AsRef::as_ref) {
        match letters.get(symbol) {
            Some(coords) if !coords.is_empty() => candidates.push(coords),
            _ => {
                trace!("no cell for {:?}", symbol);
                return None;
            }
        }
    }
    // a symbol needed more often than it occurs can not be traced without reusing a cell
    for symbol in word.iter().map(AsRef::as_ref) {
        let needed = word.iter().map(AsRef::as_ref).filter(|&s| s == symbol).count();
        if needed > letters[symbol].len() {
            trace!("{:?} needed {} times", symbol, needed);
            return None;
        }
    }
    let mut path = Path::default();
    if extend(&candidates, &mut path) {
        Some(path)
    } else {
        None
    }
}

/// Depth first search: append a candidate for the next position to `path`
/// and recurse, dropping a branch as soon as a cell repeats or a step is not adjacent.
fn extend(candidates: &[&[Coord]], path: &mut Path) -> bool {
    let depth = path.len();
    if depth == candidates.len() {
        return true;
    }
    for &coord in candidates[depth] {
        if path.contains(&coord) {
            continue;
        }
        if let Some(&last) = path.last() {
            if !last.is_adjacent(coord) {
                continue;
            }
        }
        path.push(coord);
        if extend(candidates, path) {
            return true;
        }
        path.pop();
    }
    trace!("dead end at depth {} after {:?}", depth, path.as_slice());
    false
}
