use crate::{Error, Grid};
use rand::seq::SliceRandom;
use rand::Rng;

/// A die with six faces.
pub type Die = [&'static str; 6];

/// The 16 dice of the classic game, see <http://everything2.com/title/Boggle>.
pub const CLASSIC_DICE: [Die; 16] = [
    ["A", "E", "A", "N", "E", "G"],
    ["W", "N", "G", "E", "E", "H"],
    ["A", "H", "S", "P", "C", "O"],
    ["L", "N", "H", "N", "R", "Z"],
    ["A", "S", "P", "F", "F", "K"],
    ["T", "S", "T", "I", "Y", "D"],
    ["O", "B", "J", "O", "A", "B"],
    ["O", "W", "T", "O", "A", "T"],
    ["I", "O", "T", "M", "U", "C"],
    ["E", "R", "T", "T", "Y", "L"],
    ["R", "Y", "V", "D", "E", "L"],
    ["T", "O", "E", "S", "S", "I"],
    ["L", "R", "E", "I", "X", "D"],
    ["T", "E", "R", "W", "H", "V"],
    ["E", "I", "U", "N", "E", "S"],
    ["N", "U", "I", "H", "M", "QU"],
];

/// Side of the square grid filled by `count` dice, if `count` is a square number.
fn side(count: usize) -> Option<usize> {
    (1..=count).take_while(|n| n * n <= count).find(|n| n * n == count)
}

/// Roll a new grid: shake the dice into random positions and
/// show a random face of each one.
///
/// ## Errors
/// If the dice can not fill a square grid.
/// ## Examples
/// ```
/// use biggle::{dice, Error};
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(42);
/// let grid = dice::roll(&dice::CLASSIC_DICE, &mut rng)?;
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.height(), 4);
/// # Ok::<(), Error>(())
/// ```
pub fn roll<R: Rng>(dice: &[Die], rng: &mut R) -> Result<Grid, Error> {
    let n = side(dice.len()).ok_or(Error::InvalidDiceCount(dice.len()))?;
    let mut order: Vec<&Die> = dice.iter().collect();
    order.shuffle(rng);
    let faces: Vec<String> = order
        .into_iter()
        .map(|die| String::from(die[rng.gen_range(0..die.len())]))
        .collect();
    let rows: Vec<Vec<String>> = faces.chunks(n).map(<[String]>::to_vec).collect();
    Grid::from_rows(rows)
}
