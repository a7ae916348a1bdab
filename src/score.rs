/// Points earned by finding `word`, by the number of letters (the standard boggle scheme).
///
/// Letters are counted on the normalized word, so a `QU` face counts as two.
///
/// | letters | points |
/// |---|---|
/// | 0-2 | 0 |
/// | 3-4 | 1 |
/// | 5 | 2 |
/// | 6 | 3 |
/// | 7 | 5 |
/// | 8+ | 11 |
/// ## Examples
/// ```
/// use biggle::points_for;
/// assert_eq!(points_for("CAT"), 1);
/// assert_eq!(points_for("ELEPHANTS"), 11);
/// ```
pub fn points_for(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3..=4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}
