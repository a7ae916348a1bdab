use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// A grid needs at least one row and one column
    #[error("Grid has no cells")]
    EmptyGrid,

    /// All rows of a grid must have the same length
    #[error("Invalid row \"{0}\": length {1}, expect {2}")]
    InvalidRowLength(String, usize, usize),

    /// A grid cell can not be empty
    #[error("Invalid grid symbol: \"{0}\"")]
    InvalidSymbol(String),

    /// Dice must fill a square grid
    #[error("Invalid number of dice {0} (expect a square number)")]
    InvalidDiceCount(usize),

    /// A game needs at least one turn
    #[error("Invalid number of turns {0}")]
    InvalidTurns(u32),

    /// A game needs two different players
    #[error("Player \"{0}\" can not play against themselves")]
    SamePlayer(String),

    /// The game has ended
    #[error("Game already over")]
    GameOver,

    /// Player does not take part in the game
    #[error("Player \"{0}\" is not playing in this game")]
    NotAPlayer(String),

    /// Player tried to move out of turn
    #[error("It is not the turn of \"{0}\"")]
    NotYourTurn(String),
}
