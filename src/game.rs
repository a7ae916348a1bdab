use crate::score::points_for;
use crate::{Board, Dictionary, Error};
use log::debug;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Number of turns in a game when the players do not ask for another number.
pub const DEFAULT_TURNS: u32 = 20;

/// How a guessed word was judged.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The dictionary does not know the word
    NotInDictionary,
    /// Someone already found the word in this game
    AlreadyFound,
    /// The word can not be traced on the board
    NotOnBoard,
    /// The word is accepted, for this many points
    Correct(u32),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::NotInDictionary => write!(f, "not in the dictionary"),
            Verdict::AlreadyFound => write!(f, "already found"),
            Verdict::NotOnBoard => write!(f, "not on the board"),
            Verdict::Correct(1) => write!(f, "correct, 1 point"),
            Verdict::Correct(points) => write!(f, "correct, {} points", points),
        }
    }
}

/// One turn in the history of a game.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// player who made the move
    pub player: String,
    /// guessed word, normalized
    pub word: String,
    pub verdict: Verdict,
}

impl Move {
    /// Points earned by this move
    pub fn points(&self) -> u32 {
        match self.verdict {
            Verdict::Correct(points) => points,
            _ => 0,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: \"{}\" {}", self.player, self.word, self.verdict)
    }
}

/// Outcome of a finished game.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// All turns were played and this player has most points
    Winner(String),
    /// All turns were played and both players have the same points
    Draw,
    /// The loser cancelled the game
    Forfeit { winner: String, loser: String },
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameResult::Winner(winner) => write!(f, "{} wins!", winner),
            GameResult::Draw => write!(f, "It's a draw!"),
            GameResult::Forfeit { winner, loser } => {
                write!(f, "{} cancelled the game. {} wins!", loser, winner)
            }
        }
    }
}

/// A game between two players taking turns on one board.
///
/// Each move uses up a turn, whether the word is accepted or not.
/// The game ends when all turns are played or a player cancels.
/// ## Examples
/// ```
/// # use biggle::{Board, Codec, Error, Game, Verdict, Wordlist};
/// let wordlist = Wordlist::from_words(&["idea", "foe"], &Codec::default());
/// let mut game = Game::new("ann", "bob", Board::default(), 2)?;
/// assert_eq!(game.make_move("ann", "idea", &wordlist)?.verdict, Verdict::Correct(1));
/// assert_eq!(game.make_move("bob", "ideas", &wordlist)?.verdict, Verdict::NotInDictionary);
/// assert!(game.is_over());
/// println!("{}", game.result().unwrap());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    players: [String; 2],
    board: Board,
    turns_allowed: u32,
    turns_remaining: u32,
    next: usize,
    scores: [u32; 2],
    words_found: Vec<String>,
    history: Vec<Move>,
    result: Option<GameResult>,
}

impl Game {
    /// Start a new game of `turns` turns. `player1` moves first.
    /// ## Errors
    /// If `turns` is 0, or both players have the same name.
    pub fn new(player1: &str, player2: &str, board: Board, turns: u32) -> Result<Game, Error> {
        if turns == 0 {
            return Err(Error::InvalidTurns(turns));
        }
        if player1 == player2 {
            return Err(Error::SamePlayer(String::from(player1)));
        }
        debug!("new game {} vs {} with {} turns", player1, player2, turns);
        Ok(Game {
            players: [String::from(player1), String::from(player2)],
            board,
            turns_allowed: turns,
            turns_remaining: turns,
            next: 0,
            scores: [0, 0],
            words_found: Vec::new(),
            history: Vec::new(),
            result: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> [&str; 2] {
        [self.players[0].as_str(), self.players[1].as_str()]
    }

    pub fn turns_allowed(&self) -> u32 {
        self.turns_allowed
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// The player to move, or None when the game is over.
    pub fn next_player(&self) -> Option<&str> {
        if self.is_over() {
            None
        } else {
            Some(self.players[self.next].as_str())
        }
    }

    /// Points of `player`, or None if they do not play in this game.
    pub fn score(&self, player: &str) -> Option<u32> {
        self.index_of(player).map(|i| self.scores[i])
    }

    /// Points of both players, in the order they were given to [`new`](Game::new).
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// Accepted words, in the order they were found.
    pub fn words_found(&self) -> &[String] {
        &self.words_found
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    fn index_of(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    /// `player` guesses `guess`. The word is judged in order:
    /// known to `dictionary`, not found before, traceable on the board.
    /// The turn passes to the other player whatever the verdict.
    ///
    /// ## Errors
    /// Without using up a turn, if the game is over, `player` is not in the game,
    /// or it is not their turn.
    pub fn make_move<D>(&mut self, player: &str, guess: &str, dictionary: &D) -> Result<Move, Error>
    where
        D: Dictionary + ?Sized,
    {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let index = self
            .index_of(player)
            .ok_or_else(|| Error::NotAPlayer(String::from(player)))?;
        if index != self.next {
            return Err(Error::NotYourTurn(String::from(player)));
        }
        self.next = 1 - self.next;
        self.turns_remaining -= 1;

        let word = self.board.codec().normalize(guess);
        let verdict = if !dictionary.contains(&word) {
            Verdict::NotInDictionary
        } else if self.words_found.contains(&word) {
            Verdict::AlreadyFound
        } else if !self.board.check_word(&word) {
            Verdict::NotOnBoard
        } else {
            let points = points_for(&word);
            self.scores[index] += points;
            self.words_found.push(word.clone());
            Verdict::Correct(points)
        };
        let mv = Move {
            player: String::from(player),
            word,
            verdict,
        };
        debug!("{}", mv);
        self.history.push(mv.clone());

        if self.turns_remaining == 0 {
            self.finish();
        }
        Ok(mv)
    }

    fn finish(&mut self) {
        let [a, b] = self.scores;
        let result = match a.cmp(&b) {
            Ordering::Greater => GameResult::Winner(self.players[0].clone()),
            Ordering::Less => GameResult::Winner(self.players[1].clone()),
            Ordering::Equal => GameResult::Draw,
        };
        debug!("game over: {}", result);
        self.result = Some(result);
    }

    /// `player` gives up, the other player wins.
    /// ## Errors
    /// If the game is over, or `player` is not in the game.
    pub fn cancel(&mut self, player: &str) -> Result<&GameResult, Error> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let index = self
            .index_of(player)
            .ok_or_else(|| Error::NotAPlayer(String::from(player)))?;
        let result = GameResult::Forfeit {
            winner: self.players[1 - index].clone(),
            loser: self.players[index].clone(),
        };
        debug!("{}", result);
        Ok(self.result.get_or_insert(result))
    }
}

/// Mean number of turns remaining over the games still in progress,
/// or None if all games are over.
pub fn average_turns_remaining(games: &[Game]) -> Option<f64> {
    let open: Vec<u32> = games
        .iter()
        .filter(|game| !game.is_over())
        .map(Game::turns_remaining)
        .collect();
    if open.is_empty() {
        return None;
    }
    let total: u32 = open.iter().sum();
    Some(f64::from(total) / open.len() as f64)
}

/// The games `player` takes part in, finished or not.
pub fn games_of<'a>(games: &'a [Game], player: &str) -> Vec<&'a Game> {
    games
        .iter()
        .filter(|game| game.index_of(player).is_some())
        .collect()
}

/// Record of one player over a set of finished games.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    pub player: String,
    pub wins: u32,
    /// a cancelled game counts as a loss
    pub losses: u32,
    pub draws: u32,
    /// moves made, accepted or not
    pub guesses: u32,
}

impl Ranking {
    fn new(player: &str) -> Ranking {
        Ranking {
            player: String::from(player),
            ..Ranking::default()
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Percentage of games won, 0 without games.
    pub fn win_percentage(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => 100.0 * f64::from(self.wins) / f64::from(n),
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:<12} {:>3}W {:>3}L {:>3}D {:>6.1}%",
            self.player,
            self.wins,
            self.losses,
            self.draws,
            self.win_percentage()
        )
    }
}

/// Rank the players of the finished `games`: highest win percentage first,
/// then most wins, then by name. Games in progress are ignored.
pub fn rankings(games: &[Game]) -> Vec<Ranking> {
    let mut table: BTreeMap<&str, Ranking> = BTreeMap::new();
    for game in games {
        let result = match game.result() {
            Some(result) => result,
            None => continue,
        };
        for &player in game.players().iter() {
            let ranking = table.entry(player).or_insert_with(|| Ranking::new(player));
            ranking.guesses += game.history.iter().filter(|mv| mv.player == player).count() as u32;
            match result {
                GameResult::Draw => ranking.draws += 1,
                GameResult::Winner(winner) | GameResult::Forfeit { winner, .. } => {
                    if winner == player {
                        ranking.wins += 1;
                    } else {
                        ranking.losses += 1;
                    }
                }
            }
        }
    }
    let mut rankings: Vec<Ranking> = table.into_iter().map(|(_, ranking)| ranking).collect();
    rankings.sort_by(|a, b| {
        b.win_percentage()
            .partial_cmp(&a.win_percentage())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.wins.cmp(&a.wins))
            .then_with(|| a.player.cmp(&b.player))
    });
    debug!("ranked {} players", rankings.len());
    rankings
}
