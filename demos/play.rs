use anyhow::Result;
use biggle::{Board, Codec, Game, Wordlist, DEFAULT_TURNS};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;

const WORDS: &[&str] = &[
    "a", "an", "and", "ant", "are", "art", "at", "ate", "den", "dent", "die", "dine", "dot", "ear",
    "eat", "end", "era", "fen", "foe", "idea", "into", "ion", "net", "nod", "not", "note", "oat",
    "one", "ore", "quit", "quite", "rat", "rate", "red", "rest", "sat", "set", "sit", "son",
    "star", "tea", "ten", "tie", "toe", "ton", "tone", "tree", "use", "vat",
];

fn run() -> Result<()> {
    let wordlist = Wordlist::from_words(WORDS, &Codec::default());
    let mut rng = StdRng::seed_from_u64(2024);
    let board = Board::random(&mut rng)?;
    println!("{}\n", board);

    let t0 = Instant::now();
    let found = board.find_words(&wordlist);
    println!("{} words on the board in {:?}: {:?}", found.len(), t0.elapsed(), found);

    let mut game = Game::new("ann", "bob", board, DEFAULT_TURNS.min(found.len() as u32).max(1))?;
    let mut guesses = found.iter().map(String::as_str).chain(["zzz", "tree"].iter().copied());
    while let Some(player) = game.next_player().map(String::from) {
        let guess = guesses.next().unwrap_or("pass");
        let mv = game.make_move(&player, guess, &wordlist)?;
        println!("{}", mv);
    }
    if let Some(result) = game.result() {
        println!("{:?} {}", game.scores(), result);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
