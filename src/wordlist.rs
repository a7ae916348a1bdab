use crate::{Codec, Error};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::read_to_string;

/// A word validity oracle, consulted before a word is looked up on the grid.
///
/// Words are passed normalized (see [`Codec::normalize`]). Any closure
/// `Fn(&str) -> bool` is a dictionary, so a remote lookup can be plugged in
/// by the caller.
pub trait Dictionary {
    /// Returns true if `word` is a valid word.
    fn contains(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

#[derive(Debug, Clone, Default)]
/// An in-memory list of words, kept normalized and sorted.
pub struct Wordlist {
    words: BTreeSet<String>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

impl Dictionary for Wordlist {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Wordlist {
    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line. Blank lines are skipped.
    /// ## Errors
    /// Fails if the wordlist can not be read.
    pub fn from_file(wordfile: &str, codec: &Codec) -> Result<Wordlist, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = Wordlist::from_lines(contents.lines(), codec);
        wordlist.wordfile = String::from(wordfile);
        log::debug!("{}", wordlist);
        Ok(wordlist)
    }

    /// Build a wordlist from a list of words.
    /// ## Examples
    /// ```
    /// use biggle::{Codec, Dictionary, Wordlist};
    /// let wordlist = Wordlist::from_words(&["idea", "Foe"], &Codec::default());
    /// assert!(wordlist.contains("FOE"));
    /// assert!(!wordlist.contains("foe"));
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S], codec: &Codec) -> Wordlist {
        Wordlist::from_lines(words.iter().map(AsRef::as_ref), codec)
    }

    fn from_lines<'a, I: Iterator<Item = &'a str>>(lines: I, codec: &Codec) -> Wordlist {
        let words = lines
            .map(|word| codec.normalize(word))
            .filter(|word| !word.is_empty())
            .collect();
        Wordlist {
            words,
            wordfile: String::new(),
        }
    }

    /// The number of words in the wordlist
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// The words as a sorted list.
    pub fn words(&self) -> Vec<&str> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const WORDS: &[&str] = &["foe", "idea", "fed", "Fend", "", "  toe "];

    fn test_wordlist() -> Wordlist {
        Wordlist::from_words(WORDS, &Codec::default())
    }

    #[test]
    fn test_from_words() {
        let wordlist = test_wordlist();
        assert_eq!(wordlist.len(), 5);
        assert_eq!(wordlist.words(), vec!["FED", "FEND", "FOE", "IDEA", "TOE"]);
        assert!(wordlist.contains("TOE"));
        assert!(!wordlist.contains(""));
        assert_eq!(wordlist.to_string(), "<Wordlist: 5 words from ''>");
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let path = std::env::temp_dir().join(format!("biggle-words-{}.txt", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "quiet\nfoe\n\nidea").unwrap();
        let wordlist = Wordlist::from_file(path.to_str().unwrap(), &Codec::default())?;
        std::fs::remove_file(&path).unwrap();
        assert_eq!(wordlist.words(), vec!["FOE", "IDEA", "QUIET"]);
        assert!(wordlist.wordfile.ends_with(".txt"));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "ReadError")]
    fn test_from_missing_file() {
        Wordlist::from_file("no/such/wordlist.txt", &Codec::default()).unwrap();
    }

    #[test]
    fn test_closure_dictionary() {
        let oracle = |word: &str| word.len() > 2;
        assert!(oracle.contains("FOE"));
        assert!(!Dictionary::contains(&oracle, "OF"));
    }
}
