/// String corresponding to a grid symbol, e.g. `"A"` or `"QU"`.
pub type Token = String;

/// A list of `Token`'s
pub type Tokens = Vec<Token>;

/// Multi-letter faces on the classic dice.
const DEFAULT_FACES: &[&str] = &["QU"];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
/// Translate words to the symbols found on grid cells.
///
/// Most symbols are a single letter. A die can also carry a multi-letter face
/// like `QU`, which is matched as one atomic symbol:
/// - `"QUIT"` tokenizes to `QU`, `I`, `T`, so it only matches a `QU` cell,
/// - a lone `Q` never matches a `QU` cell.
pub struct Codec {
    faces: Vec<String>,
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::new(DEFAULT_FACES)
    }
}

impl From<Vec<String>> for Codec {
    fn from(faces: Vec<String>) -> Codec {
        let faces: Vec<&str> = faces.iter().map(String::as_str).collect();
        Codec::new(&faces)
    }
}

impl From<Codec> for Vec<String> {
    fn from(codec: Codec) -> Vec<String> {
        codec.faces
    }
}

impl Codec {
    /// Return a new `Codec` for single letters, extended with the multi-letter faces from `extend`.
    /// ## Examples
    /// ```
    /// use biggle::Codec;
    /// let codec = Codec::new(&["QU", "TH"]);
    /// assert_eq!(codec.tokenize("THQUE"), vec!["TH", "QU", "E"]);
    /// ```
    pub fn new(extend: &[&str]) -> Codec {
        let mut faces: Vec<String> = extend
            .iter()
            .map(|s| s.to_uppercase())
            .filter(|s| s.chars().count() > 1)
            .collect();
        // longest face wins
        faces.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        faces.dedup();
        Codec { faces }
    }

    /// The multi-letter faces known to this codec.
    pub fn faces(&self) -> &[String] {
        &self.faces
    }

    /// Upper-case and trim a word, the form used on the grid.
    pub fn normalize(&self, word: &str) -> String {
        word.trim().to_uppercase()
    }

    /// Split `word` into grid symbols, matching multi-letter faces greedily.
    /// The word is expected to be normalized already.
    pub fn tokenize(&self, word: &str) -> Tokens {
        let mut tokens = Tokens::new();
        let mut rest = word;
        while let Some(ch) = rest.chars().next() {
            let len = self
                .faces
                .iter()
                .find(|face| rest.starts_with(face.as_str()))
                .map_or(ch.len_utf8(), String::len);
            let (token, tail) = rest.split_at(len);
            tokens.push(Token::from(token));
            rest = tail;
        }
        tokens
    }

    /// Join tokens back into a word.
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        tokens.iter().map(AsRef::as_ref).collect()
    }
}
