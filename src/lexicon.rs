use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../config/lexicon.json");
    Lexicon::from_json(raw).expect("valid built-in sentiment lexicon")
});

/// Polarity for words that carry positive sentiment.
pub const POSITIVE: i32 = 1;
/// Polarity for words that carry negative sentiment.
pub const NEGATIVE: i32 = -1;

/// Word → polarity in {-1, 0, +1}. Lookups are total: unknown words score 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    scores: HashMap<String, i32>,
}

/// Accepted on-disk shapes: word lists or a flat `{"word": polarity}` map.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LexiconFile {
    Lists(WordLists),
    Scores(HashMap<String, i32>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WordLists {
    #[serde(default)]
    positive: Vec<String>,
    #[serde(default)]
    negative: Vec<String>,
}

impl Lexicon {
    /// Build from `(word, polarity)` pairs; a repeated word keeps its last polarity.
    pub fn new<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i32)>,
        K: Into<String>,
    {
        let mut scores = HashMap::new();
        for (word, polarity) in pairs {
            let word = word.into();
            if word.trim().is_empty() {
                bail!("lexicon contains an empty word");
            }
            if word != word.trim() || word != word.to_lowercase() {
                bail!("lexicon word {word:?} must be lowercase without surrounding whitespace");
            }
            if !(-1..=1).contains(&polarity) {
                bail!("lexicon word {word:?} has polarity {polarity}, expected -1, 0 or 1");
            }
            scores.insert(word, polarity);
        }
        Ok(Self { scores })
    }

    /// Positives are inserted first, so a word listed in both ends up negative.
    pub fn from_word_lists<P, N>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let pos = positive.into_iter().map(|w| (w.into(), POSITIVE));
        let neg = negative.into_iter().map(|w| (w.into(), NEGATIVE));
        Self::new(pos.chain(neg))
    }

    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(raw)
            .context("lexicon must be {\"positive\": [..], \"negative\": [..]} or {\"word\": polarity}")?;
        match file {
            LexiconFile::Lists(lists) => Self::from_word_lists(lists.positive, lists.negative),
            LexiconFile::Scores(map) => Self::new(map),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing lexicon {}", path.display()))
    }

    /// Polarity of `word` (0 if not in the lexicon).
    #[inline]
    pub fn get(&self, word: &str) -> i32 {
        self.scores.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
