//! Word frequencies over normalized comment text (the data behind a word cloud).
//!
//! Text is lowercased, reduced to `a-z` and whitespace, then stopwords and
//! words of two letters or fewer are dropped before counting.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

static RE_NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z\s]").expect("alpha regex"));

static BUILTIN: Lazy<Stopwords> = Lazy::new(|| {
    let raw = include_str!("../config/stopwords.json");
    Stopwords::from_json(raw).expect("valid built-in stopwords")
});

/// Words shorter than this never count.
pub const MIN_WORD_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    /// Common Indonesian function words plus a few TikTok fillers.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// JSON array of strings.
    pub fn from_json(raw: &str) -> Result<Self> {
        let words: Vec<String> =
            serde_json::from_str(raw).context("stopwords must be a JSON array of strings")?;
        Ok(Self::new(words))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading stopwords from {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing stopwords {}", path.display()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Top `top_n` words across `texts`, most frequent first (ties alphabetical).
pub fn word_frequencies<I, S>(texts: I, stopwords: &Stopwords, top_n: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        let lowered = text.as_ref().to_lowercase();
        let cleaned = RE_NON_ALPHA.replace_all(&lowered, "");
        for word in cleaned.split_whitespace() {
            if word.len() < MIN_WORD_LEN || stopwords.contains(word) {
                continue;
            }
            *counts.entry(word.to_string()).or_default() += 1;
        }
    }

    let mut out: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    out.truncate(top_n);
    out
}
