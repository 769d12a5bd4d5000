use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexicon::Lexicon;
use crate::normalize::Normalizer;

/// Three-way sentiment label. Declaration order is also the tie-break order in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Positive, Label::Negative, Label::Neutral];

    /// Sign of the summed score decides the label; zero is Neutral.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => Label::Positive,
            s if s < 0 => Label::Negative,
            _ => Label::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: i32,
    pub label: Label,
}

impl SentimentResult {
    pub fn from_score(score: i32) -> Self {
        Self {
            score,
            label: Label::from_score(score),
        }
    }
}

/// Sum token polarities of already-normalized text and classify the total.
/// Cancelling sentiment and "no lexicon hits" both come out Neutral.
pub fn score(normalized: &str, lexicon: &Lexicon) -> SentimentResult {
    let total: i32 = normalized
        .split_whitespace()
        .map(|tok| lexicon.get(tok))
        .sum();
    SentimentResult::from_score(total)
}

/// Normalizer + lexicon, both immutable after construction (safe to share across threads).
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    normalizer: Normalizer,
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    pub fn new(normalizer: Normalizer, lexicon: Lexicon) -> Self {
        Self { normalizer, lexicon }
    }

    /// Built-in slang table and lexicon.
    pub fn builtin() -> Self {
        Self::new(Normalizer::builtin(), Lexicon::builtin())
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns `(normalized, result)` for one raw comment.
    pub fn score_text(&self, raw: &str) -> (String, SentimentResult) {
        let normalized = self.normalizer.normalize(raw);
        let result = score(&normalized, &self.lexicon);
        (normalized, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_sign() {
        assert_eq!(Label::from_score(3), Label::Positive);
        assert_eq!(Label::from_score(1), Label::Positive);
        assert_eq!(Label::from_score(0), Label::Neutral);
        assert_eq!(Label::from_score(-1), Label::Negative);
        assert_eq!(Label::from_score(i32::MIN), Label::Negative);
    }

    #[test]
    fn empty_text_is_neutral() {
        let lx = Lexicon::builtin();
        assert_eq!(score("", &lx), SentimentResult::from_score(0));
        assert_eq!(score("   ", &lx).label, Label::Neutral);
    }

    #[test]
    fn cancelling_words_are_neutral() {
        let lx = Lexicon::builtin();
        let r = score("mantap tapi kecewa", &lx);
        assert_eq!(r.score, 0);
        assert_eq!(r.label, Label::Neutral);
    }

    #[test]
    fn repeated_words_accumulate() {
        let lx = Lexicon::builtin();
        let r = score("mantap mantap mantap parah", &lx);
        assert_eq!(r.score, 2);
        assert_eq!(r.label, Label::Positive);
    }

    #[test]
    fn multi_word_lexicon_entries_are_inert() {
        let lx = Lexicon::builtin();
        // "luar biasa" is a lexicon key but never a single token.
        assert_eq!(score("luar biasa", &lx).score, 0);
        // "tidak setuju" splits into tidak (-1) + setuju (+1).
        assert_eq!(score("tidak setuju", &lx).score, 0);
    }

    #[test]
    fn analyzer_scores_raw_text() {
        let a = SentimentAnalyzer::builtin();
        let (norm, r) = a.score_text("Gak bgt, BODOH!!");
        assert_eq!(norm, "tidak banget bodoh");
        assert_eq!(r.score, -2);
        assert_eq!(r.label, Label::Negative);
    }

    #[test]
    fn label_serializes_by_name() {
        let r = SentimentResult::from_score(-2);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"score":-2,"label":"Negative"}"#);
    }
}
