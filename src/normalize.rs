// src/normalize.rs
//! Comment normalizer: case folding, noise removal and slang substitution.
//!
//! Order matters and is fixed:
//! 1. lowercase
//! 2. drop URLs (`http…` and `www` plus any following non-space run)
//! 3. drop `@mentions`
//! 4. drop `#hashtags`
//! 5. drop everything that is not a letter, number, `_` or whitespace (punctuation,
//!    emoji including variation selectors, ZWJ sequences and skin-tone modifiers)
//! 6. drop digits
//! 7. split on whitespace
//! 8. replace each token through the [`SlangMap`] (single pass, whole tokens only)
//! 9. join with single spaces and trim
//!
//! Total over all inputs; the result may be empty.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::slang::SlangMap;

static RE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www.\S+").expect("url regex"));
static RE_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("mention regex"));
static RE_HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("hashtag regex"));
static RE_SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("symbol regex"));
static RE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit regex"));
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Owns a slang map and applies the full cleaning chain.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    slang: SlangMap,
}

impl Normalizer {
    pub fn new(slang: SlangMap) -> Self {
        Self { slang }
    }

    /// Normalizer with the built-in slang table.
    pub fn builtin() -> Self {
        Self::new(SlangMap::builtin())
    }

    pub fn slang(&self) -> &SlangMap {
        &self.slang
    }

    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw, &self.slang)
    }
}

/// Clean `raw` and substitute slang. See the module docs for the step order.
pub fn normalize(raw: &str, slang: &SlangMap) -> String {
    let cleaned = clean(raw);
    let substituted = cleaned
        .split_whitespace()
        .map(|tok| slang.resolve(tok))
        .collect::<Vec<_>>()
        .join(" ");
    // Slang values may themselves hold several words.
    RE_WS.replace_all(&substituted, " ").trim().to_string()
}

/// Steps 1–6: lowercase and strip noise, without touching whitespace.
fn clean(raw: &str) -> String {
    let text = raw.to_lowercase();
    let text = RE_URL.replace_all(&text, "");
    let text = RE_MENTION.replace_all(&text, "");
    let text = RE_HASHTAG.replace_all(&text, "");
    let text = RE_SYMBOLS.replace_all(&text, "");
    RE_DIGITS.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slang(pairs: &[(&str, &str)]) -> SlangMap {
        SlangMap::new(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn empty_and_blank_inputs() {
        let m = SlangMap::default();
        assert_eq!(normalize("", &m), "");
        assert_eq!(normalize("   \t\n ", &m), "");
    }

    #[test]
    fn only_removed_elements_yield_empty() {
        let m = SlangMap::default();
        assert_eq!(normalize("https://vt.tiktok.com/abc", &m), "");
        assert_eq!(normalize("!!! ??? ...", &m), "");
        assert_eq!(normalize("😂😂🔥", &m), "");
        assert_eq!(normalize("❤️", &m), "");
        assert_eq!(normalize("👍🏻👍🏻", &m), "");
        assert_eq!(normalize("👨\u{200d}👩\u{200d}👧", &m), "");
        assert_eq!(normalize("1️⃣", &m), "");
        assert_eq!(normalize("@admin #timnas 2024", &m), "");
    }

    #[test]
    fn slang_is_token_exact() {
        let m = slang(&[("yg", "yang"), ("bgt", "banget")]);
        assert_eq!(normalize("aq yg bgt", &m), "aq yang banget");
        // no partial matches inside longer words
        assert_eq!(normalize("yguk bgtt", &m), "yguk bgtt");
    }

    #[test]
    fn slang_is_single_pass() {
        let m = slang(&[("a", "b"), ("b", "c")]);
        assert_eq!(normalize("a b", &m), "b c");
    }

    #[test]
    fn multi_word_key_never_matches() {
        let m = slang(&[("kluivert out", "kluivert keluar")]);
        assert_eq!(normalize("Kluivert OUT", &m), "kluivert out");
    }

    #[test]
    fn multi_word_value_is_expanded() {
        let m = slang(&[("gpp", "tidak apa apa")]);
        assert_eq!(normalize("gpp kok", &m), "tidak apa apa kok");
    }

    #[test]
    fn mention_and_hashtag_are_dropped_whole() {
        let m = SlangMap::default();
        assert_eq!(normalize("mantap @budi_99 #garuda!", &m), "mantap");
    }

    #[test]
    fn url_removed_from_http_onwards() {
        let m = SlangMap::default();
        assert_eq!(normalize("cek http://x.co/a?b=1 ya", &m), "cek ya");
        assert_eq!(normalize("lihat www.bola.net sekarang", &m), "lihat sekarang");
    }

    #[test]
    fn emoji_modifiers_do_not_stick_to_words() {
        let m = SlangMap::default();
        assert_eq!(normalize("mantap❤️", &m), "mantap");
        assert_eq!(normalize("keren 👨\u{200d}👩\u{200d}👧 banget👍🏽", &m), "keren banget");
        assert_eq!(normalize("gol\u{fe0f}\u{200d}", &m), "gol");
    }

    #[test]
    fn digits_removed_but_letters_kept() {
        let m = SlangMap::default();
        assert_eq!(normalize("4ku juara1 2x", &m), "ku juara x");
    }

    #[test]
    fn punctuation_inside_words_joins_them() {
        let m = SlangMap::default();
        assert_eq!(normalize("ga-jelas, o.k", &m), "gajelas ok");
    }

    #[test]
    fn normalizer_uses_builtin_table() {
        let n = Normalizer::builtin();
        assert_eq!(n.normalize("Smgt terus min!!"), "semangat terus admin");
    }
}
