// tests/pipeline_examples.rs
// End-to-end behaviour of normalize → score with the built-in dictionaries.

use tiktok_sentiment_analyzer::{
    analyze_batch, normalize, score, Label, Lexicon, SentimentAnalyzer, SlangMap,
};

const CORPUS: &[&str] = &[
    "Kluivert harus out, bodoh bgt!! http://x.co @admin #timnas",
    "Dukung terus, semangat tim nasional!",
    "Biasa saja hari ini.",
    "",
    "   ",
    "😂😂😂",
    "GAK PAPA, yg penting SMGT 💪💪 #garudaDiDadaku",
    "min tolong pk pelatih d pecat aj, udh gagal 3x",
    "Mksih timnas, kalian terbaik!!! www.pssi.org",
    "ga setuju bgt sama keputusan ini",
    "Top 👍 mantap jiwa",
    "tp sy blm liat pertandingannya krn kerja",
    "mantap❤️",
    "❤️❤️ bangga 👍🏻",
    "keren 👨\u{200d}👩\u{200d}👧 timnas",
    "skor 1️⃣ kosong",
];

#[test]
fn negative_example_with_noise() {
    let a = SentimentAnalyzer::builtin();
    let (norm, r) = a.score_text("Kluivert harus out, bodoh bgt!! http://x.co @admin #timnas");
    assert_eq!(norm, "kluivert harus out bodoh banget");
    assert_eq!(r.score, -2);
    assert_eq!(r.label, Label::Negative);
}

#[test]
fn positive_example() {
    let a = SentimentAnalyzer::builtin();
    let (norm, r) = a.score_text("Dukung terus, semangat tim nasional!");
    assert_eq!(norm, "dukung terus semangat tim nasional");
    assert_eq!(r.score, 2);
    assert_eq!(r.label, Label::Positive);
}

#[test]
fn neutral_example() {
    let a = SentimentAnalyzer::builtin();
    let (norm, r) = a.score_text("Biasa saja hari ini.");
    assert_eq!(norm, "biasa saja hari ini");
    assert_eq!(r.score, 0);
    assert_eq!(r.label, Label::Neutral);
}

#[test]
fn blank_inputs_are_neutral() {
    let a = SentimentAnalyzer::builtin();
    for raw in ["", " ", "\t\n", "!!!", "🔥🔥", "@user #tag 123", "❤️", "👍🏻", "👨\u{200d}👩\u{200d}👧"] {
        let (norm, r) = a.score_text(raw);
        assert_eq!(norm, "", "input {raw:?}");
        assert_eq!(r.score, 0);
        assert_eq!(r.label, Label::Neutral);
    }
}

#[test]
fn heart_with_variation_selector_keeps_positive_word() {
    let a = SentimentAnalyzer::builtin();
    let (norm, r) = a.score_text("mantap❤️");
    assert_eq!(norm, "mantap");
    assert_eq!(r.score, 1);
    assert_eq!(r.label, Label::Positive);
}

#[test]
fn injected_slang_map_is_used() {
    let m = SlangMap::new([("yg", "yang"), ("bgt", "banget")]).unwrap();
    assert_eq!(normalize("aq yg bgt", &m), "aq yang banget");
}

#[test]
fn slang_expansion_feeds_scoring() {
    let a = SentimentAnalyzer::builtin();
    // ga → tidak (-1), setuju (+1)
    let (norm, r) = a.score_text("ga setuju bgt sama keputusan ini");
    assert_eq!(norm, "tidak setuju banget sama keputusan ini");
    assert_eq!(r.label, Label::Neutral);

    // gpp expands to three words, one of them negative
    let (norm, r) = a.score_text("gpp kalah");
    assert_eq!(norm, "tidak apa apa kalah");
    assert_eq!(r.score, -1);
}

#[test]
fn phrase_slang_key_does_not_fire() {
    let a = SentimentAnalyzer::builtin();
    let (norm, r) = a.score_text("Kluivert out!");
    assert_eq!(norm, "kluivert out");
    assert_eq!(r.score, -1);
}

#[test]
fn normalization_is_idempotent_on_corpus() {
    let m = SlangMap::builtin();
    for raw in CORPUS {
        let once = normalize(raw, &m);
        let twice = normalize(&once, &m);
        assert_eq!(once, twice, "input {raw:?}");
    }
}

#[test]
fn punctuation_that_forms_a_url_is_stripped_on_second_pass() {
    let m = SlangMap::default();
    let once = normalize("h.ttpx", &m);
    assert_eq!(once, "httpx");
    assert_eq!(normalize(&once, &m), "");
}

#[test]
fn normalized_text_is_lowercase_words_and_single_spaces() {
    let m = SlangMap::builtin();
    for raw in CORPUS {
        let n = normalize(raw, &m);
        assert!(!n.starts_with(' ') && !n.ends_with(' '), "{n:?}");
        assert!(!n.contains("  "), "{n:?}");
        assert!(
            n.chars().all(|c| c == ' ' || c == '_' || (c.is_alphabetic() && !c.is_uppercase())),
            "{n:?}"
        );
    }
}

#[test]
fn label_agrees_with_sign_of_token_sum() {
    let lx = Lexicon::builtin();
    let m = SlangMap::builtin();
    for raw in CORPUS {
        let n = normalize(raw, &m);
        let sum: i32 = n.split_whitespace().map(|t| lx.get(t)).sum();
        let r = score(&n, &lx);
        assert_eq!(r.score, sum);
        let expected = if sum > 0 {
            Label::Positive
        } else if sum < 0 {
            Label::Negative
        } else {
            Label::Neutral
        };
        assert_eq!(r.label, expected, "input {raw:?}");
    }
}

#[test]
fn batch_keeps_length_and_order() {
    let a = SentimentAnalyzer::builtin();
    let out = analyze_batch(&a, CORPUS);
    assert_eq!(out.len(), CORPUS.len());
    for (row, raw) in out.iter().zip(CORPUS) {
        assert_eq!(row.raw, *raw);
    }
    assert_eq!(out[0].label(), Label::Negative);
    assert_eq!(out[1].label(), Label::Positive);
    assert_eq!(out[2].label(), Label::Neutral);
}
