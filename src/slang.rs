//! # Slang Map
//! Informal token → canonical token, fixed once at startup.
//!
//! - Keys and values are lowercase, trimmed, non-empty strings (checked on construction).
//! - Lookup is total: an unknown token passes through unchanged.
//! - Built-in table is embedded from `config/slang.json`.
//!
//! Keys containing a space (e.g. `"kluivert out"`) are accepted but can never
//! match, because substitution works on single whitespace-separated tokens.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use std::{collections::HashMap, fs, path::Path};

static BUILTIN: Lazy<SlangMap> = Lazy::new(|| {
    let raw = include_str!("../config/slang.json");
    SlangMap::from_json(raw).expect("valid built-in slang map")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlangMap {
    entries: HashMap<String, String>,
}

impl SlangMap {
    /// Build from `(informal, canonical)` pairs. Later pairs overwrite earlier ones.
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (k, v) in pairs {
            let (k, v) = (k.into(), v.into());
            validate_entry(&k, &v)?;
            entries.insert(k, v);
        }
        Ok(Self { entries })
    }

    /// The standard Indonesian TikTok slang table.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parse a JSON object `{ "informal": "canonical", ... }`.
    pub fn from_json(raw: &str) -> Result<Self> {
        let map: HashMap<String, String> =
            serde_json::from_str(raw).context("slang map must be a JSON object of strings")?;
        Self::new(map)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading slang map from {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing slang map {}", path.display()))
    }

    /// Canonical form of `token`, or `token` itself when unmapped.
    #[inline]
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.entries.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entry(key: &str, value: &str) -> Result<()> {
    if key.trim().is_empty() || value.trim().is_empty() {
        bail!("slang entry {key:?} -> {value:?}: keys and values must be non-empty");
    }
    if key != key.trim() || value != value.trim() {
        bail!("slang entry {key:?} -> {value:?}: keys and values must not have surrounding whitespace");
    }
    if key != key.to_lowercase() || value != value.to_lowercase() {
        bail!("slang entry {key:?} -> {value:?}: keys and values must be lowercase");
    }
    Ok(())
}
