// src/config/app.rs
//! Application settings from TOML, with built-in defaults for every key.
//!
//! Lookup order:
//! 1) explicit path (CLI `--config`)
//! 2) $SENTIMENT_CONFIG_PATH
//! 3) config/app.toml (optional; absent file means defaults)

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::normalize::Normalizer;
use crate::sentiment::SentimentAnalyzer;
use crate::slang::SlangMap;
use crate::wordcloud::Stopwords;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.toml";
pub const ENV_CONFIG_PATH: &str = "SENTIMENT_CONFIG_PATH";

fn default_input() -> PathBuf {
    PathBuf::from("dataset.csv")
}
fn default_delimiter() -> String {
    ";".to_string()
}
fn default_text_column() -> String {
    "Content".to_string()
}
fn default_sample_size() -> usize {
    3
}
fn default_workers() -> usize {
    1
}
fn default_top_words() -> usize {
    20
}
fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// CSV file with one comment per record.
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Single ASCII character, e.g. ";" or ",".
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_text_column")]
    pub text_column: String,
    /// Comments shown per label in the console report.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_top_words")]
    pub top_words: usize,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub slang_path: Option<PathBuf>,
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            delimiter: default_delimiter(),
            text_column: default_text_column(),
            sample_size: default_sample_size(),
            workers: default_workers(),
            top_words: default_top_words(),
            bind: default_bind(),
            slang_path: None,
            lexicon_path: None,
            stopwords_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(s).context("invalid app config TOML")?;
        cfg.delimiter_byte()?;
        Ok(cfg)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("loading {}", path.display()))
    }

    /// Resolve the config file (see module docs). Explicit or env paths must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Self::load_from_file(p);
        }
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            return Self::load_from_file(&pb);
        }
        let default = Path::new(DEFAULT_CONFIG_PATH);
        if default.exists() {
            return Self::load_from_file(default);
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => bail!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ),
        }
    }

    pub fn slang(&self) -> Result<SlangMap> {
        match &self.slang_path {
            Some(p) => SlangMap::load_from_file(p),
            None => Ok(SlangMap::builtin()),
        }
    }

    pub fn lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon_path {
            Some(p) => Lexicon::load_from_file(p),
            None => Ok(Lexicon::builtin()),
        }
    }

    pub fn stopwords(&self) -> Result<Stopwords> {
        match &self.stopwords_path {
            Some(p) => Stopwords::load_from_file(p),
            None => Ok(Stopwords::builtin()),
        }
    }

    /// Build the analyzer once; dictionaries stay read-only afterwards.
    pub fn build_analyzer(&self) -> Result<SentimentAnalyzer> {
        let analyzer = SentimentAnalyzer::new(Normalizer::new(self.slang()?), self.lexicon()?);
        debug!(
            slang = analyzer.normalizer().slang().len(),
            lexicon = analyzer.lexicon().len(),
            "dictionaries ready"
        );
        Ok(analyzer)
    }
}
