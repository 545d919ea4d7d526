//! Sentiment lexicon: local cache, one-time download, and loading
//!
//! The lexicon is a tab-separated file of `token<TAB>valence[<TAB>...]`
//! lines with valences on a -4..=4 scale (the VADER lexicon format).

use crate::config::NlpConfig;
use crate::LexiconError;
use reqwest::Client;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name of the lexicon inside the language data directory
pub const LEXICON_FILE: &str = "vader_lexicon.txt";

/// Absolute bound of lexicon valences
pub const MAX_VALENCE: f64 = 4.0;

/// Token → valence table
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Builds a lexicon from in-memory entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(token, valence)| (token.into().to_lowercase(), valence))
                .collect(),
        }
    }

    /// Parses lexicon file content
    ///
    /// Blank lines and lines without a numeric second field are skipped.
    ///
    /// # Returns
    ///
    /// * `Ok(Lexicon)` - At least one entry was read
    /// * `Err(LexiconError::Empty)` - Nothing usable in the content
    pub fn parse(content: &str) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().map(str::trim).unwrap_or_default();
            let valence = fields.next().and_then(|v| v.trim().parse::<f64>().ok());

            match valence {
                Some(valence) if !token.is_empty() && valence.is_finite() => {
                    entries.insert(token.to_lowercase(), valence);
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} malformed lexicon lines", skipped);
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self { entries })
    }

    /// Loads and parses a lexicon file
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Returns the valence of a token, if listed
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ensures the lexicon file exists in the language data directory
///
/// Creates the directory if needed. When the file is missing it is
/// downloaded once from `config.lexicon_url`, checked to parse, and written
/// to disk. An existing file is used as is.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the lexicon file
/// * `Err(LexiconError)` - The directory, download, or content was unusable
pub async fn ensure_lexicon(client: &Client, config: &NlpConfig) -> Result<PathBuf, LexiconError> {
    let dir = &config.data_dir;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| LexiconError::Io {
            path: dir.display().to_string(),
            source,
        })?;

    let path = dir.join(LEXICON_FILE);
    let exists = tokio::fs::try_exists(&path)
        .await
        .map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;

    if exists {
        tracing::debug!("Lexicon present at {}", path.display());
        return Ok(path);
    }

    tracing::info!(
        "Lexicon missing from {}, downloading from {}",
        dir.display(),
        config.lexicon_url
    );

    let download_error = |source| LexiconError::Download {
        url: config.lexicon_url.clone(),
        source,
    };

    let content = client
        .get(&config.lexicon_url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(download_error)?
        .text()
        .await
        .map_err(download_error)?;

    // Refuse to cache something that is not a lexicon
    Lexicon::parse(&content)?;

    tokio::fs::write(&path, content)
        .await
        .map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!("Lexicon saved to {}", path.display());
    Ok(path)
}

/// Ensures the lexicon is cached locally and loads it
pub async fn prepare_lexicon(client: &Client, config: &NlpConfig) -> Result<Lexicon, LexiconError> {
    let path = ensure_lexicon(client, config).await?;
    let lexicon = Lexicon::load(&path)?;
    tracing::info!("Loaded {} lexicon entries", lexicon.len());
    Ok(lexicon)
}
