//! Lexicon-based polarity scoring and the three-way sentiment label

use crate::nlp::lexicon::{Lexicon, MAX_VALENCE};
use crate::nlp::tokenize;
use crate::SentimentError;
use std::fmt;

/// Tokens that flip the valence of the words following them
const NEGATORS: &[&str] = &[
    "not", "no", "never", "without", "nor", "neither", "cannot", "nothing", "nobody",
];

/// How many preceding tokens are checked for a negator
const NEGATION_WINDOW: usize = 2;

/// Factor applied to a negated valence
const NEGATION_FACTOR: f64 = -0.5;

/// Coarse sentiment of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Happy,
    Sad,
    Neutral,
}

impl Sentiment {
    /// Maps a polarity score to a label: `> 0` happy, `< 0` sad, otherwise neutral
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Happy
        } else if polarity < 0.0 {
            Self::Sad
        } else {
            Self::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Neutral => "neutral",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😟",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.glyph())
    }
}

/// Scores text polarity against a lexicon
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Computes the polarity of `text` in [-1.0, 1.0]
    ///
    /// Each lexicon word contributes its valence scaled to [-1, 1]; a negator
    /// in the two preceding tokens multiplies it by -0.5. The score is the
    /// mean contribution. Text with words but no lexicon hits scores 0.0.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` - The polarity
    /// * `Err(SentimentError::NoWords)` - The text has nothing to score
    pub fn polarity(&self, text: &str) -> Result<f64, SentimentError> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(SentimentError::NoWords);
        }

        let mut total = 0.0;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(valence) = self.lexicon.valence(token) else {
                continue;
            };

            let mut score = valence / MAX_VALENCE;
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                score *= NEGATION_FACTOR;
            }

            total += score;
            hits += 1;
        }

        if hits == 0 {
            return Ok(0.0);
        }

        Ok((total / hits as f64).clamp(-1.0, 1.0))
    }

    /// Classifies `text`; a scoring failure is logged and counts as neutral
    pub fn classify(&self, text: &str) -> Sentiment {
        let polarity = match self.polarity(text) {
            Ok(polarity) => polarity,
            Err(e) => {
                tracing::warn!("Sentiment scoring failed, treating as neutral: {}", e);
                0.0
            }
        };

        tracing::debug!("Polarity {:.3}", polarity);
        Sentiment::from_polarity(polarity)
    }
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}
