use nv_core::SentimentLabel;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound scores at or above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Threshold a compound polarity score in [-1, 1] into a three-way label.
/// Both boundaries are inclusive.
pub fn label_for_score(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Owns the VADER analyzer. Constructing the analyzer parses the lexicon, so
/// one classifier is built per stage and shared by reference across every
/// article instead of being rebuilt per call.
pub struct Classifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Classify a piece of article text. Empty text is Neutral without
    /// invoking the scorer.
    pub fn classify(&self, text: &str) -> SentimentLabel {
        if text.is_empty() {
            return SentimentLabel::Neutral;
        }
        let scores = self.analyzer.polarity_scores(text);
        label_for_score(scores.get("compound").copied().unwrap_or(0.0))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
