use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A normalized news item as fetched from the feed. Immutable once written;
/// the `url` is percent-decoded before it ever reaches a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub publish_date: String,
}

/// Company name -> fetched articles, in feed order. Every configured company
/// is present as a key even when its fetch failed (empty list, not a missing
/// key).
pub type Corpus = BTreeMap<String, Vec<Article>>;

/// Three-way sentiment category derived from a compound polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Per-company tally of article sentiments. Counts always sum to the number
/// of classified articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive")]
    pub positive: u32,
    #[serde(rename = "Negative")]
    pub negative: u32,
    #[serde(rename = "Neutral")]
    pub neutral: u32,
}

impl SentimentDistribution {
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }

    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Majority rule: a tie between Positive and Negative is Neutral, even
    /// when both outnumber the Neutral count.
    pub fn dominant(&self) -> SentimentLabel {
        if self.positive > self.negative {
            SentimentLabel::Positive
        } else if self.negative > self.positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// One classified article inside a company's analysis entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentLabel,
}

/// Aggregated sentiment for one company. The distribution and final summary
/// are optional on the wire so a partially written upstream record can still
/// be deserialized and skipped instead of poisoning the whole document; the
/// aggregator always writes both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAnalysis {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<ArticleAnalysis>,
    #[serde(rename = "Sentiment Distribution", default)]
    pub distribution: Option<SentimentDistribution>,
    #[serde(rename = "Final Sentiment Analysis", default)]
    pub final_summary: Option<String>,
}

/// Company name -> aggregated analysis, the pipeline's second durable
/// artifact.
pub type AnalysisDocument = BTreeMap<String, CompanyAnalysis>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_tally_sums_to_total() {
        let mut dist = SentimentDistribution::default();
        dist.record(SentimentLabel::Positive);
        dist.record(SentimentLabel::Positive);
        dist.record(SentimentLabel::Negative);
        dist.record(SentimentLabel::Neutral);
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.positive, 2);
        assert_eq!(dist.negative, 1);
        assert_eq!(dist.neutral, 1);
    }

    #[test]
    fn majority_rule_with_ties() {
        let dist = SentimentDistribution { positive: 3, negative: 1, neutral: 0 };
        assert_eq!(dist.dominant(), SentimentLabel::Positive);

        let dist = SentimentDistribution { positive: 1, negative: 4, neutral: 0 };
        assert_eq!(dist.dominant(), SentimentLabel::Negative);

        let dist = SentimentDistribution { positive: 1, negative: 1, neutral: 5 };
        assert_eq!(dist.dominant(), SentimentLabel::Neutral);

        // Positive and Negative tied above Neutral is still a tie.
        let dist = SentimentDistribution { positive: 3, negative: 3, neutral: 1 };
        assert_eq!(dist.dominant(), SentimentLabel::Neutral);

        let dist = SentimentDistribution::default();
        assert_eq!(dist.dominant(), SentimentLabel::Neutral);
    }

    #[test]
    fn analysis_entry_uses_external_key_casing() {
        let entry = CompanyAnalysis {
            company: "Acme".to_string(),
            articles: vec![ArticleAnalysis {
                title: "A".to_string(),
                summary: "great results".to_string(),
                sentiment: SentimentLabel::Positive,
            }],
            distribution: Some(SentimentDistribution { positive: 1, negative: 0, neutral: 0 }),
            final_summary: Some("fine".to_string()),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["Company"], "Acme");
        assert_eq!(json["Articles"][0]["Sentiment"], "Positive");
        assert_eq!(json["Sentiment Distribution"]["Positive"], 1);
        assert_eq!(json["Final Sentiment Analysis"], "fine");
    }

    #[test]
    fn labels_have_stable_display_names() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn partial_analysis_entry_still_deserializes() {
        let json = r#"{"Company": "Acme", "Articles": []}"#;
        let entry: CompanyAnalysis = serde_json::from_str(json).unwrap();
        assert!(entry.distribution.is_none());
        assert!(entry.final_summary.is_none());
    }
}
