use nv_core::{
    AnalysisDocument, ArticleAnalysis, CompanyAnalysis, Corpus, SentimentDistribution,
    SentimentLabel,
};
use tracing::info;

use crate::classifier::Classifier;

const SUMMARY_PREFIX: &str = "Overall, the company's recent news coverage is mostly ";
const POSITIVE_SUMMARY: &str = "positive, indicating a strong outlook.";
const NEGATIVE_SUMMARY: &str = "negative, signaling potential concerns.";
const NEUTRAL_SUMMARY: &str = "neutral, with mixed viewpoints.";

/// Narrative sentence for a company's distribution, chosen by simple
/// majority between Positive and Negative; any tie reads as neutral.
pub fn summary_sentence(distribution: &SentimentDistribution) -> String {
    let verdict = match distribution.dominant() {
        SentimentLabel::Positive => POSITIVE_SUMMARY,
        SentimentLabel::Negative => NEGATIVE_SUMMARY,
        SentimentLabel::Neutral => NEUTRAL_SUMMARY,
    };
    format!("{}{}", SUMMARY_PREFIX, verdict)
}

/// Fold the corpus into the analysis document: classify every article's
/// summary, tally the per-company distribution, and attach the narrative
/// sentence. A company with no articles yields all-zero counts and the
/// neutral sentence.
pub fn aggregate(corpus: &Corpus, classifier: &Classifier) -> AnalysisDocument {
    corpus
        .iter()
        .map(|(company, articles)| {
            let mut distribution = SentimentDistribution::default();
            let analyzed = articles
                .iter()
                .map(|article| {
                    let sentiment = classifier.classify(&article.summary);
                    distribution.record(sentiment);
                    ArticleAnalysis {
                        title: article.title.clone(),
                        summary: article.summary.clone(),
                        sentiment,
                    }
                })
                .collect();

            info!(
                "Analyzed {}: {} positive / {} negative / {} neutral",
                company, distribution.positive, distribution.negative, distribution.neutral
            );

            let analysis = CompanyAnalysis {
                company: company.clone(),
                articles: analyzed,
                final_summary: Some(summary_sentence(&distribution)),
                distribution: Some(distribution),
            };
            (company.clone(), analysis)
        })
        .collect()
}
