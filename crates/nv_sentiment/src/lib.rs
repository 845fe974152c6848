pub mod aggregator;
pub mod classifier;

pub use aggregator::{aggregate, summary_sentence};
pub use classifier::{label_for_score, Classifier, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};

pub mod prelude {
    pub use super::aggregator::aggregate;
    pub use super::classifier::Classifier;
    pub use nv_core::{AnalysisDocument, Corpus, Result, SentimentLabel};
}
