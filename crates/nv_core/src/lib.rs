pub mod config;
pub mod documents;
pub mod error;
pub mod types;

pub use config::{narration_path, Config};
pub use error::Error;
pub use types::{
    AnalysisDocument, Article, ArticleAnalysis, CompanyAnalysis, Corpus, SentimentDistribution,
    SentimentLabel,
};

pub type Result<T> = std::result::Result<T, Error>;
