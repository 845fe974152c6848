pub mod corpus;
pub mod source;

pub use corpus::build_corpus;
pub use source::{BingNewsSource, NewsSource, MAX_ARTICLES_PER_COMPANY};

pub mod prelude {
    pub use super::source::NewsSource;
    pub use nv_core::{Article, Corpus, Error, Result};
}
