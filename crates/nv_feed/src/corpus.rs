use nv_core::Corpus;
use tracing::{info, warn};

use crate::source::NewsSource;

/// Fetch every configured company sequentially and assemble the corpus. A
/// failed fetch is isolated to its company: the error is logged and the
/// company keeps an empty article list, so every configured key is present
/// in the result.
pub async fn build_corpus(source: &dyn NewsSource, companies: &[String]) -> Corpus {
    let mut corpus = Corpus::new();

    for company in companies {
        info!("📰 Fetching news about {} from {}", company, source.name());
        let articles = match source.fetch(company).await {
            Ok(articles) => {
                info!("Found {} news items for {}", articles.len(), company);
                articles
            }
            Err(e) => {
                warn!("Failed to fetch news for {}: {}", company, e);
                Vec::new()
            }
        };
        corpus.insert(company.clone(), articles);
    }

    corpus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BingNewsSource;
    use async_trait::async_trait;
    use nv_core::{Article, Error, Result};

    struct FlakySource;

    #[async_trait]
    impl NewsSource for FlakySource {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn fetch(&self, company: &str) -> Result<Vec<Article>> {
            if company == "Globex" {
                return Err(Error::Feed("boom".to_string()));
            }
            Ok(vec![Article {
                title: format!("{} news", company),
                url: String::new(),
                summary: "No Summary".to_string(),
                publish_date: "No Date".to_string(),
            }])
        }
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_company_with_an_empty_list() {
        let companies = vec!["Acme".to_string(), "Globex".to_string(), "Initech".to_string()];
        let corpus = build_corpus(&FlakySource, &companies).await;

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus["Acme"].len(), 1);
        assert!(corpus["Globex"].is_empty());
        assert_eq!(corpus["Initech"].len(), 1);
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_empty_lists_not_errors() {
        // Nothing listens on the discard port, so every fetch fails fast.
        let source = BingNewsSource::with_base_url("http://127.0.0.1:9").unwrap();
        let companies = vec!["Acme".to_string()];
        let corpus = build_corpus(&source, &companies).await;

        assert_eq!(corpus.len(), 1);
        assert!(corpus["Acme"].is_empty());
    }
}
