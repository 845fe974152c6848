use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::types::{AnalysisDocument, Corpus};
use crate::{Error, Result};

/// Serialize a document as pretty-printed UTF-8 JSON, creating the
/// containing directory if needed. The write replaces any previous version
/// of the document.
pub async fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(document)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Read a document back. A missing file is `MissingInput` so callers can
/// abort their stage with a clear diagnostic instead of fabricating data; a
/// file that does not parse as the expected shape is `MalformedInput`.
pub async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingInput(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_slice(&raw)
        .map_err(|e| Error::MalformedInput(format!("{}: {}", path.display(), e)))
}

pub async fn write_corpus(path: &Path, corpus: &Corpus) -> Result<()> {
    write_document(path, corpus).await
}

pub async fn read_corpus(path: &Path) -> Result<Corpus> {
    read_document(path).await
}

pub async fn write_analysis(path: &Path, analysis: &AnalysisDocument) -> Result<()> {
    write_document(path, analysis).await
}

pub async fn read_analysis(path: &Path) -> Result<AnalysisDocument> {
    read_document(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Article;
    use std::collections::BTreeMap;

    fn sample_corpus() -> Corpus {
        let mut corpus = BTreeMap::new();
        corpus.insert(
            "Acme".to_string(),
            vec![
                Article {
                    title: "A".to_string(),
                    url: "https://example.com/a".to_string(),
                    summary: "great results".to_string(),
                    publish_date: "Mon, 01 Jan 2024 00:00:00 GMT".to_string(),
                },
                Article {
                    title: "B".to_string(),
                    url: "https://example.com/b".to_string(),
                    summary: "No Summary".to_string(),
                    publish_date: "No Date".to_string(),
                },
            ],
        );
        corpus.insert("Globex".to_string(), vec![]);
        corpus
    }

    #[tokio::test]
    async fn corpus_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("Company.json");

        let corpus = sample_corpus();
        write_corpus(&path, &corpus).await.unwrap();
        let restored = read_corpus(&path).await.unwrap();

        assert_eq!(restored, corpus);
    }

    #[tokio::test]
    async fn missing_document_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_corpus(&dir.path().join("Company.json")).await.unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[tokio::test]
    async fn unparseable_document_is_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Company.json");
        tokio::fs::write(&path, b"[1, 2, 3]").await.unwrap();

        let err = read_corpus(&path).await.unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }
}
