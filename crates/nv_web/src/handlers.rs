use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use nv_core::{documents, narration_path, Article, CompanyAnalysis, Error};
use std::sync::Arc;

use crate::AppState;

/// Maps the pipeline error taxonomy onto HTTP conditions: an absent
/// document or company is 404, everything else surfaces as 500 with its
/// diagnostic instead of a generic server error.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::MissingInput(_) | Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.0.to_string()).into_response()
    }
}

pub async fn get_sentiment(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Result<Json<CompanyAnalysis>, ApiError> {
    let analysis = documents::read_analysis(&state.config.analysis_path()).await?;
    analysis
        .get(&company)
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("no analysis for company: {}", company)).into())
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let corpus = documents::read_corpus(&state.config.corpus_path()).await?;
    corpus
        .get(&company)
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("no news for company: {}", company)).into())
}

pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Result<Response, ApiError> {
    let path = narration_path(&state.config.audio_dir(), &company, "mp3");
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(format!("no audio for company: {}", company)).into());
        }
        Err(e) => return Err(Error::from(e).into()),
    };
    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response())
}
