use futures::future::join_all;
use nv_core::{narration_path, AnalysisDocument, CompanyAnalysis, Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::synthesizer::SpeechSynthesizer;

/// Build the narration string for a company, enumerating the three labels
/// in fixed order. Returns `None` when the entry lacks its summary sentence
/// or distribution, the guard against partial upstream writes.
pub fn narration_text(company: &str, analysis: &CompanyAnalysis) -> Option<String> {
    let summary = analysis.final_summary.as_deref()?;
    let distribution = analysis.distribution.as_ref()?;
    Some(format!(
        "Company: {}. {}. Sentiment Distribution: Positive: {}. Negative: {}. Neutral: {}.",
        company, summary, distribution.positive, distribution.negative, distribution.neutral
    ))
}

/// Render one company's narration to `{out_dir}/{company}_sentiment.{ext}`,
/// overwriting any previous artifact. A partial record is skipped with a
/// warning and reported as `Ok(None)` rather than an error.
pub async fn render_company(
    synthesizer: &dyn SpeechSynthesizer,
    company: &str,
    analysis: &CompanyAnalysis,
    out_dir: &Path,
    slow: bool,
) -> Result<Option<PathBuf>> {
    let Some(text) = narration_text(company, analysis) else {
        warn!("⚠️ Skipping narration for {}: missing summary or distribution", company);
        return Ok(None);
    };

    let audio = synthesizer.synthesize(&text, slow).await?;
    let path = narration_path(out_dir, company, synthesizer.audio_ext());
    tokio::fs::write(&path, audio).await?;
    info!("🔊 Narration saved for {}: {}", company, path.display());
    Ok(Some(path))
}

/// Render every company concurrently, one task per company, and join them
/// all. Each company writes its own uniquely named file, so the shared
/// output directory needs no locking. Per-company failures are collected
/// and returned; none of them aborts a sibling render.
pub async fn render_all(
    synthesizer: Arc<dyn SpeechSynthesizer>,
    analysis: &AnalysisDocument,
    out_dir: &Path,
    slow: bool,
) -> Result<Vec<(String, Error)>> {
    tokio::fs::create_dir_all(out_dir).await?;

    let mut companies = Vec::with_capacity(analysis.len());
    let mut tasks = Vec::with_capacity(analysis.len());
    for (company, entry) in analysis {
        let synthesizer = synthesizer.clone();
        let name = company.clone();
        let entry = entry.clone();
        let out_dir = out_dir.to_path_buf();
        companies.push(company.clone());
        tasks.push(tokio::spawn(async move {
            render_company(synthesizer.as_ref(), &name, &entry, &out_dir, slow)
                .await
                .map(|_| ())
        }));
    }

    let results = join_all(tasks).await;

    let mut failures = Vec::new();
    for (company, joined) in companies.into_iter().zip(results) {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => Err(Error::Synthesis(format!("render task panicked: {}", e))),
        };
        if let Err(e) = outcome {
            warn!("Narration failed for {}: {}", company, e);
            failures.push((company, e));
        }
    }
    Ok(failures)
}
