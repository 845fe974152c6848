use nv_core::{documents, Config, Result};
use nv_feed::NewsSource;
use nv_sentiment::Classifier;
use nv_speech::SpeechSynthesizer;
use std::sync::Arc;
use tracing::{info, warn};

/// Stage 1: fetch every tracked company and persist the corpus. Per-company
/// fetch failures end up as empty lists inside the document, never as a
/// stage failure.
pub async fn fetch_stage(config: &Config, source: &dyn NewsSource) -> Result<()> {
    let corpus = nv_feed::build_corpus(source, &config.companies).await;
    documents::write_corpus(&config.corpus_path(), &corpus).await?;
    info!(
        "✅ Saved news for {} companies in {}",
        corpus.len(),
        config.corpus_path().display()
    );
    Ok(())
}

/// Stage 2: read the persisted corpus, classify and aggregate, persist the
/// analysis document. Aborts with `MissingInput` when stage 1 has not run.
pub async fn analyze_stage(config: &Config) -> Result<()> {
    // The lexicon is loaded once here and shared across every article.
    let classifier = Classifier::new();
    let corpus = documents::read_corpus(&config.corpus_path()).await?;
    let analysis = nv_sentiment::aggregate(&corpus, &classifier);
    documents::write_analysis(&config.analysis_path(), &analysis).await?;
    info!(
        "✅ Sentiment analysis saved in {}",
        config.analysis_path().display()
    );
    Ok(())
}

/// Stage 3: read the persisted analysis document and render every company's
/// narration concurrently. Per-company render failures are reported but do
/// not fail the stage; only a missing or malformed analysis document does.
pub async fn narrate_stage(
    config: &Config,
    synthesizer: Arc<dyn SpeechSynthesizer>,
) -> Result<()> {
    let analysis = documents::read_analysis(&config.analysis_path()).await?;
    let failures = nv_speech::render_all(
        synthesizer,
        &analysis,
        &config.audio_dir(),
        config.slow_speech,
    )
    .await?;

    if failures.is_empty() {
        info!("✅ Narrations saved in {}", config.audio_dir().display());
    } else {
        warn!(
            "{} of {} narrations failed",
            failures.len(),
            analysis.len()
        );
    }
    Ok(())
}

/// Run the full pipeline. Every stage hands off through its persisted
/// document, so a crash between stages leaves prior artifacts intact and
/// the failed stage can simply be re-run.
pub async fn run_all(
    config: &Config,
    source: &dyn NewsSource,
    synthesizer: Arc<dyn SpeechSynthesizer>,
) -> Result<()> {
    fetch_stage(config, source).await?;
    analyze_stage(config).await?;
    narrate_stage(config, synthesizer).await
}
