use async_trait::async_trait;
use nv_core::{Error, Result};
use std::time::Duration;
use url::Url;

const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Text-to-speech capability, consumed as a black box by the renderer.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Get engine name
    fn name(&self) -> &str;

    /// File extension of the audio this engine produces.
    fn audio_ext(&self) -> &str {
        "mp3"
    }

    /// Synthesize the text into audio bytes. `slow` requests a reduced
    /// speaking rate where the engine supports one.
    async fn synthesize(&self, text: &str, slow: bool) -> Result<Vec<u8>>;
}

/// The unofficial Google Translate TTS endpoint; returns English mp3 audio
/// for short texts.
pub struct GoogleTranslateTts {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateTts {
    pub fn new() -> Result<Self> {
        Self::with_base_url("https://translate.google.com")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(SYNTHESIS_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn speech_url(&self, text: &str, slow: bool) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .and_then(|u| u.join("/translate_tts"))
            .map_err(|e| Error::Synthesis(format!("invalid TTS URL: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("ie", "UTF-8")
            .append_pair("tl", "en")
            .append_pair("client", "tw-ob")
            .append_pair("ttsspeed", if slow { "0.24" } else { "1" })
            .append_pair("q", text);
        Ok(url)
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    fn name(&self) -> &str {
        "Google Translate TTS"
    }

    async fn synthesize(&self, text: &str, slow: bool) -> Result<Vec<u8>> {
        let url = self.speech_url(text, slow)?;
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Synthesis(format!("TTS request failed: {}", e)))?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_url_carries_text_and_speed() {
        let tts = GoogleTranslateTts::new().unwrap();

        let url = tts.speech_url("Company: Acme.", false).unwrap();
        assert!(url.as_str().starts_with("https://translate.google.com/translate_tts?"));
        assert!(url.query_pairs().any(|(k, v)| k == "q" && v == "Company: Acme."));
        assert!(url.query_pairs().any(|(k, v)| k == "ttsspeed" && v == "1"));

        let slow_url = tts.speech_url("hi", true).unwrap();
        assert!(slow_url.query_pairs().any(|(k, v)| k == "ttsspeed" && v == "0.24"));
    }
}
