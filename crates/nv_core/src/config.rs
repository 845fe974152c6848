use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CORPUS_FILE: &str = "Company.json";
pub const ANALYSIS_FILE: &str = "CompanyAnalysis.json";
pub const AUDIO_DIR: &str = "audio";

/// Single source of the tracked-company set and artifact locations. The
/// driver owns one of these and threads it into every stage; no stage keeps
/// its own company list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub companies: Vec<String>,
    pub data_dir: PathBuf,
    pub slow_speech: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            companies: ["Microsoft", "Tesla", "Apple", "Google", "Amazon"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data_dir: PathBuf::from("data"),
            slow_speech: false,
        }
    }
}

impl Config {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn corpus_path(&self) -> PathBuf {
        self.data_dir.join(CORPUS_FILE)
    }

    pub fn analysis_path(&self) -> PathBuf {
        self.data_dir.join(ANALYSIS_FILE)
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.data_dir.join(AUDIO_DIR)
    }
}

/// Deterministic narration path for a company; the serving layer rebuilds
/// this instead of looking it up.
pub fn narration_path(audio_dir: &Path, company: &str, ext: &str) -> PathBuf {
    audio_dir.join(format!("{}_sentiment.{}", company, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_paths() {
        let config = Config::default();
        assert_eq!(config.companies.len(), 5);
        assert_eq!(config.corpus_path(), PathBuf::from("data/Company.json"));
        assert_eq!(config.analysis_path(), PathBuf::from("data/CompanyAnalysis.json"));
        assert_eq!(config.audio_dir(), PathBuf::from("data/audio"));
    }

    #[test]
    fn narration_path_is_derived_from_company_name() {
        let path = narration_path(Path::new("data/audio"), "Tesla", "mp3");
        assert_eq!(path, PathBuf::from("data/audio/Tesla_sentiment.mp3"));
    }
}
