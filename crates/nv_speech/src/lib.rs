pub mod renderer;
pub mod synthesizer;

pub use renderer::{narration_text, render_all, render_company};
pub use synthesizer::{GoogleTranslateTts, SpeechSynthesizer};

pub mod prelude {
    pub use super::renderer::render_all;
    pub use super::synthesizer::SpeechSynthesizer;
    pub use nv_core::{AnalysisDocument, Error, Result};
}
