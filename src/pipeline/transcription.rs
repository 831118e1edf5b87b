use std::fs;
use std::path::{Path, PathBuf};
use log::warn;

/// Speech-to-text collaborator.
///
/// An unavailable engine answers with a placeholder text instead of failing;
/// downstream indexing treats that text like any other transcript.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &Path) -> String;
}

pub fn unavailable_placeholder(audio: &Path) -> String {
    format!(
        "[Transcription simulée] moteur de transcription non disponible. Fichier : {}",
        audio.display()
    )
}

pub fn empty_placeholder(audio: &Path) -> String {
    format!("[Transcription vide] aucun texte détecté. Fichier : {}", audio.display())
}

/// Used when no transcription engine is configured.
#[derive(Debug, Default)]
pub struct PlaceholderTranscriber;

impl Transcriber for PlaceholderTranscriber {
    fn transcribe(&self, audio: &Path) -> String {
        warn!("No transcription engine available for {}", audio.display());
        unavailable_placeholder(audio)
    }
}

/// Reads the text an external engine wrote next to the audio file
/// (`episode.wav` -> `episode.txt`), or a caller-chosen file.
#[derive(Debug, Default)]
pub struct SidecarTranscriber {
    explicit: Option<PathBuf>,
}

impl SidecarTranscriber {
    pub fn new() -> Self {
        Self { explicit: None }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: Some(path.into()),
        }
    }

    fn source_for(&self, audio: &Path) -> PathBuf {
        self.explicit
            .clone()
            .unwrap_or_else(|| audio.with_extension("txt"))
    }
}

impl Transcriber for SidecarTranscriber {
    fn transcribe(&self, audio: &Path) -> String {
        let source = self.source_for(audio);
        match fs::read_to_string(&source) {
            Ok(text) if text.trim().is_empty() => {
                warn!("Transcript {} is empty", source.display());
                empty_placeholder(audio)
            }
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("No transcript at {}: {}", source.display(), e);
                unavailable_placeholder(audio)
            }
        }
    }
}
