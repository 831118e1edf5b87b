use std::path::{Path, PathBuf};
use std::fs;
use log::{debug, warn};
use crate::Result;

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac"];

/// Working-directory layout for one processing run:
/// `raw/` for uploaded files, `final/` for assembled audio.
pub struct FileManager {
    work_dir: PathBuf,
}

impl FileManager {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.work_dir.join("raw")
    }

    pub fn final_dir(&self) -> PathBuf {
        self.work_dir.join("final")
    }

    /// Copies an upload into `raw/`, keeping its file name.
    pub fn stage_raw(&self, source: impl AsRef<Path>) -> Result<PathBuf> {
        let source = source.as_ref();
        let file_name = source.file_name()
            .ok_or_else(|| std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Invalid file path"
            ))?;

        let raw_dir = self.raw_dir();
        self.ensure_directory(&raw_dir)?;
        let destination = raw_dir.join(file_name);

        if fs::canonicalize(source).ok() != fs::canonicalize(&destination).ok() {
            fs::copy(source, &destination)?;
        }
        debug!("Staged {} as {}", source.display(), destination.display());
        Ok(destination)
    }

    /// `final/final_<name>`, same suffix as the main segment.
    pub fn final_path_for(&self, main: impl AsRef<Path>) -> PathBuf {
        let name = main.as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "episode".to_string());
        self.final_dir().join(format!("final_{}", name))
    }

    pub fn payload_path_for(&self, main: impl AsRef<Path>) -> PathBuf {
        let stem = main.as_ref()
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "episode".to_string());
        self.work_dir.join(format!("payload_{}.json", stem))
    }

    pub fn ensure_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::create_dir_all(path.as_ref())?;
        Ok(())
    }
}

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Audio files under each directory, recursively, in a stable order.
pub fn collect_audio_files(dirs: &[impl AsRef<Path>]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = dirs
        .iter()
        .flat_map(|dir| {
            walkdir::WalkDir::new(dir.as_ref())
                .follow_links(true)
                .into_iter()
                .filter_map(|e| match e {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        warn!("Error accessing entry: {}", err);
                        None
                    }
                })
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            let keep = is_audio_file(path);
            if !keep {
                debug!("Skipping non-audio file: {}", path.display());
            }
            keep
        })
        .collect();
    files.sort();
    files.dedup();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_paths() {
        let fm = FileManager::new("/work");
        assert_eq!(fm.final_path_for("/up/ep 1.mp3"), PathBuf::from("/work/final/final_ep 1.mp3"));
        assert_eq!(fm.payload_path_for("/up/ep 1.mp3"), PathBuf::from("/work/payload_ep 1.json"));
    }

    #[test]
    fn staging_copies_into_raw() {
        let dir = tempfile::tempdir().unwrap();
        let upload = dir.path().join("upload.wav");
        fs::write(&upload, b"RIFF").unwrap();

        let fm = FileManager::new(dir.path().join("work"));
        let staged = fm.stage_raw(&upload).unwrap();
        assert_eq!(staged, dir.path().join("work").join("raw").join("upload.wav"));
        assert_eq!(fs::read(&staged).unwrap(), b"RIFF");

        // staging an already staged file is a no-op
        assert_eq!(fm.stage_raw(&staged).unwrap(), staged);
    }

    #[test]
    fn only_audio_files_are_collected() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        for name in ["b.MP3", "a.wav", "notes.txt", "nested/c.flac"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let files = collect_audio_files(&[dir.path()]);
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["a.wav", "b.MP3", "nested/c.flac"]);
    }
}
