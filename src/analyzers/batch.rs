use std::path::{Path, PathBuf};
use log::{info, warn};
use crate::analyzers::quality::{QualityAnalyzer, QualityReport, QualityStatus};
use crate::utils::file_ops::collect_audio_files;
use crate::utils::parallel::ParallelProcessor;
use crate::Result;

#[derive(Debug)]
pub struct ScreenedFile {
    pub path: PathBuf,
    pub report: QualityReport,
}

#[derive(Debug)]
pub struct BatchResults {
    pub screened: Vec<ScreenedFile>,
    /// Files that could not be decoded, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchResults {
    pub fn count_with_status(&self, status: QualityStatus) -> usize {
        self.screened
            .iter()
            .filter(|f| f.report.quality_status == status)
            .count()
    }
}

/// Runs the quality analysis over many files at once. Episodes share no
/// state, so each file is analyzed independently on the rayon pool.
pub struct BatchScreener<'a> {
    analyzer: &'a QualityAnalyzer,
}

impl ParallelProcessor for BatchScreener<'_> {}

impl<'a> BatchScreener<'a> {
    pub fn new(analyzer: &'a QualityAnalyzer) -> Self {
        Self::init_parallel_processing();
        Self { analyzer }
    }

    pub fn screen_directories(&self, dirs: &[impl AsRef<Path>]) -> BatchResults {
        let files = collect_audio_files(dirs);
        info!("Found {} audio files to screen", files.len());
        self.screen_files(&files)
    }

    pub fn screen_files(&self, files: &[PathBuf]) -> BatchResults {
        let outcomes: Vec<(PathBuf, Result<QualityReport>)> = Self::parallel_map(files, 10, |path| {
            (path.clone(), self.analyzer.analyze_file(path))
        });

        let mut results = BatchResults {
            screened: Vec::new(),
            failures: Vec::new(),
        };
        for (path, outcome) in outcomes {
            match outcome {
                Ok(report) => results.screened.push(ScreenedFile { path, report }),
                Err(e) => {
                    warn!("Error screening {}: {}", path.display(), e);
                    results.failures.push((path, e.to_string()));
                }
            }
        }

        info!(
            "Screened {} files: {} OK, {} A_REVOIR, {} REFUSE, {} unreadable",
            results.screened.len(),
            results.count_with_status(QualityStatus::Ok),
            results.count_with_status(QualityStatus::ARevoir),
            results.count_with_status(QualityStatus::Refuse),
            results.failures.len()
        );
        results
    }
}
