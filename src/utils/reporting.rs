use std::fs;
use std::path::Path;
use csv::Writer;
use log::info;
use serde::Serialize;
use crate::analyzers::batch::BatchResults;
use crate::analyzers::quality::QualityReport;
use crate::Result;

pub struct Reporter;

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_batch_report(&self, results: &BatchResults, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        if let Some(parent) = output_path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = Writer::from_path(output_path_ref)?;

        writer.write_record([
            "File",
            "Duration (s)",
            "Loudness (dBFS)",
            "Peak (dBFS)",
            "Noise Floor (dBFS)",
            "Score",
            "Status",
            "Failed Checks",
        ])?;

        for file in &results.screened {
            let report = &file.report;
            let failed = report
                .failed_checks()
                .map(|c| c.kind.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            writer.write_record([
                file.path.display().to_string(),
                report.duration_seconds.to_string(),
                format!("{:.1}", report.loudness_dbfs),
                format!("{:.1}", report.peak_dbfs),
                format!("{:.1}", report.noise_floor_dbfs),
                report.quality_score.to_string(),
                report.quality_status.to_string(),
                failed,
            ])?;
        }

        for (path, reason) in &results.failures {
            writer.write_record([
                path.display().to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                "UNREADABLE".to_string(),
                reason.clone(),
            ])?;
        }

        writer.flush()?;
        info!("Report generated: {}", output_path_ref.display());
        Ok(())
    }

    pub fn write_json(&self, value: &impl Serialize, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        if let Some(parent) = output_path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path_ref, serde_json::to_string_pretty(value)?)?;
        info!("JSON written: {}", output_path_ref.display());
        Ok(())
    }

    /// Human-readable quality summary, one line per check.
    pub fn quality_summary(&self, report: &QualityReport) -> String {
        let mut lines = vec![
            format!("Quality: {} (score {}/100)", report.quality_status, report.quality_score),
            format!(
                "Duration: {} min {:02} s | Loudness: {:.1} dBFS | Peak: {:.1} dBFS | Noise floor: {:.1} dBFS",
                report.duration_seconds / 60,
                report.duration_seconds % 60,
                report.loudness_dbfs,
                report.peak_dbfs,
                report.noise_floor_dbfs
            ),
            format!("Format: {}", report.tech),
        ];
        for (kind, check) in &report.checks {
            lines.push(format!(
                "  [{}] {}: {}",
                if check.ok { "ok" } else { "!!" },
                kind,
                check.message.as_deref().unwrap_or("")
            ));
        }
        lines.join("\n")
    }
}
