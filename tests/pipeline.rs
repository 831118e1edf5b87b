mod common;

use std::fs;
use pretty_assertions::assert_eq;
use podcast_screener::pipeline::transcription::{PlaceholderTranscriber, SidecarTranscriber};
use podcast_screener::pipeline::{EpisodePipeline, EpisodeRequest};
use podcast_screener::{AppConfig, CheckKind, QualityAnalyzer, QualityStatus, ScreenerError};

const TRANSCRIPT: &str =
    "Je sens beaucoup de stress et d'anxiété au travail, avec une forte charge mentale.";

fn request(upload: std::path::PathBuf) -> EpisodeRequest {
    EpisodeRequest {
        upload,
        contributor_email: "camille@example.org".into(),
        contributor_name: Some("Camille".into()),
        intro: None,
    }
}

#[test]
fn clean_recording_passes_every_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.wav");
    common::write_episode(&path, 250, 0.15);

    let report = QualityAnalyzer::default().analyze_file(&path).unwrap();

    assert_eq!(report.duration_seconds, 250);
    assert!(report.loudness_dbfs > -18.0 && report.loudness_dbfs < -17.0, "{}", report.loudness_dbfs);
    assert!(report.peak_dbfs > -17.0 && report.peak_dbfs < -16.0, "{}", report.peak_dbfs);
    assert!(report.noise_floor_dbfs < -59.0, "{}", report.noise_floor_dbfs);
    assert_eq!(report.quality_score, 100);
    assert_eq!(report.quality_status, QualityStatus::Ok);
    assert_eq!(report.tech.suffix, ".wav");
    assert_eq!(report.tech.bitrate_kbps_approx, 128);
}

#[test]
fn clipped_recording_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipped.wav");
    common::write_clipped(&path, 10);

    let report = QualityAnalyzer::default().analyze_file(&path).unwrap();

    assert!(!report.checks[&CheckKind::Peak].ok);
    assert_eq!(report.quality_score, 35);
    assert_eq!(report.quality_status, QualityStatus::Refuse);
}

#[test]
fn undecodable_file_fails_the_whole_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.wav");
    fs::write(&path, b"RIFF....WAVEjunk").unwrap();

    let err = QualityAnalyzer::default().analyze_file(&path).unwrap_err();
    assert!(matches!(err, ScreenerError::Decode { .. }), "got {err:?}");
}

#[test]
fn full_pipeline_with_intro_and_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let upload = dir.path().join("episode.wav");
    let intro = dir.path().join("intro.wav");
    let transcript = dir.path().join("episode.txt");
    common::write_episode(&upload, 250, 0.15);
    common::write_episode(&intro, 5, 0.15);
    fs::write(&transcript, TRANSCRIPT).unwrap();

    let work = dir.path().join("work");
    let pipeline = EpisodePipeline::new(
        &AppConfig::default(),
        &work,
        Box::new(SidecarTranscriber::from_file(&transcript)),
    );
    let mut req = request(upload);
    req.intro = Some(intro);

    let processed = pipeline.process(&req).unwrap();

    assert_eq!(processed.final_path, work.join("final").join("final_episode.wav"));
    assert!(processed.final_path.is_file());
    assert!(work.join("raw").join("episode.wav").is_file());

    let episode = &processed.episode;
    assert_eq!(episode.title, "Titre provisoire - Camille");
    assert_eq!(episode.duration, 250);
    assert_eq!(processed.quality.duration_seconds, 250);
    assert_eq!(episode.quality_status, QualityStatus::Ok);
    assert_eq!(episode.category, "Stress & émotions");
    assert_eq!(episode.cover_image, "/covers/emotions.png");
    assert_eq!(&episode.keywords[..3], &["stress", "anxiété", "charge mentale"]);

    let payload = serde_json::to_value(episode.payload()).unwrap();
    assert_eq!(payload["qualityStatus"], "OK");
    assert_eq!(payload["status"], "draft");
}

#[test]
fn intro_does_not_change_the_quality_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let upload = dir.path().join("short.wav");
    let intro = dir.path().join("intro.wav");
    common::write_episode(&upload, 237, 0.15);
    common::write_episode(&intro, 5, 0.15);

    let standalone = QualityAnalyzer::default().analyze_file(&upload).unwrap();
    let pipeline = EpisodePipeline::new(
        &AppConfig::default(),
        dir.path().join("work"),
        Box::new(PlaceholderTranscriber),
    );
    let mut req = request(upload);
    req.intro = Some(intro);

    let processed = pipeline.process(&req).unwrap();

    assert_eq!(processed.quality.duration_seconds, 237);
    assert!(!processed.quality.checks[&CheckKind::Duration].ok);
    assert_eq!(processed.quality.quality_score, standalone.quality_score);
    assert_eq!(processed.episode.quality_status, standalone.quality_status);
}

#[test]
fn missing_transcription_engine_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let upload = dir.path().join("short.wav");
    common::write_episode(&upload, 30, 0.15);

    let pipeline = EpisodePipeline::new(
        &AppConfig::default(),
        dir.path().join("work"),
        Box::new(PlaceholderTranscriber),
    );
    let processed = pipeline.process(&request(upload)).unwrap();

    assert!(processed.episode.transcript.starts_with("[Transcription simulée]"));
    assert!(processed.episode.keywords.contains(&"transcription".to_string()));
    assert_eq!(processed.episode.quality_status, QualityStatus::Ok);
    assert_eq!(processed.quality.quality_score, 90);
}

#[test]
fn registry_supplies_the_contributor_name() {
    let dir = tempfile::tempdir().unwrap();
    let upload = dir.path().join("ep.wav");
    common::write_episode(&upload, 5, 0.15);
    let config: AppConfig = serde_json::from_str(
        r#"{ "contributors": [{ "email": "camille@example.org", "name": "Camille Coach" }] }"#,
    )
    .unwrap();

    let pipeline = EpisodePipeline::new(&config, dir.path().join("work"), Box::new(PlaceholderTranscriber));
    let mut req = request(upload);
    req.contributor_name = None;
    req.contributor_email = " Camille@Example.org ".into();

    let processed = pipeline.process(&req).unwrap();
    assert_eq!(processed.episode.title, "Titre provisoire - Camille Coach");
    assert_eq!(processed.episode.contributor_email, "Camille@Example.org");
}

#[test]
fn invalid_email_stops_before_touching_files() {
    let dir = tempfile::tempdir().unwrap();
    let upload = dir.path().join("ep.wav");
    common::write_episode(&upload, 5, 0.15);
    let work = dir.path().join("work");

    let pipeline = EpisodePipeline::new(&AppConfig::default(), &work, Box::new(PlaceholderTranscriber));
    let mut req = request(upload);
    req.contributor_email = "not-an-address".into();

    assert!(matches!(pipeline.process(&req), Err(ScreenerError::Config(_))));
    assert!(!work.exists());
}
