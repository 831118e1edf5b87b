use std::process::ExitCode;
use clap::Parser;
use podcast_screener::{
    analyzers::batch::BatchScreener,
    cli::commands::{Cli, Commands},
    pipeline::{
        transcription::{SidecarTranscriber, Transcriber},
        EpisodePipeline, EpisodeRequest,
    },
    utils::reporting::Reporter,
    AppConfig, QualityAnalyzer, Result,
};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    let reporter = Reporter::new();

    match cli.command {
        Commands::Analyze { file, json } => {
            let analyzer = QualityAnalyzer::new(config.quality);
            let report = analyzer.analyze_file(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("=== {} ===", file.display());
                println!("{}", reporter.quality_summary(&report));
            }
        }

        Commands::Index { source, max_keywords } => {
            let transcript = match (source.text, source.transcript) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => String::new(),
            };
            let mut indexing = config.indexing;
            if let Some(max) = max_keywords {
                indexing.max_keywords = max;
                indexing.validate()?;
            }
            let result = indexing.build_indexer().index(&transcript);
            println!("Category: {}", result.category);
            println!("Cover: {}", result.cover_image);
            if result.keywords.is_empty() {
                println!("Keywords: (none)");
            } else {
                println!("Keywords: {}", result.keywords.join(", "));
            }
        }

        Commands::Process { file, email, name, intro, work_dir, transcript } => {
            let transcriber: Box<dyn Transcriber> = match transcript {
                Some(path) => Box::new(SidecarTranscriber::from_file(path)),
                None => Box::new(SidecarTranscriber::new()),
            };
            let pipeline = EpisodePipeline::new(&config, &work_dir, transcriber);
            let request = EpisodeRequest {
                upload: file,
                contributor_email: email,
                contributor_name: name,
                intro,
            };

            println!("=== Processing {} ===", request.upload.display());
            let processed = pipeline.process(&request)?;

            println!("Final audio: {}", processed.final_path.display());
            println!("{}", reporter.quality_summary(&processed.quality));
            println!("Category: {}", processed.index.category);
            println!("Cover: {}", processed.index.cover_image);
            println!("Keywords: {}", processed.index.keywords.join(", "));

            let payload_path = pipeline.payload_path(&request);
            reporter.write_json(&processed.episode.payload(), &payload_path)?;
            println!("Payload saved to: {}", payload_path.display());
        }

        Commands::Batch { dirs, output } => {
            println!("=== Starting Batch Screening ===");
            for dir in &dirs {
                println!("  - {}", dir.display());
            }
            let analyzer = QualityAnalyzer::new(config.quality);
            let results = BatchScreener::new(&analyzer).screen_directories(&dirs);

            println!("Screened {} files ({} unreadable)", results.screened.len(), results.failures.len());
            reporter.generate_batch_report(&results, &output)?;
            println!("Report saved to: {}", output.display());
        }
    }

    Ok(())
}
