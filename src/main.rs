use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_summarizer::cli::{Cli, Commands};
use video_summarizer::{tools, utils, Config, TranscriptionPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the JSON response.
    let default_filter = if cli.verbose {
        "video_summarizer=debug"
    } else {
        "video_summarizer=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().await?;

    // Probing tool availability spawns processes, so only do it when asked for
    // diagnostics; requests rejected at the boundary must stay subprocess-free.
    if cli.verbose {
        for dep in utils::check_dependencies(&config).await {
            tracing::warn!("Missing tool: {}", dep);
        }
    }

    let pipeline = TranscriptionPipeline::new(&config);

    match cli.command {
        Commands::Transcribe {
            source,
            language,
            model,
        } => {
            let language =
                language.unwrap_or_else(|| config.transcription.default_language.clone());
            let model = model.unwrap_or_else(|| config.transcription.default_model.clone());

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message(format!("Transcribing {source}..."));
            spinner.enable_steady_tick(Duration::from_millis(120));

            let response =
                tools::transcribe_video_tool(&pipeline, &source, &language, &model).await;

            spinner.finish_and_clear();
            println!("{response}");
        }
        Commands::Info { source } => {
            let response = tools::get_video_info_tool(&pipeline, &source).await;
            println!("{response}");
        }
    }

    Ok(())
}
