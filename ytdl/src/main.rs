mod cli;
mod output;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use youtube_dl::{Config, ProgressSample, YoutubeDl};

use cli::{Cli, Commands};

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    command: &'a str,
    exit_code: i32,
    elapsed_ms: u64,
    stdout_complete: bool,
    stderr_complete: bool
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.debug {
            EnvFilter::new("ytdl=debug,youtube_dl=debug")
        } else {
            EnvFilter::new("ytdl=info,youtube_dl=info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env();
    if let Some(ref executable) = cli.executable {
        config = config.executable(executable);
        tracing::info!("Using custom executable: {}", executable.display());
    }
    let client = YoutubeDl::with_config(config);

    match cli.command {
        Commands::Version => {
            let version = client.check_binary().await?;
            println!("{version}");
        }
        Commands::Info { url } => {
            let info = client.video_info(&url).await?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Formats { url, json } => {
            let formats = client.formats(&url).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&formats)?);
            } else {
                for format in &formats {
                    println!("{}", output::format_row(format));
                }
            }
        }
        Commands::Thumbnails { url, best: false } => {
            let thumbnails = client.thumbnails(&url).await?;
            println!("{}", serde_json::to_string_pretty(&thumbnails)?);
        }
        Commands::Thumbnails { url, best: true } => {
            let info = client.video_info(&url).await?;
            let best = info
                .best_thumbnail()
                .with_context(|| format!("no thumbnails for {url}"))?;
            println!("{best}");
        }
        Commands::Categories { url } => {
            for category in client.categories(&url).await? {
                println!("{category}");
            }
        }
        Commands::Tags { url } => {
            for tag in client.tags(&url).await? {
                println!("{tag}");
            }
        }
        Commands::Run { url, dir, options } => {
            let request = cli::run_request(&url, dir, &options);
            let response = client
                .execute_with_progress(&request, |p: ProgressSample| {
                    let mut stderr = std::io::stderr().lock();
                    let _ = write!(stderr, "\r{:5.1}%  ETA {:>8}", p.percent, p.format_eta());
                    let _ = stderr.flush();
                })
                .await
                .with_context(|| format!("running {url}"))?;
            eprintln!();

            print!("{}", response.out());

            let summary = RunSummary {
                command: response.command(),
                exit_code: response.exit_code(),
                elapsed_ms: response.elapsed_ms(),
                stdout_complete: response.stdout_complete(),
                stderr_complete: response.stderr_complete()
            };
            tracing::info!("{}", serde_json::to_string(&summary)?);
        }
    }

    Ok(())
}
