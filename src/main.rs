// Main entry point for grouped-report

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, warn};

use grouped_report::cli::Cli;
use grouped_report::config::Config;
use grouped_report::report::{ConsoleSummary, GroupedReporter};
use grouped_report::{EventReplayer, ReplayError};

type EventSource = Box<dyn AsyncRead + Unpin + Send>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    grouped_report::logging::init(cli.verbose);

    if cli.verbose {
        info!("Starting grouped-report v{}", env!("CARGO_PKG_VERSION"));
    }

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Handle completion flag
    if let Some(ref shell_type) = cli.completion {
        return handle_completion(shell_type);
    }

    // Handle init_config flag
    if let Some(ref config_file) = cli.init_config {
        let toml_content = Config::default().to_toml();
        std::fs::write(config_file, toml_content).with_context(|| {
            format!("Failed to write configuration: {}", config_file.display())
        })?;
        println!("Configuration file created: {}", config_file.display());
        println!("\nConfiguration precedence:");
        println!("  1. Command-line arguments (highest)");
        println!("  2. Configuration file");
        println!("  3. Built-in defaults (lowest)");
        return Ok(());
    }

    let mut config = Config::load().unwrap_or_default();
    config.merge_cli(&cli);

    // Handle config flag
    if cli.config {
        println!("Effective configuration:\n");
        print!("{}", config.to_toml());
        return Ok(());
    }

    let reporter = GroupedReporter::new(config.reporter.clone(), config.report.clone());
    let reporter = replay_events(cli.events_path().map(|p| p.as_path()), reporter).await?;

    let stats = reporter.stats();
    ConsoleSummary::print(stats);

    if stats.failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}

async fn open_events(path: Option<&Path>) -> Result<LinesStream<BufReader<EventSource>>> {
    let source: EventSource = match path {
        Some(path) => Box::new(
            tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open event stream: {}", path.display()))?,
        ),
        None => Box::new(tokio::io::stdin()),
    };

    Ok(LinesStream::new(BufReader::new(source).lines()))
}

async fn replay_events(path: Option<&Path>, reporter: GroupedReporter) -> Result<GroupedReporter> {
    let mut lines = open_events(path).await?;
    let mut replayer = EventReplayer::new(reporter);

    while let Some(line) = lines.next().await {
        let line = line.context("Failed to read event stream")?;
        replayer.feed_line(&line)?;
    }

    match replayer.finish() {
        Ok(reporter) => Ok(reporter),
        Err(ReplayError::Incomplete) => {
            warn!("No run_end received, the report was not produced");
            Err(ReplayError::Incomplete.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_completion(shell_type: &str) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Shell, generate};

    let shell = match shell_type {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" => Shell::PowerShell,
        _ => {
            eprintln!("Error: Unsupported shell type '{}'", shell_type);
            eprintln!("Supported shells: bash, zsh, fish, elvish, powershell");
            return Err(anyhow::anyhow!("Unsupported shell type"));
        }
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, &bin_name, &mut std::io::stdout());

    Ok(())
}
