mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use stagiaire_core::AppConfig;
use stagiaire_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The TUI owns the terminal, so debug logs only ever go to a file.
    if let Ok(log_path) = std::env::var("STAGIAIRE_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "stagiaire", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let data_file = config
        .resolve_data_file(cli.file)
        .ok_or_else(|| anyhow::anyhow!("No data file: pass --file or set STAGIAIRE_FILE"))?;
    let storage_file = config
        .resolve_storage_file(cli.storage)
        .ok_or_else(|| anyhow::anyhow!("No storage file: pass --storage or set STAGIAIRE_STORAGE"))?;
    tracing::debug!(
        "Using data file {} and storage {}",
        data_file.display(),
        storage_file.display()
    );

    match cli.command {
        None => {
            let mut app = App::load(&config, &data_file, &storage_file).await?;
            app.run().await?;
        }
        Some(command) => {
            let result = match CliContext::load(config, &data_file, &storage_file).await {
                Ok(mut ctx) => handlers::dispatch(&mut ctx, command).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                output::output_error(&e);
            }
        }
    }

    Ok(())
}
