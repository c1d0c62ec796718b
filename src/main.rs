use std::io::{self, Read};

use board::{Board, DecodeError, decode_board};
use clap::{Parser, Subcommand};
use mb_viewer::config::DEFAULT_BASE_URL;
use mb_viewer::{ApiClient, ApiError, ConfigError, Controller, ViewStore, ViewerConfig};
use serde::Serialize;
use tracing::Level;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mb-viewer", about = "Mound Builders board viewer")]
struct Cli {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log at debug level.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load board and log and print the renderer-visible state.
    Show,
    /// Print the board view model.
    Board,
    /// Print the log.
    Log,
    /// Submit one line of input and print the resulting state.
    Play { input: String },
    /// Build the view model from a saved snapshot without contacting the server.
    Decode {
        #[arg(default_value = "-", help = "Snapshot file path, or - for stdin")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).init();

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {
            let controller = connect(&cli.base_url)?;
            controller.init().await;
            print_json(&controller.store().snapshot().await)
        }
        Command::Board => {
            let controller = connect(&cli.base_url)?;
            controller.refresh_board().await?;
            print_json(&controller.store().snapshot().await.board)
        }
        Command::Log => {
            let controller = connect(&cli.base_url)?;
            controller.refresh_log().await?;
            print_json(&controller.store().snapshot().await.log)
        }
        Command::Play { input } => {
            let controller = connect(&cli.base_url)?;
            controller.submit(&input).await;
            print_json(&controller.store().snapshot().await)
        }
        Command::Decode { path } => run_decode(&path),
    }
}

fn connect(base_url: &str) -> Result<Controller, CliError> {
    let api = ApiClient::new(ViewerConfig::new(base_url)?)?;
    Ok(Controller::new(api, ViewStore::new()))
}

fn run_decode(path: &str) -> Result<(), CliError> {
    let bytes = read_input(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    let payload = decode_board(&bytes)?;
    print_json(&Board::build(&payload.board))
}

fn read_input(path: &str) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        std::fs::read(path)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
