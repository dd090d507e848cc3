use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tco_cmp::Summary;
use tco_cmp::config::Config;
use tco_cmp::csv::{read_edits, write_summary};
use tco_cmp::report::{export_document, render_report};
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Compare the total cost of owning a vehicle against renting it.
///
/// The edits file is a csv with a `field,value` header, one form edit per
/// row, applied in order. Rejected edits are reported on stderr and skipped.
#[derive(Parser, Debug)]
#[command(name = "tco-cmp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Csv file of form edits
    edits: Option<PathBuf>,

    /// TOML file with starting values and the document title
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the six-line summary document to this file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print the summary as csv instead of the text report
    #[arg(long, default_value_t = false)]
    csv: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };
    let mut state = config
        .initial_state()
        .context("Invalid starting values in config")?;

    if let Some(path) = &args.edits {
        if path.extension().is_none_or(|ext| ext != "csv") {
            warn!(path = %path.display(), "input file seems to not be a csv file");
        }

        let edits = read_edits(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        let (edit_sender, edit_receiver) = tokio::sync::mpsc::channel(16);

        tokio::spawn(async move {
            for result in edits {
                match result {
                    Ok(edit) => {
                        if edit_sender.send(edit).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("{e}");
                    }
                }
            }
        });

        state.run(ReceiverStream::new(edit_receiver)).await;
    }

    // everything below reads one snapshot
    let summary = Summary::of(&state);

    if let Some(path) = &args.export {
        export_document(path, &summary, &config.title)
            .with_context(|| format!("Failed to export: {}", path.display()))?;
    }

    if args.csv {
        write_summary(io::stdout().lock(), &summary).context("Failed to write summary")?;
    } else {
        print!("{}", render_report(&summary, &config.title));
    }

    Ok(())
}
