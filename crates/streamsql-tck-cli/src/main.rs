//! streamsql-tck CLI
//!
//! Lists and prints the fixtures of the streaming SQL test catalog.

mod render;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use streamsql_tck_catalog::Catalog;

/// Browse streaming SQL test fixtures.
#[derive(Parser)]
#[command(name = "streamsql-tck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(short, long, env = "STREAMSQL_TCK_FORMAT", value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the fixtures in the catalog.
    List,

    /// Print one fixture.
    Show {
        /// Fixture name, as printed by `list`.
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = Catalog::basic()?;
    debug!(format = ?cli.format, "Loaded catalog");

    match cli.command {
        Commands::List => match cli.format {
            Format::Text => print!("{}", render::Listing(&catalog)),
            Format::Json => println!("{}", serde_json::to_string_pretty(&catalog.names())?),
        },

        Commands::Show { name } => {
            let fixture = render::find(&catalog, &name)?;
            match cli.format {
                Format::Text => print!("{}", render::FixtureText(fixture)),
                Format::Json => println!("{}", serde_json::to_string_pretty(fixture)?),
            }
        }
    }

    Ok(())
}
