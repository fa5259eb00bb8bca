use std::path::PathBuf;

use clap::{Parser, Subcommand};
use catalog::CategoryAliases;
use pages::DEFAULT_INDEX_FILE;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Content tools for the RedLife site data directory")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that every category file is an array of records with unique ids
    Validate {
        /// Directory holding `<category>.json` files
        data_dir: PathBuf,
    },

    /// Build the flat content index used by the home page
    Index {
        data_dir: PathBuf,

        /// Output file (default: <data_dir>/content-index.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print a collection list or detail view as HTML
    Preview {
        data_dir: PathBuf,

        #[arg(long)]
        category: String,

        /// Render the detail view for this id
        #[arg(long)]
        id: Option<String>,

        /// Filter the collection list
        #[arg(long)]
        query: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    match Args::parse().command {
        Command::Validate { data_dir } => {
            let problems = tools::validate(&data_dir).map_err(|e| e.to_string())?;
            for p in &problems {
                println!("{p}");
            }
            if !problems.is_empty() {
                return Err(format!("{} problem(s) in {}", problems.len(), data_dir.display()));
            }
            info!(dir = %data_dir.display(), "data directory is valid");
        }
        Command::Index { data_dir, out } => {
            let entries = tools::build_index(&data_dir).map_err(|e| e.to_string())?;
            let out = out.unwrap_or_else(|| data_dir.join(DEFAULT_INDEX_FILE));
            tools::write_index(&entries, &out).map_err(|e| e.to_string())?;
            info!(entries = entries.len(), out = %out.display(), "wrote content index");
        }
        Command::Preview {
            data_dir,
            category,
            id,
            query,
        } => {
            let category = CategoryAliases::default().normalize(Some(&category));
            let html = tools::preview(&data_dir, &category, id.as_deref(), query.as_deref())
                .map_err(|e| e.to_string())?;
            println!("{html}");
        }
    }
    Ok(())
}
