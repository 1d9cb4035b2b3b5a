use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use sql2struct::api::{handle_convert_request, ConvertStatus};
use sql2struct::generator::generate_go_code_in_package;
use sql2struct::{convert_files, parse_sql, ConvertOptions, GenerationConfig};

#[derive(Parser)]
#[command(name = "sql2struct")]
#[command(author, version, about = "Convert CREATE TABLE statements into Go structs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert SQL files (or stdin) into Go struct definitions
    Convert {
        /// SQL files or directories containing .sql files; reads stdin when omitted
        paths: Vec<PathBuf>,

        #[command(flatten)]
        tags: TagArgs,

        /// Package name for the generated file
        #[arg(long, default_value = "main")]
        package: String,

        /// Write the generated code to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Answer a JSON request {"sql": ..., "config": {...}} with a JSON response
    Request {
        /// Request file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Args)]
struct TagArgs {
    /// Add json:"column" tags
    #[arg(long)]
    json: bool,

    /// Add db:"column" tags (sqlx)
    #[arg(long)]
    db: bool,

    /// Add gorm:"column:column" tags
    #[arg(long)]
    gorm: bool,

    /// Add xml:"column" tags
    #[arg(long)]
    xml: bool,

    /// Add every tag family
    #[arg(long)]
    all_tags: bool,
}

impl TagArgs {
    fn to_config(&self) -> GenerationConfig {
        if self.all_tags {
            return GenerationConfig::all();
        }
        GenerationConfig {
            add_json_tag: self.json,
            add_gorm_tag: self.gorm,
            add_xml_tag: self.xml,
            add_db_tag: self.db,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            paths,
            tags,
            package,
            output,
            verbose,
        } => {
            init_logging(verbose);
            let config = tags.to_config();

            let code = if paths.is_empty() {
                let sql = read_input(None)?;
                let record = parse_sql(&sql).context("SQL parsing error")?;
                generate_go_code_in_package(std::slice::from_ref(&record), &config, &package)
            } else {
                info!("Converting {} input path(s)", paths.len());
                convert_files(&ConvertOptions {
                    inputs: paths,
                    config,
                    package,
                })?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &code)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => print!("{}", code),
            }
        }
        Commands::Request { input, verbose } => {
            init_logging(verbose);
            let body = read_input(input.as_ref())?;
            let (status, response) = handle_convert_request(&body);
            println!("{}", serde_json::to_string(&response)?);
            if status != ConvertStatus::Ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
