use std::io::Write as _;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tokio::io::AsyncBufReadExt;
use tracing::{debug, info};

use spacebio::config::Config;
use spacebio::dataset::loader;
use spacebio::dataset::models::RecordCollection;
use spacebio::output::DisplayLimits;
use spacebio::pipeline::{run_cycle, SearchRequest};
use spacebio::search::matcher::resolve_year_range;
use spacebio::text::highlight::RiskHighlighter;
use spacebio::views::audience::AudienceMode;
use spacebio::views::selector::ViewOptions;

/// Spacebio: search space biology publications by keyword.
///
/// Shows the matches as short summaries, keyword trends, or titles with
/// health and mission risk terms highlighted, depending on who is reading.
#[derive(Parser)]
#[command(name = "spacebio", version, about)]
struct Cli {
    /// Dataset path or http(s) URL (overrides SPACEBIO_DATASET)
    #[arg(long, global = true)]
    dataset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the view for an audience
    Search {
        /// Keyword to look for in titles (omit to show everything)
        #[arg(default_value = "")]
        query: String,

        /// Who the results are for
        #[arg(long, short, value_enum, default_value_t = AudienceMode::Scientist)]
        audience: AudienceMode,

        /// Earliest publication year to include
        #[arg(long)]
        year_from: Option<i32>,

        /// Latest publication year to include
        #[arg(long)]
        year_to: Option<i32>,

        /// Print the result as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Also write a markdown report to the report directory
        #[arg(long)]
        report: bool,
    },

    /// Interactive session: each line typed is a new search
    Explore {
        /// Audience to start in (switch with `:mode <audience>`)
        #[arg(long, short, value_enum, default_value_t = AudienceMode::Scientist)]
        audience: AudienceMode,
    },

    /// Show dataset status (source, record count, year span)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spacebio=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }

    match cli.command {
        Commands::Search {
            query,
            audience,
            year_from,
            year_to,
            json,
            report,
        } => {
            let collection = load_collection(&config).await?;
            let years = resolve_year_range(collection.year_span(), year_from, year_to)?;
            let options = view_options(&config);

            let request = SearchRequest {
                query,
                audience,
                years,
            };
            let outcome = run_cycle(&collection, &request, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                spacebio::output::terminal::display_report(
                    &outcome,
                    &DisplayLimits::from(&config),
                );
            }

            if report {
                let path = spacebio::output::markdown::generate_report(&outcome, &config.report_dir)?;
                // Keep stdout pure JSON when --json is set
                eprintln!(
                    "\n{}",
                    format!("Markdown report saved to: {}", path.display()).bold()
                );
            }
        }

        Commands::Explore { audience } => {
            let collection = load_collection(&config).await?;
            explore(&collection, &config, audience).await?;
        }

        Commands::Status => {
            let collection = load_collection(&config).await?;
            spacebio::status::show(&collection, &config.dataset_source());
        }
    }

    Ok(())
}

/// Load the dataset once. Any failure here ends the process.
async fn load_collection(config: &Config) -> Result<RecordCollection> {
    config.require_dataset()?;
    let source = config.dataset_source();
    info!(source = %source, "Loading publication dataset");
    loader::load(&source).await
}

fn view_options(config: &Config) -> ViewOptions {
    ViewOptions {
        top_k: config.top_keywords,
        highlighter: RiskHighlighter::default(),
    }
}

/// Read queries from stdin until EOF or `:quit`, running a full cycle for
/// each one against the same loaded collection.
async fn explore(collection: &RecordCollection, config: &Config, start: AudienceMode) -> Result<()> {
    let options = view_options(config);
    let limits = DisplayLimits::from(config);
    let mut request = SearchRequest {
        audience: start,
        ..SearchRequest::default()
    };

    println!(
        "{}",
        format!("Searching {} publications.", collection.len()).bold()
    );
    println!(
        "{}",
        "Type a keyword to search, `:mode <scientist|manager|mission-architect>` to switch \
         audience, `:years <from> <to>` to narrow by year, `:quit` to leave."
            .dimmed()
    );

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n[{}] > ", request.audience);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            let mut parts = command.split_whitespace();
            match parts.next() {
                Some("quit") | Some("q") => break,
                Some("mode") => {
                    let name = parts.collect::<Vec<_>>().join(" ");
                    match name.parse::<AudienceMode>() {
                        Ok(mode) => request.audience = mode,
                        Err(e) => {
                            println!("  {}", e.to_string().red());
                            continue;
                        }
                    }
                }
                Some("years") => {
                    let bounds: Vec<Option<i32>> =
                        parts.map(|p| p.parse::<i32>().ok()).collect();
                    let (from, to) = match bounds.as_slice() {
                        [] => (None, None),
                        [Some(from), Some(to)] => (Some(*from), Some(*to)),
                        _ => {
                            println!("  {}", "Usage: :years <from> <to>  (no bounds clears the filter)".red());
                            continue;
                        }
                    };
                    match resolve_year_range(collection.year_span(), from, to) {
                        Ok(years) => request.years = years,
                        Err(e) => {
                            println!("  {}", e.to_string().red());
                            continue;
                        }
                    }
                }
                _ => {
                    println!("  {}", format!("Unknown command ':{command}'").red());
                    continue;
                }
            }
        } else {
            request.query = line.to_string();
        }

        debug!(query = %request.query, audience = %request.audience, "Explore cycle");
        let outcome = run_cycle(collection, &request, &options);
        spacebio::output::terminal::display_report(&outcome, &limits);
    }

    Ok(())
}
