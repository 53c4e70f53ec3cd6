use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

use bookieman::config::Config;
use bookieman::db::models::TimelineRun;
use bookieman::google_books::client::GoogleBooksClient;
use bookieman::google_books::traits::DescriptionSource;
use bookieman::lexicon::{self, StopWords};
use bookieman::nyt::client::NytClient;
use bookieman::throttle::Throttle;
use bookieman::weeks;

/// bookieman: best-seller timelines and description lexicons.
///
/// Polls the NYT Books API week by week, enriches new books with Google
/// Books descriptions, and caches everything locally.
#[derive(Parser)]
#[command(name = "bookieman", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the book cache
    Init,

    /// List the available best-seller lists
    Lists,

    /// Fetch weekly snapshots of one or more lists and cache their books
    Timeline {
        /// Encoded list name (see `bookieman lists`); repeat for several lists
        #[arg(long = "list", required = true)]
        lists: Vec<String>,

        /// First week to fetch (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Stop before this date (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Keep NYT's own blurbs instead of looking up Google Books descriptions
        #[arg(long)]
        no_enrich: bool,

        /// Write the timelines as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// How many longest-running books to show per list (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Build the description lexicon from the cache
    Lexicon {
        /// Stopword file, one word per line (default: built-in English list)
        #[arg(long)]
        stopwords: Option<PathBuf>,

        /// Write the lexicon to this file, one word per line
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write the active stopword list to this file
        #[arg(long)]
        export_stopwords: Option<PathBuf>,
    },

    /// Show cache status (record counts, recent runs)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bookieman=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing book cache...");
            let config = Config::load()?;
            let cache = bookieman::db::initialize(&config.db_path)?;
            let table_count = cache.table_count().await?;
            println!("Cache initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext: put NYT_API_KEY (and GOOGLE_BOOKS_API_KEY) in your .env file,");
            println!("then run: bookieman lists");
        }

        Commands::Lists => {
            let config = Config::load()?;
            config.require_nyt()?;

            let client = NytClient::new(&config.nyt_api_url, &config.nyt_api_key)?;
            let names = client.list_names().await?;
            for (idx, name) in names.iter().enumerate() {
                info!(idx = idx, list = name.list_name_encoded.as_str(), "Available list");
            }
            bookieman::output::terminal::display_list_names(&names);
        }

        Commands::Timeline {
            lists,
            start,
            end,
            no_enrich,
            output,
            top,
        } => {
            let config = Config::load()?;
            config.require_nyt()?;
            if !no_enrich {
                config.require_google_books()?;
            }

            let start = weeks::parse_date(&start)?;
            let end = weeks::parse_date(&end)?;
            let week_list = weeks::weeks_between(start, end);
            if week_list.is_empty() {
                println!(
                    "{} no weeks between {start} and {end}",
                    "Warning:".yellow()
                );
            }

            let cache = bookieman::db::initialize(&config.db_path)?;
            let nyt = NytClient::new(&config.nyt_api_url, &config.nyt_api_key)?;
            let google = if no_enrich {
                None
            } else {
                Some(GoogleBooksClient::new(
                    &config.google_books_api_url,
                    &config.google_books_api_key,
                )?)
            };
            let descriptions = google.as_ref().map(|g| g as &dyn DescriptionSource);
            let throttle = Throttle::new(config.request_delay);

            let mut timelines = Vec::with_capacity(lists.len());
            for list_name in &lists {
                info!(list = list_name.as_str(), weeks = week_list.len(), "Working with list");
                println!(
                    "Fetching {} ({} weeks from {start})...",
                    list_name.bold(),
                    week_list.len()
                );

                let (timeline, stats) = bookieman::pipeline::timeline::run(
                    &nyt,
                    descriptions,
                    cache.as_ref(),
                    &throttle,
                    list_name,
                    &week_list,
                )
                .await?;

                cache
                    .record_timeline_run(&TimelineRun {
                        list_name: list_name.clone(),
                        start_date: weeks::format_date(start),
                        end_date: weeks::format_date(end),
                        weeks_fetched: stats.weeks_fetched as u32,
                        books_cached: stats.books_cached as u32,
                        finished_at: String::new(),
                    })
                    .await?;

                let books: HashMap<_, _> = cache
                    .all_books()
                    .await?
                    .into_iter()
                    .map(|b| (b.isbn.clone(), b))
                    .collect();
                bookieman::output::terminal::display_timeline(&timeline, &stats, &books, top);

                if stats.weeks_fetched == 0 && stats.weeks_failed > 0 {
                    warn!(list = list_name.as_str(), "Every week failed; check the list name");
                }
                timelines.push(timeline);
            }

            if let Some(path) = output {
                bookieman::output::json::write_timelines(&path, &timelines)?;
                println!(
                    "\n{}",
                    format!("Timeline saved to: {}", path.display()).bold()
                );
            }
        }

        Commands::Lexicon {
            stopwords,
            output,
            export_stopwords,
        } => {
            let config = Config::load()?;
            let cache = bookieman::db::open(&config.db_path)?;

            let stop = match &stopwords {
                Some(path) => StopWords::from_file(path)?,
                None => StopWords::english(),
            };
            info!(count = stop.len(), "Loaded stopwords");

            let lexicon = lexicon::from_cache(cache.as_ref(), &stop).await?;
            let book_count = cache.book_count().await?;
            bookieman::output::terminal::display_lexicon(&lexicon, book_count as usize, 40);

            if let Some(path) = output {
                lexicon::write_lexicon(&path, &lexicon)?;
                println!(
                    "\n{}",
                    format!("Lexicon saved to: {}", path.display()).bold()
                );
            }
            if let Some(path) = export_stopwords {
                lexicon::write_stopwords(&path, &stop)?;
                println!("Stopwords saved to: {}", path.display());
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            if !bookieman::status::is_initialized(&config.db_path) {
                println!("Database: not initialized");
                println!("\nRun `bookieman init` to set up the cache.");
                return Ok(());
            }
            let cache = bookieman::db::open(&config.db_path)?;
            bookieman::status::show(&cache, &config.db_path).await?;
        }
    }

    Ok(())
}
