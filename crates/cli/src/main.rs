use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, CatalogStore, Encoding, LoadOptions, MovieId};
use pipeline::{default_showcase, resolve_showcase, search_genre, DisplayItem};
use poster_client::{MissingPosterPolicy, PosterResult, TmdbClient, TmdbConfig};
use server::render::NO_RESULTS_MESSAGE;
use server::{AppState, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// ReelPosters - browse movie posters by genre
#[derive(Parser)]
#[command(name = "reel-posters")]
#[command(about = "Browse a movie catalog by genre with posters from TMDB", long_about = None)]
struct Cli {
    /// Path to the catalog file (id::title::genres)
    #[arg(short, long, default_value = "data/movies.dat")]
    catalog: PathBuf,

    /// Catalog text encoding (latin1 or utf8)
    #[arg(long, default_value = "latin1")]
    encoding: Encoding,

    /// Catalog field delimiter
    #[arg(long, default_value = LoadOptions::DEFAULT_DELIMITER)]
    delimiter: String,

    /// TMDB API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Language of the metadata requested from TMDB
    #[arg(long, default_value = poster_client::DEFAULT_LANGUAGE)]
    language: String,

    /// Timeout for each metadata request, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web front-ends
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8501")]
        bind: SocketAddr,

        /// Resolve every genre query again instead of memoizing results
        #[arg(long)]
        no_cache: bool,
    },

    /// Print the movies with posters for a genre
    Search {
        /// Genre text to look for (case-insensitive substring match)
        #[arg(long)]
        genre: String,

        /// Maximum number of catalog rows to look up
        #[arg(long, default_value = "8")]
        limit: usize,
    },

    /// Look up the poster for one movie id
    Poster {
        #[arg(long)]
        id: MovieId,
    },

    /// Print the fixed showcase list
    Showcase,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = Arc::new(build_client(&cli)?);
    let catalogs = CatalogStore::new();

    // Dispatch to appropriate command handler
    match &cli.command {
        Commands::Serve { bind, no_cache } => {
            let catalog = load_catalog(&catalogs, &cli)?;
            handle_serve(catalog, client, *bind, *no_cache).await?
        }
        Commands::Search { genre, limit } => {
            let catalog = load_catalog(&catalogs, &cli)?;
            handle_search(&catalog, &client, genre, *limit).await
        }
        Commands::Poster { id } => handle_poster(&client, *id).await,
        Commands::Showcase => handle_showcase(&client).await,
    }

    Ok(())
}

/// Build the TMDB client from flags and environment
fn build_client(cli: &Cli) -> Result<TmdbClient> {
    let api_key = cli
        .api_key
        .clone()
        .ok_or_else(|| anyhow!("No TMDB API key: pass --api-key or set TMDB_API_KEY"))?;

    let mut config = TmdbConfig::new(api_key).with_language(cli.language.clone());
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    TmdbClient::new(config).context("Failed to build TMDB client")
}

/// Load the catalog once, before anything reads it
fn load_catalog(catalogs: &CatalogStore, cli: &Cli) -> Result<Arc<Catalog>> {
    let options = LoadOptions::new(&cli.catalog)
        .with_delimiter(cli.delimiter.clone())
        .with_encoding(cli.encoding);

    info!("Loading movie catalog from {}", cli.catalog.display());
    let start = Instant::now();
    let catalog = catalogs
        .get_or_load(&options)
        .context("Failed to load movie catalog")?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );
    Ok(catalog)
}

/// Handle the 'serve' command
async fn handle_serve(
    catalog: Arc<Catalog>,
    client: Arc<TmdbClient>,
    bind: SocketAddr,
    no_cache: bool,
) -> Result<()> {
    let config = ServerConfig {
        cache_results: !no_cache,
        ..ServerConfig::new(bind)
    };
    let state = AppState::new(catalog, client, config);

    info!(no_cache, "Starting web front-ends");
    println!(
        "{} http://{}/ and http://{}/showcase",
        "Serving".bold().blue(),
        bind,
        bind
    );
    server::run_server(state).await
}

/// Handle the 'search' command
async fn handle_search(catalog: &Catalog, client: &TmdbClient, genre: &str, limit: usize) {
    let start = Instant::now();
    let items = search_genre(catalog, client, genre, limit, &MissingPosterPolicy::Drop).await;

    if items.is_empty() {
        println!("{}", NO_RESULTS_MESSAGE.yellow());
        return;
    }
    println!("{}", format!("Movies in {}:", genre).bold().blue());
    print_items(&items);
    println!("({} movies in {:?})", items.len(), start.elapsed());
}

/// Handle the 'poster' command
///
/// Shows the raw lookup outcome, so a failed call and a missing poster can
/// be told apart here even though the front-ends treat them the same.
async fn handle_poster(client: &TmdbClient, id: MovieId) {
    match client.fetch_movie(id).await {
        Ok(metadata) => {
            let result = PosterResult::from_metadata(metadata, &client.config().image_base_url);
            print_poster_result(id, &result);
        }
        Err(e) => {
            println!("{} {}: {}", "✗".red(), id, e);
        }
    }
}

/// Handle the 'showcase' command
async fn handle_showcase(client: &TmdbClient) {
    let policy = MissingPosterPolicy::placeholder();
    let items = resolve_showcase(client, &default_showcase(), &policy).await;
    println!("{}", "Showcase:".bold().blue());
    print_items(&items);
}

fn print_poster_result(id: MovieId, result: &PosterResult) {
    println!("{}", format!("Movie {}", id).bold().blue());
    println!("{}Title: {}", "• ".green(), result.title.as_deref().unwrap_or("-"));
    match &result.image_url {
        Some(url) => println!("{}Poster: {}", "• ".green(), url),
        None => println!("{}Poster: {}", "• ".green(), "none".yellow()),
    }
}

fn print_items(items: &[DisplayItem]) {
    for (rank, item) in items.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), item.title.bold());
        println!("   {}", item.poster);
    }
}
