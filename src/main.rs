use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use reelfind::args::Args;
use reelfind::config::Config;
use reelfind::library::{Library, LibraryStore, Rating};
use reelfind::logging;
use reelfind::provider::{Movie, MovieLookup, OmdbClient};
use reelfind::render;
use reelfind::search::{SearchController, SearchState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(key) = &args.api_key {
        config.provider.api_key = Some(key.clone());
    }

    let client = Arc::new(OmdbClient::new(&config.provider)?);

    match &args.query {
        Some(term) => run_once(client, term).await,
        None => run_interactive(client, &config).await,
    }
}

/// One-shot mode: search once, print the terminal state, exit.
///
/// Exits non-zero when the lookup settles in `Error`, so scripts can tell
/// "no matches" or transport failures apart from success.
async fn run_once(client: Arc<OmdbClient>, term: &str) -> anyhow::Result<()> {
    let mut controller = SearchController::new(client);
    let mut rx = controller.subscribe();
    controller.set_query(term);

    loop {
        let state = rx.borrow_and_update().clone();
        match state {
            SearchState::Loading => {
                rx.changed().await.context("search lifecycle ended early")?;
            }
            SearchState::Error { message } => anyhow::bail!(message),
            other => {
                print!("{}", render::render_state(&other));
                return Ok(());
            }
        }
    }
}

async fn run_interactive(client: Arc<OmdbClient>, config: &Config) -> anyhow::Result<()> {
    let store = LibraryStore::new(config.library.effective_path());
    let library = Library::new(store.load()?);
    tracing::info!(path = %store.path().display(), "Library loaded");

    let mut controller = SearchController::new(Arc::clone(&client) as Arc<dyn MovieLookup>);
    let results_rx = controller.subscribe();

    // Render every observed transition. Slow consumers only ever skip
    // intermediate states, never see stale ones.
    let mut printer_rx = controller.subscribe();
    tokio::spawn(async move {
        while printer_rx.changed().await.is_ok() {
            let state = printer_rx.borrow_and_update().clone();
            println!("{}", render::render_state(&state));
        }
    });

    println!("reelfind - type to search, :help for commands");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("stdin read failed")? else {
                    break;
                };
                let line = line.trim().to_string();
                if line == ":quit" || line == ":q" {
                    break;
                }
                if let Some(command) = line.strip_prefix(':') {
                    let results = results_rx.borrow().results().to_vec();
                    handle_command(command, &client, &library, &store, &results).await;
                } else {
                    controller.set_query(&line);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    // Dropping the controller cancels any in-flight lookup.
    Ok(())
}

/// Dispatch a `:command` line. User mistakes are printed, never fatal.
async fn handle_command(
    command: &str,
    client: &OmdbClient,
    library: &Library,
    store: &LibraryStore,
    results: &[Movie],
) {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("help") => {
            println!(
                "Commands:\n  \
                 :open N         show details for result N\n  \
                 :rate N STARS   rate result N (1-10) and add to watched\n  \
                 :unwatch ID     remove an IMDb id from watched\n  \
                 :watched        show the watched list\n  \
                 :quit           exit"
            );
        }
        Some("watched") => {
            println!("{}", render::render_watched(&library.entries(), &library.stats()));
        }
        Some("open") => {
            let Some(movie) = parts.next().and_then(|n| pick(results, n)) else {
                println!("Usage: :open N (N from the current results)");
                return;
            };
            match client.details(&movie.imdb_id).await {
                Ok(details) => print!("{}", render::render_details(&details)),
                Err(err) => println!("Details fetch failed: {err}"),
            }
        }
        Some("rate") => {
            let movie = parts.next().and_then(|n| pick(results, n));
            let stars = parts.next().and_then(|s| s.parse::<u8>().ok());
            let (Some(movie), Some(stars)) = (movie, stars) else {
                println!("Usage: :rate N STARS (N from the current results, 1-10 stars)");
                return;
            };
            match Rating::try_from(stars) {
                Ok(rating) => {
                    library.rate(movie.clone(), rating);
                    match store.save(&library.entries()) {
                        Ok(()) => println!("Rated {} {}/10", movie.title, stars),
                        Err(err) => println!("Could not save watched list: {err}"),
                    }
                }
                Err(err) => println!("{err}"),
            }
        }
        Some("unwatch") => {
            let Some(imdb_id) = parts.next() else {
                println!("Usage: :unwatch IMDB_ID");
                return;
            };
            if library.remove(imdb_id) {
                match store.save(&library.entries()) {
                    Ok(()) => println!("Removed {imdb_id}"),
                    Err(err) => println!("Could not save watched list: {err}"),
                }
            } else {
                println!("{imdb_id} is not in the watched list");
            }
        }
        Some(other) => println!("Unknown command ':{other}', try :help"),
        None => println!("Empty command, try :help"),
    }
}

/// Resolve a 1-based index argument against the current results.
fn pick<'a>(results: &'a [Movie], raw: &str) -> Option<&'a Movie> {
    let index = raw.parse::<usize>().ok()?.checked_sub(1)?;
    results.get(index)
}
