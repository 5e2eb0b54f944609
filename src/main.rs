//! Terminal front end for the popular-movies catalog.
//! Reads TMDB_API_KEY from the environment (.env supported); see `kinogrid --help`.

use anyhow::{anyhow, Result};
use clap::Parser;
use dotenvy::dotenv;
use kinogrid::cli::{Cli, Command, ThemeAction};
use kinogrid::config::AppConfig;
use kinogrid::preferences::{PaletteMode, PreferenceStore, ThemePreference};
use kinogrid::tmdb::{TmdbApi, TmdbClient};
use kinogrid::view::{find_movie, render_detail, RenderConfig, TableView};
use kinogrid::{Catalog, CatalogSession};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let api: Arc<dyn TmdbApi> = match TmdbClient::new(&config.tmdb) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!("Could not build TMDB client, showing static catalog: {}", e);
            return Ok(Catalog::fallback());
        }
    };
    let session = CatalogSession::new(api, config.tmdb.image_base_url.clone());
    let catalog = session.load().await?;
    info!("Loaded {} movies ({:?})", catalog.movies.len(), catalog.source);
    Ok(catalog)
}

// Logged after the subscriber is installed, otherwise the line is dropped.
fn report_env_file(env_file: dotenvy::Result<PathBuf>) {
    match env_file {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
}

fn render_config(theme: &ThemePreference, no_color: bool) -> RenderConfig {
    RenderConfig {
        palette: theme.palette_mode(),
        color: !no_color && std::io::stdout().is_terminal(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let command = Cli::parse().into_command();

    let env_file = dotenv();
    init_tracing();
    report_env_file(env_file);

    let config = AppConfig::from_env()?;
    let mut theme = ThemePreference::load(PreferenceStore::new(&config.preferences_path));

    match command {
        Command::Theme { action } => {
            let mode = match action {
                None => theme.palette_mode(),
                Some(ThemeAction::Toggle) => theme.toggle()?,
                Some(ThemeAction::Dark) => {
                    theme.set_dark(true)?;
                    PaletteMode::Dark
                }
                Some(ThemeAction::Light) => {
                    theme.set_dark(false)?;
                    PaletteMode::Light
                }
            };
            println!("{mode:?}");
        }
        Command::List(args) => {
            let catalog = load_catalog(&config).await?;
            let mut view = TableView::new(&catalog.movies, args.page_size)?;
            if let Some(key) = args.sort {
                view.sort_by(key);
            }
            let render = render_config(&theme, args.no_color);
            let page = usize::try_from(args.page - 1).unwrap_or(usize::MAX);
            println!("{}", view.render_page(page, &render));
        }
        Command::Json => {
            let catalog = load_catalog(&config).await?;
            println!("{}", serde_json::to_string_pretty(&catalog.movies)?);
        }
        Command::Show { id, no_color } => {
            let catalog = load_catalog(&config).await?;
            let movie = find_movie(&catalog.movies, id)
                .ok_or_else(|| anyhow!("movie {id} is not in the catalog"))?;
            println!("{}", render_detail(movie, &render_config(&theme, no_color)));
        }
        Command::Poster { id } => {
            let catalog = load_catalog(&config).await?;
            let movie = find_movie(&catalog.movies, id)
                .ok_or_else(|| anyhow!("movie {id} is not in the catalog"))?;
            println!("{}", movie.poster);
        }
    }
    Ok(())
}
