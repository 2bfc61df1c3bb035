//! reelcat - movie and TV catalog viewer CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path};
use reelcat_api::tmdb::{
    LocalCatalogApi, MovieCategory, TmdbClient, TrendingWindow, TvCategory,
};
use reelcat_view::cards::{CatalogCard, PersonCard};
use reelcat_view::pages::{
    ActorDetailsPage, ActorDetailsQuery, ActorsPage, ActorsQuery, GridModel, HomePage, HomeQuery,
    MovieDetailsPage, MovieDetailsQuery, MoviesPage, MoviesQuery, SearchPage, SearchQuery,
    SeasonPage, SeasonQuery, TvShowDetailsPage, TvShowDetailsQuery, TvShowsPage, TvShowsQuery,
    run_search,
};
use reelcat_view::{Composer, FetchStatus};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show trending movies and TV series.
    Trending(TrendingArgs),
    /// Browse movies by category.
    Movies(MoviesArgs),
    /// Browse TV series by category.
    Tv(TvArgs),
    /// Show weekly trending people.
    People(PeopleArgs),
    /// Show details for one movie.
    Movie(MovieArgs),
    /// Show details for one TV series.
    TvShow(TvShowArgs),
    /// Show one season's episode list.
    Season(SeasonArgs),
    /// Show details for one person.
    Person(PersonArgs),
    /// Search movies, TV, and people at once.
    Search(SearchArgs),
    /// List available genres.
    Genres(GenresArgs),
    /// Manage the config file.
    Config(ConfigCommand),
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Store the TMDB API key in the config file.
    SetKey(SetKeyArgs),
    /// Print the resolved config file path.
    Path,
}

/// Arguments for the `config set-key` subcommand.
#[derive(clap::Args)]
struct SetKeyArgs {
    /// API key to store.
    #[arg(long, required = true)]
    api_key: String,
}

/// Arguments for the `trending` subcommand.
#[derive(clap::Args)]
struct TrendingArgs {
    /// Trending time window ("day" or "week").
    #[arg(long, default_value = "day")]
    window: TrendingWindow,
}

/// Arguments for the `movies` subcommand.
#[derive(clap::Args)]
struct MoviesArgs {
    /// Listing category (popular, top_rated, now_playing, upcoming).
    #[arg(long, default_value = "popular")]
    category: MovieCategory,

    /// Comma-separated genre IDs (e.g. "28,878").
    #[arg(long)]
    with_genres: Option<String>,

    /// Title search term (overrides --category and --with-genres).
    #[arg(long)]
    query: Option<String>,

    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `tv` subcommand.
#[derive(clap::Args)]
struct TvArgs {
    /// Listing category (popular, top_rated, on_the_air, airing_today).
    #[arg(long, default_value = "popular")]
    category: TvCategory,

    /// Comma-separated genre IDs (e.g. "18,80").
    #[arg(long)]
    with_genres: Option<String>,

    /// Name search term (overrides --category and --with-genres).
    #[arg(long)]
    query: Option<String>,

    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `people` subcommand.
#[derive(clap::Args)]
struct PeopleArgs {
    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `tv-show` subcommand.
#[derive(clap::Args)]
struct TvShowArgs {
    /// TMDB series ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `season` subcommand.
#[derive(clap::Args)]
struct SeasonArgs {
    /// TMDB series ID.
    #[arg(long, required = true)]
    id: u64,

    /// Season number (0 = specials).
    #[arg(long, required = true)]
    number: u32,
}

/// Arguments for the `person` subcommand.
#[derive(clap::Args)]
struct PersonArgs {
    /// TMDB person ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search term.
    #[arg(long, required = true)]
    query: String,

    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `genres` subcommand.
#[derive(clap::Args)]
struct GenresArgs {
    /// Media type ("movie" or "tv").
    #[arg(long, default_value = "movie")]
    media: String,
}

/// Resolves the API key: `TMDB_API_KEY` env var, then config file.
fn resolve_api_key(dir: Option<&PathBuf>) -> Result<String> {
    if let Ok(key) = std::env::var("TMDB_API_KEY")
        && !key.is_empty()
    {
        return Ok(key);
    }

    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    config
        .tmdb
        .api_key
        .filter(|key| !key.is_empty())
        .with_context(|| {
            format!(
                "no TMDB API key: set TMDB_API_KEY or add [tmdb] api_key to {}",
                config_path.display()
            )
        })
}

/// Builds a `TmdbClient` with default user agent.
///
/// # Errors
///
/// Returns an error if no API key is configured or the client fails to build.
#[instrument(skip_all)]
fn build_catalog_client(dir: Option<&PathBuf>) -> Result<TmdbClient> {
    let api_key = resolve_api_key(dir)?;
    TmdbClient::builder()
        .api_key(api_key)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TMDB client")
}

/// Unwraps a finished fetch status into its model or an error.
fn into_result<T>(status: &FetchStatus<T>) -> Result<&T> {
    match status {
        FetchStatus::Success(model) => Ok(model),
        FetchStatus::Error(message) => Err(anyhow!("{message}")),
        FetchStatus::Idle | FetchStatus::Loading => Err(anyhow!("fetch did not complete")),
    }
}

/// Prints one catalog card row.
fn print_card(card: &CatalogCard) {
    tracing::info!(
        "{}\t{:.1}\t{}\t{}",
        card.id,
        card.rating,
        card.date.as_deref().unwrap_or("-"),
        card.title,
    );
}

/// Prints a paged card grid with its pagination footer.
fn print_grid(grid: &GridModel) {
    tracing::info!("ID\tRating\tDate\t\tTitle");
    for card in &grid.cards {
        print_card(card);
    }
    tracing::info!("Page {} of {}", grid.page, grid.total_pages);
}

/// Prints one person card row.
fn print_person(person: &PersonCard) {
    tracing::info!(
        "{}\t{:.1}\t{}\t{}",
        person.id,
        person.popularity,
        person.known_for_department.as_deref().unwrap_or("-"),
        person.name,
    );
}

/// Runs the `trending` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_trending(args: &TrendingArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<HomePage>::new();

    composer
        .run(
            &client,
            HomeQuery {
                window: args.window,
            },
        )
        .await;
    let model = into_result(composer.status())?;

    tracing::info!("Trending movies ({}):", args.window);
    tracing::info!("ID\tRating\tDate\t\tTitle");
    for card in &model.trending_movies {
        print_card(card);
    }
    tracing::info!("---");
    tracing::info!("Trending TV ({}):", args.window);
    tracing::info!("ID\tRating\tDate\t\tTitle");
    for card in &model.trending_tv {
        print_card(card);
    }

    Ok(())
}

/// Runs the `movies` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_movies(args: &MoviesArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<MoviesPage>::new();

    let mut query = MoviesQuery::new(args.category);
    query.page = args.page;
    if let Some(genres) = &args.with_genres {
        query = query.with_genres(genres.clone());
    }
    if let Some(term) = &args.query {
        query = query.search(term.clone());
    }

    composer.run(&client, query).await;
    print_grid(into_result(composer.status())?);

    Ok(())
}

/// Runs the `tv` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_tv(args: &TvArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<TvShowsPage>::new();

    let mut query = TvShowsQuery::new(args.category);
    query.page = args.page;
    if let Some(genres) = &args.with_genres {
        query = query.with_genres(genres.clone());
    }
    if let Some(term) = &args.query {
        query = query.search(term.clone());
    }

    composer.run(&client, query).await;
    print_grid(into_result(composer.status())?);

    Ok(())
}

/// Runs the `people` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_people(args: &PeopleArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<ActorsPage>::new();

    composer
        .run(&client, ActorsQuery { page: args.page })
        .await;
    let model = into_result(composer.status())?;

    tracing::info!("ID\tPop\tDept\t\tName");
    for person in &model.people {
        print_person(person);
    }
    tracing::info!("Page {} of {}", model.page, model.total_pages);

    Ok(())
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_movie(args: &MovieArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<MovieDetailsPage>::new();

    composer.run(&client, MovieDetailsQuery { id: args.id }).await;
    let model = into_result(composer.status())?;

    let details = &model.details;
    tracing::info!("ID: {}", details.id);
    tracing::info!("Title: {}", details.title);
    if let Some(tagline) = &details.tagline {
        tracing::info!("Tagline: {tagline}");
    }
    tracing::info!(
        "Released: {}",
        details.release_date.as_deref().unwrap_or("-")
    );
    tracing::info!(
        "Runtime: {}",
        details
            .runtime
            .map_or_else(|| String::from("-"), |r| format!("{r} min"))
    );
    tracing::info!("Rating: {:.1}", details.vote_average);
    tracing::info!(
        "Genres: {}",
        details
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    tracing::info!("Director: {}", model.director.as_deref().unwrap_or("-"));
    if let Some(trailer) = &model.trailer {
        tracing::info!("Trailer: https://www.youtube.com/watch?v={}", trailer.key);
    }
    tracing::info!("---");
    tracing::info!("Cast:");
    for member in &model.top_cast {
        tracing::info!(
            "  {}\t{} ({})",
            member.id,
            member.name,
            member.character.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("---");
    tracing::info!("Similar:");
    for card in &model.similar {
        print_card(card);
    }

    Ok(())
}

/// Runs the `tv-show` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_tv_show(args: &TvShowArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<TvShowDetailsPage>::new();

    composer
        .run(&client, TvShowDetailsQuery { id: args.id })
        .await;
    let model = into_result(composer.status())?;

    let details = &model.details;
    tracing::info!("ID: {}", details.id);
    tracing::info!("Name: {}", details.name);
    tracing::info!(
        "First Air Date: {}",
        details.first_air_date.as_deref().unwrap_or("-")
    );
    tracing::info!("Rating: {:.1}", details.vote_average);
    tracing::info!("Seasons: {}", details.number_of_seasons);
    tracing::info!("Episodes: {}", details.number_of_episodes);
    if let Some(trailer) = &model.trailer {
        tracing::info!("Trailer: https://www.youtube.com/watch?v={}", trailer.key);
    }
    tracing::info!("---");
    for season in &details.seasons {
        tracing::info!(
            "  Season {}: {} episodes (air_date: {})",
            season.season_number,
            season.episode_count,
            season.air_date.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("---");
    tracing::info!("Cast:");
    for member in &model.top_cast {
        tracing::info!(
            "  {}\t{} ({})",
            member.id,
            member.name,
            member.character.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("---");
    tracing::info!("Similar:");
    for card in &model.similar {
        print_card(card);
    }

    Ok(())
}

/// Runs the `season` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_season(args: &SeasonArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<SeasonPage>::new();

    composer
        .run(
            &client,
            SeasonQuery {
                series_id: args.id,
                season_number: args.number,
            },
        )
        .await;
    let model = into_result(composer.status())?;

    let season = &model.season;
    tracing::info!(
        "Season {}: {}",
        season.season_number,
        season.name.as_deref().unwrap_or("-")
    );
    tracing::info!("Episodes:");
    for ep in &season.episodes {
        tracing::info!(
            "  E{:02}: {} (air_date: {}, runtime: {}min)",
            ep.episode_number,
            ep.name,
            ep.air_date.as_deref().unwrap_or("-"),
            ep.runtime
                .map_or_else(|| String::from("-"), |r| r.to_string()),
        );
    }

    Ok(())
}

/// Runs the `person` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_person(args: &PersonArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<ActorDetailsPage>::new();

    composer
        .run(&client, ActorDetailsQuery { id: args.id })
        .await;
    let model = into_result(composer.status())?;

    let details = &model.details;
    tracing::info!("ID: {}", details.id);
    tracing::info!("Name: {}", details.name);
    tracing::info!(
        "Known For: {}",
        details.known_for_department.as_deref().unwrap_or("-")
    );
    tracing::info!("Born: {}", details.birthday.as_deref().unwrap_or("-"));
    if let Some(deathday) = &details.deathday {
        tracing::info!("Died: {deathday}");
    }
    tracing::info!(
        "Place of Birth: {}",
        details.place_of_birth.as_deref().unwrap_or("-")
    );
    if let Some(imdb_url) = &model.imdb_url {
        tracing::info!("IMDB: {imdb_url}");
    }
    tracing::info!("---");
    tracing::info!("Known for:");
    for work in &model.known_for {
        tracing::info!(
            "  {}\t{:.1}\t{} ({})",
            work.id,
            work.popularity,
            work.title,
            work.character.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_search_cmd(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;
    let mut composer = Composer::<SearchPage>::new();

    let mut query = SearchQuery::new(args.query.clone());
    query.page = args.page;
    run_search(&mut composer, &client, query).await;

    if matches!(composer.status(), FetchStatus::Idle) {
        tracing::info!("Nothing searched yet (empty query)");
        return Ok(());
    }
    let model = into_result(composer.status())?;

    tracing::info!("Movies ({}):", model.movies.len());
    for card in &model.movies {
        print_card(card);
    }
    tracing::info!("TV ({}):", model.tv.len());
    for card in &model.tv {
        print_card(card);
    }
    tracing::info!("People ({}):", model.people.len());
    for person in &model.people {
        print_person(person);
    }
    tracing::info!("Page {} of {}", model.page, model.total_pages);

    Ok(())
}

/// Runs the `genres` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the request fails.
#[instrument(skip_all)]
async fn run_genres(args: &GenresArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_catalog_client(dir)?;

    let list = match args.media.as_str() {
        "movie" => client.movie_genres().await,
        "tv" => client.tv_genres().await,
        other => return Err(anyhow!("unknown media type \"{other}\" (expected movie, tv)")),
    }
    .context("genre list request failed")?;

    tracing::info!("ID\tName");
    for genre in &list.genres {
        tracing::info!("{}\t{}", genre.id, genre.name);
    }

    Ok(())
}

/// Runs the `config set-key` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the write fails.
#[instrument(skip_all)]
fn run_config_set_key(args: &SetKeyArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).unwrap_or_default();
    config.tmdb.api_key = Some(args.api_key.clone());
    config.save(&config_path).context("failed to save config")?;
    tracing::info!("Saved API key to {}", config_path.display());

    Ok(())
}

/// Runs the `config path` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved.
#[instrument(skip_all)]
fn run_config_path(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    tracing::info!("{}", config_path.display());

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Trending(args) => run_trending(&args, cli.dir.as_ref()).await,
        Commands::Movies(args) => run_movies(&args, cli.dir.as_ref()).await,
        Commands::Tv(args) => run_tv(&args, cli.dir.as_ref()).await,
        Commands::People(args) => run_people(&args, cli.dir.as_ref()).await,
        Commands::Movie(args) => run_movie(&args, cli.dir.as_ref()).await,
        Commands::TvShow(args) => run_tv_show(&args, cli.dir.as_ref()).await,
        Commands::Season(args) => run_season(&args, cli.dir.as_ref()).await,
        Commands::Person(args) => run_person(&args, cli.dir.as_ref()).await,
        Commands::Search(args) => run_search_cmd(&args, cli.dir.as_ref()).await,
        Commands::Genres(args) => run_genres(&args, cli.dir.as_ref()).await,
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::SetKey(args) => run_config_set_key(&args, cli.dir.as_ref()),
            ConfigSubcommands::Path => run_config_path(cli.dir.as_ref()),
        },
    }
}
