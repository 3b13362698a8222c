use clap::Parser;
use directories::ProjectDirs;
use meals::api::{
    CmdResult, ConfigAction, ConfigKey, MealUpdate, MealsApi, MealsPaths, PhotoChange,
};
use meals::config::MealsConfig;
use meals::error::{MealsError, Result};
use meals::model::Photo;
use meals::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_config, print_full_meals, print_meals, print_messages};

/// Overrides the platform data directory.
const HOME_ENV: &str = "MEALS_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "meals=debug" } else { "meals=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "meals", "meals")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MealsError::Config("Could not determine a data directory".into()))
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = data_dir()?;
    let config = MealsConfig::load(&data_dir);
    let store = FileStore::in_dir(&data_dir, &config.data_file);
    let (mut api, startup) = MealsApi::open(store, config, MealsPaths { data_dir });

    match cli.command {
        None | Some(Commands::List) => {
            print_messages(&startup.messages);
            handle_list(&api)
        }
        Some(Commands::Add {
            name,
            rating,
            photo,
        }) => handle_add(&mut api, name, rating, photo),
        Some(Commands::Edit {
            index,
            name,
            rating,
            photo,
            no_photo,
        }) => handle_edit(&mut api, index, name, rating, photo, no_photo),
        Some(Commands::Delete { indexes }) => finish(api.delete_meals(&indexes)?),
        Some(Commands::Move { from, to }) => finish(api.move_meal(&from, &to)?),
        Some(Commands::View { indexes }) => {
            let result = api.view_meals(&indexes)?;
            print_full_meals(&result.listed_meals, api.settings().max_rating);
            Ok(())
        }
        Some(Commands::Photo { index, output }) => finish(api.export_photo(&index, &output)?),
        Some(Commands::Path) => {
            if let Some(path) = api.data_path() {
                println!("{}", path.display());
            }
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
    }
}

fn handle_list(api: &MealsApi<FileStore>) -> Result<()> {
    let result = api.list_meals()?;
    print_meals(&result.listed_meals, api.settings().max_rating);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    api: &mut MealsApi<FileStore>,
    name: String,
    rating: i32,
    photo: Option<PathBuf>,
) -> Result<()> {
    let photo = photo.map(Photo::from_path).transpose()?;
    finish(api.add_meal(name, photo, rating)?)
}

fn handle_edit(
    api: &mut MealsApi<FileStore>,
    index: String,
    name: Option<String>,
    rating: Option<i32>,
    photo: Option<PathBuf>,
    no_photo: bool,
) -> Result<()> {
    let photo = match (photo, no_photo) {
        (Some(path), _) => PhotoChange::Set(Photo::from_path(path)?),
        (None, true) => PhotoChange::Remove,
        (None, false) => PhotoChange::Keep,
    };
    let update = MealUpdate {
        name,
        rating,
        photo,
    };
    finish(api.edit_meal(&index, update)?)
}

fn handle_config(
    api: &MealsApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key.parse::<ConfigKey>()?),
        (Some(key), Some(value)) => ConfigAction::Set(key.parse::<ConfigKey>()?, value),
    };
    let result = api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Prints a mutating command's messages. A failed save has already been
/// reported as a warning; the command itself still succeeded.
fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}
