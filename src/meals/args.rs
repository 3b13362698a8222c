use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// "0.3.1" for releases, "0.3.1@abc1234 2026-01-15" for dev builds
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("MEALS_GIT_HASH");
    const COMMIT_DATE: &str = env!("MEALS_COMMIT_DATE");
    const IS_RELEASE: &str = env!("MEALS_IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "meals", version = version())]
#[command(about = "Keep a list of meals with photos and star ratings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List meals
    #[command(alias = "ls")]
    List,

    /// Add a meal to the end of the list
    #[command(alias = "a")]
    Add {
        /// Name of the meal
        name: String,

        /// Star rating
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        rating: i32,

        /// Image file to attach as the meal's photo
        #[arg(short, long)]
        photo: Option<PathBuf>,
    },

    /// Change a meal's name, rating or photo
    #[command(alias = "e")]
    Edit {
        /// Index of the meal (e.g. 2)
        index: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New star rating
        #[arg(short, long, allow_hyphen_values = true)]
        rating: Option<i32>,

        /// Replace the photo with this image file
        #[arg(short, long, conflicts_with = "no_photo")]
        photo: Option<PathBuf>,

        /// Remove the photo
        #[arg(long)]
        no_photo: bool,
    },

    /// Delete one or more meals
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the meals (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Move a meal to another place in the list
    #[command(alias = "mv")]
    Move {
        /// Current index of the meal
        from: String,

        /// Index it should end up at
        to: String,
    },

    /// Show one or more meals in full
    #[command(alias = "v")]
    View {
        /// Indexes of the meals (e.g. 1 2)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Save a meal's photo to a file or directory
    Photo {
        /// Index of the meal
        index: String,

        /// Output file, or a directory to write meal-<index>.<ext> into
        output: PathBuf,
    },

    /// Print the path of the data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, max-rating, seed-on-first-run)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
