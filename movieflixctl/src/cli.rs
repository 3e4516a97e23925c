use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "movieflixctl", version)]
#[command(
    about = "Browse popular movies and search the TMDB catalog from the terminal"
)]
pub struct Cli {
    /// Configuration file (TOML or JSON). Overrides MOVIEFLIX_CONFIG_PATH.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the reachability check before each request
    #[arg(long, global = true, default_value_t = false)]
    pub assume_online: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List popular movies
    Popular(PageArgs),
    /// Search movies by title
    Search {
        /// Free-text title query
        query: String,
        #[command(flatten)]
        pages: PageArgs,
    },
    /// Show the detail view for one row of a listing
    Detail {
        /// Zero-based row in the listing
        index: usize,
        /// Pick the row from search results instead of popular movies
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,
        #[command(flatten)]
        pages: PageArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Number of pages to load by scrolling to the last row
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=50)
    )]
    pub pages: u32,
}

impl Command {
    pub fn query(&self) -> Option<&str> {
        match self {
            Command::Popular(_) => None,
            Command::Search { query, .. } => Some(query.as_str()),
            Command::Detail { query, .. } => query.as_deref(),
        }
    }

    pub fn pages(&self) -> u32 {
        match self {
            Command::Popular(args)
            | Command::Search { pages: args, .. }
            | Command::Detail { pages: args, .. } => args.pages,
        }
    }
}
