//! Command line of the `kinogrid` binary.
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::view::{SortKey, DEFAULT_PAGE_SIZE, PAGE_SIZES};

#[derive(Debug, Parser)]
#[command(
    name = "kinogrid",
    about = "Popular movies from TMDB as a sortable, paginated table",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    list: ListArgs,
}

impl Cli {
    /// Bare invocation (or bare table flags) means `list`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::List(self.list))
    }
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Print one page of the catalog table
    List(ListArgs),
    /// Print the whole catalog as JSON
    Json,
    /// Print the detail card of one movie
    Show {
        id: i64,
        #[arg(long)]
        no_color: bool,
    },
    /// Print the full-size poster URL of one movie
    Poster { id: i64 },
    /// Show or change the display mode
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Clone, Args, PartialEq)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    pub page_size: usize,
    /// title, overview, date or rating, optionally with :asc or :desc
    #[arg(long)]
    pub sort: Option<SortKey>,
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Toggle,
    Dark,
    Light,
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("must be one of {PAGE_SIZES:?}"))
    }
}
