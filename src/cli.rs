//! Command-line arguments for nbtoc

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::format::TitleStyle;
use crate::toc::TocOptions;

#[derive(Parser, Debug)]
#[command(name = "nbtoc")]
#[command(version)]
#[command(about = "Print a Markdown table of contents for a Jupyter notebook", long_about = None)]
pub struct Cli {
    /// Notebook for which to create the table of contents
    #[arg(value_name = "NOTEBOOK", required_unless_present = "completions")]
    pub notebook: Option<PathBuf>,

    /// Leave out headings deeper than this level (e.g. 2 keeps # and ##)
    #[arg(short = 'l', long = "max-level", value_name = "N")]
    pub max_level: Option<NonZeroUsize>,

    /// Title line printed above the entries
    #[arg(long, value_enum, default_value = "table-of-contents")]
    pub title: TitleStyle,

    /// Log skipped cells and excluded headings to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    pub fn toc_options(&self) -> TocOptions {
        TocOptions::default()
            .with_max_level(self.max_level.map(NonZeroUsize::get))
            .with_title(self.title)
    }
}
