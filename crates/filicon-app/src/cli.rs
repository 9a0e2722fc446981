use clap::{Parser, Subcommand};
use filicon_common::ThemeContribution;
use std::path::PathBuf;

/// Compile file icon themes to CSS and resolve icon classes.
#[derive(Parser, Debug)]
#[command(name = "filicon", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Icon theme id override.
    #[arg(short = 't', long, global = true)]
    pub theme: Option<String>,

    /// Extra theme file as ID=PATH. Repeatable; checked before the config.
    #[arg(short = 'c', long = "contribution", value_parser = parse_contribution, global = true)]
    pub contributions: Vec<ThemeContribution>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile the theme to CSS.
    Compile {
        /// Output file. Stdout when neither this nor the config sets one.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the icon class for each file name.
    Resolve {
        /// File names or paths.
        #[arg(required = true)]
        files: Vec<String>,
        /// Language id used when name and extension do not match.
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Compile, then recompile whenever the theme file changes.
    Watch {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List every known theme contribution.
    List,
}

fn parse_contribution(value: &str) -> Result<ThemeContribution, String> {
    ThemeContribution::parse_pair(value).ok_or_else(|| format!("expected ID=PATH, got '{value}'"))
}

pub fn parse() -> Args {
    Args::parse()
}
