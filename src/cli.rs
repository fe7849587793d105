use std::path::PathBuf;

use clap::builder::{styling::AnsiColor, Styles};
use clap::{Parser, Subcommand};

use crate::config::{
    ScrapeConfig, DEFAULT_CITY, DEFAULT_HOST, DEFAULT_OUTPUT, DEFAULT_USER_AGENT, DEFAULT_YEAR,
};
use crate::output::OutputMode;

const ABOUT: &str = "Daily temperature history scraper";

const LONG_ABOUT: &str = "
Scrapes a year of daily high/low temperatures for one city from the monthly history pages of
lishi.tianqi.com and writes them to a JSON file.

Each month is fetched in turn. If a month fails, the months already collected are still written
before the error is reported.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch twelve months of history and write them out
    Scrape(ScrapeArgs),
    /// Print temperature statistics for a written file
    Summary(SummaryArgs),
}

#[derive(clap::Args, Debug)]
pub struct ScrapeArgs {
    #[arg(long, default_value = DEFAULT_HOST, help = "History site host name")]
    pub host: String,

    #[arg(long, default_value = DEFAULT_CITY, help = "City slug as used in the site URLs (e.g. beijing)")]
    pub city: String,

    #[arg(long, default_value_t = DEFAULT_YEAR, value_parser = clap::value_parser!(u16).range(1000..=9999))]
    pub year: u16,

    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputMode::Overwrite)]
    pub mode: OutputMode,

    #[arg(long, default_value = DEFAULT_USER_AGENT, hide_default_value = true)]
    pub user_agent: String,
}

impl From<ScrapeArgs> for ScrapeConfig {
    fn from(args: ScrapeArgs) -> Self {
        Self {
            host: args.host,
            city: args.city,
            year: args.year,
            output: args.output,
            mode: args.mode,
            user_agent: args.user_agent,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub input: PathBuf,

    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub bins: u16,

    #[arg(long, help = "Show temperatures in Fahrenheit")]
    pub fahrenheit: bool,
}
