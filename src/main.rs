use clap::Parser;
use std::error::Error;

use wx_history::cli::{Args, Command, SummaryArgs};
use wx_history::config::ScrapeConfig;
use wx_history::source::HttpSource;
use wx_history::summary::Summary;
use wx_history::units::temperature::Scale;
use wx_history::{output, pipeline};

fn scrape(config: ScrapeConfig) -> Result<(), Box<dyn Error>> {
    log::info!(
        "scraping {} {} from {} into {}",
        config.city,
        config.year,
        config.host,
        config.output.display()
    );
    let source = HttpSource::new(config.clone())?;
    let weather = pipeline::run(&source, &config)?;
    if weather.is_empty() {
        log::warn!("no daily rows found for {} {}", config.city, config.year);
    }
    Ok(())
}

fn summarize(args: SummaryArgs) -> Result<(), Box<dyn Error>> {
    let records = output::read_records(&args.input)?;
    let scale = if args.fahrenheit {
        Scale::Fahrenheit
    } else {
        Scale::Celsius
    };
    let summary = Summary::from_records(&records, usize::from(args.bins));
    print!("{}", summary.display(scale));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let args = Args::parse();
    match args.command {
        Command::Scrape(scrape_args) => scrape(scrape_args.into()),
        Command::Summary(summary_args) => summarize(summary_args),
    }
}
