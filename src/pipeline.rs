use crate::config::ScrapeConfig;
use crate::error::Error;
use crate::extract::extract_page;
use crate::months::months;
use crate::output::{partial_path, write_records, OutputMode};
use crate::record::WeatherLog;
use crate::source::PageSource;

/// Walks the twelve months in order, collecting every day that parses.
///
/// On the first fetch or section failure the loop stops, but whatever was
/// already collected is passed back alongside the error.
pub fn collect(source: &impl PageSource) -> (WeatherLog, Result<(), Error>) {
    let mut weather = WeatherLog::new();
    for month in months() {
        let extract = match source
            .fetch(month)
            .map_err(Error::from)
            .and_then(|html| extract_page(month, &html).map_err(Error::from))
        {
            Ok(extract) => extract,
            Err(e) => return (weather, Err(e)),
        };

        log::info!(
            "month {month}: {} records, {} rows skipped",
            extract.records.len(),
            extract.skipped
        );
        weather.extend(extract.records, extract.skipped);
    }
    (weather, Ok(()))
}

/// Collects all months and writes them out.
///
/// A run that stops early never clobbers an existing output: in overwrite
/// mode the months it did collect go to `<output>.partial` instead, and a
/// run that collected nothing writes nothing.
pub fn run(source: &impl PageSource, config: &ScrapeConfig) -> Result<WeatherLog, Error> {
    let (weather, collected) = collect(source);

    let target = match &collected {
        Ok(()) => Some(config.output.clone()),
        Err(e) => {
            log::error!("stopping early after {} records: {e}", weather.len());
            if weather.is_empty() {
                None
            } else if config.mode == OutputMode::Overwrite {
                Some(partial_path(&config.output))
            } else {
                Some(config.output.clone())
            }
        }
    };

    match target {
        Some(path) => {
            write_records(&path, weather.records(), config.mode)?;
            log::info!(
                "wrote {} records to {} ({}), {} rows skipped",
                weather.len(),
                path.display(),
                config.mode,
                weather.skipped()
            );
        }
        None => log::warn!("nothing collected, {} left as is", config.output.display()),
    }

    collected.map(|()| weather)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExtractError, FetchError};
    use crate::output::read_records;
    use crate::record::WeatherRecord;
    use crate::source::fixture::FixtureSource;

    fn page(rows: &[(&str, &str, &str)]) -> String {
        let items: String = rows
            .iter()
            .map(|(date, high, low)| {
                format!(
                    r#"<li><div class="th200">{date} 星期一 </div><div class="th140">{high}℃</div><div class="th140">{low}℃</div><div class="th140">晴</div></li>"#
                )
            })
            .collect();
        format!(r#"<html><body><ul class="thrui">{items}<li></li></ul></body></html>"#)
    }

    fn full_year() -> FixtureSource {
        months().fold(FixtureSource::new(), |source, month| {
            source.with_page(
                month,
                page(&[
                    (format!("2022-{month}-01").as_str(), "10", "1"),
                    (format!("2022-{month}-02").as_str(), "11", "2"),
                ]),
            )
        })
    }

    fn config_in(dir: &tempfile::TempDir) -> ScrapeConfig {
        ScrapeConfig {
            output: dir.path().join("weather.json"),
            ..ScrapeConfig::default()
        }
    }

    #[test]
    fn records_follow_month_then_page_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let weather = run(&full_year(), &config).unwrap();
        assert_eq!(weather.len(), 24);
        assert_eq!(weather.skipped(), 12);

        let written = read_records(&config.output).unwrap();
        let dates: Vec<_> = written.iter().map(|r| r.date.clone()).collect();
        let expected: Vec<_> = months()
            .flat_map(|m| [format!("2022-{m}-01"), format!("2022-{m}-02")])
            .collect();
        assert_eq!(dates, expected);
        assert_eq!(written[0], WeatherRecord::new("2022-01-01", "10", "1"));
    }

    #[test]
    fn missing_section_stops_the_run_but_keeps_earlier_months() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let source = full_year().with_page("04", "<html><body>maintenance</body></html>");

        let err = run(&source, &config).unwrap_err();
        assert!(matches!(
            err,
            Error::Extract(ExtractError::SectionNotFound { ref month }) if month == "04"
        ));

        let written = read_records(&partial_path(&config.output)).unwrap();
        assert_eq!(written.len(), 6);
        assert_eq!(written.last().unwrap().date, "2022-03-02");
        assert!(!config.output.exists());
    }

    #[test]
    fn fetch_failure_keeps_earlier_months() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let source = FixtureSource::new()
            .with_page("01", page(&[("2022-01-01", "5", "-3")]))
            .with_page("02", page(&[("2022-02-01", "6", "-2")]));

        let (weather, collected) = collect(&source);
        assert!(matches!(
            collected,
            Err(Error::Fetch(FetchError::MissingPage(ref month))) if month == "03"
        ));
        assert_eq!(weather.len(), 2);

        assert!(run(&source, &config).is_err());
        assert_eq!(
            read_records(&partial_path(&config.output)).unwrap(),
            weather.records()
        );
    }

    #[test]
    fn failed_rerun_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        run(&full_year(), &config).unwrap();
        let before = std::fs::read(&config.output).unwrap();

        assert!(run(&FixtureSource::new(), &config).is_err());
        assert_eq!(std::fs::read(&config.output).unwrap(), before);
        assert!(!partial_path(&config.output).exists());

        let broken = full_year().with_page("06", "<html><body>502</body></html>");
        assert!(run(&broken, &config).is_err());
        assert_eq!(std::fs::read(&config.output).unwrap(), before);
        assert_eq!(read_records(&partial_path(&config.output)).unwrap().len(), 10);
    }

    #[test]
    fn failed_merge_run_adds_what_it_collected() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScrapeConfig {
            mode: OutputMode::Merge,
            ..config_in(&dir)
        };

        run(&full_year(), &config).unwrap();
        let broken = full_year().with_page("02", "<html></html>");
        assert!(run(&broken, &config).is_err());
        assert!(run(&FixtureSource::new(), &config).is_err());

        assert_eq!(read_records(&config.output).unwrap().len(), 26);
    }

    #[test]
    fn append_mode_run_twice_is_not_one_json_value() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScrapeConfig {
            mode: OutputMode::Append,
            ..config_in(&dir)
        };

        run(&full_year(), &config).unwrap();
        run(&full_year(), &config).unwrap();

        let text = std::fs::read_to_string(&config.output).unwrap();
        assert!(text.contains("]["));
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_err());
    }

    #[test]
    fn overwrite_mode_run_twice_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        run(&full_year(), &config).unwrap();
        run(&full_year(), &config).unwrap();

        assert_eq!(read_records(&config.output).unwrap().len(), 24);
    }
}
