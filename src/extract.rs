//! Pulls daily rows out of a monthly history page.
//!
//! The page lists one `li` per day inside `ul.thrui`. Each row carries the
//! date in `div.th200` and the high/low temperatures in the first two
//! `div.th140` cells, e.g.
//!
//! ```html
//! <li>
//!   <div class="th200">2022-01-01 星期六</div>
//!   <div class="th140">5℃</div>
//!   <div class="th140">-3℃</div>
//!   <div class="th140">晴</div>
//! </li>
//! ```

use std::fmt;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::record::WeatherRecord;

const DEGREES: char = '℃';

static SECTION: LazyLock<Selector> = LazyLock::new(|| selector("ul.thrui"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static DATE: LazyLock<Selector> = LazyLock::new(|| selector("div.th200"));
static TEMP: LazyLock<Selector> = LazyLock::new(|| selector("div.th140"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector `{css}`: {e:?}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingDate,
    MissingMaxTemp,
    MissingMinTemp,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::MissingDate => "missing date cell",
            SkipReason::MissingMaxTemp => "missing max temperature cell",
            SkipReason::MissingMinTemp => "missing min temperature cell",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Record(WeatherRecord),
    Skipped(SkipReason),
}

/// Records of one month in page order, plus how many rows were dropped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MonthExtract {
    pub records: Vec<WeatherRecord>,
    pub skipped: usize,
}

pub fn extract_page(month: &str, html: &str) -> Result<MonthExtract, ExtractError> {
    let document = Html::parse_document(html);
    let section = document
        .select(&SECTION)
        .next()
        .ok_or_else(|| ExtractError::SectionNotFound {
            month: month.to_string(),
        })?;

    let mut extract = MonthExtract::default();
    for row in section.select(&ROW) {
        match extract_row(row) {
            RowOutcome::Record(record) => extract.records.push(record),
            RowOutcome::Skipped(reason) => {
                log::debug!("month {month}: skipping row ({reason})");
                extract.skipped += 1;
            }
        }
    }
    Ok(extract)
}

/// Same rules as [`extract_row`], for the inner markup of a single row.
pub fn extract_fragment(fragment: &str) -> RowOutcome {
    let fragment = Html::parse_fragment(fragment);
    extract_row(fragment.root_element())
}

pub fn extract_row(row: ElementRef<'_>) -> RowOutcome {
    let date = cell_text(row, &DATE, 0);
    let Some(date) = date.as_deref().and_then(date_token) else {
        return RowOutcome::Skipped(SkipReason::MissingDate);
    };
    let max_temp = cell_text(row, &TEMP, 0);
    let Some(max_temp) = max_temp.as_deref().and_then(strip_degrees) else {
        return RowOutcome::Skipped(SkipReason::MissingMaxTemp);
    };
    let min_temp = cell_text(row, &TEMP, 1);
    let Some(min_temp) = min_temp.as_deref().and_then(strip_degrees) else {
        return RowOutcome::Skipped(SkipReason::MissingMinTemp);
    };

    RowOutcome::Record(WeatherRecord::new(date, max_temp, min_temp))
}

fn cell_text(row: ElementRef<'_>, selector: &Selector, nth: usize) -> Option<String> {
    row.select(selector)
        .nth(nth)
        .map(|cell| cell.text().collect::<String>())
}

// "2022-01-01 星期六" -> "2022-01-01"
fn date_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

fn strip_degrees(text: &str) -> Option<&str> {
    let value = text.split(DEGREES).next().unwrap_or_default().trim();
    (!value.is_empty()).then_some(value)
}
