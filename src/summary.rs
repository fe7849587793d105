use std::fmt;

use chrono::NaiveDate;

use crate::record::WeatherRecord;
use crate::units::temperature::Scale;

const BAR_WIDTH: usize = 40;
// Target tick count used when widening the histogram domain to round numbers.
const NICE_TICKS: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lower: f32,
    pub upper: f32,
    pub count: usize,
}

/// Statistics over the records whose date and temperatures parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub unparsed: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub lowest: Option<i32>,
    pub highest: Option<i32>,
    pub min_histogram: Vec<Bin>,
    pub max_histogram: Vec<Bin>,
}

struct Day {
    date: NaiveDate,
    max_temp: i32,
    min_temp: i32,
}

impl Summary {
    pub fn from_records(records: &[WeatherRecord], bins: usize) -> Self {
        let days: Vec<Day> = records.iter().filter_map(parse_day).collect();
        let unparsed = records.len() - days.len();

        let first_date = days.iter().map(|d| d.date).min();
        let last_date = days.iter().map(|d| d.date).max();
        let lowest = days.iter().map(|d| d.min_temp).min();
        let highest = days.iter().map(|d| d.max_temp).max();

        let (min_histogram, max_histogram) = match (lowest, highest) {
            (Some(lo), Some(hi)) => {
                let domain = nice(lo.min(hi) as f32, hi.max(lo) as f32);
                (
                    histogram(days.iter().map(|d| d.min_temp), domain, bins),
                    histogram(days.iter().map(|d| d.max_temp), domain, bins),
                )
            }
            _ => (Vec::new(), Vec::new()),
        };

        Self {
            count: days.len(),
            unparsed,
            first_date,
            last_date,
            lowest,
            highest,
            min_histogram,
            max_histogram,
        }
    }

    pub fn display(&self, scale: Scale) -> SummaryDisplay<'_> {
        SummaryDisplay {
            summary: self,
            scale,
        }
    }

    pub fn render(&self, scale: Scale) -> String {
        self.display(scale).to_string()
    }
}

pub struct SummaryDisplay<'a> {
    summary: &'a Summary,
    scale: Scale,
}

impl fmt::Display for SummaryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { summary, scale } = self;
        let unit = scale.symbol();

        writeln!(f, "records:  {}", summary.count)?;
        if summary.unparsed > 0 {
            writeln!(f, "ignored:  {} (unparseable date or temperature)", summary.unparsed)?;
        }
        if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
            writeln!(f, "dates:    {first} .. {last}")?;
        }
        if let (Some(lo), Some(hi)) = (summary.lowest, summary.highest) {
            writeln!(
                f,
                "range:    {:.1}°{unit} .. {:.1}°{unit}",
                scale.convert(lo as f32),
                scale.convert(hi as f32)
            )?;
        }

        for (title, bins) in [
            ("minimum temperature", &summary.min_histogram),
            ("maximum temperature", &summary.max_histogram),
        ] {
            if bins.is_empty() {
                continue;
            }
            writeln!(f, "\n{title}")?;
            let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
            for bin in bins {
                let bar = "#".repeat(bin.count * BAR_WIDTH / tallest);
                writeln!(
                    f,
                    "{:>7.1} .. {:>7.1} | {:>4} {bar}",
                    scale.convert(bin.lower),
                    scale.convert(bin.upper),
                    bin.count
                )?;
            }
        }
        Ok(())
    }
}

fn parse_day(record: &WeatherRecord) -> Option<Day> {
    Some(Day {
        date: NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").ok()?,
        max_temp: leading_int(&record.max_temp)?,
        min_temp: leading_int(&record.min_temp)?,
    })
}

/// Reads the integer prefix of `text`, so "12.5" gives 12 and "-3" gives -3.
fn leading_int(text: &str) -> Option<i32> {
    let text = text.trim();
    let digits_from = usize::from(text.starts_with(['-', '+']));
    let end = text[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| i + digits_from);
    if end == digits_from {
        return None;
    }
    text[..end].parse().ok()
}

/// Step between round tick values covering `start..stop` in about `count` ticks.
fn tick_increment(start: f32, stop: f32, count: f32) -> f32 {
    let step = (stop - start) / count;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f32.powf(power);
    let factor = if error >= 50f32.sqrt() {
        10.0
    } else if error >= 10f32.sqrt() {
        5.0
    } else if error >= 2f32.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f32.powf(power)
}

/// Widens `lo..hi` outwards to round tick boundaries, as a d3 linear scale's
/// `nice()` does. A zero-width domain is left alone.
fn nice(mut lo: f32, mut hi: f32) -> (f32, f32) {
    let mut previous = 0.0;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, NICE_TICKS);
        if step == 0.0 || step == previous {
            break;
        }
        lo = (lo / step).floor() * step;
        hi = (hi / step).ceil() * step;
        previous = step;
    }
    (lo, hi)
}

/// Equal width bins over the inclusive `domain`. Values outside it are
/// dropped; the upper bound lands in the last bin.
fn histogram(values: impl Iterator<Item = i32>, domain: (f32, f32), bins: usize) -> Vec<Bin> {
    let bins = bins.max(1);
    let (lo, hi) = domain;
    let width = (hi - lo) / bins as f32;

    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: lo + width * i as f32,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f32
            },
            count: 0,
        })
        .collect();

    for value in values.map(|v| v as f32) {
        if value < lo || value > hi {
            continue;
        }
        let idx = if width > 0.0 {
            (((value - lo) / width) as usize).min(bins - 1)
        } else {
            0
        };
        out[idx].count += 1;
    }
    out
}
