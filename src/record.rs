use serde::{Deserialize, Serialize};

/// One day of history as published by the source page. Values are kept as
/// the page text; nothing is parsed into numbers or dates here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WeatherRecord {
    pub date: String,
    pub max_temp: String,
    pub min_temp: String,
}

impl WeatherRecord {
    pub fn new(date: &str, max_temp: &str, min_temp: &str) -> Self {
        Self {
            date: date.to_string(),
            max_temp: max_temp.to_string(),
            min_temp: min_temp.to_string(),
        }
    }
}

/// Append-only collection of records for one run, in month then source order.
#[derive(Debug, Default)]
pub struct WeatherLog {
    records: Vec<WeatherRecord>,
    skipped: usize,
}

impl WeatherLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = WeatherRecord>, skipped: usize) {
        self.records.extend(records);
        self.skipped += skipped;
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped by the extractor across all months.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
