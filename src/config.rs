use std::path::PathBuf;

use crate::output::OutputMode;

pub const DEFAULT_HOST: &str = "lishi.tianqi.com";
pub const DEFAULT_CITY: &str = "beijing";
pub const DEFAULT_YEAR: u16 = 2022;
pub const DEFAULT_OUTPUT: &str = "beijing_weather.json";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.190 Safari/537.36";

/// Everything a scrape run needs to know.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub host: String,
    pub city: String,
    pub year: u16,
    pub output: PathBuf,
    pub mode: OutputMode,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            city: DEFAULT_CITY.to_string(),
            year: DEFAULT_YEAR,
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: OutputMode::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn month_url(&self, month: &str) -> String {
        format!(
            "http://{}/{}/{}{}.html",
            self.host, self.city, self.year, month
        )
    }
}
