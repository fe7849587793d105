use reqwest::blocking::{Client, ClientBuilder};

use crate::config::ScrapeConfig;
use crate::error::FetchError;

/// Where monthly pages come from.
pub trait PageSource {
    fn fetch(&self, month: &str) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: Client,
    config: ScrapeConfig,
}

impl HttpSource {
    pub fn new(config: ScrapeConfig) -> Result<Self, reqwest::Error> {
        let client = client_builder(&config).build()?;
        Ok(Self { client, config })
    }
}

fn client_builder(config: &ScrapeConfig) -> ClientBuilder {
    Client::builder().user_agent(&config.user_agent)
}

impl PageSource for HttpSource {
    fn fetch(&self, month: &str) -> Result<String, FetchError> {
        let url = self.config.month_url(month);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{url} answered {status}, parsing the body anyway");
        }

        // The pages are UTF-8 whatever the headers claim.
        let body = response
            .bytes()
            .map_err(|source| FetchError::Body { url, source })?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
pub mod fixture {
    use std::collections::HashMap;

    use super::*;

    /// Canned pages keyed by month code.
    #[derive(Debug, Default)]
    pub struct FixtureSource {
        pages: HashMap<String, String>,
    }

    impl FixtureSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_page(mut self, month: &str, html: impl Into<String>) -> Self {
            self.pages.insert(month.to_string(), html.into());
            self
        }
    }

    impl PageSource for FixtureSource {
        fn fetch(&self, month: &str) -> Result<String, FetchError> {
            self.pages
                .get(month)
                .cloned()
                .ok_or_else(|| FetchError::MissingPage(month.to_string()))
        }
    }
}
