use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to `{url}` failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not read body of `{url}`: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("no fixture page for month {0}")]
    MissingPage(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("daily section `ul.thrui` not found in page for month {month}")]
    SectionNotFound { month: String },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("i/o error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("`{}` does not hold a JSON array of weather records: {source}", path.display())]
    ExistingNotArray {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Output(#[from] OutputError),
}
