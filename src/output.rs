use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::OutputError;
use crate::record::WeatherRecord;

/// What happens to an output file that already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Replace the file with this run's records
    #[default]
    Overwrite,
    /// Add this run's array after the existing text; repeated runs leave
    /// back-to-back arrays that do not parse as one JSON value
    Append,
    /// Read the existing array, add this run's records and rewrite it
    Merge,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            OutputMode::Overwrite => "overwrite",
            OutputMode::Append => "append",
            OutputMode::Merge => "merge",
        };
        f.write_str(mode)
    }
}

/// Four-space indented JSON with non-ASCII text written as is.
pub fn to_json(records: &[WeatherRecord]) -> Result<Vec<u8>, OutputError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    Ok(buf)
}

pub fn write_records(
    path: &Path,
    records: &[WeatherRecord],
    mode: OutputMode,
) -> Result<(), OutputError> {
    let io_err = |source: io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    match mode {
        OutputMode::Overwrite => replace(path, &to_json(records)?),
        OutputMode::Append => {
            let json = to_json(records)?;
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(io_err)?;
            file.write_all(&json).map_err(io_err)
        }
        OutputMode::Merge => {
            let mut merged = read_records(path)?;
            merged.extend_from_slice(records);
            replace(path, &to_json(&merged)?)
        }
    }
}

/// Sibling of `path` that receives the records of a run that stopped early.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}

// Write next to the target and rename over it, so a reader never sees a
// half-written array.
fn replace(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents)
        .and_then(|()| fs::rename(&tmp, path))
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads a previously written array. A missing or blank file reads as empty.
pub fn read_records(path: &Path) -> Result<Vec<WeatherRecord>, OutputError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(OutputError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&text).map_err(|source| OutputError::ExistingNotArray {
        path: path.to_path_buf(),
        source,
    })
}
