pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod months;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod source;
pub mod summary;
pub mod units;
