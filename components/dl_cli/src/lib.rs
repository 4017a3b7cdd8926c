//! dl front end CLI library
//!
//! Provides the [`Pipeline`] driver and supporting modules for the `dl` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use pipeline::{Output, Pipeline};
