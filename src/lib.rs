//! Job description and resume compatibility analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{FitError, Result};
pub use config::Config;
