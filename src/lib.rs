pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod outputs;
pub mod resolver;
pub mod ui;

pub use domain::{Context, Resolution};
pub use error::{CiVersionError, Result};
pub use resolver::resolve;
