pub mod artifact;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod labels;
pub mod tag;
pub mod ui;
pub mod version;

pub use error::{Result, SimpverError};
