pub mod archive;
pub mod config;
pub mod error;
pub mod fetch;
pub mod locate;
pub mod logging;
pub mod output;
pub mod service;
pub mod url_model;

pub use error::{Error, Result};
