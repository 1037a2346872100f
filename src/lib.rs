pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::CatalogConfig;
pub use core::catalog::Catalog;
pub use domain::model::{Book, BookSeed, MAX_RATING, MIN_RATING};
pub use domain::ports::BookSource;
pub use utils::error::{CatalogError, Result};
