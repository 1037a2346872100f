use crate::config::toml_config::CatalogConfig;
use crate::core::catalog::Catalog;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-catalog")]
#[command(about = "Query and rate an in-memory book catalog")]
pub struct CliConfig {
    /// TOML file to seed the catalog from
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every book in insertion order
    List,
    /// Add an unrated book
    Add { title: String, author: String },
    /// Remove every book with this exact title
    Remove { title: String },
    /// Find books whose title or author contains the query
    Search { query: String },
    /// Rate the first book with this exact title (0-5)
    Rate {
        title: String,
        #[arg(allow_negative_numbers = true)]
        rating: i32,
    },
    /// Show the highest rated book
    Top,
    /// List books by this exact author
    ByAuthor { author: String },
}

impl Command {
    /// Runs the command and returns what should be printed. Mutations print
    /// the whole catalog afterwards.
    pub fn execute(&self, catalog: &mut Catalog) -> Result<Value> {
        let output = match self {
            Command::List => serde_json::to_value(catalog.list())?,
            Command::Add { title, author } => {
                catalog.add(title.as_str(), author.as_str());
                serde_json::to_value(&*catalog)?
            }
            Command::Remove { title } => {
                let removed = catalog.remove(title);
                tracing::info!("Removed {} book(s)", removed);
                serde_json::to_value(&*catalog)?
            }
            Command::Search { query } => serde_json::to_value(catalog.search(query))?,
            Command::Rate { title, rating } => {
                catalog.rate(title, *rating)?;
                serde_json::to_value(&*catalog)?
            }
            Command::Top => serde_json::to_value(catalog.highest_rated())?,
            Command::ByAuthor { author } => serde_json::to_value(catalog.find_by_author(author))?,
        };
        Ok(output)
    }
}

impl CliConfig {
    /// Reads and validates the seed file named by `--config`, if any.
    pub fn seed_config(&self) -> Result<Option<CatalogConfig>> {
        self.config
            .as_ref()
            .map(|path| -> Result<CatalogConfig> {
                let config = CatalogConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            })
            .transpose()
    }

    /// Builds the working catalog from an already parsed seed, or an empty one.
    pub fn build_from(seed: Option<&CatalogConfig>) -> Result<Catalog> {
        match seed {
            Some(config) => {
                let catalog = config.build_catalog()?;
                tracing::info!("Loaded catalog \"{}\" with {} books", config.name(), catalog.len());
                Ok(catalog)
            }
            None => Ok(Catalog::new()),
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        Self::build_from(self.seed_config()?.as_ref())
    }
}
