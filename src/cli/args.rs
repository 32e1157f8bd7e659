use crate::core::pipeline::ExportConfig;
use crate::types::ExportError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::warn;
use url::Url;

/// Default input file name when `--csvfile` is not given
pub const DEFAULT_CSV_FILE: &str = "items2.csv";

/// Default number of parallel upload workers
pub const DEFAULT_WORKERS: usize = 30;

/// Default agent tag stamped into every document
pub const DEFAULT_AGENT: &str = "dummy#1";

/// Bulk-upload item documents from a CSV file
#[derive(Parser, Debug)]
#[command(name = "item-exporter")]
#[command(about = "Bulk-upload item documents from a CSV file", long_about = None)]
pub struct CliArgs {
    /// Path to the input CSV file
    #[arg(
        short = 'c',
        long = "csvfile",
        value_name = "FILE",
        default_value = DEFAULT_CSV_FILE,
        help = "Path to the headerless input CSV file"
    )]
    pub csv_file: PathBuf,

    /// Expected number of rows in the input file
    #[arg(
        short = 'i',
        long = "itemcount",
        value_name = "COUNT",
        help = "Expected row count; loading fails fast if the file disagrees"
    )]
    pub item_count: Option<usize>,

    /// Positional field layout of the input file
    #[arg(
        long = "schema",
        value_name = "SCHEMA",
        default_value = "item",
        help = "CSV schema variant: 'item' or 'price'"
    )]
    pub schema: SchemaType,

    /// Target endpoint, overriding the schema's default
    #[arg(
        long = "url",
        value_name = "URL",
        help = "Endpoint to POST documents to (default depends on --schema)"
    )]
    pub post_url: Option<Url>,

    /// Number of parallel upload workers
    #[arg(
        short = 'w',
        long = "workers",
        value_name = "COUNT",
        default_value_t = DEFAULT_WORKERS,
        help = "Number of parallel upload workers (0 = CPU count)"
    )]
    pub workers: usize,

    /// Agent tag stamped into every document
    #[arg(
        long = "agent",
        value_name = "TAG",
        default_value = DEFAULT_AGENT,
        help = "Agent tag stamped into every document"
    )]
    pub agent: String,
}

/// Available CSV schema variants
///
/// Each variant fixes both the positional field layout of the input file and
/// the default endpoint documents are posted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaType {
    /// `id, sid, item_name, thumbnail`
    Item,
    /// `id, sid, item_name, mall, delivery, price`
    Price,
}

impl SchemaType {
    /// The endpoint used when `--url` is not given
    pub fn default_url(&self) -> &'static str {
        match self {
            SchemaType::Item => "https://robin-api.oneprice.co.kr/items",
            SchemaType::Price => "https://robin-api.oneprice.co.kr/prices",
        }
    }
}

impl CliArgs {
    /// Resolve the parsed arguments into a validated `ExportConfig`
    ///
    /// Resolution steps:
    /// - a worker count of 0 falls back to the number of CPUs, with a warning
    /// - a missing `--url` falls back to the schema's default endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the schema's default endpoint fails to parse,
    /// which would indicate a broken build rather than bad user input.
    pub fn to_export_config(&self) -> Result<ExportConfig, ExportError> {
        let workers = if self.workers == 0 {
            let fallback = num_cpus::get();
            warn!(
                "worker count 0 is invalid, falling back to CPU count ({})",
                fallback
            );
            fallback
        } else {
            self.workers
        };

        let post_url = match &self.post_url {
            Some(url) => url.clone(),
            None => {
                let default = self.schema.default_url();
                Url::parse(default).map_err(|e| ExportError::invalid_url(default, &e.to_string()))?
            }
        };

        Ok(ExportConfig {
            csv_file: self.csv_file.clone(),
            item_count: self.item_count,
            schema: self.schema,
            post_url,
            workers,
            agent: self.agent.clone(),
        })
    }
}
