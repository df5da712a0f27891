use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::dataset::loader::DatasetSource;
use crate::text::frequency::DEFAULT_TOP_K;

/// Dataset location used when SPACEBIO_DATASET is not set.
pub const DEFAULT_DATASET: &str = "./data/SB_publication_PMC.csv";

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded automatically at startup via dotenvy, so any of
/// these can live there instead of the shell environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path or http(s) URL of the publication CSV
    pub dataset: String,
    /// Max summaries printed in Scientist mode
    pub summary_limit: usize,
    /// Max highlighted titles printed in Mission Architect mode
    pub highlight_limit: usize,
    /// Keywords kept in the Manager chart
    pub top_keywords: usize,
    /// Where markdown reports are written
    pub report_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default. A variable that is set but does not
    /// parse is an error rather than silently ignored.
    pub fn load() -> Result<Self> {
        Ok(Self {
            dataset: env::var("SPACEBIO_DATASET").unwrap_or_else(|_| DEFAULT_DATASET.to_string()),
            summary_limit: parse_var("SPACEBIO_SUMMARY_LIMIT", 15)?,
            highlight_limit: parse_var("SPACEBIO_HIGHLIGHT_LIMIT", 20)?,
            top_keywords: parse_var("SPACEBIO_TOP_KEYWORDS", DEFAULT_TOP_K)?,
            report_dir: env::var("SPACEBIO_REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./output")),
        })
    }

    /// The dataset location as a file or URL source.
    pub fn dataset_source(&self) -> DatasetSource {
        DatasetSource::parse(&self.dataset)
    }

    /// Check that a local dataset file exists before trying to load it.
    /// URLs are not checked here; they fail at fetch time instead.
    pub fn require_dataset(&self) -> Result<()> {
        if let DatasetSource::File(path) = self.dataset_source() {
            if !path.exists() {
                anyhow::bail!(
                    "Dataset not found at {}\n\
                     Set SPACEBIO_DATASET in your .env file (a path or an http(s) URL),\n\
                     or pass --dataset on the command line.",
                    path.display()
                );
            }
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported() {
        let config = Config {
            dataset: "/definitely/not/here.csv".to_string(),
            summary_limit: 15,
            highlight_limit: 20,
            top_keywords: 10,
            report_dir: PathBuf::from("./output"),
        };
        let err = config.require_dataset().unwrap_err();
        assert!(err.to_string().contains("Dataset not found"));
    }

    #[test]
    fn test_url_is_not_checked() {
        let config = Config {
            dataset: "https://example.org/pubs.csv".to_string(),
            summary_limit: 15,
            highlight_limit: 20,
            top_keywords: 10,
            report_dir: PathBuf::from("./output"),
        };
        assert!(config.require_dataset().is_ok());
    }
}
