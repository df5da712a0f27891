// Collection loader — reads the publication CSV from disk or over HTTP.
//
// The dataset is loaded exactly once per process. Any failure here (missing
// file, unreachable URL, missing Title/Link columns) is fatal and propagates
// up to main; there is no retry.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::models::{Record, RecordCollection};

/// Column holding the publication title (after header whitespace is trimmed).
pub const TITLE_COLUMN: &str = "Title";
/// Column holding the link to the paper.
pub const LINK_COLUMN: &str = "Link";

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Interpret a location string: `http://` and `https://` are URLs,
    /// anything else is a filesystem path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DatasetSource::Url(trimmed.to_string())
        } else {
            DatasetSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Load the collection from a file path or URL.
pub async fn load(source: &DatasetSource) -> Result<RecordCollection> {
    let text = match source {
        DatasetSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dataset file {}", path.display()))?,
        DatasetSource::Url(url) => fetch_remote(url).await?,
    };

    let collection =
        parse_csv(&text).with_context(|| format!("Failed to parse dataset from {source}"))?;

    info!(
        records = collection.len(),
        missing_titles = collection.missing_titles(),
        source = %source,
        "Loaded publication dataset"
    );

    Ok(collection)
}

/// Download the CSV body, showing a spinner while the request is in flight.
async fn fetch_remote(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent("spacebio/0.1 (publication-search)")
        .build()
        .context("Failed to build HTTP client")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Downloading {url}"));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = async {
        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to reach dataset URL {url}"))?
            .error_for_status()
            .with_context(|| format!("Dataset URL {url} returned an error status"))?;
        response
            .text()
            .await
            .with_context(|| format!("Failed to read dataset body from {url}"))
    }
    .await;

    spinner.finish_and_clear();

    let body = result?;
    debug!(bytes = body.len(), url, "Fetched remote dataset");
    Ok(body)
}

/// Parse CSV text into a collection.
///
/// Header names are trimmed before lookup. `Title` and `Link` are required;
/// the first column whose name contains "year" (any case) becomes the
/// optional publication year. Short rows are tolerated: missing cells read
/// as empty.
pub fn parse_csv(text: &str) -> Result<RecordCollection> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("Dataset has no header row")?.clone();

    let title_idx = column_index(&headers, TITLE_COLUMN)?;
    let link_idx = column_index(&headers, LINK_COLUMN)?;
    let year_idx = headers
        .iter()
        .position(|h| h.to_lowercase().contains("year"));

    if let Some(idx) = year_idx {
        debug!(column = &headers[idx], "Detected publication year column");
    }

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        // +2: one for the header line, one for 1-based numbering
        let row_data = result.with_context(|| format!("Malformed CSV at line {}", row + 2))?;

        let title = row_data
            .get(title_idx)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let link = row_data.get(link_idx).unwrap_or_default().to_string();
        let year = year_idx
            .and_then(|idx| row_data.get(idx))
            .and_then(parse_year);

        records.push(Record { title, link, year });
    }

    Ok(RecordCollection::new(records))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => anyhow::bail!(
            "Dataset is missing the required '{name}' column (found: {})",
            headers.iter().collect::<Vec<_>>().join(", ")
        ),
    }
}

/// Accepts `2014` as well as the float form `2014.0` that spreadsheet
/// exports tend to produce.
fn parse_year(cell: &str) -> Option<i32> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if let Ok(year) = cell.parse::<i32>() {
        return Some(year);
    }
    match cell.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f.abs() < i32::MAX as f64 => Some(f as i32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parse() {
        assert_eq!(
            DatasetSource::parse("https://example.org/pubs.csv"),
            DatasetSource::Url("https://example.org/pubs.csv".to_string())
        );
        assert_eq!(
            DatasetSource::parse("data/pubs.csv"),
            DatasetSource::File(PathBuf::from("data/pubs.csv"))
        );
    }

    #[test]
    fn test_parse_year_forms() {
        assert_eq!(parse_year("2014"), Some(2014));
        assert_eq!(parse_year(" 2014.0 "), Some(2014));
        assert_eq!(parse_year("2014.5"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("n/a"), None);
    }
}
