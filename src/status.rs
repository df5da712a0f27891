// Dataset status display — source, record count, title coverage, years.

use crate::dataset::loader::DatasetSource;
use crate::dataset::models::RecordCollection;

/// Display dataset status to the terminal.
pub fn show(collection: &RecordCollection, source: &DatasetSource) {
    println!("Dataset: {source}");

    if let DatasetSource::File(path) = source {
        if let Ok(meta) = std::fs::metadata(path) {
            println!("Size: {}", format_bytes(meta.len()));
        }
    }

    println!("Publications: {}", collection.len());

    let missing = collection.missing_titles();
    if missing > 0 {
        println!("  {missing} without a title (never match a keyword search)");
    }

    match collection.year_span() {
        Some((first, last)) => println!("Years: {first}-{last}"),
        None => println!("Years: no year column in dataset"),
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
