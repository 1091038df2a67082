//! Writes formatted records to their output files.
//!
//! Each file is created or truncated and written in one call. There is no
//! temp-file rename, so a failed write can leave a partial file behind.

use crate::cars::Car;
use crate::error::{Result, ScrapeError};
use crate::format::{Formatter, OutputFormat};
use std::path::Path;
use tracing::{debug, info};

/// Writes cars as a pretty JSON array.
pub fn write_json(path: impl AsRef<Path>, cars: &[Car]) -> Result<()> {
    write_format(path.as_ref(), cars, OutputFormat::Json)
}

/// Writes cars as a header line plus tab-separated rows.
pub fn write_delimited(path: impl AsRef<Path>, cars: &[Car]) -> Result<()> {
    write_format(path.as_ref(), cars, OutputFormat::Delimited)
}

fn write_format(path: &Path, cars: &[Car], format: OutputFormat) -> Result<()> {
    let content = Formatter::new(format).format_cars(cars)?;
    debug!("Writing {} bytes of {} to {}", content.len(), format, path.display());

    std::fs::write(path, content)
        .map_err(|source| ScrapeError::Io { path: path.to_path_buf(), source })?;

    info!("Data saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_json_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cars.json");
        let cars = vec![Car::new("2024 IS 350", "$45,000", "/x")];

        write_json(&path, &cars).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Car> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, cars);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cars.csv");
        std::fs::write(&path, "stale content that is longer than the header\n".repeat(10)).unwrap();

        write_delimited(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Description,Price,Link\n");
    }

    #[test]
    fn test_write_empty_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cars.json");

        write_json(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cars.json");

        let err = write_json(&path, &[]).unwrap_err();
        assert_eq!(err.kind(), "io");
        match err {
            ScrapeError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
