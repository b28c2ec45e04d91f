//! Per-host window-position persistence
//!
//! One delimited record per line, `host,offset`. Saving rewrites the
//! whole file, carrying every other host's line through byte-for-byte.
//! Offsets are stored verbatim; only load normalizes the leading
//! separator. The file begins with a BOM because signature-expecting
//! tools wrote (and may still read) it.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

use crate::constants::{app, storage};
use crate::geometry::normalize_offset;

/// File-backed store of one window offset per host
pub struct PositionStore {
    path: PathBuf,
    host: String,
}

impl PositionStore {
    pub fn new(path: PathBuf, host: String) -> Self {
        Self { path, host }
    }

    /// Default file location under the platform config directory
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(app::CONFIG_DIR);
        path.push(storage::FILE_NAME);
        path
    }

    /// Stored offset for this host. A missing file or absent record is
    /// a normal no-record condition, not an error.
    pub fn load(&self) -> Result<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = ?self.path, "No position file yet");
                return Ok(None);
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read positions from {:?}", self.path));
            }
        };
        for line in contents.trim_start_matches(storage::BOM).lines() {
            if let Some((host, offset)) = line.split_once(storage::DELIMITER) {
                if host == self.host {
                    return Ok(Some(normalize_offset(offset.trim())));
                }
            }
        }
        Ok(None)
    }

    /// Record this host's offset and rewrite the file with the union of
    /// the new record and every other host's existing line.
    pub fn save(&self, offset: &str) -> Result<()> {
        let mut records = self.foreign_records()?;
        records.push(format!("{}{}{}", self.host, storage::DELIMITER, offset));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create position directory {:?}", parent))?;
        }
        let mut contents = String::from(storage::BOM);
        contents.push_str(&records.join("\n"));
        contents.push('\n');
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write positions to {:?}", self.path))?;
        info!(path = ?self.path, host = %self.host, offset = %offset, "Saved window position");
        Ok(())
    }

    /// Every stored line except this host's own record
    fn foreign_records(&self) -> Result<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = ?self.path, "Position file not found, starting fresh");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read positions from {:?}", self.path));
            }
        };
        let records = contents
            .trim_start_matches(storage::BOM)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter(|line| {
                let host = line
                    .split_once(storage::DELIMITER)
                    .map_or(*line, |(host, _)| host);
                host != self.host
            })
            .map(str::to_string)
            .collect();
        Ok(records)
    }
}
