//! Restaurant snapshot persistence
//!
//! `fetch` stores the complete list as JSON; `list` and `browse` read it back.

use crate::airtable::RestaurantSource;
use crate::error::{Error, Result};
use crate::restaurant::RestaurantRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// A complete copy of the restaurant list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    version: u32,
    pub fetched_at: DateTime<Utc>,
    pub restaurants: Vec<RestaurantRecord>,
}

impl Snapshot {
    /// Current snapshot format version
    const VERSION: u32 = 1;

    pub fn new(restaurants: Vec<RestaurantRecord>) -> Self {
        Self {
            version: Self::VERSION,
            fetched_at: Utc::now(),
            restaurants,
        }
    }

    /// Fetch everything from `source`
    pub fn fetch(source: &dyn RestaurantSource) -> Result<Self> {
        Ok(Self::new(source.fetch_restaurants()?))
    }

    /// Load a snapshot from file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Snapshot(format!(
                "{} not found, run `jantarada fetch` first",
                path.display()
            )));
        }

        let file = File::open(path)?;
        let snapshot: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Snapshot(format!("Failed to parse {}: {}", path.display(), e)))?;

        if snapshot.version != Self::VERSION {
            return Err(Error::Snapshot(format!(
                "{} has format version {}, expected {}; fetch again",
                path.display(),
                snapshot.version,
                Self::VERSION
            )));
        }

        info!(
            count = snapshot.restaurants.len(),
            fetched_at = %snapshot.fetched_at,
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Save the snapshot to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a temporary file first, then rename
        let temp_path = path.with_extension("tmp");
        let written = File::create(&temp_path).map_err(Error::from).and_then(|file| {
            self.write_to(&file)?;
            file.sync_all()?;
            Ok(())
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        fs::rename(&temp_path, path)?;

        info!(count = self.restaurants.len(), path = %path.display(), "Saved snapshot");
        Ok(())
    }

    /// Serialize as pretty JSON; buffered bytes are flushed before returning
    fn write_to<W: Write>(&self, inner: W) -> Result<()> {
        let mut writer = BufWriter::new(inner);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
