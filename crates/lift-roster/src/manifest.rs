//! CSV passenger manifest loader.
//!
//! # CSV format
//!
//! One row per passenger, in id order.  Every passenger is present from
//! simulated time 0, exactly like a generated roster.
//!
//! ```csv
//! origin_floor,destination_floor
//! 0,5
//! 3,0
//! 7,2
//! ```
//!
//! Ids are assigned `1..=N` in row order.  Rows are rejected when either
//! floor lies outside the building or origin equals destination.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::PassengerId;

use crate::{Passenger, RosterError, RosterResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ManifestRecord {
    origin_floor:      u32,
    destination_floor: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a passenger roster from a CSV file for a building with `floors`
/// floors.
pub fn load_manifest_csv(path: &Path, floors: u32) -> RosterResult<Vec<Passenger>> {
    let file = std::fs::File::open(path)?;
    load_manifest_reader(file, floors)
}

/// Like [`load_manifest_csv`] but accepts any `Read` source.
pub fn load_manifest_reader<R: Read>(reader: R, floors: u32) -> RosterResult<Vec<Passenger>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut out = Vec::new();
    let mut id = PassengerId::FIRST;

    for (i, result) in csv_reader.deserialize::<ManifestRecord>().enumerate() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        // Header is line 1, so data row i sits on line i + 2.
        let line = i + 2;

        if row.origin_floor >= floors || row.destination_floor >= floors {
            return Err(RosterError::InvalidRow {
                row:    line,
                reason: format!(
                    "trip {} -> {} leaves a {floors}-floor building",
                    row.origin_floor, row.destination_floor
                ),
            });
        }
        if row.origin_floor == row.destination_floor {
            return Err(RosterError::InvalidRow {
                row:    line,
                reason: format!("origin and destination are both floor {}", row.origin_floor),
            });
        }

        out.push(Passenger::new(
            id,
            row.origin_floor,
            row.destination_floor,
            0,
        ));
        id = id.next();
    }

    log::info!("loaded {} passengers from manifest", out.len());
    Ok(out)
}
