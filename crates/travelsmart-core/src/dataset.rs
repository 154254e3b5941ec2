//! Hotel dataset loading.
//!
//! The dataset is read once at startup into an immutable [`HotelDataset`]
//! snapshot. Callers share it behind an `Arc`; nothing mutates it afterwards.

use std::collections::BTreeSet;
use std::path::Path;

use crate::coordinates::parse_lat_lon;
use crate::error::DatasetError;
use crate::hotels::{parse_rating, HotelRecord, NoiseCategory};

const COL_NAME: &str = "HotelName";
const COL_CITY: &str = "cityName";
const COL_NOISE: &str = "NoiseCategory";
const COL_RATING: &str = "HotelRating";
const COL_MAP: &str = "Map";

/// Read-only snapshot of every hotel with usable coordinates.
#[derive(Debug, Clone, Default)]
pub struct HotelDataset {
    records: Vec<HotelRecord>,
    skipped: usize,
}

impl HotelDataset {
    #[must_use]
    pub fn from_records(records: Vec<HotelRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[HotelRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped at load time because their coordinates did not parse.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Distinct, sorted, non-blank city names.
    #[must_use]
    pub fn cities(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.city.as_str())
            .filter(|c| !c.trim().is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn has_city(&self, city: &str) -> bool {
        self.records.iter().any(|r| r.city == city)
    }
}

/// Column positions resolved from the header row.
struct Columns {
    name: usize,
    city: usize,
    noise: usize,
    rating: usize,
    map: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord, path: &Path) -> Result<Self, DatasetError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| DatasetError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };

        Ok(Self {
            name: find(COL_NAME)?,
            city: find(COL_CITY)?,
            noise: find(COL_NOISE)?,
            rating: find(COL_RATING)?,
            map: find(COL_MAP)?,
        })
    }
}

/// Loads the hotel CSV at `path`.
///
/// The file is decoded as Latin-1 (ISO-8859-1). Rows whose `Map` field does
/// not parse as `"<lat>|<lon>"` are dropped; a non-numeric `HotelRating`
/// keeps the row with no rating.
///
/// # Errors
///
/// - [`DatasetError::Io`] if the file cannot be read.
/// - [`DatasetError::MissingColumn`] if a required column is absent.
/// - [`DatasetError::Csv`] if the CSV structure is corrupt.
pub fn load_dataset(path: &Path) -> Result<HotelDataset, DatasetError> {
    let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&decode_latin1(&bytes), path)?;

    tracing::info!(
        path = %path.display(),
        hotels = dataset.len(),
        skipped = dataset.skipped(),
        "loaded hotel dataset"
    );
    Ok(dataset)
}

/// Every Latin-1 byte maps to the Unicode scalar of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn parse_dataset(text: &str, path: &Path) -> Result<HotelDataset, DatasetError> {
    let csv_err = |source: csv::Error| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = Columns::resolve(reader.headers().map_err(csv_err)?, path)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let raw_coordinate = cell(columns.map);
        let Some(coordinates) = parse_lat_lon(raw_coordinate) else {
            tracing::debug!(
                line = row.position().map(csv::Position::line),
                hotel = cell(columns.name),
                map = raw_coordinate,
                "skipping hotel with unparseable coordinates"
            );
            skipped += 1;
            continue;
        };

        let raw_rating = cell(columns.rating);
        records.push(HotelRecord {
            name: cell(columns.name).to_string(),
            city: cell(columns.city).to_string(),
            noise_category: NoiseCategory::from_dataset(cell(columns.noise)),
            rating: parse_rating(raw_rating),
            raw_rating: raw_rating.to_string(),
            raw_coordinate: raw_coordinate.to_string(),
            coordinates,
        });
    }

    Ok(HotelDataset { records, skipped })
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
