//! Record source.
//!
//! Supplies the full record collection either from a JSON file or from the
//! built-in mock generator.

use crate::catalog::models::Record;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Languages assigned by the generator.
pub const LANGUAGES: [&str; 3] = ["English", "French", "Turkish"];

/// Durations offered by the duration filter.
pub const DURATIONS: [&str; 8] = [
    "1 year", "2 years", "3 years", "4 years", "5 years", "6 years", "7 years", "8 years",
];

/// Deadlines are spread over this many days after the generation date.
const DEADLINE_SPREAD_DAYS: u64 = 115;

/// Errors raised while loading records.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Record file could not be read.
    #[error("Failed to read record file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Record file is not a JSON array of records.
    #[error("Failed to parse record file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two records share an id.
    #[error("Duplicate record id {0}")]
    DuplicateId(u32),
}

/// Where records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// JSON file holding an array of records
    File(PathBuf),
    /// Mock records produced by the generator
    Generated {
        /// Number of records to produce
        count: usize,
        /// Fixed seed for reproducible data
        seed: Option<u64>,
    },
}

impl RecordSource {
    /// Load the full record collection.
    ///
    /// # Arguments
    /// * `today` - Base date for generated deadlines
    ///
    /// # Returns
    /// * `Result<Vec<Record>, SourceError>` - Records in source order or error
    pub async fn load(&self, today: NaiveDate) -> Result<Vec<Record>, SourceError> {
        let records = match self {
            RecordSource::File(path) => {
                let content =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|source| SourceError::Io {
                            path: path.clone(),
                            source,
                        })?;
                serde_json::from_str::<Vec<Record>>(&content).map_err(|source| {
                    SourceError::Parse {
                        path: path.clone(),
                        source,
                    }
                })?
            }
            RecordSource::Generated { count, seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_os_rng(),
                };
                generate_records(*count, &mut rng, today)
            }
        };

        check_unique_ids(&records)?;
        tracing::info!(source = %self.describe(), count = records.len(), "records loaded");
        Ok(records)
    }

    /// Short human-readable description for status lines and logs.
    pub fn describe(&self) -> String {
        match self {
            RecordSource::File(path) => path.display().to_string(),
            RecordSource::Generated { count, .. } => format!("{} generated records", count),
        }
    }
}

/// Generate mock application records.
///
/// # Arguments
/// * `count` - Number of records
/// * `rng` - Random source
/// * `today` - Earliest possible deadline
///
/// # Details
/// Ids run from 1 to `count`. Universities and countries are numbered 1-5,
/// durations 1-8 years, costs 1000-20999 and deadlines fall within
/// `DEADLINE_SPREAD_DAYS` days of `today`.
pub fn generate_records<R: Rng>(count: usize, rng: &mut R, today: NaiveDate) -> Vec<Record> {
    (1..=count as u32)
        .map(|id| {
            let offset = rng.random_range(0..=DEADLINE_SPREAD_DAYS);
            Record {
                id,
                name: format!("Application {}", id),
                university: format!("University {}", rng.random_range(1..=5)),
                country: format!("Country {}", rng.random_range(1..=5)),
                duration: format!("{} years", rng.random_range(1..=8)),
                cost: rng.random_range(1000..=20999),
                deadline: today.checked_add_days(Days::new(offset)).unwrap_or(today),
                language: LANGUAGES[rng.random_range(0..LANGUAGES.len())].to_string(),
            }
        })
        .collect()
}

fn check_unique_ids(records: &[Record]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(SourceError::DuplicateId(record.id));
        }
    }
    Ok(())
}
