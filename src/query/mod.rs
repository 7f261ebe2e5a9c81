// Results query engine: selection and shaping of the loaded export
//
// Everything in this module is a pure, synchronous transform over the
// immutable dataset. The index and the column list are built once at
// construction; every query after that is a read that allocates fresh
// output, so a Leaderboard can be shared by reference across renders.

pub(crate) mod columns;
pub(crate) mod index;
pub(crate) mod projector;
pub(crate) mod select;

pub use columns::{ColumnDescriptor, ColumnKind, discover_lap_columns, static_columns};
pub use index::{CategoryKey, GroupIndex, OVERALL_CATEGORY};
pub use projector::{CellValue, ResultRow, RowCell, project};
pub use select::select;

use crate::errors::FinishlineError;
use crate::results::{RaceDataset, RaceInfo};

/// Query interface over one loaded results export.
pub struct Leaderboard {
    dataset: RaceDataset,
    index: GroupIndex,
    columns: Vec<ColumnDescriptor>,
}

impl Leaderboard {
    /// Indexes the dataset and discovers its lap columns.
    ///
    /// Fails if two groups claim the same (distance, category) selection;
    /// no partially built leaderboard is ever returned.
    pub fn new(dataset: RaceDataset) -> Result<Self, FinishlineError> {
        let index = GroupIndex::build(&dataset)?;
        let mut columns = static_columns();
        columns.extend(discover_lap_columns(&dataset));
        Ok(Self {
            dataset,
            index,
            columns,
        })
    }

    pub fn race_info(&self) -> &RaceInfo {
        &self.dataset.race_info
    }

    /// Distinct distances in the export, sorted ascending.
    pub fn distances(&self) -> &[String] {
        self.index.distances()
    }

    /// Distinct categories, with the overall pseudo-category first.
    pub fn categories(&self) -> &[String] {
        self.index.categories()
    }

    /// Static columns followed by the discovered lap columns. The same
    /// sequence on every call for the lifetime of the leaderboard.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Flat rows of the result group matching the selection, in stored
    /// export order. An unknown selection yields an empty list.
    pub fn rows(&self, distance: &str, category: &str) -> Vec<ResultRow> {
        select(&self.dataset, &self.index, distance, category)
            .iter()
            .map(|racer| project(racer, &self.columns))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{Grouping, LapTime, RacerRecord, ResultGroup};

    fn sample_dataset() -> RaceDataset {
        RaceDataset {
            results: vec![ResultGroup {
                grouping: Grouping {
                    distance: "10K".to_string(),
                    category: Some("Male".to_string()),
                    overall: false,
                },
                racers: vec![RacerRecord {
                    place: 1,
                    bib: "1".to_string(),
                    name: "A".to_string(),
                    distance: "10K".to_string(),
                    category: "Male".to_string(),
                    time: "30:00".to_string(),
                    difference: "-".to_string(),
                    percent_back: "0%".to_string(),
                    laps: vec![LapTime {
                        lap_name: "Lap1".to_string(),
                        lap_time: "10:00".to_string(),
                    }],
                    ..RacerRecord::default()
                }],
            }],
            ..RaceDataset::default()
        }
    }

    #[test]
    fn test_single_group_selection() {
        let leaderboard = Leaderboard::new(sample_dataset()).unwrap();

        let rows = leaderboard.rows("10K", "Male");
        assert_eq!(rows.len(), 1);

        // no aggregate group exists for 10K, so Overall is a valid empty state
        assert!(leaderboard.rows("10K", OVERALL_CATEGORY).is_empty());
    }

    #[test]
    fn test_columns_are_idempotent() {
        let leaderboard = Leaderboard::new(sample_dataset()).unwrap();
        assert_eq!(leaderboard.columns(), leaderboard.columns());

        let first: Vec<ColumnDescriptor> = leaderboard.columns().to_vec();
        assert_eq!(first.as_slice(), leaderboard.columns());
    }

    #[test]
    fn test_columns_end_with_discovered_laps() {
        let leaderboard = Leaderboard::new(sample_dataset()).unwrap();
        let last = leaderboard.columns().last().unwrap();
        assert_eq!(last.key, "Lap1");
        assert_eq!(last.kind, ColumnKind::Lap);
    }

    #[test]
    fn test_duplicate_groups_fail_construction() {
        let mut dataset = sample_dataset();
        dataset.results.push(dataset.results[0].clone());

        assert!(matches!(
            Leaderboard::new(dataset),
            Err(FinishlineError::DuplicateGroupError { .. })
        ));
    }
}
