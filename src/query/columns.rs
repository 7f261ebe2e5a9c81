// Column discovery for the leaderboard table

use std::collections::BTreeSet;

use crate::results::RaceDataset;

/// Display width assigned to every discovered lap column.
const LAP_COLUMN_WIDTH: u16 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Fixed column backed by a racer record attribute.
    Static,
    /// Per-lap split column discovered from the dataset.
    Lap,
}

/// Describes one leaderboard column for the presentation layer: a stable
/// key to match cells against, a display title and width, and whether the
/// column is static or a discovered lap split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub key: String,
    pub title: String,
    pub width: u16,
    pub kind: ColumnKind,
}

/// The fixed column set every leaderboard shows, in display order.
pub fn static_columns() -> Vec<ColumnDescriptor> {
    [
        ("place", "Place", 80),
        ("bib", "Bib", 80),
        ("name", "Name", 200),
        ("team_name", "Team/City", 180),
        ("distance", "Distance", 100),
        ("category", "Category", 120),
        ("time", "Time", 100),
        ("difference", "Difference", 100),
        ("percent_back", "% Back", 80),
    ]
    .into_iter()
    .map(|(key, title, width)| ColumnDescriptor {
        key: key.to_string(),
        title: title.to_string(),
        width,
        kind: ColumnKind::Static,
    })
    .collect()
}

/// Scans every racer in the dataset once and returns one column per
/// distinct lap name, sorted by name.
///
/// Lap sets vary racer-to-racer, so the union across the whole dataset is
/// what the table needs; racers without a given lap project an explicit
/// missing value for it. A dataset with no lap data yields an empty list
/// and the table shows only the static columns.
pub fn discover_lap_columns(dataset: &RaceDataset) -> Vec<ColumnDescriptor> {
    let mut lap_names = BTreeSet::new();
    for group in &dataset.results {
        for racer in &group.racers {
            for lap in &racer.laps {
                lap_names.insert(lap.lap_name.clone());
            }
        }
    }
    lap_names
        .into_iter()
        .map(|name| ColumnDescriptor {
            key: name.clone(),
            title: name,
            width: LAP_COLUMN_WIDTH,
            kind: ColumnKind::Lap,
        })
        .collect()
}
