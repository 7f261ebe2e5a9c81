// Data model for the parsed race results export
//
// The export is produced by the timing system as one nested JSON document
// with PascalCase field names. All values the timing system formats for
// display (times, gaps, percentages) are kept as strings and never
// re-parsed or re-formatted here.

pub(crate) mod loader;

use serde::{Deserialize, Serialize};

pub use loader::{load_results_file, parse_results};

/// The literal the export uses in the difference field of a group leader.
pub const NO_GAP: &str = "-";

/// Race-level metadata from the export header. Display-only.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RaceInfo {
    pub name: String,
    pub date: String,
    pub city: String,
    pub state_or_province: String,
    pub sport: String,
    pub completion_state: String,
}

/// One timed split for a racer. Lap names vary racer-to-racer: a racer
/// that missed a split or did not finish simply has no entry for it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LapTime {
    pub lap_name: String,
    pub lap_time: String,
}

/// One finisher row as exported by the timing system.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RacerRecord {
    /// Finishing rank, 1-based. Not necessarily contiguous within a group.
    pub place: u32,
    /// Bib number, unique within a group.
    pub bib: String,
    pub name: String,
    /// Team or home city. Not every export carries it.
    #[serde(default)]
    pub team_name: Option<String>,
    pub distance: String,
    pub category: String,
    /// Finish time, already formatted by the timing system.
    pub time: String,
    /// Gap to the group leader, or [NO_GAP] for the leader itself.
    pub difference: String,
    pub percent_back: String,
    /// Per-lap splits, in the order the timing system recorded them.
    #[serde(default)]
    pub laps: Vec<LapTime>,
}

impl RacerRecord {
    /// Whether this racer leads the group it was exported in.
    pub fn is_leader(&self) -> bool {
        self.difference == NO_GAP
    }

    /// The recorded split for a lap name, if this racer has one.
    pub fn lap(&self, lap_name: &str) -> Option<&str> {
        self.laps
            .iter()
            .find(|lap| lap.lap_name == lap_name)
            .map(|lap| lap.lap_time.as_str())
    }
}

/// Addressing of one result group: a distance plus either a single
/// category or the all-categories aggregate for that distance.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Grouping {
    pub distance: String,
    /// Absent on aggregate groups.
    #[serde(default)]
    pub category: Option<String>,
    /// True on the one aggregate group per distance.
    #[serde(default)]
    pub overall: bool,
}

/// One pre-computed bucket of racers from the export.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResultGroup {
    pub grouping: Grouping,
    #[serde(default)]
    pub racers: Vec<RacerRecord>,
}

/// The full parsed export. Built once by the loader and never mutated;
/// everything downstream indexes or scans it read-only.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RaceDataset {
    #[serde(default)]
    pub race_info: RaceInfo,
    pub results: Vec<ResultGroup>,
}
