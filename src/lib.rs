// Library interface for finishline
// This allows integration tests to access internal modules

pub mod errors;
pub mod query;
pub mod results;
pub mod ui;

// Re-export commonly used types
pub use errors::FinishlineError;
pub use query::{
    CategoryKey, CellValue, ColumnDescriptor, ColumnKind, GroupIndex, Leaderboard,
    OVERALL_CATEGORY, ResultRow, RowCell,
};
pub use results::{
    Grouping, LapTime, RaceDataset, RaceInfo, RacerRecord, ResultGroup, load_results_file,
    parse_results,
};
