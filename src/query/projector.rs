// Projection of racer records into flat display rows

use crate::query::columns::{ColumnDescriptor, ColumnKind};
use crate::results::RacerRecord;

/// One cell value. Keeps "no data" distinct from every real value so a
/// missing split can never be confused with a recorded one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Missing,
}

/// One rendered cell of a leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowCell {
    /// Key of the column this cell belongs to.
    pub column: String,
    pub value: CellValue,
    /// Set on the difference cell of a group leader so frontends can
    /// highlight it without re-parsing the formatted string.
    pub is_leader: bool,
}

/// One flat leaderboard row, with exactly one cell per column descriptor
/// in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub cells: Vec<RowCell>,
}

/// Flattens one racer record against the column list.
///
/// Static columns copy the record attribute verbatim: the timing system
/// already formatted every time and percentage string, and nothing here
/// re-interprets them. Lap columns emit the racer's matching split or an
/// explicit missing marker.
pub fn project(racer: &RacerRecord, columns: &[ColumnDescriptor]) -> ResultRow {
    let cells = columns
        .iter()
        .map(|column| match column.kind {
            ColumnKind::Static => static_cell(racer, column),
            ColumnKind::Lap => lap_cell(racer, column),
        })
        .collect();
    ResultRow { cells }
}

fn static_cell(racer: &RacerRecord, column: &ColumnDescriptor) -> RowCell {
    let value = match column.key.as_str() {
        "place" => CellValue::Text(racer.place.to_string()),
        "bib" => CellValue::Text(racer.bib.clone()),
        "name" => CellValue::Text(racer.name.clone()),
        "team_name" => match &racer.team_name {
            Some(team) => CellValue::Text(team.clone()),
            None => CellValue::Missing,
        },
        "distance" => CellValue::Text(racer.distance.clone()),
        "category" => CellValue::Text(racer.category.clone()),
        "time" => CellValue::Text(racer.time.clone()),
        "difference" => CellValue::Text(racer.difference.clone()),
        "percent_back" => CellValue::Text(racer.percent_back.clone()),
        _ => CellValue::Missing,
    };
    RowCell {
        column: column.key.clone(),
        value,
        is_leader: column.key == "difference" && racer.is_leader(),
    }
}

fn lap_cell(racer: &RacerRecord, column: &ColumnDescriptor) -> RowCell {
    let value = match racer.lap(&column.key) {
        Some(lap_time) => CellValue::Text(lap_time.to_string()),
        None => CellValue::Missing,
    };
    RowCell {
        column: column.key.clone(),
        value,
        is_leader: false,
    }
}
