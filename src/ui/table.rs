// Fixed-width text rendering of the leaderboard

use crate::query::{CellValue, ColumnDescriptor, ResultRow};
use crate::results::RaceInfo;

/// Descriptor widths are pixel sizes for graphical frontends; the text
/// renderer scales them down to character columns.
const PIXELS_PER_CHAR: u16 = 10;
/// Printed for cells that carry no value (missed split, no team).
const MISSING_MARKER: &str = "-";

/// Renders the race header block above the results table.
pub fn render_header(race_info: &RaceInfo) -> String {
    format!(
        "{}\n{} • {}, {}\n{} • {}\n",
        race_info.name,
        race_info.date,
        race_info.city,
        race_info.state_or_province,
        race_info.sport,
        race_info.completion_state
    )
}

/// Renders column titles, one line per row, and a footer with the racer
/// count. An empty row list renders an explicit no-results line instead of
/// a bare table.
pub fn render_table(columns: &[ColumnDescriptor], rows: &[ResultRow]) -> String {
    let widths: Vec<usize> = columns.iter().map(char_width).collect();

    let mut output = String::new();
    for (column, width) in columns.iter().zip(widths.iter().copied()) {
        output.push_str(&format!("{:<width$}  ", column.title, width = width));
    }
    output.push('\n');
    for width in &widths {
        output.push_str(&"-".repeat(*width));
        output.push_str("  ");
    }
    output.push('\n');

    if rows.is_empty() {
        output.push_str("No racers for this selection\n");
        return output;
    }

    for row in rows {
        for (cell, width) in row.cells.iter().zip(widths.iter().copied()) {
            let text = match &cell.value {
                CellValue::Text(text) => text.as_str(),
                CellValue::Missing => MISSING_MARKER,
            };
            output.push_str(&format!("{:<width$}  ", text, width = width));
        }
        output.push('\n');
    }
    output.push_str(&format!("1-{} of {} racers\n", rows.len(), rows.len()));
    output
}

fn char_width(column: &ColumnDescriptor) -> usize {
    let scaled = (column.width / PIXELS_PER_CHAR) as usize;
    scaled.max(column.title.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Leaderboard, OVERALL_CATEGORY};
    use crate::results::{Grouping, LapTime, RaceDataset, RacerRecord, ResultGroup};

    fn sample_leaderboard() -> Leaderboard {
        let dataset = RaceDataset {
            race_info: RaceInfo {
                name: "Harbor Dash".to_string(),
                date: "2025-09-01".to_string(),
                city: "Halifax".to_string(),
                state_or_province: "NS".to_string(),
                sport: "Running".to_string(),
                completion_state: "Final".to_string(),
            },
            results: vec![ResultGroup {
                grouping: Grouping {
                    distance: "5K".to_string(),
                    category: None,
                    overall: true,
                },
                racers: vec![
                    RacerRecord {
                        place: 1,
                        bib: "21".to_string(),
                        name: "First".to_string(),
                        distance: "5K".to_string(),
                        category: "Male".to_string(),
                        time: "17:20.0".to_string(),
                        difference: "-".to_string(),
                        percent_back: "0%".to_string(),
                        laps: vec![LapTime {
                            lap_name: "Lap 1".to_string(),
                            lap_time: "8:40.0".to_string(),
                        }],
                        ..RacerRecord::default()
                    },
                    RacerRecord {
                        place: 2,
                        bib: "34".to_string(),
                        name: "Second".to_string(),
                        distance: "5K".to_string(),
                        category: "Female".to_string(),
                        time: "17:55.2".to_string(),
                        difference: "+35.2".to_string(),
                        percent_back: "3.4%".to_string(),
                        ..RacerRecord::default()
                    },
                ],
            }],
        };
        Leaderboard::new(dataset).unwrap()
    }

    #[test]
    fn test_header_contains_race_metadata() {
        let leaderboard = sample_leaderboard();
        let header = render_header(leaderboard.race_info());
        assert!(header.contains("Harbor Dash"));
        assert!(header.contains("Halifax, NS"));
        assert!(header.contains("Running • Final"));
    }

    #[test]
    fn test_table_renders_rows_and_footer() {
        let leaderboard = sample_leaderboard();
        let rows = leaderboard.rows("5K", OVERALL_CATEGORY);
        let table = render_table(leaderboard.columns(), &rows);

        assert!(table.contains("Place"));
        assert!(table.contains("Lap 1"));
        assert!(table.contains("17:20.0"));
        assert!(table.contains("1-2 of 2 racers"));
    }

    #[test]
    fn test_missing_cells_render_the_marker() {
        let leaderboard = sample_leaderboard();
        let rows = leaderboard.rows("5K", OVERALL_CATEGORY);
        let table = render_table(leaderboard.columns(), &rows);

        // the second racer has no team and no recorded lap
        let second_row = table
            .lines()
            .find(|line| line.contains("Second"))
            .unwrap();
        assert!(second_row.contains(MISSING_MARKER));
    }

    #[test]
    fn test_empty_selection_renders_no_results_state() {
        let leaderboard = sample_leaderboard();
        let rows = leaderboard.rows("5K", "Juniors");
        let table = render_table(leaderboard.columns(), &rows);

        assert!(table.contains("No racers for this selection"));
        assert!(!table.contains("of 0 racers"));
    }
}
