// Loading and shape validation for race results export files

use std::fs;
use std::path::PathBuf;

use log::info;
use serde_json::Value;

use crate::errors::FinishlineError;
use crate::results::RaceDataset;

/// Parses one results export document into a [RaceDataset].
///
/// The document shape is validated on the raw JSON value before the typed
/// deserialization runs, so a malformed export fails with a schema error
/// naming the offending part rather than a serde message. Nothing is
/// indexed or cached here; a failed parse exposes no partial dataset.
pub fn parse_results(raw: &str) -> Result<RaceDataset, FinishlineError> {
    let document: Value = serde_json::from_str(raw)
        .map_err(|e| FinishlineError::ResultsParseError { source: e })?;
    validate_shape(&document)?;
    serde_json::from_value(document).map_err(|e| FinishlineError::ResultsParseError { source: e })
}

/// Reads and parses an export file, logging a summary of what was loaded.
pub fn load_results_file(path: &PathBuf) -> Result<RaceDataset, FinishlineError> {
    let raw =
        fs::read_to_string(path).map_err(|e| FinishlineError::ResultsFileError { source: e })?;
    let dataset = parse_results(&raw)?;
    info!(
        "Loaded {:?}: {} result groups, {} racers",
        path,
        dataset.results.len(),
        dataset
            .results
            .iter()
            .map(|group| group.racers.len())
            .sum::<usize>()
    );
    Ok(dataset)
}

// The engine assumes the export is well-formed beyond these checks:
// Results must be a sequence and every group must name a distance, since
// both are load-bearing for group addressing.
fn validate_shape(document: &Value) -> Result<(), FinishlineError> {
    let results = document
        .get("Results")
        .ok_or_else(|| FinishlineError::SchemaError {
            reason: "missing Results".to_string(),
        })?;
    let groups = results
        .as_array()
        .ok_or_else(|| FinishlineError::SchemaError {
            reason: "Results is not a sequence".to_string(),
        })?;
    for (position, group) in groups.iter().enumerate() {
        let distance = group.pointer("/Grouping/Distance").and_then(Value::as_str);
        if distance.is_none() {
            return Err(FinishlineError::SchemaError {
                reason: format!("result group {} has no Grouping.Distance", position),
            });
        }
    }
    Ok(())
}
