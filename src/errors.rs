// Error types for finishline

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum FinishlineError {
    // Errors validating the results export shape
    #[snafu(display("Results export failed schema validation: {reason}"))]
    SchemaError { reason: String },

    // Errors building the group index
    #[snafu(display("Duplicate result group for distance {distance}, category {category}"))]
    DuplicateGroupError { distance: String, category: String },

    // Errors reading and parsing the export file
    #[snafu(display("Error reading results file"))]
    ResultsFileError { source: io::Error },
    #[snafu(display("Error parsing results file"))]
    ResultsParseError { source: serde_json::Error },

    // CLI errors
    #[snafu(display("Invalid results file: {path}"))]
    InvalidResultsFile { path: String },
}
