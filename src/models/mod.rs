//! Output models written to the export file.

pub mod output;

pub use output::{ExportSummary, OutputRecord};
