// JSON Output Module

use crate::Result;
use crate::client::Report;
use std::path::Path;

/// Serialize a report using the API's field names
pub fn generate_json(report: &Report, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

/// Write JSON to file
pub fn write_json_file(report: &Report, path: &Path, pretty: bool) -> Result<()> {
    let json = generate_json(report, pretty)?;
    std::fs::write(path, json)?;
    Ok(())
}
