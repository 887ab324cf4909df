//! CSV output for the digitization-tracking spreadsheet.

use crate::error::Result;
use aspace_export_domain::Row;
use std::path::Path;

/// Column headers, in output order
pub const HEADERS: [&str; 3] = ["Box", "Folder/Item", "Title"];

/// Write rows to a CSV file at the given path
///
/// Writes the fixed header followed by one record per row in arrival
/// order. An existing file at the path is truncated. `FolderItem::Absent`
/// becomes an empty field.
pub fn write_rows(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADERS)?;
    for row in rows {
        let folder_item = row.folder_item.to_string();
        writer.write_record([
            row.box_number.as_str(),
            folder_item.as_str(),
            row.title.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
