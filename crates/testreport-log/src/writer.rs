// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report file output

use std::path::Path;

use tracing::debug;

use crate::error::ReportError;
use crate::table::Table;

/// Where the report is written when no path is given
pub const DEFAULT_OUTPUT_PATH: &str = "testreport.md";

/// Render the table and write it to `path`, replacing any existing file
///
/// The whole report is rendered in memory before the file is touched.
/// There is no atomic replace: a failed write can leave a truncated file.
///
/// # Errors
///
/// Returns `ReportError::WriteOutput` if the file cannot be created or
/// written.
pub fn write_report(table: &Table, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    let markdown = table.render_markdown();

    std::fs::write(path, markdown.as_bytes()).map_err(|source| ReportError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = markdown.len(), "Wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use similar_asserts::assert_eq;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "testreport-writer-{}-{}.md",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_write_report_overwrites() {
        let path = temp_path("overwrite");
        std::fs::write(&path, "stale content that is much longer than the report body\n")
            .expect("seed file");

        let table = Table::new(vec![Record::new("m", "t", "ok")]);
        write_report(&table, &path).expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        let _ = std::fs::remove_file(&path);
        assert_eq!(
            written,
            "# Test Report\n\n|Model|Test|Result|Note|\n|-|-|-|-|\n|m|t|ok||\n"
        );
    }

    #[test]
    fn test_write_report_missing_directory() {
        let table = Table::new(Vec::new());
        let result = write_report(&table, "/nonexistent/dir/12345/testreport.md");
        assert!(matches!(result, Err(ReportError::WriteOutput { .. })));
    }
}
