//! Contents command handler.
//!
//! Prints the sorted file paths inside a template package.

use std::fs::File;
use std::path::Path;

use anyhow::Result;

use crate::error::CliError;

/// File entries of a package, sorted. Directory entries are skipped.
pub fn package_entries(package: &Path) -> Result<Vec<String>, CliError> {
    let file = File::open(package)
        .map_err(|e| CliError::Io(format!("Failed to open {}: {e}", package.display())))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| CliError::Data(format!("Failed to read {}: {e}", package.display())))?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| CliError::Data(format!("Failed to read archive entry {i}: {e}")))?;
        if entry.is_dir() {
            continue;
        }
        entries.push(entry.name().to_string());
    }
    entries.sort();

    tracing::debug!(
        package = %package.display(),
        entries = entries.len(),
        "Listed package contents"
    );
    Ok(entries)
}

/// Execute the contents command.
pub fn execute(package: &Path) -> Result<i32> {
    for entry in package_entries(package)? {
        println!("{entry}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    #[test]
    fn test_entries_are_sorted_and_skip_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.zip");

        let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.add_directory("content/", options).unwrap();
        for name in ["content/web/template.json", "README.md", "content/console/template.json"] {
            writer.start_file(name, options).unwrap();
            writer.write_all(b"{}").unwrap();
        }
        writer.finish().unwrap();

        let entries = package_entries(&path).unwrap();

        assert_eq!(
            entries,
            vec![
                "README.md",
                "content/console/template.json",
                "content/web/template.json",
            ]
        );
    }

    #[test]
    fn test_missing_package_is_io_error() {
        let dir = tempdir().unwrap();
        let result = package_entries(&dir.path().join("missing.zip"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_non_zip_is_data_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-a-package.zip");
        std::fs::write(&path, b"plain text").unwrap();

        let result = package_entries(&path);
        assert!(matches!(result, Err(CliError::Data(_))));
    }
}
