//! Locate and read the raw report text
//!
//! FastQC results arrive in three shapes: the flat `fastqc_data.txt`
//! itself, the result directory containing it, or the `*_fastqc.zip`
//! archive holding it one directory level down. All three resolve to the
//! same in-memory buffer before the pipeline runs.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// The report filename FastQC writes
pub const DATA_FILE_NAME: &str = "fastqc_data.txt";

/// Resolve a path into raw report text.
pub fn read_report(path: &Path) -> Result<String> {
    if path.is_dir() {
        read_dir(path)
    } else if path.is_file() {
        match read_zipfile(path) {
            Ok(text) => Ok(text),
            // not an archive: treat as the flat report file
            Err(Error::Zip(_)) => Ok(std::fs::read_to_string(path)?),
            Err(err) => Err(err),
        }
    } else {
        Err(Error::NotFound(path.to_path_buf()))
    }
}

fn read_dir(path: &Path) -> Result<String> {
    let data_file = path.join(DATA_FILE_NAME);
    if !data_file.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(data_file)?)
}

fn read_zipfile(path: &Path) -> Result<String> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let entry_name = (0..archive.len())
        .filter_map(|i| archive.by_index(i).ok().map(|f| f.name().to_string()))
        .find(|name| name.ends_with(&format!("/{DATA_FILE_NAME}")))
        .ok_or_else(|| Error::NotFound(path.to_path_buf()))?;
    let mut entry = archive.by_name(&entry_name)?;
    let mut text = String::new();
    entry.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::SAMPLE_REPORT;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("fastqc-convert-tests")
            .join(format!("{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_read_flat_file() {
        let dir = scratch_dir("flat");
        let file = dir.join(DATA_FILE_NAME);
        std::fs::write(&file, SAMPLE_REPORT).unwrap();
        assert_eq!(read_report(&file).unwrap(), SAMPLE_REPORT);
    }

    #[test]
    fn test_read_result_directory() {
        let dir = scratch_dir("dir");
        std::fs::write(dir.join(DATA_FILE_NAME), SAMPLE_REPORT).unwrap();
        assert_eq!(read_report(&dir).unwrap(), SAMPLE_REPORT);
    }

    #[test]
    fn test_directory_without_report_is_not_found() {
        let dir = scratch_dir("empty");
        let err = read_report(&dir).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let missing = scratch_dir("missing").join("no-such-entry");
        let err = read_report(&missing).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_read_zip_archive_one_level_down() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let dir = scratch_dir("zip");
        let archive_path = dir.join("sample_fastqc.zip");
        let file = File::create(&archive_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("sample_fastqc/fastqc_data.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(SAMPLE_REPORT.as_bytes()).unwrap();
        writer.finish().unwrap();

        assert_eq!(read_report(&archive_path).unwrap(), SAMPLE_REPORT);
    }
}
