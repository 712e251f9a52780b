//! Physical package layer: turning a staged directory tree into ZIP bytes.
//!
//! The assembler only depends on the [`Archiver`] capability. [`ZipArchiver`]
//! writes the container in-process; [`ExternalZipArchiver`] runs the `zip`
//! command-line tool over the same tree.

use crate::common::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;

use super::packuri::CONTENT_TYPES_URI;

/// Compression applied to archive entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    /// Deflate, what Office itself writes
    #[default]
    Deflated,
    /// No compression
    Stored,
}

/// Something that can pack a directory tree into a ZIP archive.
///
/// Entry names must be relative to `source_dir`, using `/` separators, so that
/// `[Content_Types].xml` sits at the archive root.
pub trait Archiver: Send + Sync + fmt::Debug {
    /// Archive every file below `source_dir` and return the ZIP bytes.
    fn create_zip(&self, source_dir: &Path) -> Result<Vec<u8>>;

    /// Short name used in log records.
    fn name(&self) -> &str;
}

/// In-process archiver backed by the `zip` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver {
    compression: Compression,
}

impl ZipArchiver {
    pub fn new(compression: Compression) -> Self {
        Self { compression }
    }

    #[inline]
    pub fn compression(&self) -> Compression {
        self.compression
    }
}

impl Archiver for ZipArchiver {
    fn create_zip(&self, source_dir: &Path) -> Result<Vec<u8>> {
        let method = match self.compression {
            Compression::Deflated => zip::CompressionMethod::Deflated,
            Compression::Stored => zip::CompressionMethod::Stored,
        };
        // No timestamps from the clock: entries carry the ZIP epoch, like `zip -X`.
        let options = SimpleFileOptions::default().compression_method(method);

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, path) in staged_entries(source_dir)? {
            log::debug!("archiving {} ({:?})", name, self.compression);
            let data = std::fs::read(&path)?;
            writer.start_file(name.as_str(), options)?;
            writer.write_all(&data)?;
        }

        Ok(writer.finish()?.into_inner())
    }

    fn name(&self) -> &str {
        "zip-crate"
    }
}

/// Archiver that shells out to an external `zip` executable (`zip -X -r`).
#[derive(Debug, Clone)]
pub struct ExternalZipArchiver {
    program: PathBuf,
    compression: Compression,
}

impl ExternalZipArchiver {
    /// Use the `zip` binary found on `PATH`.
    pub fn new() -> Self {
        Self::with_program("zip")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            compression: Compression::Deflated,
        }
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    #[inline]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for ExternalZipArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for ExternalZipArchiver {
    fn create_zip(&self, source_dir: &Path) -> Result<Vec<u8>> {
        let scratch = tempfile::Builder::new().prefix("pptx-zip-").tempdir()?;
        let target = scratch.path().join("package.zip");

        let mut command = Command::new(&self.program);
        command.arg("-X").arg("-D").arg("-r").arg("-q");
        if self.compression == Compression::Stored {
            command.arg("-0");
        }
        let output = command
            .arg(&target)
            .arg(".")
            .current_dir(source_dir)
            .output()
            .map_err(|e| {
                Error::Archive(format!("failed to run '{}': {}", self.program.display(), e))
            })?;

        if !output.status.success() {
            return Err(Error::Archive(format!(
                "'{}' exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(std::fs::read(&target)?)
    }

    fn name(&self) -> &str {
        "external-zip"
    }
}

/// List staged files as `(entry name, path)` with `[Content_Types].xml` first and
/// the rest in file-name order.
fn staged_entries(source_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let content_types = &CONTENT_TYPES_URI[1..];
    let mut entries = Vec::new();

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(source_dir).map_err(|e| {
            Error::Archive(format!("{} is outside the staging root: {}", entry.path().display(), e))
        })?;
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        entries.push((name, entry.into_path()));
    }

    // Stable sort keeps the walk order for everything else.
    entries.sort_by_key(|(name, _)| name != content_types);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn stage(root: &Path) {
        std::fs::create_dir_all(root.join("_rels")).unwrap();
        std::fs::create_dir_all(root.join("ppt").join("slides")).unwrap();
        std::fs::write(root.join("_rels").join(".rels"), "<Relationships/>").unwrap();
        std::fs::write(root.join("ppt").join("presentation.xml"), "<p:presentation/>").unwrap();
        std::fs::write(root.join("ppt").join("slides").join("slide1.xml"), "<p:sld/>").unwrap();
        std::fs::write(root.join("[Content_Types].xml"), "<Types/>").unwrap();
    }

    fn entry_names(bytes: Vec<u8>) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_staged_entries_put_content_types_first() {
        let dir = tempfile::tempdir().unwrap();
        stage(dir.path());

        let names: Vec<String> = staged_entries(dir.path())
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names[0], "[Content_Types].xml");
        assert!(names.contains(&"ppt/slides/slide1.xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_zip_archiver_round_trips_contents() {
        let dir = tempfile::tempdir().unwrap();
        stage(dir.path());

        for compression in [Compression::Deflated, Compression::Stored] {
            let bytes = ZipArchiver::new(compression).create_zip(dir.path()).unwrap();
            let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
            assert_eq!(archive.len(), 4);

            let mut content = String::new();
            archive
                .by_name("ppt/presentation.xml")
                .unwrap()
                .read_to_string(&mut content)
                .unwrap();
            assert_eq!(content, "<p:presentation/>");
        }
    }

    #[test]
    fn test_zip_archiver_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        stage(dir.path());

        let archiver = ZipArchiver::default();
        let first = archiver.create_zip(dir.path()).unwrap();
        let second = archiver.create_zip(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_external_tool_is_an_archive_error() {
        let dir = tempfile::tempdir().unwrap();
        stage(dir.path());

        let archiver = ExternalZipArchiver::with_program("/nonexistent/slidepress-zip");
        let err = archiver.create_zip(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Archive(_)));
    }

    #[test]
    fn test_external_zip_when_available() {
        // Only meaningful on machines with Info-ZIP installed.
        if Command::new("zip").arg("-v").output().is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        stage(dir.path());

        let bytes = ExternalZipArchiver::new().create_zip(dir.path()).unwrap();
        let names = entry_names(bytes);
        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"ppt/slides/slide1.xml".to_string()));
        assert!(names.iter().all(|name| !name.ends_with('/')), "{names:?}");
    }
}
