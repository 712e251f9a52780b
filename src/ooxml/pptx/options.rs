/// Package writer configuration.
use crate::common::error::{Error, Result};
use crate::ooxml::opc::{Archiver, Compression, ExternalZipArchiver, ZipArchiver};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Which [`Archiver`] packs the staged parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArchiverKind {
    /// The `zip` crate, in-process
    #[default]
    InProcess,
    /// An external `zip` executable
    External {
        #[serde(default = "default_zip_program")]
        program: PathBuf,
    },
}

fn default_zip_program() -> PathBuf {
    PathBuf::from("zip")
}

/// Options for [`PackageWriter`](super::package::PackageWriter).
///
/// # Examples
///
/// ```
/// use slidepress::WriterOptions;
/// use slidepress::ooxml::opc::Compression;
///
/// let options = WriterOptions::from_yaml_str("compression: stored\nbase64_sidecar: true\n")?;
/// assert_eq!(options.compression, Compression::Stored);
/// assert!(options.parallel);
/// # Ok::<(), slidepress::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterOptions {
    /// Entry compression
    pub compression: Compression,
    /// Archiver implementation
    pub archiver: ArchiverKind,
    /// Parent directory for staging trees; the system temp dir when unset
    pub staging_root: Option<PathBuf>,
    /// Build slide parts on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
    /// Also write `<output>.b64.txt`
    pub base64_sidecar: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            compression: Compression::Deflated,
            archiver: ArchiverKind::InProcess,
            staging_root: None,
            parallel: true,
            base64_sidecar: false,
        }
    }
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from YAML; missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn archiver(mut self, archiver: ArchiverKind) -> Self {
        self.archiver = archiver;
        self
    }

    pub fn staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = Some(root.into());
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn base64_sidecar(mut self, enabled: bool) -> Self {
        self.base64_sidecar = enabled;
        self
    }

    /// Instantiate the configured archiver.
    pub fn build_archiver(&self) -> Arc<dyn Archiver> {
        match &self.archiver {
            ArchiverKind::InProcess => Arc::new(ZipArchiver::new(self.compression)),
            ArchiverKind::External { program } => Arc::new(
                ExternalZipArchiver::with_program(program.clone()).compression(self.compression),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WriterOptions::default();
        assert_eq!(options.compression, Compression::Deflated);
        assert_eq!(options.archiver, ArchiverKind::InProcess);
        assert!(options.parallel);
        assert!(!options.base64_sidecar);
        assert_eq!(options.build_archiver().name(), "zip-crate");
    }

    #[test]
    fn test_from_yaml() {
        let options = WriterOptions::from_yaml_str(
            "archiver:\n  kind: external\nstaging_root: /var/tmp\nparallel: false\n",
        )
        .unwrap();
        assert_eq!(
            options.archiver,
            ArchiverKind::External {
                program: PathBuf::from("zip")
            }
        );
        assert_eq!(options.staging_root, Some(PathBuf::from("/var/tmp")));
        assert!(!options.parallel);
        assert_eq!(options.build_archiver().name(), "external-zip");
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let err = WriterOptions::from_yaml_str("compresion: stored\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_builder_setters() {
        let options = WriterOptions::new()
            .compression(Compression::Stored)
            .staging_root("/scratch")
            .base64_sidecar(true);
        assert_eq!(options.compression, Compression::Stored);
        assert_eq!(options.staging_root, Some(PathBuf::from("/scratch")));
        assert!(options.base64_sidecar);
    }
}
