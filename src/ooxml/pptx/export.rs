//! Base64 export of a written package, for transports that only carry text.

use crate::common::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the package path for the sidecar file
pub const SIDECAR_SUFFIX: &str = ".b64.txt";

/// Standard (padded) base64 of `bytes`.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// `deck.pptx` → `deck.pptx.b64.txt`.
pub fn sidecar_path(package: &Path) -> PathBuf {
    let mut name = OsString::from(package.as_os_str());
    name.push(SIDECAR_SUFFIX);
    PathBuf::from(name)
}

/// Write the base64 encoding of the file at `package` next to it and return the
/// sidecar path.
pub async fn write_base64_sidecar(package: impl AsRef<Path>) -> Result<PathBuf> {
    let package = package.as_ref();
    let bytes = tokio::fs::read(package).await?;
    let target = sidecar_path(package);
    tokio::fs::write(&target, encode_base64(&bytes)).await?;
    log::debug!("wrote base64 sidecar {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode_base64(b"PK\x03\x04"), "UEsDBA==");
        assert_eq!(encode_base64(b""), "");
    }

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            sidecar_path(Path::new("output/deck.pptx")),
            PathBuf::from("output/deck.pptx.b64.txt")
        );
    }

    #[tokio::test]
    async fn test_write_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let package = dir.path().join("deck.pptx");
        tokio::fs::write(&package, b"hello").await.unwrap();

        let sidecar = write_base64_sidecar(&package).await.unwrap();
        assert_eq!(sidecar, dir.path().join("deck.pptx.b64.txt"));
        assert_eq!(tokio::fs::read_to_string(&sidecar).await.unwrap(), "aGVsbG8=");
    }

    #[tokio::test]
    async fn test_missing_package_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_base64_sidecar(dir.path().join("absent.pptx"))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
