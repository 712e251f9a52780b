/// Package assembly: model → parts → staging tree → ZIP at the output path.
///
/// Staging lives in a [`TempDir`] that is removed on every exit path, including
/// when the returned future is dropped. The archive is written beside the
/// destination and renamed over it, so the destination either keeps its previous
/// content or holds a complete package.
use super::export::write_base64_sidecar;
use super::model::{Presentation, Slide, Theme};
use super::options::WriterOptions;
use super::parts;
use crate::common::error::{Error, Result};
use crate::common::xml::XmlNode;
use crate::ooxml::opc::{Archiver, PartName};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::task::JoinSet;

/// Directories created in the staging tree before any part is written.
pub const PACKAGE_DIRS: [&str; 7] = [
    "_rels",
    "docProps",
    "ppt/_rels",
    "ppt/slides/_rels",
    "ppt/slideLayouts/_rels",
    "ppt/slideMasters/_rels",
    "ppt/theme",
];

/// Prefix of staging directory names
pub const STAGING_PREFIX: &str = "pptx-";

/// One serialized package part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    partname: PartName,
    xml: String,
}

impl Part {
    pub fn new(partname: PartName, xml: String) -> Self {
        Self { partname, xml }
    }

    /// Serialize `node` as the document stored at `partname`.
    pub fn from_node(partname: PartName, node: &XmlNode) -> Result<Self> {
        Ok(Self::new(partname, node.to_document()?))
    }

    #[inline]
    pub fn partname(&self) -> &PartName {
        &self.partname
    }

    #[inline]
    pub fn xml(&self) -> &str {
        &self.xml
    }
}

/// Writes [`Presentation`]s as `.pptx` packages.
///
/// # Examples
///
/// ```no_run
/// use slidepress::{PackageWriter, Presentation, TextStyle, WriterOptions};
///
/// # async fn run() -> slidepress::Result<()> {
/// let mut deck = Presentation::new().with_author("Jane");
/// deck.add_slide().add_text("Hello", TextStyle::new())?;
///
/// let writer = PackageWriter::with_options(WriterOptions::new().base64_sidecar(true));
/// let path = writer.write(&deck, "output/hello.pptx").await?;
/// println!("wrote {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PackageWriter {
    options: WriterOptions,
    archiver: Arc<dyn Archiver>,
}

impl PackageWriter {
    /// A writer with default options (in-process deflate archiver).
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    pub fn with_options(options: WriterOptions) -> Self {
        let archiver = options.build_archiver();
        Self { options, archiver }
    }

    /// Replace the archiver chosen by the options.
    pub fn with_archiver(mut self, archiver: Arc<dyn Archiver>) -> Self {
        self.archiver = archiver;
        self
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Validate `presentation` and serialize every part of its package.
    ///
    /// Parts come back in staging order: `[Content_Types].xml`, package
    /// relationships, document properties, presentation, master, layout, theme,
    /// then each slide followed by its relationships. Nothing touches the
    /// filesystem.
    pub fn build_parts(&self, presentation: &Presentation, created: DateTime<Utc>) -> Result<Vec<Part>> {
        presentation.validate()?;

        let count = presentation.slide_count();
        let fixed = [
            (PartName::content_types(), parts::content_types(count)),
            (PartName::package().rels_uri(), parts::package_rels()),
            (PartName::core_properties(), parts::core_properties(presentation, created)),
            (PartName::app_properties(), parts::app_properties(presentation, count)),
            (PartName::presentation(), parts::presentation(count)),
            (PartName::presentation().rels_uri(), parts::presentation_rels(count)),
            (PartName::slide_master(), parts::slide_master()),
            (PartName::slide_master().rels_uri(), parts::slide_master_rels()),
            (PartName::slide_layout(), parts::slide_layout()),
            (PartName::slide_layout().rels_uri(), parts::slide_layout_rels()),
            (PartName::theme(), parts::theme(presentation.theme())),
        ];

        let mut built = fixed
            .into_iter()
            .map(|(partname, node)| Part::from_node(partname, &node))
            .collect::<Result<Vec<_>>>()?;
        built.extend(self.build_slide_parts(presentation)?);
        Ok(built)
    }

    fn build_slide_parts(&self, presentation: &Presentation) -> Result<Vec<Part>> {
        let theme = presentation.theme();
        let build = |(index, slide): (usize, &Slide)| slide_parts(index, slide, theme);

        #[cfg(feature = "parallel")]
        {
            if self.options.parallel {
                use rayon::prelude::*;

                let nested = presentation
                    .slides()
                    .par_iter()
                    .enumerate()
                    .map(&build)
                    .collect::<Result<Vec<_>>>()?;
                return Ok(nested.into_iter().flatten().collect());
            }
        }

        let nested = presentation
            .slides()
            .iter()
            .enumerate()
            .map(&build)
            .collect::<Result<Vec<_>>>()?;
        Ok(nested.into_iter().flatten().collect())
    }

    /// Write `presentation` as a package at `output` and return the path.
    ///
    /// The parent directory of `output` is created when missing. An existing file
    /// at `output` is replaced atomically.
    ///
    /// The base64 sidecar, when enabled, is written after the package is in
    /// place. Failing to write it is logged as a warning and does not fail the
    /// call, since the package itself is complete.
    pub async fn write(&self, presentation: &Presentation, output: impl AsRef<Path>) -> Result<PathBuf> {
        let output = output.as_ref().to_path_buf();
        let created = presentation.created().unwrap_or_else(Utc::now);
        let built = self.build_parts(presentation, created)?;

        let staging = self.staging_dir()?;
        log::debug!("staging {} parts in {}", built.len(), staging.path().display());
        write_parts(staging.path(), built).await?;

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let archiver = Arc::clone(&self.archiver);
        let destination = output.clone();
        let size = tokio::task::spawn_blocking(move || {
            archive_and_persist(staging, archiver.as_ref(), &destination)
        })
        .await??;

        log::info!(
            "wrote {} ({} slides, {} bytes)",
            output.display(),
            presentation.slide_count(),
            size
        );

        if self.options.base64_sidecar
            && let Err(e) = write_base64_sidecar(&output).await
        {
            log::warn!("failed to write base64 sidecar for {}: {}", output.display(), e);
        }
        Ok(output)
    }

    fn staging_dir(&self) -> Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX);
        let dir = match &self.options.staging_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        Ok(dir)
    }
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `presentation` to `output` with default options.
pub async fn assemble(presentation: &Presentation, output: impl AsRef<Path>) -> Result<PathBuf> {
    PackageWriter::new().write(presentation, output).await
}

fn slide_parts(index: usize, slide: &Slide, theme: &Theme) -> Result<[Part; 2]> {
    let number = index + 1;
    let partname = PartName::slide(number);
    let rels = partname.rels_uri();
    Ok([
        Part::from_node(partname, &parts::slide(slide, theme))?,
        Part::from_node(rels, &parts::slide_rels(number))?,
    ])
}

async fn write_parts(root: &Path, built: Vec<Part>) -> Result<()> {
    for dir in PACKAGE_DIRS {
        let path = dir.split('/').fold(root.to_path_buf(), |path, segment| path.join(segment));
        tokio::fs::create_dir_all(path).await?;
    }

    // Every part has its own path, so the writes are independent.
    let mut writes = JoinSet::new();
    for part in built {
        let path = part.partname.staging_path(root);
        writes.spawn(async move {
            tokio::fs::write(&path, part.xml.as_bytes()).await?;
            Ok::<_, std::io::Error>(part.partname)
        });
    }

    while let Some(joined) = writes.join_next().await {
        let partname = joined??;
        log::debug!("wrote part {}", partname);
    }
    Ok(())
}

fn archive_and_persist(staging: TempDir, archiver: &dyn Archiver, destination: &Path) -> Result<usize> {
    log::debug!("archiving {} with {}", staging.path().display(), archiver.name());
    let result = archiver.create_zip(staging.path()).and_then(|bytes| {
        persist_atomically(destination, &bytes)?;
        Ok(bytes.len())
    });

    let staging_path = staging.path().to_path_buf();
    if let Err(e) = staging.close() {
        log::warn!(
            "failed to remove staging directory {}: {}",
            staging_path.display(),
            e
        );
    }
    result
}

fn persist_atomically(destination: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::Builder::new()
        .prefix(".slidepress-")
        .suffix(".tmp")
        .tempfile_in(parent)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(destination).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
