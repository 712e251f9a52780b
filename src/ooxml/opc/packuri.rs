//! Part names: absolute package-internal paths such as `/ppt/slides/slide1.xml`.
//!
//! A [`PartName`] knows how to derive the three other spellings the writer needs:
//! the ZIP member name (no leading slash), the companion `.rels` part and a
//! relative reference from another part's directory.

use std::path::PathBuf;

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// An absolute part name within the package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartName {
    uri: String,
}

impl PartName {
    // Every name below is slash-prefixed by construction.
    fn known(uri: String) -> Self {
        debug_assert!(uri.starts_with('/'));
        Self { uri }
    }

    pub fn content_types() -> Self {
        Self::known(CONTENT_TYPES_URI.to_string())
    }

    pub fn package() -> Self {
        Self::known(PACKAGE_URI.to_string())
    }

    pub fn presentation() -> Self {
        Self::known("/ppt/presentation.xml".to_string())
    }

    pub fn slide_master() -> Self {
        Self::known("/ppt/slideMasters/slideMaster1.xml".to_string())
    }

    pub fn slide_layout() -> Self {
        Self::known("/ppt/slideLayouts/slideLayout1.xml".to_string())
    }

    pub fn theme() -> Self {
        Self::known("/ppt/theme/theme1.xml".to_string())
    }

    pub fn core_properties() -> Self {
        Self::known("/docProps/core.xml".to_string())
    }

    pub fn app_properties() -> Self {
        Self::known("/docProps/app.xml".to_string())
    }

    /// Part name of the 1-based slide `number`.
    pub fn slide(number: usize) -> Self {
        Self::known(format!("/ppt/slides/slide{}.xml", number))
    }

    /// Directory portion, e.g. `/ppt/slides` for `/ppt/slides/slide1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// File name portion, e.g. `slide1.xml`; empty for the package pseudo-partname.
    pub fn filename(&self) -> &str {
        self.uri
            .rfind('/')
            .map_or("", |pos| &self.uri[pos + 1..])
    }

    /// The ZIP member name: the URI without its leading slash.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Path of this part below a staging directory root.
    pub fn staging_path(&self, root: &std::path::Path) -> PathBuf {
        self.membername()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }

    /// The companion relationships part, e.g. `/ppt/slides/_rels/slide1.xml.rels`.
    ///
    /// For the package itself this is `/_rels/.rels`.
    pub fn rels_uri(&self) -> Self {
        let base = self.base_uri();
        if base == "/" {
            Self::known(format!("/_rels/{}.rels", self.filename()))
        } else {
            Self::known(format!("{}/_rels/{}.rels", base, self.filename()))
        }
    }

    /// Reference to this part relative to the directory `base_uri`.
    ///
    /// `/ppt/slideLayouts/slideLayout1.xml` seen from `/ppt/slides` is
    /// `../slideLayouts/slideLayout1.xml`.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();

        let common = from
            .iter()
            .zip(to.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut segments: Vec<&str> = vec![".."; from.len() - common];
        segments.extend(&to[common..]);
        segments.join("/")
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PartName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for PartName {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}
