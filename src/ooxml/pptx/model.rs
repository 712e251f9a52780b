//! In-memory presentation model.
//!
//! The caller fills a [`Presentation`] with slides and drawables, then hands it to
//! the package writer. Geometry is expressed in inches, font sizes in points and
//! colors as six-digit hex RGB. Invalid values are rejected when a drawable is
//! added, so the part builders never see them.

use crate::common::error::{Error, Result};
use crate::common::xml::{find_invalid_xml_char, is_xml_char};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Typeface used when the theme names none.
pub const FALLBACK_FONT: &str = "Arial";

/// Locale used for text runs when the theme names none.
pub const DEFAULT_LANG: &str = "en-US";

/// Smallest font size DrawingML accepts, in points
pub const MIN_FONT_SIZE_PT: f64 = 1.0;

/// Largest font size DrawingML accepts, in points
pub const MAX_FONT_SIZE_PT: f64 = 4000.0;

/// Vertical tab, PowerPoint's soft line break; rendered as a paragraph break
pub const SOFT_BREAK: char = '\u{B}';

/// A six-digit hex RGB color such as `2B6CB0`, stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a color, accepting an optional leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidepress::HexColor;
    ///
    /// assert_eq!(HexColor::new("#2b6cb0").unwrap().as_str(), "2B6CB0");
    /// assert!(HexColor::new("blue").is_err());
    /// ```
    pub fn new(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(value.to_string()));
        }
        Ok(Self(digits.to_ascii_uppercase()))
    }

    pub fn black() -> Self {
        Self("000000".to_string())
    }

    pub fn white() -> Self {
        Self("FFFFFF".to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical anchoring of text inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// The DrawingML `anchor` attribute value.
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Deck-wide font and locale settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Theme name written into the theme part
    pub name: String,
    /// Heading (major) font face
    pub head_font: Option<String>,
    /// Body (minor) font face
    pub body_font: Option<String>,
    /// Language tag applied to text runs, e.g. `ko-KR`
    pub lang: String,
}

impl Theme {
    /// The body font, falling back to [`FALLBACK_FONT`].
    pub fn body_font(&self) -> &str {
        self.body_font.as_deref().unwrap_or(FALLBACK_FONT)
    }

    /// The heading font, falling back to the body font.
    pub fn head_font(&self) -> &str {
        self.head_font.as_deref().unwrap_or_else(|| self.body_font())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Office Theme".to_string(),
            head_font: None,
            body_font: None,
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

/// Layout and formatting of a text box.
///
/// Positions and sizes are in inches, the font size in points. In YAML the
/// geometry keys are `left`, `top`, `width` and `height`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextStyle {
    #[serde(rename = "left")]
    pub x: f64,
    #[serde(rename = "top")]
    pub y: f64,
    #[serde(rename = "width")]
    pub w: f64,
    #[serde(rename = "height")]
    pub h: f64,
    /// Font size in points; 18 when unset
    pub font_size: Option<f64>,
    pub bold: bool,
    /// Text color; black when unset
    pub color: Option<HexColor>,
    pub valign: VerticalAlign,
    /// Typeface override; the theme body font when unset
    pub font_face: Option<String>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the top-left corner.
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Builder method: set width and height.
    pub fn size(mut self, w: f64, h: f64) -> Self {
        self.w = w;
        self.h = h;
        self
    }

    /// Builder method: set font size in points.
    pub fn font_size(mut self, pt: f64) -> Self {
        self.font_size = Some(pt);
        self
    }

    /// Builder method: set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Builder method: set text color.
    pub fn color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder method: set vertical alignment.
    pub fn valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = valign;
        self
    }

    /// Builder method: set typeface.
    pub fn font_face(mut self, face: &str) -> Self {
        self.font_face = Some(face.to_string());
        self
    }

    fn validate(&self) -> Result<()> {
        check_box(self.x, self.y, self.w, self.h)?;
        if let Some(pt) = self.font_size
            && !(MIN_FONT_SIZE_PT..=MAX_FONT_SIZE_PT).contains(&pt)
        {
            return Err(Error::InvalidModel(format!(
                "font size must be between {} and {} points, got {}",
                MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT, pt
            )));
        }
        if let Some(face) = &self.font_face {
            check_xml_text("font face", face)?;
        }
        Ok(())
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: 1.0,
            h: 1.0,
            font_size: None,
            bold: false,
            color: None,
            valign: VerticalAlign::Top,
            font_face: None,
        }
    }
}

/// Layout and color of a horizontal rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineStyle {
    #[serde(rename = "left")]
    pub x: f64,
    #[serde(rename = "top")]
    pub y: f64,
    #[serde(rename = "width")]
    pub w: f64,
    /// Thickness in inches; a hairline when unset or zero
    #[serde(rename = "height")]
    pub h: Option<f64>,
    /// Fill color; the accent color when unset
    pub color: Option<HexColor>,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the top-left corner.
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Builder method: set the length of the rule.
    pub fn width(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Builder method: set the thickness of the rule.
    pub fn height(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    /// Builder method: set the fill color.
    pub fn color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }

    fn validate(&self) -> Result<()> {
        check_box(self.x, self.y, self.w, self.h.unwrap_or(0.0))
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: 1.0,
            h: None,
            color: None,
        }
    }
}

/// A renderable element on a slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drawable {
    /// A text box; each line becomes one paragraph. `\n`, `\r\n` and the
    /// vertical tab all end a line.
    Text {
        text: String,
        #[serde(default)]
        style: TextStyle,
    },
    /// A horizontal rule, drawn as a thin filled rectangle
    Line {
        #[serde(default)]
        style: LineStyle,
    },
}

impl Drawable {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }

    pub fn line(style: LineStyle) -> Self {
        Self::Line { style }
    }

    /// Short label used in error messages and shape names.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Line { .. } => "line",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Text { text, style } => {
                if let Some(c) = text.chars().find(|&c| c != SOFT_BREAK && !is_xml_char(c)) {
                    return Err(Error::InvalidModel(format!(
                        "text contains U+{:04X}, which XML cannot carry",
                        c as u32
                    )));
                }
                style.validate()
            },
            Self::Line { style } => style.validate(),
        }
    }
}

/// One slide: an optional background and drawables in z-order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Slide {
    background: Option<HexColor>,
    drawables: Vec<Drawable>,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the slide background with a solid color.
    pub fn set_background(&mut self, color: HexColor) -> &mut Self {
        self.background = Some(color);
        self
    }

    pub fn background(&self) -> Option<&HexColor> {
        self.background.as_ref()
    }

    /// Validate and append a drawable.
    pub fn push(&mut self, drawable: Drawable) -> Result<&mut Self> {
        drawable.validate().map_err(|e| {
            Error::InvalidModel(format!(
                "{} #{}: {}",
                drawable.kind(),
                self.drawables.len() + 1,
                detail(e)
            ))
        })?;
        self.drawables.push(drawable);
        Ok(self)
    }

    /// Add a text box.
    pub fn add_text(&mut self, text: impl Into<String>, style: TextStyle) -> Result<&mut Self> {
        self.push(Drawable::text(text, style))
    }

    /// Add a horizontal rule.
    pub fn add_line(&mut self, style: LineStyle) -> Result<&mut Self> {
        self.push(Drawable::line(style))
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (index, drawable) in self.drawables.iter().enumerate() {
            drawable.validate().map_err(|e| {
                Error::InvalidModel(format!("{} #{}: {}", drawable.kind(), index + 1, detail(e)))
            })?;
        }
        Ok(())
    }
}

/// A deck: metadata, theme and slides in order.
///
/// # Examples
///
/// ```
/// use slidepress::{Presentation, TextStyle};
///
/// let mut deck = Presentation::new().with_author("Jane").with_subject("Quarterly review");
/// deck.add_slide()
///     .add_text("Hello\nWorld", TextStyle::new().position(0.5, 0.5).size(6.0, 1.0))?;
/// assert_eq!(deck.slide_count(), 1);
/// # Ok::<(), slidepress::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Presentation {
    title: Option<String>,
    author: String,
    company: String,
    subject: String,
    /// Fixed creation time; the clock is read at write time when unset
    created: Option<DateTime<Utc>>,
    theme: Theme,
    slides: Vec<Slide>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a deck described in YAML.
    ///
    /// ```
    /// use slidepress::Presentation;
    ///
    /// let deck = Presentation::from_yaml_str(r#"
    /// author: Jane
    /// slides:
    ///   - drawables:
    ///       - kind: text
    ///         text: Hello
    /// "#)?;
    /// assert_eq!(deck.slide_count(), 1);
    /// # Ok::<(), slidepress::Error>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let presentation: Self =
            serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        presentation.validate()?;
        Ok(presentation)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = company.to_string();
        self
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Append an empty slide and return it for filling.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Append a slide built elsewhere, validating its drawables.
    pub fn push_slide(&mut self, slide: Slide) -> Result<&mut Self> {
        slide
            .validate()
            .map_err(|e| Error::InvalidModel(format!("slide {}: {}", self.slides.len() + 1, detail(e))))?;
        self.slides.push(slide);
        Ok(self)
    }

    /// Title for document properties: the title, else the subject, else "Presentation".
    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ if !self.subject.is_empty() => &self.subject,
            _ => "Presentation",
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Check metadata and every slide; the package writer calls this before
    /// building parts.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            check_xml_text("title", title)?;
        }
        check_xml_text("author", &self.author)?;
        check_xml_text("company", &self.company)?;
        check_xml_text("subject", &self.subject)?;
        check_xml_text("theme name", &self.theme.name)?;
        check_xml_text("theme language", &self.theme.lang)?;
        for face in [&self.theme.head_font, &self.theme.body_font].into_iter().flatten() {
            check_xml_text("theme font", face)?;
        }
        for (index, slide) in self.slides.iter().enumerate() {
            slide
                .validate()
                .map_err(|e| Error::InvalidModel(format!("slide {}: {}", index + 1, detail(e))))?;
        }
        Ok(())
    }
}

fn check_box(x: f64, y: f64, w: f64, h: f64) -> Result<()> {
    for (name, value) in [("left", x), ("top", y), ("width", w), ("height", h)] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(Error::InvalidModel(format!(
                "{} must be a non-negative number of inches, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

fn check_xml_text(what: &str, value: &str) -> Result<()> {
    match find_invalid_xml_char(value) {
        Some(c) => Err(Error::InvalidModel(format!(
            "{} contains U+{:04X}, which XML cannot carry",
            what, c as u32
        ))),
        None => Ok(()),
    }
}

// Strip the variant prefix so nested context reads "slide 2: text #1: width ...".
fn detail(err: Error) -> String {
    match err {
        Error::InvalidModel(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(HexColor::new("2b6cb0").unwrap().as_str(), "2B6CB0");
        assert_eq!(HexColor::new("#FFFFFF").unwrap(), HexColor::white());
        assert_eq!("000000".parse::<HexColor>().unwrap(), HexColor::black());
        assert!(HexColor::new("12345").is_err());
        assert!(HexColor::new("GGGGGG").is_err());
        assert!(matches!(HexColor::new("#1234567"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_theme_font_fallbacks() {
        let theme = Theme::default();
        assert_eq!(theme.body_font(), "Arial");
        assert_eq!(theme.head_font(), "Arial");

        let theme = Theme {
            body_font: Some("Malgun Gothic".to_string()),
            ..Theme::default()
        };
        assert_eq!(theme.head_font(), "Malgun Gothic");
    }

    #[test]
    fn test_add_drawables_in_order() {
        let mut slide = Slide::new();
        slide
            .add_line(LineStyle::new().position(0.6, 0.95).width(12.1))
            .unwrap()
            .add_text("Title", TextStyle::new().bold(true))
            .unwrap();
        assert_eq!(slide.len(), 2);
        assert_eq!(slide.drawables()[0].kind(), "line");
        assert_eq!(slide.drawables()[1].kind(), "text");
    }

    #[test]
    fn test_rejects_negative_geometry() {
        let mut slide = Slide::new();
        let err = slide
            .add_text("x", TextStyle::new().size(-1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidModel(ref m) if m.contains("width")));
        assert!(slide.is_empty());

        let err = slide.add_line(LineStyle::new().height(-0.1)).unwrap_err();
        assert!(matches!(err, Error::InvalidModel(ref m) if m.contains("height")));
    }

    #[test]
    fn test_rejects_bad_font_size_and_nan() {
        let mut slide = Slide::new();
        assert!(slide.add_text("x", TextStyle::new().font_size(0.0)).is_err());
        assert!(slide
            .add_text("x", TextStyle::new().position(f64::NAN, 0.0))
            .is_err());
        assert!(slide.add_text("", TextStyle::new()).is_ok());
    }

    #[test]
    fn test_empty_slide_is_valid() {
        let mut deck = Presentation::new();
        deck.add_slide();
        assert!(deck.validate().is_ok());
        assert_eq!(deck.slide_count(), 1);
    }

    #[test]
    fn test_push_slide_validates_with_context() {
        let mut deck = Presentation::new();
        let mut slide = Slide::new();
        // Bypass the eager check to simulate a hand-built slide
        slide.drawables.push(Drawable::line(LineStyle::new().width(-2.0)));

        let err = deck.push_slide(slide).unwrap_err();
        match err {
            Error::InvalidModel(message) => assert_eq!(
                message,
                "slide 1: line #1: width must be a non-negative number of inches, got -2"
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_title_fallbacks() {
        assert_eq!(Presentation::new().title(), "Presentation");
        assert_eq!(Presentation::new().with_subject("Deep Dive").title(), "Deep Dive");
        assert_eq!(
            Presentation::new().with_subject("Deep Dive").with_title("Intro").title(),
            "Intro"
        );
    }

    #[test]
    fn test_from_yaml() {
        let deck = Presentation::from_yaml_str(
            r##"
author: AntonAI
company: AntonAI
subject: ChatGPT Deep Dive
theme:
  body_font: Arial
  lang: ko-KR
slides:
  - background: "FFFFFF"
    drawables:
      - kind: line
        style: { left: 0.6, top: 0.95, width: 12.1, color: "2B6CB0" }
      - kind: text
        text: "오늘 얻어갈 것 5가지"
        style: { left: 0.6, top: 0.2, width: 12.1, height: 0.6, font_size: 28, bold: true }
"##,
        )
        .unwrap();

        assert_eq!(deck.author(), "AntonAI");
        assert_eq!(deck.theme().lang, "ko-KR");
        let slide = &deck.slides()[0];
        assert_eq!(slide.background(), Some(&HexColor::white()));
        assert_eq!(slide.len(), 2);
        match &slide.drawables()[0] {
            Drawable::Line { style } => {
                assert_eq!((style.x, style.y, style.w), (0.6, 0.95, 12.1));
                assert_eq!(style.h, None);
            },
            other => panic!("expected line, got {other:?}"),
        }
        match &slide.drawables()[1] {
            Drawable::Text { text, style } => {
                assert_eq!(text, "오늘 얻어갈 것 5가지");
                assert_eq!((style.x, style.y, style.w, style.h), (0.6, 0.2, 12.1, 0.6));
                assert_eq!(style.font_size, Some(28.0));
                assert!(style.bold);
            },
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_rejects_unknown_kind_and_bad_values() {
        let unknown = "slides:\n  - drawables:\n      - kind: chart\n";
        assert!(matches!(
            Presentation::from_yaml_str(unknown),
            Err(Error::Config(_))
        ));

        let negative = "slides:\n  - drawables:\n      - kind: line\n        style: { width: -1 }\n";
        assert!(matches!(
            Presentation::from_yaml_str(negative),
            Err(Error::InvalidModel(_))
        ));
    }

    #[test]
    fn test_from_yaml_top_key_is_not_a_boolean() {
        // Unquoted `y` is a YAML 1.1 boolean, so the vertical offset is spelled `top`.
        let deck = Presentation::from_yaml_str(
            "slides:\n  - drawables:\n      - kind: line\n        style: { top: 1 }\n",
        )
        .unwrap();
        match &deck.slides()[0].drawables()[0] {
            Drawable::Line { style } => assert_eq!(style.y, 1.0),
            other => panic!("expected line, got {other:?}"),
        }

        let legacy = "slides:\n  - drawables:\n      - kind: line\n        style: { y: 1 }\n";
        assert!(matches!(
            Presentation::from_yaml_str(legacy),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_font_size_bounds() {
        let mut slide = Slide::new();
        assert!(slide.add_text("x", TextStyle::new().font_size(0.99)).is_err());
        assert!(slide.add_text("x", TextStyle::new().font_size(1.0)).is_ok());
        assert!(slide.add_text("x", TextStyle::new().font_size(4000.0)).is_ok());
        let err = slide
            .add_text("x", TextStyle::new().font_size(4000.01))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidModel(ref m) if m.contains("font size")));
        assert!(slide.add_text("x", TextStyle::new().font_size(f64::INFINITY)).is_err());
        assert_eq!(slide.len(), 2);
    }

    #[test]
    fn test_rejects_characters_xml_cannot_carry() {
        let mut slide = Slide::new();
        let err = slide.add_text("bell\u{1}", TextStyle::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidModel(ref m) if m.contains("U+0001")));
        assert!(slide.add_text("\u{FFFF}", TextStyle::new()).is_err());
        assert!(slide
            .add_text("x", TextStyle::new().font_face("Ari\u{0}al"))
            .is_err());
        assert!(slide.is_empty());

        assert!(slide.add_text("soft\u{B}break\ttab", TextStyle::new()).is_ok());
    }

    #[test]
    fn test_rejects_metadata_xml_cannot_carry() {
        let deck = Presentation::new().with_author("Jane\u{8}");
        let err = deck.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidModel(ref m) if m.starts_with("author")));

        let deck = Presentation::new().with_title("\u{B}");
        assert!(deck.validate().is_err());
    }
}
