use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once, shared across threads. Single-pass matching means an `&` introduced
// by one replacement is never seen again, so `<` becomes `&lt;` and not `&amp;lt;`.
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for character data and attribute values.
///
/// Not idempotent: escaping `&amp;` again yields `&amp;amp;`. The XML writer
/// escapes raw content exactly once, so builders hand it unescaped strings.
///
/// # Examples
///
/// ```
/// use slidepress::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("it's"), "it&apos;s");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// The first character of `s` that XML 1.0 forbids, if any.
pub fn find_invalid_xml_char(s: &str) -> Option<char> {
    s.chars().find(|&c| !is_xml_char(c))
}
