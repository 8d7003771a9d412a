//! Source filename handling: extension stripping, titles and output names.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Suffix appended to the stripped source name for the exported artifact.
pub const OUTPUT_SUFFIX: &str = "_ABNT";

/// Word-processor format the source filename claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Legacy binary `.doc`
    Doc,
    /// Office Open XML `.docx`
    Docx,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Doc => write!(f, "Word 97-2003 (.doc)"),
            SourceFormat::Docx => write!(f, "Word (.docx)"),
        }
    }
}

fn word_extension() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.(docx?)$").unwrap())
}

/// Detect the source format from a filename's extension.
///
/// # Example
/// ```
/// use abnt::naming::{detect_source_format, SourceFormat};
///
/// assert_eq!(detect_source_format("tese.DOCX"), Some(SourceFormat::Docx));
/// assert_eq!(detect_source_format("notas.txt"), None);
/// ```
pub fn detect_source_format(filename: &str) -> Option<SourceFormat> {
    let caps = word_extension().captures(filename.trim())?;
    if caps[1].eq_ignore_ascii_case("docx") {
        Some(SourceFormat::Docx)
    } else {
        Some(SourceFormat::Doc)
    }
}

/// Strip surrounding whitespace, then a trailing `.doc`/`.docx` extension
/// (case-insensitive).
///
/// Other extensions are left alone.
pub fn strip_extension(filename: &str) -> &str {
    let filename = filename.trim();
    match word_extension().find(filename) {
        Some(m) => &filename[..m.start()],
        None => filename,
    }
}

/// Mixed-case display title used in the header and `<title>`.
pub fn display_title(filename: &str) -> String {
    strip_extension(filename).to_string()
}

/// Uppercased title used on the title page.
pub fn cover_title(filename: &str) -> String {
    strip_extension(filename).to_uppercase()
}

/// Output filename for the exported PDF: `{stripped}_ABNT.pdf`.
pub fn output_filename(filename: &str) -> String {
    with_output_extension(filename, "pdf")
}

/// Output filename with an arbitrary extension: `{stripped}_ABNT.{ext}`.
pub fn with_output_extension(filename: &str, extension: &str) -> String {
    format!("{}{}.{}", strip_extension(filename), OUTPUT_SUFFIX, extension)
}
