//! Formatting options and their validation.
//!
//! [`RawOptions`] is the loosely-typed record a caller supplies (every field
//! optional, enum values as strings). [`normalize`] turns it into the
//! canonical [`FormattingOptions`], filling absent fields from defaults and
//! rejecting values outside the recognized sets.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Font family used for body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// Times New Roman (ABNT default)
    #[default]
    TimesNewRoman,
    /// Arial
    Arial,
}

impl FontFamily {
    /// All recognized font families.
    pub const ALL: [FontFamily; 2] = [FontFamily::TimesNewRoman, FontFamily::Arial];

    /// Canonical name, as written into the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Arial => "Arial",
        }
    }

    /// Generic CSS fallback family.
    pub fn generic(&self) -> &'static str {
        match self {
            FontFamily::TimesNewRoman => "serif",
            FontFamily::Arial => "sans-serif",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(value))
    }
}

/// Body font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSize {
    /// 12pt (ABNT default)
    #[default]
    Pt12,
    /// 10pt (quotations)
    Pt10,
}

impl FontSize {
    /// All recognized font sizes.
    pub const ALL: [FontSize; 2] = [FontSize::Pt12, FontSize::Pt10];

    /// Canonical value (e.g. `"12pt"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Pt12 => "12pt",
            FontSize::Pt10 => "10pt",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Line spacing choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineSpacing {
    /// Single spacing (`"1.0"`)
    Single,
    /// One and a half (`"1.5"`, ABNT default)
    #[default]
    OneAndHalf,
    /// Double spacing (`"2.0"`)
    Double,
}

impl LineSpacing {
    /// All recognized spacings.
    pub const ALL: [LineSpacing; 3] = [
        LineSpacing::Single,
        LineSpacing::OneAndHalf,
        LineSpacing::Double,
    ];

    /// Canonical value (e.g. `"1.5"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LineSpacing::Single => "1.0",
            LineSpacing::OneAndHalf => "1.5",
            LineSpacing::Double => "2.0",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Page margin preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarginPreset {
    /// ABNT margins: 3cm top/left, 2cm bottom/right
    #[default]
    Abnt,
    /// Uniform 2.5cm
    Normal,
}

impl MarginPreset {
    /// All recognized presets.
    pub const ALL: [MarginPreset; 2] = [MarginPreset::Abnt, MarginPreset::Normal];

    /// Canonical value (`"abnt"` or `"normal"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MarginPreset::Abnt => "abnt",
            MarginPreset::Normal => "normal",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value))
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(FontFamily, FontSize, LineSpacing, MarginPreset);

/// Caller-supplied formatting choices, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    /// Font family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size (e.g. "12pt")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    /// Line spacing (e.g. "1.5")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<String>,

    /// Margin preset ("abnt" or "normal")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<String>,

    /// Emit figure captions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_captions: Option<bool>,

    /// Emit the page-number marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_numbers: Option<bool>,

    /// Emit the running header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_footer: Option<bool>,
}

/// Wire fields of [`RawOptions`] and whether each holds a string (else a bool).
const WIRE_FIELDS: [(&str, bool); 7] = [
    ("fontFamily", true),
    ("fontSize", true),
    ("lineSpacing", true),
    ("margins", true),
    ("autoCaptions", false),
    ("pageNumbers", false),
    ("headerFooter", false),
];

impl RawOptions {
    /// Decode raw options from a JSON value.
    ///
    /// A known field holding the wrong JSON type (e.g. `"lineSpacing": 1.5`)
    /// fails with [`Error::Validation`] naming that field. `null` means absent.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(ref map) => {
                for &(field, is_string) in WIRE_FIELDS.iter() {
                    match map.get(field) {
                        None | Some(Value::Null) => {}
                        Some(Value::String(_)) if is_string => {}
                        Some(Value::Bool(_)) if !is_string => {}
                        Some(other) => return Err(Error::validation(field, other.to_string())),
                    }
                }
            }
            _ => {}
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// Validated, canonical formatting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingOptions {
    /// Body font family
    #[serde(serialize_with = "serialize_display")]
    pub font_family: FontFamily,

    /// Body font size
    #[serde(serialize_with = "serialize_display")]
    pub font_size: FontSize,

    /// Line spacing
    #[serde(serialize_with = "serialize_display")]
    pub line_spacing: LineSpacing,

    /// Margin preset
    #[serde(serialize_with = "serialize_display")]
    pub margins: MarginPreset,

    /// Emit "Figura N - ..." captions and source lines
    pub auto_captions: bool,

    /// Emit the page-number marker
    pub page_numbers: bool,

    /// Emit the running header with the document title
    pub header_footer: bool,
}

fn serialize_display<T: fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl FormattingOptions {
    /// Create options with ABNT defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line spacing.
    pub fn with_line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the margin preset.
    pub fn with_margins(mut self, margins: MarginPreset) -> Self {
        self.margins = margins;
        self
    }

    /// Enable or disable automatic captions.
    pub fn with_auto_captions(mut self, enabled: bool) -> Self {
        self.auto_captions = enabled;
        self
    }

    /// Enable or disable the page-number marker.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.page_numbers = enabled;
        self
    }

    /// Enable or disable the running header.
    pub fn with_header_footer(mut self, enabled: bool) -> Self {
        self.header_footer = enabled;
        self
    }

    /// Convert back to a fully populated raw record.
    pub fn to_raw(&self) -> RawOptions {
        RawOptions {
            font_family: Some(self.font_family.as_str().to_string()),
            font_size: Some(self.font_size.as_str().to_string()),
            line_spacing: Some(self.line_spacing.as_str().to_string()),
            margins: Some(self.margins.as_str().to_string()),
            auto_captions: Some(self.auto_captions),
            page_numbers: Some(self.page_numbers),
            header_footer: Some(self.header_footer),
        }
    }
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            font_family: FontFamily::default(),
            font_size: FontSize::default(),
            line_spacing: LineSpacing::default(),
            margins: MarginPreset::default(),
            auto_captions: true,
            page_numbers: true,
            header_footer: true,
        }
    }
}

/// Validate and normalize raw options.
///
/// Absent or blank enum fields and absent booleans take ABNT defaults.
/// Any other unrecognized value fails with [`Error::Validation`].
pub fn normalize(raw: &RawOptions) -> Result<FormattingOptions> {
    let defaults = FormattingOptions::default();

    Ok(FormattingOptions {
        font_family: resolve(
            "fontFamily",
            raw.font_family.as_deref(),
            FontFamily::parse,
            defaults.font_family,
        )?,
        font_size: resolve(
            "fontSize",
            raw.font_size.as_deref(),
            FontSize::parse,
            defaults.font_size,
        )?,
        line_spacing: resolve(
            "lineSpacing",
            raw.line_spacing.as_deref(),
            LineSpacing::parse,
            defaults.line_spacing,
        )?,
        margins: resolve(
            "margins",
            raw.margins.as_deref(),
            MarginPreset::parse,
            defaults.margins,
        )?,
        auto_captions: raw.auto_captions.unwrap_or(defaults.auto_captions),
        page_numbers: raw.page_numbers.unwrap_or(defaults.page_numbers),
        header_footer: raw.header_footer.unwrap_or(defaults.header_footer),
    })
}

fn resolve<T>(
    field: &'static str,
    value: Option<&str>,
    parse: fn(&str) -> Option<T>,
    default: T,
) -> Result<T> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => parse(v).ok_or_else(|| Error::validation(field, v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_record() {
        let options = normalize(&RawOptions::default()).unwrap();
        assert_eq!(options, FormattingOptions::default());
        assert_eq!(options.font_family, FontFamily::TimesNewRoman);
        assert_eq!(options.font_size, FontSize::Pt12);
        assert_eq!(options.line_spacing, LineSpacing::OneAndHalf);
        assert_eq!(options.margins, MarginPreset::Abnt);
        assert!(options.auto_captions && options.page_numbers && options.header_footer);
    }

    #[test]
    fn test_recognized_values() {
        let raw = RawOptions {
            font_family: Some("Arial".into()),
            font_size: Some("10pt".into()),
            line_spacing: Some("2.0".into()),
            margins: Some("normal".into()),
            auto_captions: Some(false),
            page_numbers: Some(false),
            header_footer: Some(true),
        };
        let options = normalize(&raw).unwrap();
        assert_eq!(options.font_family, FontFamily::Arial);
        assert_eq!(options.font_size, FontSize::Pt10);
        assert_eq!(options.line_spacing, LineSpacing::Double);
        assert_eq!(options.margins, MarginPreset::Normal);
        assert!(!options.auto_captions);
        assert!(!options.page_numbers);
        assert!(options.header_footer);
    }

    #[test]
    fn test_names_are_case_insensitive_and_canonicalized() {
        let raw = RawOptions {
            font_family: Some("  times new roman ".into()),
            margins: Some("ABNT".into()),
            ..Default::default()
        };
        let options = normalize(&raw).unwrap();
        assert_eq!(options.font_family.as_str(), "Times New Roman");
        assert_eq!(options.margins.as_str(), "abnt");
    }

    #[test]
    fn test_blank_values_default() {
        let raw = RawOptions {
            font_size: Some("   ".into()),
            line_spacing: Some(String::new()),
            ..Default::default()
        };
        let options = normalize(&raw).unwrap();
        assert_eq!(options.font_size, FontSize::Pt12);
        assert_eq!(options.line_spacing, LineSpacing::OneAndHalf);
    }

    #[test]
    fn test_unrecognized_value_is_rejected() {
        let raw = RawOptions {
            line_spacing: Some("3.0".into()),
            ..Default::default()
        };
        match normalize(&raw) {
            Err(Error::Validation { field, value }) => {
                assert_eq!(field, "lineSpacing");
                assert_eq!(value, "3.0");
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let raw = RawOptions {
            font_family: Some("Comic Sans".into()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&raw),
            Err(Error::Validation { field: "fontFamily", .. })
        ));
    }

    #[test]
    fn test_to_raw_round_trips() {
        let options = FormattingOptions::new()
            .with_font_family(FontFamily::Arial)
            .with_line_spacing(LineSpacing::Single)
            .with_auto_captions(false);
        assert_eq!(normalize(&options.to_raw()).unwrap(), options);
    }

    #[test]
    fn test_raw_options_deserialize_camel_case() {
        let raw: RawOptions = serde_json::from_str(
            r#"{"fontFamily":"Arial","lineSpacing":"1.0","autoCaptions":false}"#,
        )
        .unwrap();
        assert_eq!(raw.font_family.as_deref(), Some("Arial"));
        assert_eq!(raw.line_spacing.as_deref(), Some("1.0"));
        assert_eq!(raw.auto_captions, Some(false));
        assert!(raw.margins.is_none());
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = RawOptions::from_json(serde_json::json!({"lineSpacing": 1.5})).unwrap_err();
        match err {
            Error::Validation { field, value } => {
                assert_eq!(field, "lineSpacing");
                assert_eq!(value, "1.5");
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let err = RawOptions::from_json(serde_json::json!({"fontSize": 12})).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "fontSize", .. }));

        let err = RawOptions::from_json(serde_json::json!({"autoCaptions": "yes"})).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "autoCaptions", .. }));
    }

    #[test]
    fn test_from_json_accepts_nulls() {
        let raw = RawOptions::from_json(serde_json::json!({
            "fontFamily": null,
            "margins": "normal",
            "pageNumbers": false
        }))
        .unwrap();
        assert!(raw.font_family.is_none());
        assert_eq!(raw.margins.as_deref(), Some("normal"));
        assert_eq!(raw.page_numbers, Some(false));

        assert_eq!(
            RawOptions::from_json(serde_json::Value::Null).unwrap(),
            RawOptions::default()
        );
    }

    #[test]
    fn test_from_json_non_object_is_invalid_request() {
        let err = RawOptions::from_json(serde_json::json!(5)).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_formatting_options_serialize_canonical_strings() {
        let json = serde_json::to_value(FormattingOptions::default()).unwrap();
        assert_eq!(json["fontFamily"], "Times New Roman");
        assert_eq!(json["fontSize"], "12pt");
        assert_eq!(json["lineSpacing"], "1.5");
        assert_eq!(json["margins"], "abnt");
        assert_eq!(json["autoCaptions"], true);
    }
}
