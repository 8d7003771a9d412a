//! Cleanup of extracted body text.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

use crate::model::Paragraph;

const LIGATURES: [(char, &str); 7] = [
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{FB05}', "st"),
    ('\u{FB06}', "st"),
];

fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n[ \t]*\n").unwrap())
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Split extracted text into body paragraphs.
///
/// Text is NFC-normalized, ligatures are expanded, replacement and control
/// characters are dropped, paragraphs are separated by blank lines and
/// whitespace inside a paragraph collapses to single spaces.
pub fn paragraphs_from_text(text: &str) -> Vec<Paragraph> {
    let cleaned = clean(text);

    paragraph_break()
        .split(&cleaned)
        .map(|chunk| whitespace_run().replace_all(chunk.trim(), " ").into_owned())
        .filter(|p| !p.is_empty())
        .map(Paragraph::body)
        .collect()
}

fn clean(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut dropped = 0usize;
    let mut out = String::with_capacity(normalized.len());

    for c in normalized.nfc() {
        if let Some((_, expansion)) = LIGATURES.iter().find(|(lig, _)| *lig == c) {
            out.push_str(expansion);
        } else if c == '\u{FFFD}' || (c.is_control() && c != '\n' && c != '\t') {
            dropped += 1;
        } else {
            out.push(c);
        }
    }

    if dropped > 0 {
        log::warn!("Dropped {} unprintable characters from body text", dropped);
    }
    out
}
