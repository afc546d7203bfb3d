//! Display-name ordering.
//!
//! Names compare the way a person alphabetizes them rather than by bytes:
//! case and accents are ignored at the first level, digit runs compare by
//! numeric value ("Track 2" before "Track 10"). Accents and then case only
//! break ties, so the ordering stays total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::catalog::domain::NormalizedResult;

/// A run of digits, compared by value. Leading zeros are dropped.
#[derive(Debug, PartialEq, Eq)]
struct Numeric(String);

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numbers sort ahead of text, matching Finder-style ordering
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Number(Numeric),
    Text(String),
}

/// Compare two display names in natural, case-insensitive order
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    collation_key(a, true)
        .cmp(&collation_key(b, true))
        .then_with(|| collation_key(a, false).cmp(&collation_key(b, false)))
        .then_with(|| a.cmp(b))
}

/// Sort results ascending by display name
pub fn sort_results(results: &mut [NormalizedResult]) {
    results.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));
}

fn collation_key(name: &str, strip_accents: bool) -> Vec<Segment> {
    let folded: String = name
        .nfd()
        .filter(|c| !(strip_accents && is_combining_mark(*c)))
        .flat_map(char::to_lowercase)
        .collect();

    let mut segments = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for c in folded.chars() {
        if c.is_ascii_digit() {
            if !text.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut text)));
            }
            digits.push(c);
        } else {
            if !digits.is_empty() {
                segments.push(number_segment(std::mem::take(&mut digits)));
            }
            text.push(c);
        }
    }
    if !digits.is_empty() {
        segments.push(number_segment(digits));
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }

    segments
}

fn number_segment(digits: String) -> Segment {
    let trimmed = digits.trim_start_matches('0');
    let value = if trimmed.is_empty() { "0" } else { trimmed };
    Segment::Number(Numeric(value.to_string()))
}
