// SPDX-License-Identifier: MPL-2.0
//! Media sources and quality variants.

/// One selectable rendition of the media.
///
/// Labels are free-form and need not be unique; the position inside the
/// quality list is what identifies an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityVariant {
    pub label: String,
    pub url: String,
}

impl QualityVariant {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Parses a `LABEL=URL` pair, as accepted on the command line.
    ///
    /// The first `=` separates the label from the URL so URLs may contain
    /// further `=` characters (query strings).
    pub fn parse_pair(pair: &str) -> Option<Self> {
        let (label, url) = pair.split_once('=')?;
        let label = label.trim();
        let url = url.trim();
        if label.is_empty() || url.is_empty() {
            return None;
        }
        Some(Self::new(label, url))
    }
}

/// Construction parameters shared by a session and its fullscreen child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    /// URL bound at construction.
    pub url: String,
    /// Ordered quality variants offered in the selection list.
    pub qualities: Vec<QualityVariant>,
}

impl MediaSource {
    /// Creates a source without quality variants.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            qualities: Vec::new(),
        }
    }

    /// Creates a source with a default URL and a list of variants.
    pub fn with_qualities(url: impl Into<String>, qualities: Vec<QualityVariant>) -> Self {
        Self {
            url: url.into(),
            qualities,
        }
    }

    /// Returns true if the quality selector should be enabled.
    #[must_use]
    pub fn has_qualities(&self) -> bool {
        !self.qualities.is_empty()
    }

    /// Returns the variant at `index`, if any.
    #[must_use]
    pub fn quality(&self, index: usize) -> Option<&QualityVariant> {
        self.qualities.get(index)
    }
}

/// Checks that a string looks like a media URL (`scheme://rest`).
///
/// The scheme must start with a letter and contain only letters, digits,
/// `+`, `-` or `.`; the remainder must be non-empty and free of whitespace.
#[must_use]
pub fn is_well_formed_url(raw: &str) -> bool {
    let Some((scheme, rest)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    scheme_ok && !rest.is_empty() && !raw.chars().any(char::is_whitespace)
}
