use std::borrow::Cow;

/// A Bert normalizer.
///
/// Trims ascii control chars and spaces off the sequence and lowercases it independently of any
/// locale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Normalizer {
    lowercase: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl Normalizer {
    /// Creates a normalizer.
    pub(crate) fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    /// Normalizes the sequence.
    pub(crate) fn normalize<'s>(&self, sequence: &'s str) -> Cow<'s, str> {
        // other unicode whitespace is kept and isolated later on like punctuation
        let sequence = sequence.trim_matches(|c: char| c <= ' ');
        if self.lowercase {
            sequence.to_lowercase().into()
        } else {
            sequence.into()
        }
    }
}
