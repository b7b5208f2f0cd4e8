/// A Bert pre-tokenizer.
///
/// Isolates punctuation by surrounding it with spaces and splits the sequence into words on
/// single spaces. Other whitespace doesn't separate words.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PreTokenizer;

/// A sequence with isolated punctuation.
pub(crate) struct PreTokenizedString {
    sequence: String,
}

impl PreTokenizer {
    /// Pre-tokenizes the sequence.
    pub(crate) fn pre_tokenize(&self, sequence: &str) -> PreTokenizedString {
        let mut isolated = String::with_capacity(sequence.len());
        for c in sequence.chars() {
            if is_punctuation(c) {
                isolated.push(' ');
                isolated.push(c);
                isolated.push(' ');
            } else {
                isolated.push(c);
            }
        }

        PreTokenizedString { sequence: isolated }
    }
}

impl PreTokenizedString {
    /// Iterates over the non-empty words.
    pub(crate) fn words(&self) -> impl Iterator<Item = &str> {
        self.sequence.split(' ').filter(|word| !word.is_empty())
    }
}

/// Checks whether the char is treated as punctuation.
///
/// Every non-ascii char counts as punctuation, so does every ascii symbol.
fn is_punctuation(c: char) -> bool {
    !c.is_ascii() || matches!(c as u32, 33..=47 | 58..=64 | 91..=96 | 123..=126)
}
