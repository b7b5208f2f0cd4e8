use std::borrow::Cow;

use displaydoc::Display;
use thiserror::Error;

use crate::{vocabulary::Vocabulary, SmallString};

/// A Bert word piece model.
#[derive(Debug)]
pub(crate) struct Model {
    pub(crate) unk_token: SmallString,
    pub(crate) prefix: SmallString,
    pub(crate) max_chars: usize,
}

/// The potential errors of the word piece model.
#[derive(Debug, Display, Error)]
pub enum ModelError {
    /// Missing the unknown token in the vocabulary
    UnkToken,
}

/// The greedy longest-match-first segmentation of a single word.
#[derive(Debug, PartialEq)]
pub(crate) struct Segmentation {
    /// The matched word pieces, where all but the first carry the continuing subword prefix.
    pub(crate) pieces: Vec<String>,
    /// Whether the segmentation got stuck before reaching the end of the word.
    pub(crate) exhausted: bool,
}

impl Model {
    /// Creates a word piece model.
    pub(crate) fn new(unk: impl AsRef<str>, prefix: impl AsRef<str>, max_chars: usize) -> Self {
        Self {
            unk_token: unk.as_ref().into(),
            prefix: prefix.as_ref().into(),
            max_chars,
        }
    }

    /// Validates itself.
    pub(crate) fn validate<N>(self, vocab: &Vocabulary<N>) -> Result<Self, ModelError> {
        if vocab.contains(self.unk_token.as_str()) {
            Ok(self)
        } else {
            Err(ModelError::UnkToken)
        }
    }

    /// Segments the word into the longest matching word pieces from left to right.
    ///
    /// Stops at the first position from which no word piece matches, the pieces matched up to
    /// this position are kept.
    pub(crate) fn segment<N>(&self, word: &str, vocab: &Vocabulary<N>) -> Segmentation {
        let mut pieces = Vec::new();
        let mut start = 0;

        while start < word.len() {
            let piece = word[start..]
                .char_indices()
                .map(|(idx, c)| start + idx + c.len_utf8())
                .rev()
                .find_map(|end| {
                    let piece = if start == 0 {
                        Cow::Borrowed(&word[..end])
                    } else {
                        Cow::Owned(format!("{}{}", self.prefix, &word[start..end]))
                    };
                    vocab
                        .contains(piece.as_ref())
                        .then(|| (piece.into_owned(), end))
                });

            match piece {
                Some((piece, end)) => {
                    pieces.push(piece);
                    start = end;
                }
                None => {
                    return Segmentation {
                        pieces,
                        exhausted: true,
                    };
                }
            }
        }

        Segmentation {
            pieces,
            exhausted: false,
        }
    }

    /// Tokenizes the word into word pieces.
    ///
    /// Words which are too long are replaced by the unknown token, so are the remainders of words
    /// which can't be segmented completely.
    pub(crate) fn tokenize_word<N>(&self, word: &str, vocab: &Vocabulary<N>) -> Vec<String> {
        if word.chars().count() > self.max_chars {
            return vec![self.unk_token.to_string()];
        }

        let Segmentation {
            mut pieces,
            exhausted,
        } = self.segment(word, vocab);
        if exhausted {
            pieces.push(self.unk_token.to_string());
        }

        pieces
    }

    /// Tokenizes the words lazily into word pieces.
    pub(crate) fn tokenize<'a, N>(
        &'a self,
        words: impl Iterator<Item = &'a str> + 'a,
        vocab: &'a Vocabulary<N>,
    ) -> impl Iterator<Item = String> + 'a {
        words.flat_map(move |word| self.tokenize_word(word, vocab))
    }
}
