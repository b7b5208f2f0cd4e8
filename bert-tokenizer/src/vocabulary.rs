use std::{
    collections::{hash_map::Entry, HashMap},
    io::{BufRead, Error as IoError},
};

use displaydoc::Display;
use num_traits::FromPrimitive;
use thiserror::Error;

use crate::post_tokenizer::PostTokenizer;

/// A word piece vocabulary.
///
/// Maps the known tokens to their ids and bounds the length of the token sequences and features
/// which are built from it. It is immutable once created.
#[derive(Clone, Debug)]
pub struct Vocabulary<N> {
    tokens: HashMap<String, N>,
    max_len: usize,
}

/// The potential errors of the vocabulary.
#[derive(Debug, Display, Error)]
pub enum VocabularyError {
    /// The maximum sequence length must be greater than two to allow for special tokens, got {0}
    MaxSequenceLength(usize),
    /// Failed to read the vocabulary: {0}
    Read(#[from] IoError),
    /// The token `{token}` in line {line} is a duplicate
    DuplicateToken { token: String, line: usize },
    /// The id {0} overflows the numerical data type
    Id(usize),
}

impl<N> Vocabulary<N> {
    /// Creates a vocabulary from a token to id mapping.
    ///
    /// # Errors
    /// Fails if the maximum sequence length can't hold the special tokens and at least one
    /// further token.
    pub fn new(tokens: HashMap<String, N>, max_len: usize) -> Result<Self, VocabularyError> {
        if max_len <= PostTokenizer::ADDED_TOKENS {
            Err(VocabularyError::MaxSequenceLength(max_len))
        } else {
            Ok(Self { tokens, max_len })
        }
    }

    /// Creates a vocabulary from lines of tokens.
    ///
    /// Each line is trimmed and its zero-based position is the id of the token.
    pub fn parse(vocab: impl BufRead, max_len: usize) -> Result<Self, VocabularyError>
    where
        N: FromPrimitive,
    {
        Self::new(parse_tokens(vocab)?, max_len)
    }

    /// Looks up the id of the token.
    pub fn lookup(&self, token: &str) -> Option<N>
    where
        N: Copy,
    {
        self.tokens.get(token).copied()
    }

    /// Checks whether the token is part of the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    /// Gets the maximum sequence length.
    pub fn max_sequence_length(&self) -> usize {
        self.max_len
    }

    /// Gets the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Checks whether there are no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Parses lines of tokens into a token to id mapping.
pub(crate) fn parse_tokens<N>(vocab: impl BufRead) -> Result<HashMap<String, N>, VocabularyError>
where
    N: FromPrimitive,
{
    let mut tokens = HashMap::new();
    for (line, token) in vocab.lines().enumerate() {
        let id = N::from_usize(line).ok_or(VocabularyError::Id(line))?;
        match tokens.entry(token?.trim().to_string()) {
            Entry::Occupied(entry) => {
                return Err(VocabularyError::DuplicateToken {
                    token: entry.key().clone(),
                    line,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(id);
            }
        }
    }

    Ok(tokens)
}
