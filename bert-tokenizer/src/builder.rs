use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, Error as IoError},
    path::Path,
};

use displaydoc::Display;
use num_traits::FromPrimitive;
use thiserror::Error;

use crate::{
    encoding::FeatureEncoder,
    model::{Model, ModelError},
    normalizer::Normalizer,
    post_tokenizer::{truncation::Truncation, PostTokenizer, PostTokenizerError},
    pre_tokenizer::PreTokenizer,
    tokenizer::Tokenizer,
    vocabulary::{parse_tokens, Vocabulary, VocabularyError},
};

/// A builder to create a Bert [`Tokenizer`].
#[derive(Debug)]
pub struct Builder<N> {
    vocab: HashMap<String, N>,
    lowercase: bool,
    unk: String,
    prefix: String,
    max_chars: usize,
    cls: String,
    sep: String,
    max_len: usize,
}

/// The potential errors of the [`Builder`].
#[derive(Debug, Display, Error)]
pub enum BuilderError {
    /// Failed to load the vocabulary file: {0}
    DataFile(#[from] IoError),
    /// Failed to build the vocabulary: {0}
    Vocabulary(#[from] VocabularyError),
    /// Failed to build the word piece model: {0}
    Model(#[from] ModelError),
    /// Failed to build the post-tokenizer: {0}
    PostTokenizer(#[from] PostTokenizerError),
}

impl<N> Builder<N> {
    /// Creates a [`Tokenizer`] builder from a vocabulary file.
    ///
    /// The default settings are the same as for [`new()`].
    ///
    /// [`new()`]: Self::new
    pub fn from_file(vocab: impl AsRef<Path>) -> Result<Self, BuilderError>
    where
        N: FromPrimitive,
    {
        Self::new(BufReader::new(File::open(vocab)?))
    }

    /// Creates a [`Tokenizer`] builder from a vocabulary.
    ///
    /// Each line of the vocabulary is a token and its position is the id of the token.
    ///
    /// The default settings are:
    /// - Lowercasing.
    /// - A Bert word piece model with `"[UNK]"` unknown token, `"##"` continuing subword prefix
    ///   and `30` maximum characters per word.
    /// - A Bert post-tokenizer with `"[CLS]"` class token and `"[SEP]"` separation token.
    /// - A maximum sequence length of `128`.
    pub fn new(vocab: impl BufRead) -> Result<Self, BuilderError>
    where
        N: FromPrimitive,
    {
        Ok(Self::from_tokens(parse_tokens(vocab)?))
    }

    /// Creates a [`Tokenizer`] builder from a token to id mapping.
    ///
    /// The default settings are the same as for [`new()`].
    ///
    /// [`new()`]: Self::new
    pub fn from_tokens(vocab: HashMap<String, N>) -> Self {
        Self {
            vocab,
            lowercase: true,
            unk: "[UNK]".into(),
            prefix: "##".into(),
            max_chars: 30,
            cls: "[CLS]".into(),
            sep: "[SEP]".into(),
            max_len: 128,
        }
    }

    /// Toggles lowercasing for the normalizer.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Configures the word piece model.
    pub fn with_model(
        mut self,
        unk: impl Into<String>,
        prefix: impl Into<String>,
        max_chars: usize,
    ) -> Self {
        self.unk = unk.into();
        self.prefix = prefix.into();
        self.max_chars = max_chars;
        self
    }

    /// Configures the post-tokenizer.
    pub fn with_post_tokenizer(mut self, cls: impl Into<String>, sep: impl Into<String>) -> Self {
        self.cls = cls.into();
        self.sep = sep.into();
        self
    }

    /// Sets the maximum sequence length, which includes the special tokens.
    pub fn with_max_sequence_length(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Builds the tokenizer.
    ///
    /// # Errors
    /// Fails if the maximum sequence length is less than three or if any of the special tokens
    /// is missing from the vocabulary.
    pub fn build(self) -> Result<Tokenizer<N>, BuilderError> {
        let vocab = Vocabulary::new(self.vocab, self.max_len)?;
        let model = Model::new(self.unk, self.prefix, self.max_chars).validate(&vocab)?;
        let post_tokenizer = PostTokenizer::new(self.cls, self.sep).validate(&vocab)?;
        let truncation = Truncation::fixed(vocab.max_sequence_length());

        Ok(Tokenizer {
            vocab,
            normalizer: Normalizer::new(self.lowercase),
            pre_tokenizer: PreTokenizer,
            model,
            truncation,
            post_tokenizer,
            encoder: FeatureEncoder,
        })
    }
}
