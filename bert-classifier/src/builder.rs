use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IoError},
    path::Path,
};

use bert_tokenizer::{Builder as TokenizerBuilder, BuilderError as TokenizerError};
use displaydoc::Display;
use thiserror::Error;

use crate::{
    classifier::Classifier,
    labels::{Labels, LabelsError},
    scorer::Scorer,
};

/// A builder to create a [`Classifier`].
pub struct Builder<V, L> {
    vocab: V,
    labels: L,
    lowercase: bool,
    max_len: usize,
}

/// The potential errors of the [`Classifier`] [`Builder`].
#[derive(Debug, Display, Error)]
pub enum BuilderError {
    /// Failed to load a data file: {0}
    DataFile(#[from] IoError),
    /// Failed to build the tokenizer: {0}
    Tokenizer(#[from] TokenizerError),
    /// Failed to parse the labels: {0}
    Labels(#[from] LabelsError),
}

impl Builder<BufReader<File>, BufReader<File>> {
    /// Creates a [`Classifier`] builder from a vocabulary file and a labels file.
    pub fn from_files(
        vocab: impl AsRef<Path>,
        labels: impl AsRef<Path>,
    ) -> Result<Self, BuilderError> {
        let vocab = BufReader::new(File::open(vocab)?);
        let labels = BufReader::new(File::open(labels)?);
        Ok(Self::new(vocab, labels))
    }
}

impl<V, L> Builder<V, L>
where
    V: BufRead,
    L: BufRead,
{
    /// Creates a [`Classifier`] builder.
    pub fn new(vocab: V, labels: L) -> Self {
        Self {
            vocab,
            labels,
            lowercase: true,
            max_len: 64,
        }
    }

    /// Toggles lower casing for the tokenizer.
    ///
    /// Defaults to `true`.
    pub fn with_lowercase(mut self, toggle: bool) -> Self {
        self.lowercase = toggle;
        self
    }

    /// Sets the maximum sequence length for the tokenizer.
    ///
    /// Defaults to `64`.
    pub fn with_max_sequence_length(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Builds a [`Classifier`] around the scorer.
    ///
    /// # Errors
    /// Fails on invalid tokenizer settings or labels.
    pub fn build<S>(self, scorer: S) -> Result<Classifier<S>, BuilderError>
    where
        S: Scorer,
    {
        let tokenizer = TokenizerBuilder::new(self.vocab)?
            .with_lowercase(self.lowercase)
            .with_max_sequence_length(self.max_len)
            .build()?;
        let labels = Labels::parse(self.labels)?;

        Ok(Classifier {
            tokenizer,
            labels,
            scorer,
        })
    }
}
