use bert_tokenizer::{EncodingError, Tokenizer};
use displaydoc::Display;
use log::debug;
use thiserror::Error;

use crate::{
    features::Features,
    labels::Labels,
    ranking::{rank, LabelScore, RankingError},
    scorer::Scorer,
};

/// A classifier for text sequences.
///
/// Can be created via the [`Builder`] and consists of a tokenizer, the labels and a scorer.
///
/// [`Builder`]: crate::Builder
pub struct Classifier<S> {
    pub(crate) tokenizer: Tokenizer<i64>,
    pub(crate) labels: Labels,
    pub(crate) scorer: S,
}

/// The potential errors of the [`Classifier`].
#[derive(Debug, Display, Error)]
pub enum ClassifierError {
    /// Failed to encode the sequence: {0}
    Encoding(#[from] EncodingError),
    /// Failed to score the sequence: {0}
    Scorer(#[from] anyhow::Error),
    /// Failed to rank the scores: {0}
    Ranking(#[from] RankingError),
}

impl<S> Classifier<S>
where
    S: Scorer,
{
    /// Classifies the sequence.
    ///
    /// The labels are ranked by descending scores.
    pub fn classify(&self, sequence: impl AsRef<str>) -> Result<Vec<LabelScore>, ClassifierError> {
        let sequence = sequence.as_ref();
        debug!("classifying sequence: {:?}", sequence);

        let record = self.tokenizer.encode(sequence)?;
        let features = Features::from_record(&record);
        let scores = self.scorer.score(&features)?;

        rank(&scores, &self.labels).map_err(Into::into)
    }
}

impl<S> Classifier<S> {
    /// Gets the tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer<i64> {
        &self.tokenizer
    }

    /// Gets the labels.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Gets the maximum sequence length.
    pub fn max_sequence_length(&self) -> usize {
        self.tokenizer.max_sequence_length()
    }
}
