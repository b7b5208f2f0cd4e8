use displaydoc::Display;
use log::trace;
use num_traits::Num;
use thiserror::Error;

use crate::{sequence::TokenSequence, vocabulary::Vocabulary};

/// The fixed-width features of a tokenized sequence.
///
/// The ids, mask and segments are as wide as the maximum sequence length of the vocabulary,
/// positions after the tokens are zero.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord<N> {
    /// The ids of the tokens.
    pub(crate) input_ids: Vec<N>,
    /// The mask identifying the tokens and the padding.
    pub(crate) input_mask: Vec<N>,
    /// The segment of the ids, always the first one.
    pub(crate) segment_ids: Vec<N>,
    /// The label placeholder.
    pub(crate) label_ids: Vec<N>,
}

impl<N> FeatureRecord<N> {
    /// Gets the ids of the tokens.
    pub fn input_ids(&self) -> &[N] {
        &self.input_ids
    }

    /// Gets the mask, which is one for tokens and zero for padding.
    pub fn input_mask(&self) -> &[N] {
        &self.input_mask
    }

    /// Gets the segment ids, which are all zero.
    pub fn segment_ids(&self) -> &[N] {
        &self.segment_ids
    }

    /// Gets the single label id, which is zero.
    pub fn label_ids(&self) -> &[N] {
        &self.label_ids
    }

    /// Gets the width of the features.
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    /// Checks whether the features have zero width.
    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }
}

/// The potential errors of the feature encoder.
#[derive(Debug, Display, Error)]
pub enum EncodingError {
    /// The token sequence of length {len} exceeds the maximum sequence length {max_len}
    UnboundedSequence { len: usize, max_len: usize },
    /// The token `{0}` doesn't exist in the vocabulary
    TokenNotInVocabulary(String),
}

/// An encoder which maps token sequences to fixed-width features.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Encodes the token sequence.
    ///
    /// # Errors
    /// Fails if the sequence is longer than the maximum sequence length or if a token is missing
    /// from the vocabulary. The sequence is never truncated and missing ids are never defaulted.
    pub fn encode<N>(
        &self,
        sequence: &TokenSequence,
        vocab: &Vocabulary<N>,
    ) -> Result<FeatureRecord<N>, EncodingError>
    where
        N: Num + Copy,
    {
        let max_len = vocab.max_sequence_length();
        if sequence.len() > max_len {
            return Err(EncodingError::UnboundedSequence {
                len: sequence.len(),
                max_len,
            });
        }

        let mut input_ids = vec![N::zero(); max_len];
        let mut input_mask = vec![N::zero(); max_len];
        for ((token, id), mask) in sequence
            .iter()
            .zip(input_ids.iter_mut())
            .zip(input_mask.iter_mut())
        {
            *id = vocab
                .lookup(token)
                .ok_or_else(|| EncodingError::TokenNotInVocabulary(token.clone()))?;
            *mask = N::one();
        }
        trace!("encoded {} tokens into {} features", sequence.len(), max_len);

        Ok(FeatureRecord {
            input_ids,
            input_mask,
            segment_ids: vec![N::zero(); max_len],
            label_ids: vec![N::zero()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::hello_tokens;

    fn vocab(max_len: usize) -> Vocabulary<u32> {
        Vocabulary::new(hello_tokens(), max_len).unwrap()
    }

    fn sequence(tokens: &[&str]) -> TokenSequence {
        tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_encode() {
        let sequence = sequence(&["[CLS]", "hello", "world", "[SEP]"]);
        let features = FeatureEncoder.encode(&sequence, &vocab(6)).unwrap();
        assert_eq!(features.input_ids(), [2, 4, 5, 3, 0, 0]);
        assert_eq!(features.input_mask(), [1, 1, 1, 1, 0, 0]);
        assert_eq!(features.segment_ids(), [0, 0, 0, 0, 0, 0]);
        assert_eq!(features.label_ids(), [0]);
        assert_eq!(features.len(), 6);
    }

    #[test]
    fn test_encode_full() {
        let sequence = sequence(&["[CLS]", "hel", "##lo", "[SEP]"]);
        let features = FeatureEncoder.encode(&sequence, &vocab(4)).unwrap();
        assert_eq!(features.input_ids(), [2, 7, 6, 3]);
        assert_eq!(features.input_mask(), [1, 1, 1, 1]);
    }

    #[test]
    fn test_encode_empty() {
        let features = FeatureEncoder
            .encode(&TokenSequence::default(), &vocab(3))
            .unwrap();
        assert_eq!(features.input_ids(), [0, 0, 0]);
        assert_eq!(features.input_mask(), [0, 0, 0]);
    }

    #[test]
    fn test_encode_unbounded() {
        let sequence = sequence(&["[CLS]", "hello", "world", "[SEP]"]);
        assert!(matches!(
            FeatureEncoder.encode(&sequence, &vocab(3)).unwrap_err(),
            EncodingError::UnboundedSequence { len: 4, max_len: 3 },
        ));
    }

    #[test]
    fn test_encode_unknown_token() {
        let sequence = sequence(&["[CLS]", "goodbye", "[SEP]"]);
        assert!(matches!(
            FeatureEncoder.encode(&sequence, &vocab(5)).unwrap_err(),
            EncodingError::TokenNotInVocabulary(token) if token == "goodbye",
        ));
    }
}
