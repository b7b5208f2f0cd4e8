use log::trace;
use num_traits::Num;
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

use crate::{
    encoding::{EncodingError, FeatureEncoder, FeatureRecord},
    model::Model,
    normalizer::Normalizer,
    post_tokenizer::{truncation::Truncation, PostTokenizer},
    pre_tokenizer::PreTokenizer,
    sequence::TokenSequence,
    vocabulary::Vocabulary,
};

/// A Bert tokenizer.
///
/// Can be created via the [`Builder`] and consists of a vocabulary, a Bert normalizer, a Bert
/// pre-tokenizer, a Bert word piece model, a truncation strategy, a Bert post-tokenizer and a
/// feature encoder.
///
/// [`Builder`]: crate::Builder
#[derive(Debug)]
pub struct Tokenizer<N> {
    pub(crate) vocab: Vocabulary<N>,
    pub(crate) normalizer: Normalizer,
    pub(crate) pre_tokenizer: PreTokenizer,
    pub(crate) model: Model,
    pub(crate) truncation: Truncation,
    pub(crate) post_tokenizer: PostTokenizer,
    pub(crate) encoder: FeatureEncoder,
}

impl<N> Tokenizer<N> {
    /// Tokenizes the sequence.
    ///
    /// The token sequence is silently truncated on the right to the maximum sequence length.
    pub fn tokenize(&self, sequence: impl AsRef<str>) -> TokenSequence {
        let sequence = self.normalizer.normalize(sequence.as_ref());
        let sequence = self.pre_tokenizer.pre_tokenize(&sequence);
        let tokens = self.model.tokenize(sequence.words(), &self.vocab);
        let tokens = self.truncation.truncate(tokens);
        let sequence = self.post_tokenizer.post_tokenize(tokens);
        trace!("tokenized sequence: {:?}", sequence.tokens());

        sequence
    }

    /// Encodes the sequence.
    ///
    /// The features are as wide as the maximum sequence length.
    pub fn encode(&self, sequence: impl AsRef<str>) -> Result<FeatureRecord<N>, EncodingError>
    where
        N: Num + Copy,
    {
        let sequence = self.tokenize(sequence);
        self.encoder.encode(&sequence, &self.vocab)
    }

    /// Encodes the batch of sequences.
    ///
    /// The sequences are encoded in parallel if the `multithreaded` feature is enabled.
    pub fn encode_batch<S>(&self, sequences: &[S]) -> Result<Vec<FeatureRecord<N>>, EncodingError>
    where
        S: AsRef<str> + Sync,
        N: Num + Copy + Send + Sync,
    {
        #[cfg(not(feature = "multithreaded"))]
        let sequences = sequences.iter();
        #[cfg(feature = "multithreaded")]
        let sequences = sequences.par_iter();

        sequences.map(|sequence| self.encode(sequence)).collect()
    }

    /// Gets the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary<N> {
        &self.vocab
    }

    /// Gets the maximum sequence length.
    pub fn max_sequence_length(&self) -> usize {
        self.vocab.max_sequence_length()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        builder::Builder,
        tests::{hello_tokens, tokens},
    };

    fn build(tokens: HashMap<String, u32>, max_len: usize) -> Tokenizer<u32> {
        Builder::from_tokens(tokens)
            .with_max_sequence_length(max_len)
            .build()
            .unwrap()
    }

    fn hello(max_len: usize) -> Tokenizer<u32> {
        build(hello_tokens(), max_len)
    }

    #[test]
    fn test_tokenize() {
        let tokens = hello(10).tokenize("hello world");
        assert_eq!(tokens.tokens(), ["[CLS]", "hello", "world", "[SEP]"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(hello(10).tokenize("").tokens(), ["[CLS]", "[SEP]"]);
        assert_eq!(hello(10).tokenize(" \t ").tokens(), ["[CLS]", "[SEP]"]);
    }

    #[test]
    fn test_tokenize_surrounding_whitespace() {
        let tokenizer = hello(10);
        assert_eq!(
            tokenizer.tokenize("\u{1}hello\t").tokens(),
            ["[CLS]", "hello", "[SEP]"],
        );
        assert_eq!(
            tokenizer.tokenize("hello\u{3000}").tokens(),
            ["[CLS]", "hello", "[UNK]", "[SEP]"],
        );
        assert_eq!(
            tokenizer.tokenize("\u{a0}world").tokens(),
            ["[CLS]", "[UNK]", "world", "[SEP]"],
        );
    }

    #[test]
    fn test_tokenize_long_word() {
        let word = "a".repeat(31);
        assert_eq!(
            hello(10).tokenize(word).tokens(),
            ["[CLS]", "[UNK]", "[SEP]"],
        );
    }

    #[test]
    fn test_tokenize_punctuation() {
        assert_eq!(
            hello(10).tokenize("hello!").tokens(),
            ["[CLS]", "hello", "!", "[SEP]"],
        );

        let tokenizer = build(tokens(&["[UNK]", "[CLS]", "[SEP]", "hello"]), 10);
        assert_eq!(
            tokenizer.tokenize("hello!").tokens(),
            ["[CLS]", "hello", "[UNK]", "[SEP]"],
        );
    }

    #[test]
    fn test_tokenize_continuation() {
        let tokenizer = build(tokens(&["[UNK]", "[CLS]", "[SEP]", "hel", "##lo"]), 10);
        assert_eq!(
            tokenizer.tokenize("hello hello").tokens(),
            ["[CLS]", "hel", "##lo", "hel", "##lo", "[SEP]"],
        );
    }

    #[test]
    fn test_tokenize_partial_unknown() {
        assert_eq!(
            hello(10).tokenize("helxyz world").tokens(),
            ["[CLS]", "hel", "[UNK]", "world", "[SEP]"],
        );
    }

    #[test]
    fn test_tokenize_truncation() {
        let tokens = hello(4).tokenize("hello world hello world hello");
        assert_eq!(tokens.tokens(), ["[CLS]", "hello", "world", "[SEP]"]);
    }

    #[test]
    fn test_tokenize_truncation_mid_word() {
        let tokenizer = build(tokens(&["[UNK]", "[CLS]", "[SEP]", "hel", "##lo"]), 3);
        assert_eq!(
            tokenizer.tokenize("hello world").tokens(),
            ["[CLS]", "hel", "[SEP]"],
        );

        let tokenizer = build(tokens(&["[UNK]", "[CLS]", "[SEP]", "hel", "##lo"]), 4);
        assert_eq!(
            tokenizer.tokenize("helxyz hello").tokens(),
            ["[CLS]", "hel", "[UNK]", "[SEP]"],
        );
    }

    #[test]
    fn test_tokenize_lowercase() {
        let tokenizer = hello(10);
        for sequence in &["Hello World", "HELLO!", "  hElLo   wOrLd  ", "héllo", ""] {
            assert_eq!(
                tokenizer.tokenize(sequence),
                tokenizer.tokenize(sequence.to_lowercase()),
            );
        }

        let tokenizer = Builder::from_tokens(hello_tokens())
            .with_lowercase(false)
            .with_max_sequence_length(10)
            .build()
            .unwrap();
        assert_eq!(
            tokenizer.tokenize("Hello world").tokens(),
            ["[CLS]", "[UNK]", "world", "[SEP]"],
        );
    }

    #[test]
    fn test_tokenize_bounded() {
        let sequences = [
            "",
            "hello",
            "hello world! hello world! hello world!",
            "helxyz helxyz helxyz helxyz",
            "!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!",
        ];
        for max_len in 3..12 {
            let tokenizer = hello(max_len);
            for sequence in &sequences {
                let tokens = tokenizer.tokenize(sequence);
                assert!(tokens.len() <= max_len);
                assert_eq!(tokens.first().map(String::as_str), Some("[CLS]"));
                assert_eq!(tokens.last().map(String::as_str), Some("[SEP]"));
                assert!(tokens.iter().all(|token| tokenizer.vocabulary().contains(token)));
            }
        }
    }

    #[test]
    fn test_encode() {
        let features = hello(8).encode("Hello, world!").unwrap();
        // `,` is not in the vocabulary
        assert_eq!(features.input_ids(), [2, 4, 1, 5, 8, 3, 0, 0]);
        assert_eq!(features.input_mask(), [1, 1, 1, 1, 1, 1, 0, 0]);
        assert_eq!(features.segment_ids(), [0; 8]);
        assert_eq!(features.label_ids(), [0]);
    }

    #[test]
    fn test_encode_mask() {
        let tokenizer = hello(6);
        for sequence in &["", "hello", "hello world", "hello world hello world hello"] {
            let len = tokenizer.tokenize(sequence).len();
            let features = tokenizer.encode(sequence).unwrap();
            assert_eq!(features.len(), 6);
            assert!(features.input_mask()[..len].iter().all(|mask| *mask == 1));
            assert!(features.input_mask()[len..].iter().all(|mask| *mask == 0));
            assert!(features.input_ids()[len..].iter().all(|id| *id == 0));
        }
    }

    #[test]
    fn test_encode_batch() {
        let tokenizer = hello(5);
        let features = tokenizer.encode_batch(&["hello", "", "world world"]).unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features[0].input_ids(), [2, 4, 3, 0, 0]);
        assert_eq!(features[1].input_ids(), [2, 3, 0, 0, 0]);
        assert_eq!(features[2].input_ids(), [2, 5, 5, 3, 0]);
    }

    #[test]
    fn test_send_sync() {
        fn is_send_sync<T: Send + Sync>(_: &T) {}
        is_send_sync(&hello(5));
    }
}
