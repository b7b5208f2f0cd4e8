pub mod truncation;

use std::iter::once;

use displaydoc::Display;
use thiserror::Error;

use crate::{sequence::TokenSequence, vocabulary::Vocabulary, SmallString};

/// A Bert post-tokenizer.
///
/// Encloses the word pieces by the class and separation tokens.
#[derive(Debug)]
pub(crate) struct PostTokenizer {
    pub(crate) cls_token: SmallString,
    pub(crate) sep_token: SmallString,
}

/// The potential errors of the post-tokenizer.
#[derive(Debug, Display, Error)]
pub enum PostTokenizerError {
    /// Missing the class token in the vocabulary
    ClsToken,
    /// Missing the separation token in the vocabulary
    SepToken,
}

impl PostTokenizer {
    /// The number of tokens added by the post-tokenizer.
    pub(crate) const ADDED_TOKENS: usize = 2;

    /// Creates a post-tokenizer.
    pub(crate) fn new(cls: impl AsRef<str>, sep: impl AsRef<str>) -> Self {
        Self {
            cls_token: cls.as_ref().into(),
            sep_token: sep.as_ref().into(),
        }
    }

    /// Validates itself.
    pub(crate) fn validate<N>(self, vocab: &Vocabulary<N>) -> Result<Self, PostTokenizerError> {
        if !vocab.contains(self.cls_token.as_str()) {
            Err(PostTokenizerError::ClsToken)
        } else if !vocab.contains(self.sep_token.as_str()) {
            Err(PostTokenizerError::SepToken)
        } else {
            Ok(self)
        }
    }

    /// Post-tokenizes the word pieces.
    pub(crate) fn post_tokenize(&self, tokens: Vec<String>) -> TokenSequence {
        once(self.cls_token.to_string())
            .chain(tokens)
            .chain(once(self.sep_token.to_string()))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{hello_tokens, tokens};

    fn post_tokenizer() -> PostTokenizer {
        PostTokenizer::new("[CLS]", "[SEP]")
    }

    #[test]
    fn test_validate() {
        let vocab = Vocabulary::new(hello_tokens(), 10).unwrap();
        assert!(post_tokenizer().validate(&vocab).is_ok());

        let vocab = Vocabulary::new(tokens(&["[SEP]"]), 10).unwrap();
        assert!(matches!(
            post_tokenizer().validate(&vocab).unwrap_err(),
            PostTokenizerError::ClsToken,
        ));

        let vocab = Vocabulary::new(tokens(&["[CLS]"]), 10).unwrap();
        assert!(matches!(
            post_tokenizer().validate(&vocab).unwrap_err(),
            PostTokenizerError::SepToken,
        ));
    }

    #[test]
    fn test_post_tokenize() {
        let sequence = post_tokenizer().post_tokenize(vec!["hello".into(), "##lo".into()]);
        assert_eq!(sequence.tokens(), ["[CLS]", "hello", "##lo", "[SEP]"]);
    }

    #[test]
    fn test_post_tokenize_empty() {
        let sequence = post_tokenizer().post_tokenize(vec![]);
        assert_eq!(sequence.tokens(), ["[CLS]", "[SEP]"]);
    }
}
