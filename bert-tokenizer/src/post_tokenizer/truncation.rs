use log::debug;

use crate::post_tokenizer::PostTokenizer;

/// A fixed-length truncation strategy.
///
/// Cuts off word pieces on the right such that the post-tokenized sequence doesn't exceed the
/// length. The cut may fall in the middle of a word.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Truncation {
    len: usize,
}

impl Truncation {
    /// Creates a fixed-length truncation strategy.
    ///
    /// The length includes the tokens added by the post-tokenizer.
    pub(crate) fn fixed(len: usize) -> Self {
        Self { len }
    }

    /// Truncates the word pieces.
    ///
    /// Only consumes as many word pieces as needed to decide whether any are cut off.
    pub(crate) fn truncate(&self, tokens: impl Iterator<Item = String>) -> Vec<String> {
        let len = self.len.saturating_sub(PostTokenizer::ADDED_TOKENS);
        let mut tokens = tokens.take(len + 1).collect::<Vec<_>>();
        if tokens.len() > len {
            debug!(
                "truncated the word pieces to the maximum sequence length {}",
                self.len,
            );
            tokens.truncate(len);
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(len: usize) -> impl Iterator<Item = String> {
        (0..len).map(|token| token.to_string())
    }

    #[test]
    fn test_truncate() {
        assert_eq!(Truncation::fixed(5).truncate(tokens(2)).len(), 2);
        assert_eq!(Truncation::fixed(5).truncate(tokens(3)).len(), 3);
        assert_eq!(Truncation::fixed(5).truncate(tokens(4)).len(), 3);
        assert_eq!(Truncation::fixed(5).truncate(tokens(100)), ["0", "1", "2"]);
    }

    #[test]
    fn test_truncate_minimal() {
        assert_eq!(Truncation::fixed(3).truncate(tokens(5)), ["0"]);
        assert!(Truncation::fixed(2).truncate(tokens(5)).is_empty());
    }

    #[test]
    fn test_truncate_lazy() {
        let mut consumed = 0;
        let tokens = tokens(usize::MAX).inspect(|_| consumed += 1);
        assert_eq!(Truncation::fixed(4).truncate(tokens).len(), 2);
        assert_eq!(consumed, 3);
    }
}
