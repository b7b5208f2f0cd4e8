use std::{ops::Deref, slice::Iter};

/// A tokenized sequence.
///
/// The word pieces are enclosed by the class and separation tokens when created by the
/// [`Tokenizer`].
///
/// [`Tokenizer`]: crate::Tokenizer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    /// Gets the tokens.
    pub fn tokens(&self) -> &[String] {
        self.0.as_slice()
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> Iter<'_, String> {
        self.0.iter()
    }

    /// Unwraps the tokens.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for TokenSequence {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        self.tokens()
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
