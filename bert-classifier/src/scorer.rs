use anyhow::Error;
#[cfg(test)]
use mockall::automock;

use crate::features::Features;

/// A scoring engine, like a Bert model with a classification head.
///
/// The engine itself is not part of this crate, it is injected into the [`Classifier`].
///
/// [`Classifier`]: crate::Classifier
#[cfg_attr(test, automock)]
pub trait Scorer {
    /// Scores the features.
    ///
    /// Returns one score per label, aligned with the label indices.
    fn score(&self, features: &Features) -> Result<Vec<f32>, Error>;
}

impl<F> Scorer for F
where
    F: Fn(&Features) -> Result<Vec<f32>, Error>,
{
    fn score(&self, features: &Features) -> Result<Vec<f32>, Error> {
        self(features)
    }
}
