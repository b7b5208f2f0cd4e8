use std::cmp::Ordering;

use displaydoc::Display;
use serde::Serialize;
use thiserror::Error;

use crate::labels::Labels;

/// A label and its score.
///
/// Equality takes the label and the score into account, the ranking only the score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelScore {
    label: String,
    score: f32,
}

/// The potential errors of the ranking.
#[derive(Debug, Display, Error)]
pub enum RankingError {
    /// The number of scores {scores} doesn't match the number of labels {labels}
    DimensionMismatch { scores: usize, labels: usize },
    /// The score {score} of the label `{label}` is outside of the unit interval
    ScoreOutOfRange { label: String, score: f32 },
}

impl LabelScore {
    /// Creates a labelled score.
    ///
    /// # Errors
    /// Fails if the score is outside of `[0, 1]`, the score is never clamped.
    pub fn new(label: impl Into<String>, score: f32) -> Result<Self, RankingError> {
        let label = label.into();
        if (0. ..=1.).contains(&score) {
            Ok(Self { label, score })
        } else {
            Err(RankingError::ScoreOutOfRange { label, score })
        }
    }

    /// Gets the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gets the score.
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Compares by descending score.
    pub fn cmp_by_score(&self, other: &Self) -> Ordering {
        // scores are never NaN
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

/// Ranks the labels by their scores.
///
/// The scores are aligned with the label indices. The ranking is descending and keeps the order
/// of the label indices for equal scores. The scores don't need to sum up to one.
pub fn rank(scores: &[f32], labels: &Labels) -> Result<Vec<LabelScore>, RankingError> {
    if scores.len() != labels.len() {
        return Err(RankingError::DimensionMismatch {
            scores: scores.len(),
            labels: labels.len(),
        });
    }

    let mut ranked = labels
        .iter()
        .zip(scores)
        .map(|(label, score)| LabelScore::new(label, *score))
        .collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by(LabelScore::cmp_by_score);

    Ok(ranked)
}
