#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! A text classifier on top of the Bert tokenizer.
//!
//! The classifier tokenizes and encodes a sequence, hands the resulting [`Features`] to a
//! [`Scorer`] and ranks the labels by the scores. The scoring engine itself, like a Bert model
//! with a classification head, is injected and not part of this crate.
//!
//! ```no_run
//! use bert_classifier::{Builder, Features};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = Builder::from_files("vocab.txt", "labels.txt")?
//!         .with_lowercase(true)
//!         .with_max_sequence_length(64)
//!         .build(|features: &Features| -> Result<Vec<f32>, anyhow::Error> {
//!             Ok(vec![1. / 4.; features.batch_size() * 4])
//!         })?;
//!
//!     for label_score in classifier.classify("Where is my taxi?")? {
//!         println!("{}: {}", label_score.label(), label_score.score());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod classifier;
mod features;
mod labels;
mod ranking;
mod scorer;

pub use crate::{
    builder::{Builder, BuilderError},
    classifier::{Classifier, ClassifierError},
    features::{AttentionMasks, Features, LabelIds, TokenIds, TypeIds},
    labels::{Labels, LabelsError},
    ranking::{rank, LabelScore, RankingError},
    scorer::Scorer,
};
