use std::slice::from_ref;

use bert_tokenizer::FeatureRecord;
use derive_more::{Deref, From};
use ndarray::{Array1, Array2};
use serde::Serialize;

/// The token ids of the encoded sequences.
#[derive(Clone, Debug, Deref, From, Serialize)]
pub struct TokenIds(pub Array2<i64>);

/// The attention masks of the encoded sequences.
#[derive(Clone, Debug, Deref, From, Serialize)]
pub struct AttentionMasks(pub Array2<i64>);

/// The type ids of the encoded sequences.
#[derive(Clone, Debug, Deref, From, Serialize)]
pub struct TypeIds(pub Array2<i64>);

/// The label ids of the encoded sequences.
#[derive(Clone, Debug, Deref, From, Serialize)]
pub struct LabelIds(pub Array1<i64>);

/// The encoded sequences in the shape of the scorer inputs.
///
/// The token ids, attention masks and type ids are of shape `(batch size, sequence length)` and
/// the label ids are of shape `(batch size,)`.
#[derive(Clone, Debug, Serialize)]
pub struct Features {
    pub token_ids: TokenIds,
    pub attention_masks: AttentionMasks,
    pub type_ids: TypeIds,
    pub label_ids: LabelIds,
}

impl Features {
    /// Creates the features for a batch of a single encoded sequence.
    pub fn from_record(record: &FeatureRecord<i64>) -> Self {
        Self::from_records(from_ref(record))
    }

    /// Creates the features for a batch of encoded sequences.
    ///
    /// The sequence length is the width of the widest record, narrower records are padded.
    pub fn from_records(records: &[FeatureRecord<i64>]) -> Self {
        let width = records.iter().map(FeatureRecord::len).max().unwrap_or_default();
        let shape = (records.len(), width);

        let token_ids = Array2::from_shape_fn(shape, |(i, j)| {
            records[i].input_ids().get(j).copied().unwrap_or(0)
        })
        .into();
        let attention_masks = Array2::from_shape_fn(shape, |(i, j)| {
            records[i].input_mask().get(j).copied().unwrap_or(0)
        })
        .into();
        let type_ids = Array2::from_shape_fn(shape, |(i, j)| {
            records[i].segment_ids().get(j).copied().unwrap_or(0)
        })
        .into();
        let label_ids = Array1::from_shape_fn(records.len(), |i| {
            records[i].label_ids().first().copied().unwrap_or(0)
        })
        .into();

        Self {
            token_ids,
            attention_masks,
            type_ids,
            label_ids,
        }
    }

    /// Gets the batch size.
    pub fn batch_size(&self) -> usize {
        self.token_ids.nrows()
    }

    /// Gets the sequence length.
    pub fn sequence_length(&self) -> usize {
        self.token_ids.ncols()
    }
}
