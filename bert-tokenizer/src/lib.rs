#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! A Bert tokenizer which converts sequences into fixed-width features.
//!
//! The tokenizer is based on a word piece vocabulary and consists of a normalizer, a
//! pre-tokenizer, a word piece model, a truncation strategy and a post-tokenizer. The resulting
//! token sequences are mapped to features by the [`FeatureEncoder`]. The features can be of any
//! numerical data type which implements [`Num`]` + `[`FromPrimitive`]` + `[`Copy`].
//!
//! The normalizer is configurable by:
//! - Lowercases characters.
//!
//! The pre-tokenizer is not configurable. It isolates punctuation, which is every non-ascii
//! character and the ascii symbols, and splits the sequence into words on spaces.
//!
//! The word piece model is configurable by:
//! - The unknown token.
//! - The continuing subword prefix.
//! - The maximum number of characters per word.
//!
//! The post-tokenizer is configurable by:
//! - The class token.
//! - The separation token.
//!
//! The truncation and the width of the features are given by the maximum sequence length.
//!
//! ```no_run
//! use bert_tokenizer::Builder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokenizer = Builder::<i64>::from_file("vocab.txt")?
//!         .with_lowercase(true)
//!         .with_model("[UNK]", "##", 30)
//!         .with_post_tokenizer("[CLS]", "[SEP]")
//!         .with_max_sequence_length(64)
//!         .build()?;
//!
//!     let tokens = tokenizer.tokenize("Where is my taxi?");
//!     let features = tokenizer.encode("Where is my taxi?")?;
//!     assert_eq!(features.input_ids().len(), 64);
//!
//!     Ok(())
//! }
//! ```
//!
//! [`Num`]: num_traits::Num
//! [`FromPrimitive`]: num_traits::FromPrimitive

mod builder;
mod encoding;
mod model;
mod normalizer;
mod post_tokenizer;
mod pre_tokenizer;
mod sequence;
mod tokenizer;
mod vocabulary;

pub use crate::{
    builder::{Builder, BuilderError},
    encoding::{EncodingError, FeatureEncoder, FeatureRecord},
    model::ModelError,
    post_tokenizer::PostTokenizerError,
    sequence::TokenSequence,
    tokenizer::Tokenizer,
    vocabulary::{Vocabulary, VocabularyError},
};

/// A stack allocated string with a maximum length of eight bytes.
type SmallString = smallstr::SmallString<[u8; 8]>;
