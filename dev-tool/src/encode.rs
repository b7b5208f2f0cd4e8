use anyhow::{Context, Error};
use bert_tokenizer::FeatureEncoder;
use serde::Serialize;
use structopt::StructOpt;

use crate::{exit_code::NO_ERROR, tokenize::TokenizerArgs};

/// Encode sequences and print the feature records as JSON.
#[derive(StructOpt, Debug)]
pub struct EncodeCmd {
    #[structopt(flatten)]
    pub tokenizer: TokenizerArgs,

    #[structopt(long)]
    pub pretty: bool,

    /// The sequences to encode.
    #[structopt(required = true)]
    pub sequences: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize)]
struct EncodedSequence {
    tokens: Vec<String>,
    input_ids: Vec<i64>,
    input_mask: Vec<i64>,
    segment_ids: Vec<i64>,
    label_ids: Vec<i64>,
}

impl EncodeCmd {
    pub fn run(self) -> Result<i32, Error> {
        let result = self.encode()?;

        let serialized = if self.pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };

        println!("{}", serialized);

        Ok(NO_ERROR)
    }

    fn encode(&self) -> Result<Vec<EncodedSequence>, Error> {
        let tokenizer = self.tokenizer.build()?;

        self.sequences
            .iter()
            .map(|sequence| -> Result<_, Error> {
                let tokens = tokenizer.tokenize(sequence);
                let record = FeatureEncoder
                    .encode(&tokens, tokenizer.vocabulary())
                    .with_context(|| format!("Encoding {:?} failed.", sequence))?;

                Ok(EncodedSequence {
                    input_ids: record.input_ids().to_vec(),
                    input_mask: record.input_mask().to_vec(),
                    segment_ids: record.segment_ids().to_vec(),
                    label_ids: record.label_ids().to_vec(),
                    tokens: tokens.into_inner(),
                })
            })
            .collect()
    }
}
