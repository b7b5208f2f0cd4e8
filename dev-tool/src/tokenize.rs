use std::path::PathBuf;

use anyhow::{Context, Error};
use bert_tokenizer::{Builder, Tokenizer};
use log::debug;
use structopt::StructOpt;

use crate::exit_code::NO_ERROR;

/// The tokenizer settings shared by the commands.
#[derive(StructOpt, Debug)]
pub struct TokenizerArgs {
    /// The file with the word piece vocabulary.
    #[structopt(long)]
    pub vocab: PathBuf,

    /// The maximum sequence length, including the class and separation tokens.
    #[structopt(long, default_value = "64")]
    pub max_sequence_length: usize,

    /// Keeps the casing of the sequences.
    #[structopt(long)]
    pub no_lowercase: bool,
}

impl TokenizerArgs {
    pub fn build(&self) -> Result<Tokenizer<i64>, Error> {
        debug!("loading vocabulary from {}", self.vocab.display());
        Builder::from_file(&self.vocab)
            .context("Loading the vocabulary failed.")?
            .with_lowercase(!self.no_lowercase)
            .with_max_sequence_length(self.max_sequence_length)
            .build()
            .context("Building the tokenizer failed.")
    }
}

/// Tokenize sequences and print one line of tokens per sequence.
#[derive(StructOpt, Debug)]
pub struct TokenizeCmd {
    #[structopt(flatten)]
    pub tokenizer: TokenizerArgs,

    /// The sequences to tokenize.
    #[structopt(required = true)]
    pub sequences: Vec<String>,
}

impl TokenizeCmd {
    pub fn run(self) -> Result<i32, Error> {
        for tokens in self.tokenize()? {
            println!("{}", tokens.join(" "));
        }

        Ok(NO_ERROR)
    }

    fn tokenize(&self) -> Result<Vec<Vec<String>>, Error> {
        let tokenizer = self.tokenizer.build()?;
        Ok(self
            .sequences
            .iter()
            .map(|sequence| tokenizer.tokenize(sequence).into_inner())
            .collect())
    }
}
