use std::process::exit;

use anyhow::Error;
use structopt::StructOpt;

use crate::exit_code::FATAL_ERROR;

mod encode;
mod exit_code;
mod rank;
mod tokenize;

/// Tooling for the developers of the Bert tokenizer and classifier.
///
/// Set `RUST_LOG=debug` to see what is going on.
#[derive(StructOpt, Debug)]
enum CommandArgs {
    Tokenize(tokenize::TokenizeCmd),
    Encode(encode::EncodeCmd),
    Rank(rank::RankCmd),
}

impl CommandArgs {
    fn run(self) -> Result<i32, Error> {
        match self {
            CommandArgs::Tokenize(cmd) => cmd.run(),
            CommandArgs::Encode(cmd) => cmd.run(),
            CommandArgs::Rank(cmd) => cmd.run(),
        }
    }
}

fn main() {
    env_logger::init();

    let exit_code = match CommandArgs::from_args().run() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{:?}", error);
            FATAL_ERROR
        }
    };

    exit(exit_code);
}
