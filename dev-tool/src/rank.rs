use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Error};
use bert_classifier::{rank, LabelScore, Labels};
use structopt::StructOpt;

use crate::exit_code::NO_ERROR;

/// Rank labels by scores and print the ranking as JSON.
#[derive(StructOpt, Debug)]
pub struct RankCmd {
    /// The file with the `index,name` labels.
    #[structopt(long)]
    pub labels: PathBuf,

    /// The comma separated scores, aligned with the label indices.
    #[structopt(long, required = true, use_delimiter = true, allow_hyphen_values = true)]
    pub scores: Vec<f32>,

    #[structopt(long)]
    pub pretty: bool,
}

impl RankCmd {
    pub fn run(self) -> Result<i32, Error> {
        let result = self.rank()?;

        let serialized = if self.pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };

        println!("{}", serialized);

        Ok(NO_ERROR)
    }

    fn rank(&self) -> Result<Vec<LabelScore>, Error> {
        let file = File::open(&self.labels)
            .with_context(|| format!("Opening {} failed.", self.labels.display()))?;
        let labels = Labels::parse(BufReader::new(file)).context("Parsing the labels failed.")?;

        rank(&self.scores, &labels).context("Ranking the scores failed.")
    }
}

#[cfg(test)]
mod tests {
    use test_utils::taxi::labels;

    use super::*;

    fn cmd(scores: &str) -> RankCmd {
        let labels = labels().unwrap();
        let args = ["rank", "--labels", labels.to_str().unwrap(), "--scores", scores];
        RankCmd::from_iter_safe(&args).unwrap()
    }

    #[test]
    fn test_rank() {
        let ranked = cmd("0.1,0.2,0.6,0.1").rank().unwrap();
        assert_eq!(
            serde_json::to_string(&ranked).unwrap(),
            concat!(
                r#"[{"label":"where_is_taxi","score":0.6},{"label":"cancel_taxi","score":0.2},"#,
                r#"{"label":"book_taxi","score":0.1},{"label":"taxi_price","score":0.1}]"#,
            ),
        );
    }

    #[test]
    fn test_rank_invalid_scores() {
        assert!(cmd("0.5,0.5").rank().is_err());
        assert!(cmd("-0.5,0.5,0.5,0.5").rank().is_err());
    }
}
