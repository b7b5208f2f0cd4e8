use std::{
    collections::BTreeMap,
    io::{BufRead, Error as IoError},
    num::ParseIntError,
};

use displaydoc::Display;
use serde::Serialize;
use thiserror::Error;

/// The labels of a classifier.
///
/// The labels are indexed contiguously from zero, the index of a label is the position of its
/// score in the output of a scorer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Labels(Vec<String>);

/// The potential errors of the labels.
#[derive(Debug, Display, Error)]
pub enum LabelsError {
    /// Failed to read the labels: {0}
    Read(#[from] IoError),
    /// Invalid label index in line {line}: {source}
    Index { line: usize, source: ParseIntError },
    /// Missing label name in line {line}
    Name { line: usize },
    /// The label index {0} is a duplicate
    DuplicateIndex(usize),
    /// The label indices must be contiguous from zero, missing index {0}
    Gap(usize),
}

impl Labels {
    /// Creates the labels from an index to name mapping.
    ///
    /// # Errors
    /// Fails if an index is duplicated or if the indices are not contiguous from zero.
    pub fn new(labels: impl IntoIterator<Item = (usize, String)>) -> Result<Self, LabelsError> {
        let mut indexed = BTreeMap::new();
        for (index, label) in labels {
            if indexed.insert(index, label).is_some() {
                return Err(LabelsError::DuplicateIndex(index));
            }
        }

        indexed
            .into_iter()
            .enumerate()
            .map(|(expected, (index, label))| {
                if index == expected {
                    Ok(label)
                } else {
                    Err(LabelsError::Gap(expected))
                }
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }

    /// Parses the labels from `index,name` lines.
    ///
    /// Names are trimmed, further comma separated fields are ignored and so are blank lines.
    pub fn parse(labels: impl BufRead) -> Result<Self, LabelsError> {
        let mut indexed = Vec::new();
        for (line, label) in labels.lines().enumerate() {
            let label = label?;
            if label.trim().is_empty() {
                continue;
            }

            let mut fields = label.split(',');
            let (index, name) = match (fields.next(), fields.next().map(str::trim)) {
                (Some(index), Some(name)) if !name.is_empty() => (index, name),
                _ => return Err(LabelsError::Name { line }),
            };
            let index = index
                .parse::<usize>()
                .map_err(|source| LabelsError::Index { line, source })?;
            indexed.push((index, name.to_string()));
        }

        Self::new(indexed)
    }

    /// Gets the name of the label.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterates over the names of the labels in order of their indices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Gets the number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether there are no labels at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
