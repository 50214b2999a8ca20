use std::fmt;

use crate::error::{GenerateError, Result};

/// A sub-project name, used verbatim in headings and badge URLs.
///
/// Only emptiness is checked. Identifiers come from a trusted, fixed list, so
/// they are expected to already be URL-safe and Markdown-safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId(String);

impl ProjectId {
    /// `index` is the identifier's position in the project list, for errors.
    pub fn new(index: usize, name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(GenerateError::EmptyProject { index });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a list of names, preserving order and duplicates.
pub fn parse_projects<S: AsRef<str>>(names: &[S]) -> Result<Vec<ProjectId>> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| ProjectId::new(index, name.as_ref()))
        .collect()
}
