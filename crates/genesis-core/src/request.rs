//! The user's request: what to generate and where

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Immutable description of the project to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
    description: String,
    output_dir: PathBuf,
}

impl ProjectRequest {
    /// Build a request, normalizing and validating the project name
    pub fn new(
        name: &str,
        description: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            name: normalize_name(name)?,
            description: description.into().trim().to_string(),
            output_dir: output_dir.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Directory the scaffolder runs in
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Directory of the generated project
    pub fn project_dir(&self) -> PathBuf {
        self.output_dir.join(&self.name)
    }
}

/// Lowercase the name and join whitespace-separated words with `-`, then
/// check that the result is a single usable path segment
pub fn normalize_name(raw: &str) -> Result<String> {
    let name = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    let invalid = |reason| Error::InvalidName {
        name: raw.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name must not be a relative directory marker"));
    }
    if name.starts_with('-') {
        return Err(invalid("name must not start with `-`"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("name must not contain path separators"));
    }
    if name.chars().any(char::is_control) {
        return Err(invalid("name must not contain control characters"));
    }

    Ok(name)
}
