use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CheckError;

/// Terraform version every project is pinned to unless overridden.
pub const DEFAULT_TERRAFORM_VERSION: &str = "0.10.6";

/// Substring that marks a line as a version declaration.
pub const DECLARATION_KEY: &str = "required_version =";

// Looser than DECLARATION_KEY on purpose: only lines already selected by the key reach it.
static DECLARED_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"required_version\s*=\s*"([^"]*)""#).unwrap());

/// The pinned Terraform version, stored bare (`0.10.6`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedVersion {
    version: String,
}

impl ExpectedVersion {
    /// Accepts `0.10.6`, `= 0.10.6` or `"= 0.10.6"`.
    pub fn parse(input: &str) -> Result<Self, CheckError> {
        let trimmed = input.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed)
            .trim();
        let bare = unquoted.strip_prefix('=').unwrap_or(unquoted).trim();

        if bare.is_empty() {
            return Err(CheckError::InvalidVersion(format!(
                "no version in '{}'",
                input
            )));
        }
        if bare.contains(|c: char| c.is_whitespace() || "\"<>~!,".contains(c)) {
            return Err(CheckError::InvalidVersion(format!(
                "'{}' is not a single pinned version",
                input
            )));
        }

        Ok(Self {
            version: bare.to_string(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Constraint form as written in HCL: `= 0.10.6`.
    pub fn constraint(&self) -> String {
        format!("= {}", self.version)
    }

    /// Full declaration an up-to-date line must contain.
    pub fn declaration(&self) -> String {
        format!("{} \"{}\"", DECLARATION_KEY, self.constraint())
    }
}

impl Default for ExpectedVersion {
    fn default() -> Self {
        Self {
            version: DEFAULT_TERRAFORM_VERSION.to_string(),
        }
    }
}

impl fmt::Display for ExpectedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

/// One `required_version =` line found in a project file.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub path: PathBuf,
    /// 1-based
    pub line_number: usize,
    pub line: String,
    /// Quoted constraint, when the line has one.
    pub value: Option<String>,
}

impl Declaration {
    pub fn is_up_to_date(&self, expected: &ExpectedVersion) -> bool {
        self.line.contains(&expected.declaration())
    }
}

pub fn scan_declarations(path: &Path, contents: &str) -> Vec<Declaration> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(DECLARATION_KEY))
        .map(|(idx, line)| Declaration {
            path: path.to_path_buf(),
            line_number: idx + 1,
            line: line.to_string(),
            value: DECLARED_VALUE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
        })
        .collect()
}

pub fn read_declarations(path: &Path) -> Result<Vec<Declaration>, CheckError> {
    let bytes = fs::read(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = String::from_utf8_lossy(&bytes);
    Ok(scan_declarations(path, &contents))
}
