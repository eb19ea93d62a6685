use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use crate::error::CheckError;
use crate::terraform::ExpectedVersion;
use crate::terraform::version::read_declarations;

pub const DEFAULT_PATTERN: &str = "terraform/projects/*/main.tf";

/// Outcome of a single check run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub expected: ExpectedVersion,
    pub files_scanned: usize,
    /// Out-of-date files, each listed once, in scan order.
    pub outdated: Vec<PathBuf>,
}

impl Report {
    pub fn is_up_to_date(&self) -> bool {
        self.outdated.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct VersionChecker {
    root: PathBuf,
    pattern: String,
    expected: ExpectedVersion,
}

impl VersionChecker {
    pub fn new(expected: ExpectedVersion) -> Self {
        Self {
            root: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
            expected,
        }
    }

    /// Directory the pattern is resolved against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn check(&self) -> Result<Report, CheckError> {
        let full_pattern = self.full_pattern()?;
        let options = glob::MatchOptions {
            require_literal_leading_dot: true,
            ..Default::default()
        };

        tracing::debug!(pattern = %full_pattern, expected = %self.expected, "scanning");

        // Appended per file; every scanned file contributes to the report.
        let mut actual: Vec<PathBuf> = Vec::new();
        let mut up_to_date: Vec<PathBuf> = Vec::new();
        let mut files_scanned = 0;

        // glob yields paths in alphabetical order
        for entry in glob::glob_with(&full_pattern, options)? {
            let path = entry?;
            if path.is_dir() {
                tracing::debug!(path = %path.display(), "skipping directory");
                continue;
            }

            let declarations = read_declarations(&path)?;
            files_scanned += 1;

            let shown = self.display_path(&path);
            if declarations.is_empty() {
                tracing::debug!(path = %shown.display(), "no required_version declaration");
            }

            for declaration in &declarations {
                let current = declaration.is_up_to_date(&self.expected);
                tracing::debug!(
                    path = %shown.display(),
                    line = declaration.line_number,
                    declared = declaration.value.as_deref().unwrap_or("<unparsed>"),
                    current,
                    "found declaration"
                );
                actual.push(shown.clone());
                if current {
                    up_to_date.push(shown.clone());
                }
            }
        }

        let outdated = difference(&actual, &up_to_date);

        tracing::info!(
            files = files_scanned,
            declarations = actual.len(),
            outdated = outdated.len(),
            "check complete"
        );

        Ok(Report {
            expected: self.expected.clone(),
            files_scanned,
            outdated,
        })
    }

    /// Root is escaped so its own `[`, `*` or `?` match literally.
    fn full_pattern(&self) -> Result<String, CheckError> {
        let root = self.root.to_str().ok_or_else(|| {
            CheckError::Pattern(format!("non UTF-8 root: {}", self.root.display()))
        })?;
        let full = PathBuf::from(glob::Pattern::escape(root)).join(&self.pattern);
        full.to_str()
            .map(str::to_string)
            .ok_or_else(|| CheckError::Pattern(format!("non UTF-8 pattern: {}", self.pattern)))
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Items of `actual` absent from `up_to_date`, first occurrence only, order kept.
///
/// An item present in `up_to_date` is dropped however many times it occurs in either list.
pub fn difference<T>(actual: &[T], up_to_date: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let excluded: HashSet<&T> = up_to_date.iter().collect();
    let mut seen: HashSet<&T> = HashSet::new();

    actual
        .iter()
        .filter(|item| !excluded.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}
