//! provider-version-check - Terraform required_version linter
//!
//! Scans Terraform project files and reports the ones whose `required_version`
//! declaration is not pinned to the expected Terraform version.

pub mod checker;
pub mod cli;
pub mod error;
pub mod output;
pub mod terraform;

pub use checker::{DEFAULT_PATTERN, Report, VersionChecker};
pub use error::CheckError;
pub use terraform::{Declaration, ExpectedVersion};
