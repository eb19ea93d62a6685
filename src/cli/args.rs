use std::path::PathBuf;

use clap::Parser;

use crate::checker::DEFAULT_PATTERN;
use crate::terraform::DEFAULT_TERRAFORM_VERSION;

/// Check that every Terraform project pins the expected required_version.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Repository root the pattern is resolved against
    #[arg(long, env = "TF_VERSION_CHECK_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Glob selecting the Terraform project files
    #[arg(long, env = "TF_VERSION_CHECK_PATTERN", default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Version every project must pin, e.g. 0.10.6 or "= 0.10.6"
    #[arg(
        long = "terraform-version",
        env = "TF_VERSION_CHECK_EXPECTED",
        default_value = DEFAULT_TERRAFORM_VERSION
    )]
    pub terraform_version: String,
}
