use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use provider_version_check::cli::Cli;
use provider_version_check::{ExpectedVersion, Report, VersionChecker, output};

const EXIT_OUTDATED: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    if let Err(err) = color_eyre::install() {
        eprintln!("Error: {:?}", err);
        return ExitCode::from(EXIT_FAILURE);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(report) => {
            println!("{}", output::summary(&report));
            if report.is_up_to_date() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_OUTDATED)
            }
        }
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<Report> {
    let expected = ExpectedVersion::parse(&cli.terraform_version)?;

    let report = VersionChecker::new(expected)
        .with_root(&cli.root)
        .with_pattern(cli.pattern)
        .check()
        .wrap_err_with(|| format!("version check under {} failed", cli.root.display()))?;

    Ok(report)
}
