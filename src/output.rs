use crate::checker::Report;

/// One-line summary printed on stdout.
pub fn summary(report: &Report) -> String {
    let version = report.expected.version();

    if report.is_up_to_date() {
        return format!("All Terraform projects are on Terraform version {}.", version);
    }

    let files = report
        .outdated
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let verb = if report.outdated.len() == 1 { "is" } else { "are" };

    format!("{} {} not on Terraform version {}.", files, verb, version)
}
