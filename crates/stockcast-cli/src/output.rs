use std::io::{self, Write};

use stockcast_core::{Outcome, RunReport};

use crate::cli::SummaryFormat;
use crate::error::CliError;

pub fn render(report: &RunReport, format: SummaryFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        SummaryFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{json}")?;
        }
        SummaryFormat::Text => write_text(&mut out, report)?,
    }

    out.flush()?;
    Ok(())
}

fn write_text(out: &mut impl Write, report: &RunReport) -> io::Result<()> {
    for file in &report.files {
        let status = match &file.outcome {
            Outcome::Persisted { output } => format!("written   {}", output.display()),
            Outcome::Skipped { reason } => format!("skipped   {reason}"),
            Outcome::Failed { kind, reason } => format!("failed    {kind:?}: {reason}"),
        };
        writeln!(out, "[{}] {} -> {status}", file.exchange, file.input.display())?;
    }

    writeln!(
        out,
        "{} files: {} written, {} skipped, {} failed ({} forecaster, run {})",
        report.files.len(),
        report.persisted(),
        report.skipped(),
        report.failed(),
        report.forecaster,
        report.run_stamp,
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use stockcast_core::FileOutcome;

    use super::*;

    #[test]
    fn text_summary_lists_files_and_totals() {
        let report = RunReport {
            forecaster: "fixed-rule",
            run_stamp: String::from("2024-01-01_00-00-00"),
            files: vec![FileOutcome {
                exchange: String::from("LSE"),
                input: PathBuf::from("data/LSE/GSK.csv"),
                outcome: Outcome::Skipped {
                    reason: String::from("series has 3 data points, at least 10 required"),
                },
            }],
        };

        let mut buffer = Vec::new();
        write_text(&mut buffer, &report).expect("write to vec");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.contains("[LSE] data/LSE/GSK.csv -> skipped"));
        assert!(text.contains("1 files: 0 written, 1 skipped, 0 failed"));
    }
}
