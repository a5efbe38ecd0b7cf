//! Report CLI commands

use std::path::PathBuf;

use clap::{value_parser, Subcommand};

use crate::config::{ReportFormat, Settings};
use crate::error::VacationResult;
use crate::reports::ApprovedPeriodReport;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Export the approved vacations that start in a month
    Approved {
        /// Month (1-12)
        #[arg(short, long, value_parser = value_parser!(u32).range(1..=12))]
        month: u32,
        /// Year (e.g. 2025)
        #[arg(short, long)]
        year: i32,
        /// Output format (csv, json, yaml; default from settings)
        #[arg(short, long)]
        format: Option<ReportFormat>,
        /// Output file (default: reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the report instead of writing a file
        #[arg(long)]
        print: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> VacationResult<()> {
    match cmd {
        ReportCommands::Approved {
            month,
            year,
            format,
            output,
            print,
        } => {
            let report = ApprovedPeriodReport::generate(
                storage.vacations.all(),
                storage.employees.all(),
                month,
                year,
            )?;

            if print || report.is_empty() {
                print!("{}", report.format_terminal());
                return Ok(());
            }

            let format = format.unwrap_or(settings.default_report_format);
            let output_path = output.unwrap_or_else(|| {
                storage
                    .paths()
                    .reports_dir()
                    .join(report.default_file_name(&settings.report_file_prefix, format))
            });

            report.write_to_file(format, &output_path)?;

            println!(
                "Report generated successfully: {} ({} request(s))",
                output_path.display(),
                report.rows.len()
            );
        }
    }

    Ok(())
}
