//! Command-line front end: build report specs and render them to stdout.

pub mod demo;
pub mod error;

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use reportspec_core::JsonRenderer;
use reportspec_core::ReportRenderer;
use reportspec_core::ReportRequest;
use reportspec_core::ReportSpec;
use reportspec_core::TextRenderer;
use reportspec_core::presets::Preset;
use tracing::info;

pub use error::CliError;
pub use error::Result;

/// Build and render report specifications
#[derive(Parser, Debug)]
#[command(name = "reportspec")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build and render the bundled sample reports
    Demo {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Build and render a report described in a TOML file
    Render {
        /// Path to the report request
        file: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Start from a preset and configure the rest with flags
    Preset(PresetArgs),
}

#[derive(Args, Debug)]
pub struct PresetArgs {
    /// Preset to start from
    #[arg(value_enum)]
    pub preset: PresetCliArg,

    #[arg(long)]
    pub title: String,

    /// First day of the period (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Last day of the period (YYYY-MM-DD)
    #[arg(long)]
    pub to: NaiveDate,

    /// Column to include; repeat for more
    #[arg(long = "column")]
    pub columns: Vec<String>,

    /// Filter expression; repeat for more
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Chart type
    #[arg(long)]
    pub charts: Option<String>,

    #[arg(long)]
    pub summary: bool,

    #[arg(long)]
    pub sort_by: Option<String>,

    #[arg(long)]
    pub group_by: Option<String>,

    #[arg(long)]
    pub totals: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Presets as they appear on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum PresetCliArg {
    StandardPdf,
    StandardSpreadsheet,
}

impl From<PresetCliArg> for Preset {
    fn from(value: PresetCliArg) -> Self {
        match value {
            PresetCliArg::StandardPdf => Preset::StandardPdf,
            PresetCliArg::StandardSpreadsheet => Preset::StandardSpreadsheet,
        }
    }
}

impl PresetArgs {
    pub fn build(&self) -> reportspec_core::Result<ReportSpec> {
        let mut builder = Preset::from(self.preset)
            .start(&self.title, self.from, self.to)?
            .add_columns(self.columns.iter().cloned())
            .add_filters(self.filters.iter().cloned());

        if let Some(chart_type) = &self.charts {
            builder = builder.with_charts(chart_type.clone());
        }
        if self.summary {
            builder = builder.with_summary();
        }
        if let Some(field) = &self.sort_by {
            builder = builder.sort_by(field.clone());
        }
        if let Some(field) = &self.group_by {
            builder = builder.group_by(field.clone());
        }
        if self.totals {
            builder = builder.with_totals();
        }
        builder.build()
    }
}

fn renderer(json: bool) -> Box<dyn ReportRenderer> {
    if json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TextRenderer)
    }
}

fn render_all(specs: &[ReportSpec], json: bool, out: &mut dyn Write) -> Result<()> {
    let renderer = renderer(json);
    for (index, spec) in specs.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        info!(title = spec.title(), "rendering report");
        spec.render(renderer.as_ref(), out)?;
    }
    Ok(())
}

/// Execute the parsed command, writing rendered reports to `out`
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Demo { json } => {
            let reports = demo::demo_reports()?;
            render_all(&reports, *json, out)
        }
        Command::Render { file, json } => {
            let spec = ReportRequest::from_path(file)?.build()?;
            render_all(std::slice::from_ref(&spec), *json, out)
        }
        Command::Preset(args) => {
            let spec = args.build()?;
            render_all(std::slice::from_ref(&spec), args.json, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use reportspec_core::ReportError;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_parsing() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["reportspec", "-vv", "demo"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_demo_renders_three_reports() {
        let text = run_args(&["reportspec", "demo"]).unwrap();
        assert_eq!(text.matches("=== Report: ").count(), 3);
        assert_eq!(text.matches("Report generated successfully!").count(), 3);
        assert!(text.contains("=== Report: Quarterly Report ===\nFormat: SPREADSHEET\n"));
    }

    #[test]
    fn test_preset_command() {
        let text = run_args(&[
            "reportspec",
            "preset",
            "standard-spreadsheet",
            "--title",
            "Quarterly",
            "--from",
            "2024-01-01",
            "--to",
            "2024-03-31",
            "--column",
            "Seller",
            "--column",
            "Total",
            "--sort-by",
            "Total",
        ])
        .unwrap();

        assert_eq!(
            text,
            "=== Report: Quarterly ===\n\
             Format: SPREADSHEET\n\
             Period: 2024-01-01 to 2024-03-31\n\
             Columns: Seller, Total\n\
             Sorted by: Total\n\
             Report generated successfully!\n"
        );
    }

    #[test]
    fn test_preset_without_columns_fails() {
        let err = run_args(&[
            "reportspec",
            "preset",
            "standard-pdf",
            "--title",
            "Monthly",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            CliError::Report(ReportError::MissingField { field: "columns" })
        ));
    }

    #[test]
    fn test_bad_date_is_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "reportspec",
            "preset",
            "standard-pdf",
            "--title",
            "Monthly",
            "--from",
            "January",
            "--to",
            "2024-01-31",
        ]);
        assert!(result.is_err());
    }
}
