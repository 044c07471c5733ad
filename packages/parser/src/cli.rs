//! Command-line interface for the parser.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use crate::error::Result;
use crate::output::{save_result, OutputFormat};
use crate::parser::parse_analysis;
use crate::risk::Severity;
use crate::types::AnalysisResult;

/// Terminal wrap width for the summary paragraph.
const SUMMARY_WRAP_WIDTH: usize = 80;

/// Klauselcheck Parser - Convert AI contract analysis responses to structured clause records.
#[derive(Parser)]
#[command(name = "klauselcheck-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a raw analysis response file into structured clauses.
    Parse {
        /// Path to a text file containing the raw AI response
        input: PathBuf,

        /// Write the structured result to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format for --output
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            format,
        } => parse_command(&input, output.as_deref(), format),
    }
}

/// Execute the parse command.
fn parse_command(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    format: OutputFormat,
) -> Result<()> {
    let response_text = fs::read_to_string(input)?;

    let result = parse_analysis(&response_text)?;

    print_overview(&result);

    if let Some(path) = output {
        save_result(&result, format, path)?;
        println!();
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }

    Ok(())
}

/// Print a styled overview of the parse result.
fn print_overview(result: &AnalysisResult) {
    let counts = result.severity_counts();

    println!(
        "{} {} | {} {}",
        style("Klauseln:").bold(),
        result.clauses.len(),
        style("Gesamtrisiko:").bold(),
        styled_risk(result.overall_risk.as_str(), result.overall_risk.severity())
    );
    println!();

    for clause in &result.clauses {
        println!(
            "  [{}] {}",
            styled_risk(clause.risk.as_str(), clause.risk.severity()),
            clause.title
        );
    }

    println!();
    println!("{}", textwrap::fill(&result.summary, SUMMARY_WRAP_WIDTH));

    if counts.critical > 0 {
        println!();
        println!(
            "{}",
            style("Achtung: mindestens eine Klausel ist rechtlich unzulässig.")
                .red()
                .bold()
        );
    }
}

/// Color a risk label by its severity bucket.
fn styled_risk(label: &str, severity: Severity) -> console::StyledObject<&str> {
    match severity {
        Severity::Critical => style(label).red(),
        Severity::Questionable => style(label).yellow(),
        Severity::Compliant => style(label).green(),
    }
}
