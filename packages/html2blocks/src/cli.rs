//! Command-line interface for the converter.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;

use crate::config::{ConvertOptions, ParseMode, DEFAULT_PARSE_MODE};
use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::output::{render, write_atomic, OutputFormat};

/// html2blocks - Convert HTML into block editor blocks.
///
/// Paragraphs, headings, lists and images become dedicated blocks; div,
/// section, article, body and html wrappers are flattened; every other
/// element is kept verbatim in an HTML block.
#[derive(Parser, Debug)]
#[command(name = "html2blocks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input HTML file (reads stdin when omitted and input is piped)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the result to stdout instead of saving
    #[arg(long)]
    pub stdout: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Namespace for block names (e.g., core gives core/paragraph)
    #[arg(long)]
    pub namespace: Option<String>,

    /// How the input is parsed
    #[arg(long, value_enum, default_value_t = DEFAULT_PARSE_MODE)]
    pub parse_mode: ParseMode,

    /// Attach a unique clientId to every block
    #[arg(long)]
    pub client_ids: bool,

    /// Fail when the HTML parser reports errors
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Build conversion options from the command-line flags.
    #[must_use]
    pub fn convert_options(&self) -> ConvertOptions {
        let options = ConvertOptions::new()
            .with_parse_mode(self.parse_mode)
            .with_client_ids(self.client_ids)
            .with_strict(self.strict);
        match &self.namespace {
            Some(namespace) => options.with_namespace(namespace.clone()),
            None => options,
        }
    }
}

/// Where the rendered blocks go.
enum Destination<'a> {
    Stdout,
    File(&'a Path),
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(&Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    // Validate everything before touching input
    let destination = if cli.stdout {
        Destination::Stdout
    } else if let Some(path) = cli.output.as_deref() {
        Destination::File(path)
    } else {
        return Err(ConvertError::NoOutput);
    };
    let converter = Converter::new(cli.convert_options())?;

    let html = read_input(cli.input.as_deref())?;
    let conversion = converter.convert(&html)?;
    let content = render(&conversion.blocks, cli.format)?;

    match destination {
        Destination::Stdout => println!("{content}"),
        Destination::File(path) => {
            write_atomic(path, &content)?;

            println!(
                "{} {}",
                style("Converted HTML to blocks:").green().bold(),
                path.display()
            );
            println!("  {}", generated_summary(conversion.blocks.len()));
            if !conversion.warnings.is_empty() {
                println!(
                    "  Parser warnings: {}",
                    style(conversion.warnings.len()).yellow().bold()
                );
            }
        }
    }

    Ok(())
}

/// Summary line for a finished file conversion.
fn generated_summary(count: usize) -> String {
    format!("Generated {count} block(s)")
}

/// Read HTML from the input file, or from stdin when it is piped.
fn read_input(input: Option<&Path>) -> Result<String> {
    if let Some(path) = input {
        if !path.exists() {
            return Err(ConvertError::InputNotFound(path.to_path_buf()));
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(ConvertError::NoInput);
    }

    let mut html = String::new();
    stdin.lock().read_to_string(&mut html)?;
    Ok(html)
}
