// pdfvocab - split PDFs into page text and pull vocabulary out of the pages
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use pdfvocab::commands;
use pdfvocab::config::Config;
use pdfvocab::logging::init_tracing;
use pdfvocab::pdf_extraction::{open_source, PdfSource};
use pdfvocab::vocabulary::VocabularyExtractor;

#[derive(Parser, Debug)]
#[command(name = "pdfvocab")]
#[command(version, about = "PDF page splitting and vocabulary extraction", long_about = None)]
struct Cli {
    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show page count, encryption and metadata of a PDF
    Info {
        /// Path to PDF file
        file: PathBuf,
    },

    /// Extract text from one page or the whole PDF
    ExtractText {
        /// Path to PDF file
        file: PathBuf,

        /// Specific page number (all pages if omitted)
        page: Option<u32>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split a PDF into one text file per page
    Split {
        /// Path to PDF file
        file: PathBuf,

        /// Output directory for the page files
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Pages to extract (e.g. '1,3,5-8,10'), all pages if omitted
        #[arg(long)]
        pages: Option<String>,

        /// Reject malformed page tokens instead of ignoring them
        #[arg(long)]
        strict: bool,
    },

    /// Print selected pages from a directory of split text files
    ReadPages {
        /// Directory containing split text files
        dir: PathBuf,

        /// Pages to read (e.g. '1,3,5-8,10')
        pages: String,

        /// Reject malformed page tokens instead of ignoring them
        #[arg(long)]
        strict: bool,
    },

    /// Extract `word /pronunciation/` entries into a JSON report
    Vocab {
        /// Split text directory or PDF file
        source: PathBuf,

        /// Pages to scan (e.g. '1,3,5-8,10'), all pages if omitted
        #[arg(long)]
        pages: Option<String>,

        /// Custom pattern; group 1 is the word, group 2 the pronunciation
        #[arg(long)]
        pattern: Option<String>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject malformed page tokens instead of ignoring them
        #[arg(long)]
        strict: bool,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Info { file } => show_info(&file),
        Commands::ExtractText { file, page, output } => {
            extract_text(&file, page, output.as_deref())
        }
        Commands::Split {
            file,
            output_dir,
            pages,
            strict,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| config.split_dir.clone());
            split(&file, &output_dir, pages.as_deref(), strict, &config)
        }
        Commands::ReadPages { dir, pages, strict } => read_pages(&dir, &pages, strict, &config),
        Commands::Vocab {
            source,
            pages,
            pattern,
            output,
            strict,
            compact,
        } => vocab(
            &source,
            pages.as_deref(),
            pattern.or_else(|| config.pattern.clone()),
            output.as_deref(),
            strict,
            !compact && config.pretty_json,
            &config,
        ),
    }
}

fn show_info(file: &Path) -> Result<()> {
    let source = PdfSource::open(file)
        .with_context(|| format!("Error reading PDF: {}", file.display()))?;
    print!("{source}");
    Ok(())
}

fn extract_text(file: &Path, page: Option<u32>, output: Option<&Path>) -> Result<()> {
    let source = PdfSource::open(file)
        .with_context(|| format!("Error extracting text: {}", file.display()))?;
    let text = commands::extract_text(&source, page)?;

    match output {
        Some(output) => {
            fs::write(output, &text)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Text extracted to {}", output.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn split(
    file: &Path,
    output_dir: &Path,
    pages: Option<&str>,
    strict: bool,
    config: &Config,
) -> Result<()> {
    let source = PdfSource::open(file)
        .with_context(|| format!("Error splitting PDF: {}", file.display()))?;
    let parser = config.range_parser(strict);

    let summary = commands::split_pdf(&source, output_dir, pages, &parser)
        .with_context(|| format!("Error splitting PDF: {}", file.display()))?;

    for (path, error) in &summary.failed {
        eprintln!("Error writing {}: {}", path.display(), error);
    }
    println!(
        "Split {} pages into text files in {}",
        summary.written.len(),
        output_dir.display()
    );
    Ok(())
}

fn read_pages(dir: &Path, pages: &str, strict: bool, config: &Config) -> Result<()> {
    let parser = config.range_parser(strict);
    let views = commands::read_pages(dir, pages, &parser).context("Error reading pages")?;

    for view in &views {
        if let Some(rendered) = view.render() {
            println!("{rendered}");
        }
        if let Some(warning) = view.warning() {
            eprintln!("{warning}");
        }
    }
    Ok(())
}

fn vocab(
    source_path: &Path,
    pages: Option<&str>,
    pattern: Option<String>,
    output: Option<&Path>,
    strict: bool,
    pretty: bool,
    config: &Config,
) -> Result<()> {
    let extractor = match pattern {
        Some(pattern) => VocabularyExtractor::with_pattern(&pattern)?,
        None => VocabularyExtractor::default(),
    };
    let parser = config.range_parser(strict);

    let source = open_source(source_path)
        .with_context(|| format!("Error opening {}", source_path.display()))?;
    let report = commands::build_vocabulary_report(source.as_ref(), pages, &parser, &extractor)?;
    let json = report.to_json(pretty)?;

    match output {
        Some(output) => {
            fs::write(output, json + "\n")
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "Found {} matches across {} pages, report written to {}",
                report.total_matches(),
                report.metadata.pages_found.len(),
                output.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
