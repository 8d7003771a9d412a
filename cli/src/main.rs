//! abnt CLI - ABNT document formatting tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use abnt::naming;
use abnt::{
    convert, Abnt, ExporterRegistry, Figure, FontFamily, FontSize, JsonFormat, LineSpacing,
    MarginPreset, RawOptions,
};

#[derive(Parser)]
#[command(name = "abnt")]
#[command(version)]
#[command(about = "Format documents to the ABNT academic style", long_about = None)]
struct Cli {
    /// Input Word document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a document and export it as HTML
    Format {
        /// Input Word document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Handle a JSON request and print the JSON response
    Request {
        /// Request body file
        #[arg(value_name = "JSON")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the composed document without exporting it
    Preview {
        /// Input Word document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Dump the document model as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// List the accepted option values
    Options,

    /// Show version information
    Version,
}

#[derive(Args, Default)]
struct FormatArgs {
    /// Font family ("Times New Roman" or "Arial")
    #[arg(long, env = "ABNT_FONT")]
    font: Option<String>,

    /// Font size ("12pt" or "10pt")
    #[arg(long, env = "ABNT_SIZE")]
    size: Option<String>,

    /// Line spacing ("1.0", "1.5" or "2.0")
    #[arg(long, env = "ABNT_SPACING")]
    spacing: Option<String>,

    /// Margin preset ("abnt" or "normal")
    #[arg(long, env = "ABNT_MARGINS")]
    margins: Option<String>,

    /// Disable automatic figure captions
    #[arg(long)]
    no_captions: bool,

    /// Disable the page-number marker
    #[arg(long)]
    no_page_numbers: bool,

    /// Disable the running header
    #[arg(long)]
    no_header: bool,

    /// Figure caption, in document order (repeatable)
    #[arg(long = "figure", value_name = "NAME")]
    figures: Vec<String>,

    /// Extracted body text file
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,
}

impl FormatArgs {
    fn raw_options(&self) -> RawOptions {
        RawOptions {
            font_family: self.font.clone(),
            font_size: self.size.clone(),
            line_spacing: self.spacing.clone(),
            margins: self.margins.clone(),
            auto_captions: Some(!self.no_captions),
            page_numbers: Some(!self.no_page_numbers),
            header_footer: Some(!self.no_header),
        }
    }

    fn figures(&self) -> Vec<Figure> {
        self.figures
            .iter()
            .enumerate()
            .map(|(i, name)| Figure::new(i as u32 + 1, name.as_str(), ""))
            .collect()
    }

    fn builder(&self) -> Result<Abnt, Box<dyn std::error::Error>> {
        let mut builder = Abnt::new()
            .with_raw_options(self.raw_options())
            .with_figures(self.figures());

        if let Some(ref path) = self.content {
            builder = builder.with_content(fs::read_to_string(path)?);
        }
        Ok(builder)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Format {
            input,
            output,
            format,
        }) => cmd_format(&input, output.as_deref(), &format),
        Some(Commands::Request { input, output }) => cmd_request(&input, output.as_deref()),
        Some(Commands::Preview {
            input,
            json,
            compact,
            format,
        }) => cmd_preview(&input, json, compact, &format),
        Some(Commands::Options) => {
            cmd_options();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: format with defaults if input is provided
            if let Some(input) = cli.input {
                cmd_format(&input, cli.output.as_deref(), &FormatArgs::default())
            } else {
                println!("{}", "Usage: abnt <FILE> [OUTPUT]".yellow());
                println!("       abnt --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn source_name(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let name = input
        .file_name()
        .ok_or_else(|| format!("Not a file: {}", input.display()))?;
    Ok(name.to_string_lossy().into_owned())
}

fn cmd_format(
    input: &Path,
    output: Option<&Path>,
    args: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Checking document...");
    let filename = source_name(input)?;
    let size = fs::metadata(input)?.len();
    log::debug!("Found {} ({} bytes)", input.display(), size);
    pb.inc(1);

    pb.set_message("Detecting format...");
    match naming::detect_source_format(&filename) {
        Some(format) => log::info!("Detected {}", format),
        None => log::warn!("{} is not a .doc/.docx file", filename),
    }
    pb.inc(1);

    pb.set_message("Applying ABNT formatting...");
    let doc = args.builder()?.format(&filename)?;
    pb.inc(1);

    pb.set_message("Generating HTML...");
    let path = ExporterRegistry::with_defaults().export("html", &doc, &output_dir)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "└─".dimmed(), path.display());
    println!(
        "\n{} sections, {} figures, {} paragraphs",
        doc.stats.section_count, doc.stats.figure_count, doc.stats.paragraph_count
    );
    println!("{} {}", "Print to PDF as".dimmed(), doc.filename);

    Ok(())
}

fn cmd_request(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let body = fs::read_to_string(input)?;
    let (status, response) = convert::handle_json(&body);

    if let Some(path) = output {
        fs::write(path, &response)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", response);
    }

    if status != 200 {
        return Err(format!("request failed with status {}", status).into());
    }
    Ok(())
}

fn cmd_preview(
    input: &Path,
    json: bool,
    compact: bool,
    args: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let filename = source_name(input)?;
    let builder = args.builder()?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", builder.to_json(&filename, format)?);
    } else {
        println!("{}", builder.preview(&filename)?);
        println!();
        println!(
            "{} {}",
            "Output filename:".bold(),
            naming::output_filename(&filename)
        );
    }

    Ok(())
}

fn cmd_options() {
    fn list<T: std::fmt::Display>(label: &str, values: &[T], default: &T) {
        let values: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
        println!(
            "{}: {} {}",
            label.bold(),
            values.join(", "),
            format!("(default \"{}\")", default).dimmed()
        );
    }

    println!("{}", "Formatting Options".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    list("--font", &FontFamily::ALL, &FontFamily::default());
    list("--size", &FontSize::ALL, &FontSize::default());
    list("--spacing", &LineSpacing::ALL, &LineSpacing::default());
    list("--margins", &MarginPreset::ALL, &MarginPreset::default());
    println!(
        "{}: captions, page numbers and header are on unless disabled",
        "Toggles".bold()
    );
}

fn cmd_version() {
    println!("{} {}", "abnt".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("ABNT document formatting tool");
    println!();
    println!("License: MIT");
}
