//! odp2md CLI - OpenDocument presentation to Markdown converter
//!
//! Prints a pandoc-flavoured Markdown outline of an ODP deck and extracts
//! its pictures and videos next to it.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use odp2md::parse_options::DEFAULT_MEDIA_DIR;
use odp2md::{Odp2Md, ParsedPresentation};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// OpenDocument presentation to Markdown converter
#[derive(Parser, Debug)]
#[command(
    name = "odp2md",
    version,
    about = "Convert OpenDocument presentations (ODP) to Markdown",
    long_about = "odp2md - Convert OpenDocument presentations to Markdown.\n\n\
                  Every visible slide becomes a level-2 heading with its outline as\n\
                  nested bullets. Pictures and videos are renamed after their slide.\n\n\
                  Usage:\n  \
                  odp2md -i talk.odp -m             Print Markdown to stdout\n  \
                  odp2md -i talk.odp -m -x          Also extract media into ./media\n  \
                  odp2md -i talk.odp -m -b -o t.md  Write Markdown with HTML video blocks",
    after_help = "Hidden slides are never output."
)]
struct Cli {
    /// Input presentation (.odp or .fodp)
    #[arg(short, long)]
    input: PathBuf,

    /// Print the presentation as Markdown
    #[arg(short, long)]
    markdown: bool,

    /// Emit video references as raw HTML blocks
    #[arg(short, long)]
    blocks: bool,

    /// Extract pictures and videos into the media directory
    #[arg(short = 'x', long)]
    extract: bool,

    /// Directory media references point into
    #[arg(long = "mediadir", value_name = "DIR", default_value = DEFAULT_MEDIA_DIR)]
    media_dir: PathBuf,

    /// Write Markdown to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the slide sequence as JSON
    #[arg(long)]
    json: bool,

    /// Include speaker notes
    #[arg(short, long)]
    notes: bool,

    /// Convert documents that do not declare a presentation mimetype
    #[arg(long)]
    lenient: bool,

    /// Log per-slide decisions
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn has_action(&self) -> bool {
        self.markdown || self.json || self.extract
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.verbose) {
        eprintln!("{} logging disabled: {}", "!".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Routes library logs to stderr: warnings by default, per-slide decisions
/// with `--verbose`.
fn init_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_module("odp2md", level)
        .try_init()
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.has_action() {
        eprintln!(
            "{} Nothing to do: pass -m/--markdown, --json or -x/--extract",
            "!".yellow().bold()
        );
        return Ok(());
    }

    let pb = create_spinner("Parsing presentation...");

    let mut builder = Odp2Md::new()
        .with_media_dir(&cli.media_dir)
        .with_video_blocks(cli.blocks);
    if cli.notes {
        builder = builder.with_notes();
    }
    if cli.lenient {
        builder = builder.lenient();
    }

    let parsed = builder.parse(&cli.input);
    pb.finish_and_clear();
    let mut parsed = parsed?;

    if cli.markdown {
        let markdown = parsed.to_markdown();
        write_output(cli.output.as_ref(), &markdown)?;

        if let Some(output) = &cli.output {
            eprintln!(
                "{} Converted to Markdown: {}",
                "✓".green().bold(),
                output.display()
            );
        }
    }

    if cli.json {
        let json = serde_json::to_string_pretty(parsed.presentation())?;
        write_output(None, &json)?;
    }

    if cli.extract {
        extract(&mut parsed)?;
    }

    Ok(())
}

fn extract(parsed: &mut ParsedPresentation) -> Result<(), Box<dyn std::error::Error>> {
    if parsed.presentation().media_count() == 0 {
        eprintln!("{} No media referenced in presentation", "!".yellow().bold());
        return Ok(());
    }

    let pb = create_spinner("Extracting media...");
    let report = parsed.extract_media(".");
    pb.finish_and_clear();
    let report = report?;

    eprintln!(
        "{} Extracted {} media files",
        "✓".green().bold(),
        report.extracted.len()
    );
    for media in &report.missing {
        eprintln!(
            "  {} error finding media file {}",
            "!".yellow().bold(),
            media.source
        );
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write!(handle, "{}", content)?;
            if !content.ends_with('\n') {
                writeln!(handle)?;
            }
        }
    }
    Ok(())
}
