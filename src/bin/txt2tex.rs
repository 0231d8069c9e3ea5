//! CLI binary for txt2tex.
//!
//! A thin shim over the library crate that maps subcommands and flags to
//! the extract / convert / splice entry points and prints confirmations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use txt2tex::{
    convert_file, convert_to_file, extract_to_file, splice_files, ConversionConfig, SpliceMode,
};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Full pipeline, default filenames (matches the original fixed-file runs)
  txt2tex extract book.pdf
  txt2tex convert book_content.txt
  txt2tex splice book.tex onsoz_ve_bolum1_yeni.tex

  # Explicit outputs
  txt2tex extract book.pdf -o book_content.txt
  txt2tex convert book_content.txt -o book.tex

  # Convert to stdout with stats as JSON
  txt2tex convert book_content.txt --json

  # Enable the LaTeX special-character escaper on literal text
  txt2tex convert book_content.txt --escape -o book.tex

  # Splice by content anchors instead of fixed line offsets
  txt2tex splice book.tex new.tex \
      --head-anchor '\tableofcontents' --tail-anchor '\chapter{Bölüm 2'

ENVIRONMENT VARIABLES:
  TXT2TEX_OUTPUT   Default output path for the active subcommand
  RUST_LOG         Override the tracing filter (e.g. txt2tex=debug)
"#;

/// Convert page-marked book text extractions to LaTeX.
#[derive(Parser, Debug)]
#[command(
    name = "txt2tex",
    version,
    about = "Convert page-marked book text extractions to LaTeX",
    long_about = "Three-stage book pipeline: extract a PDF's text layer page by page, \
convert the page-marked text to a LaTeX document via a rule-based line classifier, \
and splice revised front matter into an existing document.",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a PDF's text layer to page-marked plain text.
    Extract {
        /// Input PDF file.
        input: PathBuf,

        /// Output text file.
        #[arg(short, long, env = "TXT2TEX_OUTPUT", default_value = "book_content.txt")]
        output: PathBuf,
    },

    /// Convert page-marked text to a LaTeX document.
    Convert {
        /// Input page-marked text file.
        input: PathBuf,

        /// Output .tex file. Omit to print the document to stdout.
        #[arg(short, long, env = "TXT2TEX_OUTPUT")]
        output: Option<PathBuf>,

        /// Escape LaTeX special characters on literal (non-code) text.
        #[arg(long)]
        escape: bool,

        /// Keep `--- Sayfa N ---` page markers in the classified text.
        #[arg(long)]
        keep_page_markers: bool,

        /// Path to a custom LaTeX preamble file.
        #[arg(long)]
        preamble: Option<PathBuf>,

        /// Print conversion stats as JSON to stdout (document goes to -o).
        #[arg(long)]
        json: bool,
    },

    /// Splice an insert document into a base document.
    Splice {
        /// Base .tex document.
        base: PathBuf,

        /// Document inserted between the head and tail cuts.
        insert: PathBuf,

        /// Output file. Defaults to overwriting the base document.
        #[arg(short, long, env = "TXT2TEX_OUTPUT")]
        output: Option<PathBuf>,

        /// Keep this many leading lines of the base document.
        #[arg(long, default_value_t = 50, conflicts_with_all = ["head_anchor", "tail_anchor"])]
        head_lines: usize,

        /// Resume the base document at this 0-based line index.
        #[arg(long, default_value_t = 911, conflicts_with_all = ["head_anchor", "tail_anchor"])]
        tail_start: usize,

        /// Cut the head after the first line containing this text.
        #[arg(long, requires = "tail_anchor")]
        head_anchor: Option<String>,

        /// Resume the base at the first line containing this text.
        #[arg(long, requires = "head_anchor")]
        tail_anchor: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Extract { input, output } => {
            let pages = extract_to_file(&input, &output)
                .with_context(|| format!("failed to extract {}", input.display()))?;
            if !cli.quiet {
                eprintln!("İçerik {} dosyasına yazıldı. ({pages} sayfa)", output.display());
            }
        }

        Command::Convert {
            input,
            output,
            escape,
            keep_page_markers,
            preamble,
            json,
        } => {
            let mut builder = ConversionConfig::builder()
                .escape_literal_text(escape)
                .strip_page_markers(!keep_page_markers);
            if let Some(ref path) = preamble {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read preamble from {}", path.display()))?;
                builder = builder.preamble(text);
            }
            let config = builder.build().context("invalid configuration")?;

            if let Some(ref out_path) = output {
                let stats = convert_to_file(&input, out_path, &config)
                    .context("conversion failed")?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                } else if !cli.quiet {
                    eprintln!("LaTeX dosyası oluşturuldu: {}", out_path.display());
                    eprintln!(
                        "   {} satır: {} başlık, {} kod bloğu, {} tablo satırı ({}ms)",
                        stats.total_lines,
                        stats.headings,
                        stats.code_blocks,
                        stats.table_rows,
                        stats.duration_ms
                    );
                }
            } else {
                let result = convert_file(&input, &config).context("conversion failed")?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    handle
                        .write_all(result.latex.as_bytes())
                        .context("failed to write to stdout")?;
                }
            }
        }

        Command::Splice {
            base,
            insert,
            output,
            head_lines,
            tail_start,
            head_anchor,
            tail_anchor,
        } => {
            let mode = match (head_anchor, tail_anchor) {
                (Some(head), Some(tail)) => SpliceMode::Anchored {
                    head_anchor: head,
                    tail_anchor: tail,
                },
                _ => SpliceMode::Offsets {
                    head_lines,
                    tail_start,
                },
            };
            let out_path = output.unwrap_or_else(|| base.clone());
            let total = splice_files(&base, &insert, &out_path, &mode)
                .context("splice failed")?;
            if !cli.quiet {
                eprintln!("{} güncellendi!", out_path.display());
                eprintln!("Toplam satır: {total}");
            }
        }
    }

    Ok(())
}
