mod config;
mod convert;
mod document;
mod html;
mod parser;
mod postprocess;
mod source;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use config::PipelineConfig;
use document::{normalize_title, Document};

#[derive(Parser)]
#[command(name = "cv_sections", about = "Résumé section segmenter")]
struct Cli {
    /// Pipeline config (JSON): dropped sections, marker splits, reordering
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment recognized sections and write the page HTML
    Render {
        /// Fragment path or http(s) URL
        #[arg(env = "CV_SECTIONS_SOURCE")]
        input: String,
        /// Output file (default: stdout). Left untouched when nothing loads.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the entries found in each section as JSON
    Entries {
        /// Fragment path or http(s) URL
        #[arg(env = "CV_SECTIONS_SOURCE")]
        input: String,
        /// Only this section (case-insensitive title)
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Convert a .docx into the section fragment the other commands read
    Convert {
        /// Word document
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sections overview table
    Sections {
        /// Fragment path or http(s) URL
        #[arg(env = "CV_SECTIONS_SOURCE")]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let config = PipelineConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { input, output } => {
            let Some(mut doc) = load_document(&input).await else {
                return Ok(());
            };
            let counts = parser::process_document(&mut doc, &config);
            let page = html::render_document(&doc);

            write_output(output.as_deref(), &page)?;

            info!(
                "Rendered {} sections: {} segmented into {} entries, \
                 {} dropped, {} split off, {} moved",
                counts.sections,
                counts.segmented,
                counts.entries,
                counts.dropped,
                counts.split,
                counts.moved
            );
        }
        Commands::Entries { input, section } => {
            let Some(mut doc) = load_document(&input).await else {
                return Ok(());
            };
            parser::prepare_document(&mut doc, &config);

            let wanted = section.as_deref().map(normalize_title);
            let results: Vec<_> = doc
                .sections
                .iter()
                .filter(|s| wanted.as_ref().map_or(true, |w| &s.name() == w))
                .map(parser::segment_section)
                .collect();
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Convert { input, output } => {
            let doc = convert::convert_docx(&input)?;
            write_output(output.as_deref(), &html::render_document(&doc))?;
        }
        Commands::Sections { input } => {
            let Some(mut doc) = load_document(&input).await else {
                return Ok(());
            };
            parser::prepare_document(&mut doc, &config);

            println!(
                "{:>3} | {:<28} | {:<11} | {:>6} | {:>7}",
                "#", "Section", "Layout", "Blocks", "Entries"
            );
            println!("{}", "-".repeat(66));
            for (i, section) in doc.sections.iter().enumerate() {
                let r = parser::segment_section(section);
                println!(
                    "{:>3} | {:<28} | {:<11} | {:>6} | {:>7}",
                    i + 1,
                    truncate(&r.title, 28),
                    r.kind.as_str(),
                    r.blocks,
                    r.entries.len()
                );
            }
        }
    }

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}

/// `None` when the source fails or holds no sections; the caller then does nothing.
async fn load_document(input: &str) -> Option<Document> {
    let Some(content) = source::load(input).await else {
        info!("Nothing loaded from {}; leaving output untouched", input);
        return None;
    };

    let doc = Document::parse(&content);
    if doc.sections.is_empty() {
        info!("No resume sections in {}; leaving output untouched", input);
        return None;
    }
    Some(doc)
}

fn write_output(path: Option<&Path>, page: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, page)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{}", page);
            Ok(())
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}
