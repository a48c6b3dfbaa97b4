//! CLI tool for paginating magazine articles into slide-deck exports.

use anyhow::{Context, Result};
use clap::Parser;
use magslide_core::{slugify, Article, ExportFormat, Paginator};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Paginate article JSON records into slide-deck JSON for image export.
#[derive(Parser, Debug)]
#[command(name = "magslide")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input article JSON file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Export format: "portrait" or "square"
    #[arg(short, long, default_value = "portrait")]
    format: String,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let format = ExportFormat::parse(&args.format)
        .with_context(|| format!("Invalid --format value: {}", args.format))?;
    let paginator = Paginator::new(format);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &paginator) {
            Ok((slug, output)) => {
                if args.print {
                    println!("{}", output);
                } else {
                    let output_path =
                        get_output_path(input_path, &slug, format, args.output.as_ref())?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Paginate a single article file, returning its slug and the deck JSON.
fn process_file(
    input_path: &Path,
    args: &Args,
    paginator: &Paginator,
) -> Result<(String, String)> {
    let data = std::fs::read(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let article = Article::from_json_slice(&data)
        .with_context(|| format!("Failed to parse article record {}", input_path.display()))?;

    log::debug!(
        "Paginating '{}' as {}",
        article.title,
        paginator.format().name()
    );

    let deck = paginator.paginate(&article);

    if args.verbose {
        eprintln!(
            "  {} pages ({} content)",
            deck.page_count(),
            deck.content_pages().count()
        );
    }

    let output = serde_json::to_string_pretty(&deck).context("Failed to serialize deck")?;

    Ok((slugify(&article.title), output))
}

/// Determine the output path for a paginated article.
fn get_output_path(
    input_path: &Path,
    slug: &str,
    format: ExportFormat,
    output_dir: Option<&PathBuf>,
) -> Result<PathBuf> {
    let output_filename = format!("{}-{}.json", slug, format.name());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
