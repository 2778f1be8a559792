//! Tabtex CLI - batch CSV → LaTeX booktabs table converter

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tabtex::utils::files::file_name;
#[cfg(feature = "cli")]
use tabtex::{
    discover_inputs, output_path, parse_csv_file, render_document, ConversionResult, RenderOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "c2t")]
#[command(version)]
#[command(about = "Tabtex - batch CSV to LaTeX booktabs table converter", long_about = None)]
struct Cli {
    /// Input directory to scan (a single CSV file also works)
    #[arg(long = "in", value_name = "PATH", default_value = "./tables")]
    input: PathBuf,

    /// Output directory for .tex files, created if absent
    #[arg(long, value_name = "DIR", default_value = "./latex_tables")]
    out: PathBuf,

    /// Default caption for files without a more specific one
    #[arg(long, value_name = "TEXT")]
    caption: Option<String>,

    /// Default label for files without a more specific one
    #[arg(long, value_name = "TEXT")]
    label: Option<String>,

    /// Filename glob selecting which files to convert
    #[arg(long, value_name = "GLOB", default_value = "*.csv")]
    pattern: String,

    /// Decimal digits kept when rounding numeric columns
    #[arg(long, value_name = "N", default_value_t = 4)]
    precision: u32,

    /// Emit the bare tabular without the table float environment
    #[arg(long)]
    bare: bool,

    /// Quiet mode: suppress per-file output and warnings
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
fn main() -> ConversionResult<()> {
    let cli = Cli::parse();

    fs::create_dir_all(&cli.out)?;

    let files = discover_inputs(&cli.input, &cli.pattern)?;
    if files.is_empty() {
        eprintln!(
            "⚠ No input files matched under {} (pattern={})",
            cli.input.display(),
            cli.pattern
        );
        return Ok(());
    }

    let options = RenderOptions {
        caption: cli.caption.clone(),
        label: cli.label.clone(),
        precision: cli.precision,
        bare: cli.bare,
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for file_path in files {
        let source_name = file_name(&file_path);
        let out_path = output_path(&cli.out, &file_path);

        match parse_csv_file(&file_path) {
            Ok(parsed) => {
                if !cli.quiet {
                    for warning in &parsed.warnings {
                        eprintln!("⚠ {}: {}", file_path.display(), warning);
                    }
                }

                match render_document(&parsed.table, &source_name, &options)
                    .and_then(|tex| fs::write(&out_path, tex).map_err(Into::into))
                {
                    Ok(()) => {
                        if !cli.quiet {
                            eprintln!("✓ {}", out_path.display());
                        }
                        success_count += 1;
                    }
                    Err(e) => {
                        eprintln!("✗ {} - {}", out_path.display(), e);
                        error_count += 1;
                    }
                }
            }
            Err(e) => {
                eprintln!("✗ {} - {}", file_path.display(), e);
                error_count += 1;
            }
        }
    }

    if !cli.quiet {
        eprintln!(
            "\nBatch conversion complete: {} succeeded, {} failed",
            success_count, error_count
        );
    }

    if error_count > 0 {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabtex --features cli");
    eprintln!("  c2t [OPTIONS]");
}
