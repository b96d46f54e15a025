use clap::Parser;
use std::env;
use std::path::PathBuf;
use vita::{CvPipelineBuilder, PipelineError, RenderConfig, load_cv_file};

/// Render a CV data snapshot (JSON) to PDF.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CV data JSON file
    data: PathBuf,

    /// Where to write the PDF
    #[arg(short, long, default_value = "cv.pdf")]
    output: PathBuf,

    /// Path to a render configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), PipelineError> {
    let args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "vita=debug");
        }
    } else if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vita=info");
        }
    }
    env_logger::init();

    let cv = load_cv_file(&args.data)?;
    println!("✓ Data loaded from {}", args.data.display());

    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };
    let pipeline = CvPipelineBuilder::new().with_config(config).build()?;

    let rendered = pipeline.generate_to_file(&cv, &args.output)?;
    println!(
        "\nSuccess! Generated {} ({} page{})",
        args.output.display(),
        rendered.page_count,
        if rendered.page_count == 1 { "" } else { "s" }
    );
    Ok(())
}
