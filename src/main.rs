use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

pub const DOCKERFILE_NAME: &str = "Dockerfile.optimized";
pub const JSON_REPORT_NAME: &str = "optimization_analysis.json";
pub const MARKDOWN_REPORT_NAME: &str = "optimization_report.md";

#[derive(Parser)]
#[command(name = "layer-planner")]
#[command(about = "Propose cache-friendly build stages from a container build log", long_about = None)]
struct Cli {
    /// Build log produced by a container image build.
    build_log: PathBuf,

    /// Directory for the generated build file and reports.
    #[arg(long, default_value = "analysis")]
    output_dir: PathBuf,

    /// Platform used for the base and production stages.
    #[arg(long, default_value = "linux/arm64")]
    platform: String,

    /// Base image used for the base and production stages.
    #[arg(long, default_value = "ubuntu:22.04")]
    base_image: String,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_output(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("create output directory {}", cli.output_dir.display()))?;

    println!("Layer planner starting...");

    // 1) Parse log.
    println!("Parsing build log...");
    let mut components = log::parse_build_log(&cli.build_log)?;
    if components.is_empty() {
        warn!(log = %cli.build_log.display(), "no components found in build log");
    }
    info!(components = components.len(), "parsed build log");

    // 2) Annotate.
    println!("Analyzing dependencies...");
    model::annotate_dependencies(&mut components);

    // 3) Group.
    println!("Calculating layer grouping...");
    let layers = model::group_layers(&components);
    info!(layers = layers.len(), "grouped components");

    // 4) Render.
    println!("Generating Dockerfile...");
    let opts = render::DockerfileOptions {
        platform: cli.platform,
        base_image: cli.base_image,
    };
    write_output(
        &cli.output_dir,
        DOCKERFILE_NAME,
        &render::render_dockerfile(&layers, &opts),
    )?;

    println!("Creating analysis report...");
    let data = model::build_report_data(&components, &layers);
    write_output(&cli.output_dir, JSON_REPORT_NAME, &render::render_json_report(&data)?)?;
    write_output(
        &cli.output_dir,
        MARKDOWN_REPORT_NAME,
        &render::render_markdown_report(&data),
    )?;

    println!("Optimization complete!");
    println!("Results: {}/", cli.output_dir.display());
    println!(
        "Try: docker build -f {} .",
        cli.output_dir.join(DOCKERFILE_NAME).display()
    );

    Ok(())
}
