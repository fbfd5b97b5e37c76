mod config;
mod errors;
mod export;
mod records;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "cvgen")]
#[command(version, about = "Generate a LaTeX CV from YAML data files", long_about = None)]
struct Cli {
    /// Root of the data tree (`general/`, `experience/`, `education/`, ...)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the CV and replace the output .tex file (default)
    Generate {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the CV as JSON site data
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Load and render everything without writing any file
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    // Logs go to stderr so `export --stdout` stays clean JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("cvgen v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Command::Generate { output: None }) {
        Command::Generate { output } => {
            let output = output.unwrap_or(config.output);
            let report = render::generate(&config.data_dir, &output)
                .with_context(|| format!("CV generation failed (data: {})", config.data_dir.display()))?;
            info!(
                "Generated {} ({} bytes; {} experience, {} education)",
                report.output.display(),
                report.bytes_written,
                report.experience_count,
                report.education_count
            );
        }
        Command::Export { output, stdout } => {
            if stdout {
                let data = export::load_site_data(&config.data_dir)
                    .context("Loading site data failed")?;
                print!("{}", export::to_json(&data)?);
            } else {
                let output = output.unwrap_or(config.export_output);
                export::export_to_file(&config.data_dir, &output)
                    .with_context(|| format!("Export to {} failed", output.display()))?;
            }
        }
        Command::Check => {
            let sources = render::load_sources(&config.data_dir).context("Data check failed")?;
            let document = render::assemble(&sources).context("Rendering check failed")?;
            let site = export::load_site_sources(&config.data_dir).context("Site data check failed")?;
            let data = export::build_site_data(&sources, &site)?;
            info!(
                "Data OK: {} experience, {} education, {} technical domains; document {} bytes",
                data.experience.len(),
                data.education.len(),
                data.technical_domains.len(),
                document.len()
            );
        }
    }

    Ok(())
}
