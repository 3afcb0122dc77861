//! mnist-split
//!
//! Splits the MNIST train and test sets into per-class archives.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use synviz_mnist::{split_all, Result, SplitOptions};

/// Split MNIST into one bucket per class
#[derive(Parser, Debug)]
#[command(name = "mnist-split")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON options file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the IDX files
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory the archives are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> Result<SplitOptions> {
        let mut options = match &self.config {
            Some(path) => SplitOptions::load(path)?,
            None => SplitOptions::default(),
        };
        if let Some(dir) = &self.input_dir {
            options.input_dir.clone_from(dir);
        }
        if let Some(dir) = &self.output_dir {
            options.output_dir.clone_from(dir);
        }
        Ok(options)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options()?;
    for summary in split_all(&options)? {
        log::info!(
            "{}: {} samples -> {}",
            summary.name,
            summary.total(),
            summary.path.display()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
