//! synviz viewer.
//!
//! Opens a window and draws the sampled edges between two point layers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Env;

use synviz::{NodePass, Result, StatisticsFile, ViewerOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PassArg {
    Point,
    Sphere,
    Transparent,
}

impl From<PassArg> for NodePass {
    fn from(arg: PassArg) -> Self {
        match arg {
            PassArg::Point => NodePass::Point,
            PassArg::Sphere => NodePass::Sphere,
            PassArg::Transparent => NodePass::TransparentSphere,
        }
    }
}

/// Edge sampling visualization sandbox
#[derive(Parser, Debug)]
#[command(name = "synviz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON options file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Node pass drawn each frame (keys 1/2/3 switch at runtime)
    #[arg(short, long, value_enum)]
    pass: Option<PassArg>,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Swap interval: 0 disables vsync
    #[arg(long)]
    swap_interval: Option<u32>,

    /// Statistics file read at startup and rewritten on exit
    #[arg(long)]
    statistics: Option<PathBuf>,

    /// Directory with WGSL shader overrides
    #[arg(long)]
    shader_dir: Option<PathBuf>,

    /// Per-frame noise strength, relative to the sample spacing
    #[arg(long)]
    noise: Option<f32>,

    /// Render without a window and save the last frame to this PNG file
    #[arg(long)]
    headless_output: Option<PathBuf>,

    /// Number of frames drawn in headless mode
    #[arg(long, default_value_t = 1)]
    frames: u32,
}

impl Cli {
    fn options(&self) -> Result<ViewerOptions> {
        let mut options = match &self.config {
            Some(path) => ViewerOptions::load(path)?,
            None => ViewerOptions::default(),
        };

        if let Some(pass) = self.pass {
            options.pass = pass.into();
        }
        if let Some(title) = &self.title {
            options.window.title.clone_from(title);
        }
        if let Some(width) = self.width {
            options.window.width = width;
        }
        if let Some(height) = self.height {
            options.window.height = height;
        }
        if let Some(swap_interval) = self.swap_interval {
            options.window.swap_interval = swap_interval;
        }
        if let Some(path) = &self.statistics {
            options.statistics_path.clone_from(path);
        }
        if let Some(dir) = &self.shader_dir {
            options.shader_dir = Some(dir.clone());
        }
        if let Some(strength) = self.noise {
            options.noise_strength = Some(strength);
        }

        Ok(options)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options()?;

    match &cli.headless_output {
        Some(path) => {
            let statistics = StatisticsFile::new(&options.statistics_path);
            let mut totals = statistics.read()?;
            let tracker = synviz::render_to_file(&options, cli.frames, path)?;
            tracker.log_summary();
            totals.merge(&tracker);
            statistics.write(&totals)?;
        }
        None => {
            synviz::run(options)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("synviz v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{ "pass": "point", "window": { "width": 640 } }"#).unwrap();

        let cli = Cli::parse_from([
            "synviz",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "480",
            "--swap-interval",
            "0",
        ]);
        let options = cli.options().unwrap();
        assert_eq!(options.pass, NodePass::Point);
        assert_eq!(options.window.width, 640);
        assert_eq!(options.window.height, 480);
        assert_eq!(options.window.swap_interval, 0);
    }

    #[test]
    fn test_pass_flag() {
        let cli = Cli::parse_from(["synviz", "--pass", "sphere", "--noise", "0.25"]);
        let options = cli.options().unwrap();
        assert_eq!(options.pass, NodePass::Sphere);
        assert_eq!(options.noise_strength, Some(0.25));
        assert_eq!(options.window.title, "Testing");
    }

    #[test]
    fn test_missing_config_fails() {
        let cli = Cli::parse_from(["synviz", "--config", "/nonexistent/options.json"]);
        assert!(cli.options().is_err());
    }
}
