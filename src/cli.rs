//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use hillwaves::params::SceneParams;
use hillwaves::Result;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "hillwaves")]
#[command(about = "Headless wave height-field simulation over analytic hills", long_about = None)]
pub struct Args {
    /// JSON parameter file (fields not present keep their defaults)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Simulated duration (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f32>,

    /// Frames per simulated second
    #[arg(long, value_name = "FPS")]
    pub fps: Option<u32>,

    /// Wave grid rows
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Wave grid columns
    #[arg(long, value_name = "N")]
    pub cols: Option<usize>,

    /// Ripple RNG seed
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write a grayscale heightmap PNG for every frame
    #[arg(long)]
    pub record: bool,

    /// Output directory for recorded frames
    #[arg(long, value_name = "DIR")]
    pub output: Option<String>,
}

impl Args {
    /// Resolve scene parameters: defaults, then the parameter file, then flags.
    pub fn scene_params(&self) -> Result<SceneParams> {
        let mut params = match &self.params {
            Some(path) => {
                log::info!("Loading parameters from {}", path.display());
                SceneParams::load(path)?
            }
            None => SceneParams::default(),
        };

        if let Some(duration) = self.duration {
            params.recording.duration_secs = duration;
        }
        if let Some(fps) = self.fps {
            params.recording.fps = fps;
        }
        if let Some(rows) = self.rows {
            params.waves.rows = rows;
        }
        if let Some(cols) = self.cols {
            params.waves.cols = cols;
        }
        if let Some(seed) = self.seed {
            params.ripples.seed = seed;
        }
        if let Some(output) = &self.output {
            params.recording.output_dir = output.clone();
        }

        params.validate()?;
        Ok(params)
    }
}
