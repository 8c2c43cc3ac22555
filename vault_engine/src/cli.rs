use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Location host that drives door scenery through scripted use attempts",
    version
)]
pub struct Args {
    /// Path to a location JSON file (defaults to the built-in demo location)
    #[arg(long)]
    pub location: Option<PathBuf>,

    /// Scenery to use, in order; each use is followed by --frames event-loop
    /// turns so its transition can complete
    #[arg(long = "use", value_name = "NAME")]
    pub use_scenery: Vec<String>,

    /// Event-loop turns advanced after each use attempt
    #[arg(long, default_value_t = 16)]
    pub frames: u32,

    /// Seconds of simulated time per event-loop turn
    #[arg(long, default_value_t = 0.1)]
    pub frame_step: f32,

    /// Print every runtime event after the run
    #[arg(long)]
    pub verbose: bool,

    /// Path to write the runtime event log as JSON
    #[arg(long)]
    pub event_log_json: Option<PathBuf>,

    /// Path to write the dispatched audio cues as JSON
    #[arg(long)]
    pub audio_log_json: Option<PathBuf>,

    /// Path to write the final location snapshot as JSON
    #[arg(long)]
    pub snapshot_json: Option<PathBuf>,
}

pub fn parse() -> Result<Args> {
    let args = Args::parse();
    args.validate()?;
    Ok(args)
}

impl Args {
    fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            bail!("--frames must be at least 1");
        }
        if !self.frame_step.is_finite() || self.frame_step <= 0.0 {
            bail!("--frame-step must be a positive duration");
        }
        Ok(())
    }
}
