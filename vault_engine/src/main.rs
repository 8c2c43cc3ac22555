use anyhow::Result;

mod animation;
mod audio;
mod cli;
mod demo;
mod door;
mod lighting;
mod location;
mod runtime;
mod scenery;
mod services;
mod snapshot;

fn main() -> Result<()> {
    let args = cli::parse()?;
    runtime::execute(args)
}
