use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use vault_world::load_location;

use crate::audio::RecordingAudioSink;
use crate::cli::Args;
use crate::demo::{demo_location, DEMO_SEQUENCE};
use crate::lighting::RecordingLightingSink;
use crate::location::LocationRuntime;
use crate::services::WorldServices;
use crate::snapshot::LocationSnapshot;

pub fn execute(args: Args) -> Result<()> {
    let location = match args.location.as_ref() {
        Some(path) => load_location(path)
            .with_context(|| format!("loading location {}", path.display()))?,
        None => demo_location(),
    };

    let audio = RecordingAudioSink::new();
    let lighting = RecordingLightingSink::new();
    let services = WorldServices::new()
        .with_audio(Rc::new(audio.clone()))
        .with_lighting(Rc::new(lighting.clone()));
    let mut runtime = LocationRuntime::from_file(&location, services);

    let uses: Vec<String> = if !args.use_scenery.is_empty() {
        args.use_scenery.clone()
    } else if args.location.is_none() {
        DEMO_SEQUENCE.iter().map(|name| name.to_string()).collect()
    } else {
        Vec::new()
    };

    for name in &uses {
        let handle = runtime
            .handle_for(name)
            .ok_or_else(|| anyhow!("unknown scenery: {name}"))?;
        runtime.use_scenery(handle);
        for _ in 0..args.frames {
            runtime.advance_frame(args.frame_step);
        }
    }

    print_summary(&runtime, &audio, &lighting);
    if args.verbose {
        println!("\nRuntime events:");
        for event in runtime.events() {
            println!("  {event}");
        }
    }

    if let Some(path) = args.event_log_json.as_ref() {
        write_json(path, &runtime.events(), "event log")?;
    }
    if let Some(path) = args.audio_log_json.as_ref() {
        write_json(path, &audio.events(), "audio log")?;
    }
    if let Some(path) = args.snapshot_json.as_ref() {
        let snapshot = LocationSnapshot::capture(&runtime);
        write_json(path, &snapshot, "location snapshot")?;
    }

    Ok(())
}

fn print_summary(
    runtime: &LocationRuntime,
    audio: &RecordingAudioSink,
    lighting: &RecordingLightingSink,
) {
    println!(
        "Location {} after {} event-loop turns:",
        runtime.name(),
        runtime.frame()
    );
    for object in runtime.scenery_objects() {
        match object.door() {
            Some(door) => println!(
                "  - {:<18} door opened={} locked={} uses={}",
                object.name(),
                door.opened(),
                door.locked(),
                object.use_count()
            ),
            None => println!(
                "  - {:<18} generic uses={}",
                object.name(),
                object.use_count()
            ),
        }
    }
    println!("Lighting recomputes: {}", lighting.recomputes());
    println!("Audio cues dispatched: {}", audio.events().len());
}

fn write_json<T: Serialize>(path: &Path, value: &T, label: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {label} to JSON"))?;
    fs::write(path, json).with_context(|| format!("writing {label} to {}", path.display()))?;
    println!("Saved {label} to {}", path.display());
    Ok(())
}
