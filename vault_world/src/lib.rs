pub mod location;

pub use location::{
    load_location, parse_location, AnimationRecord, LocationFile, SceneryKind, SceneryRecord,
    ScriptRecord, WorldError,
};
