use std::{cell::Cell, fmt, rc::Rc};

/// Seam for the lighting propagation engine. The runtime requests a full
/// recompute after every committed door transition, once the new
/// light-pass-through flag is already in place.
pub trait LightingSink {
    fn recompute(&self) {}
}

impl fmt::Debug for dyn LightingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LightingSink")
    }
}

/// Sink that counts recompute requests, for tests and diagnostics.
#[derive(Clone, Default)]
pub struct RecordingLightingSink {
    recomputes: Rc<Cell<u32>>,
}

impl RecordingLightingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recomputes(&self) -> u32 {
        self.recomputes.get()
    }
}

impl LightingSink for RecordingLightingSink {
    fn recompute(&self) {
        self.recomputes.set(self.recomputes.get() + 1);
    }
}
