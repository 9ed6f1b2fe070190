use serde::{Deserialize, Serialize};

/// One detected speech span.
///
/// Units depend on the formatting options of the call that produced it:
/// seconds when `return_seconds` is set, otherwise sample indices at the
/// original input rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechSegment {
    pub start: f32,
    pub end: f32,
}

impl SpeechSegment {
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// Segment bounds in effective-rate sample units, before padding and
/// formatting. Produced by the scan, consumed by the padding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment {
    pub start: usize,
    pub end: usize,
}
