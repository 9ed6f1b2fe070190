//! Voice-activity segmentation over an external frame scorer.
//!
//! A [`FrameScorer`] turns fixed-size audio windows into speech
//! probabilities; the [`Segmenter`] turns that probability stream into an
//! ordered, non-overlapping list of [`SpeechSegment`]s using hysteresis
//! thresholds, forced splits for overlong spans, and symmetric padding.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod format;
pub mod pad;
pub mod plan;
pub mod probs;
pub mod state;
pub mod types;

pub use config::SegmentationConfig;
pub use constants::{SAMPLE_RATE_HZ, WINDOW_SIZE_16K, WINDOW_SIZE_FALLBACK};
pub use engine::{get_speech_timestamps, Segmenter};
pub use error::SegmentationError;
pub use plan::WindowPlan;
pub use types::SpeechSegment;

/// Per-window speech probability oracle.
///
/// Implementations are recurrent: the probability for a window depends on
/// the windows scored before it, so the engine calls `score` exactly once
/// per window, in order, and never in parallel. `reset` clears that hidden
/// state; the engine calls it at the start of every segmentation call so one
/// call maps to one independent audio stream.
pub trait FrameScorer: Send {
    /// Scores one window, zero-padded to the planned window size.
    /// Returns a speech probability in `[0, 1]`.
    fn score(&mut self, window: &[f32]) -> Result<f32, String>;

    /// Clears recurrent state before a new stream.
    fn reset(&mut self);
}
