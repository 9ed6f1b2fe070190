use tracing::debug;

use crate::config::SegmentationConfig;
use crate::error::SegmentationError;
use crate::format::format_segments;
use crate::pad::pad_segments;
use crate::plan::WindowPlan;
use crate::probs::collect_probs;
use crate::state::{scan, ScanParams};
use crate::types::SpeechSegment;
use crate::FrameScorer;

/// Turns a stream of per-window speech probabilities into speech segments.
///
/// One call runs the full pipeline to completion: window planning, ordered
/// scoring, the hysteresis scan, padding, and unit conversion. The scorer's
/// recurrent state is reset at the start of each call, so each call is an
/// independent audio stream. Calls against a shared scorer must be
/// serialized by the caller.
pub struct Segmenter {
    config: SegmentationConfig,
}

impl Segmenter {
    pub fn new(config: SegmentationConfig) -> Result<Self, SegmentationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Segments one complete mono recording.
    ///
    /// Returns segments ordered by start and non-overlapping, in the units
    /// selected by [`SegmentationConfig::return_seconds`].
    pub fn segment(
        &self,
        samples: &[f32],
        sample_rate: u32,
        scorer: &mut dyn FrameScorer,
    ) -> Result<Vec<SpeechSegment>, SegmentationError> {
        if samples.is_empty() {
            return Err(SegmentationError::EmptyInput);
        }

        let plan = WindowPlan::for_rate(sample_rate)?;
        let params = ScanParams::derive(&self.config, &plan);
        if self.config.neg_threshold.is_none() {
            debug!(
                neg_threshold = params.neg_threshold,
                "derived trigger-off threshold"
            );
        }

        scorer.reset();
        let probs = collect_probs(samples, &plan, scorer)?;

        let total_len = plan.effective_len(samples.len());
        let raw = scan(&probs, plan.window_size, total_len, &params);
        let mut segments = pad_segments(&raw, params.pad_samples);
        format_segments(&mut segments, &self.config, &plan);

        debug!(
            windows = probs.len(),
            segments = segments.len(),
            "segmentation complete"
        );
        Ok(segments)
    }
}

/// One-shot convenience wrapper around [`Segmenter`].
pub fn get_speech_timestamps(
    samples: &[f32],
    sample_rate: u32,
    config: &SegmentationConfig,
    scorer: &mut dyn FrameScorer,
) -> Result<Vec<SpeechSegment>, SegmentationError> {
    Segmenter::new(config.clone())?.segment(samples, sample_rate, scorer)
}
