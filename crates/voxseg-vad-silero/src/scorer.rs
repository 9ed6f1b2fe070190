use tracing::debug;
use voice_activity_detector::VoiceActivityDetector;
use voxseg_vad::{FrameScorer, WindowPlan};

use crate::config::SileroScorerConfig;

/// [`FrameScorer`] backed by the bundled Silero ONNX model.
///
/// The model carries recurrent state across windows; `reset` clears it,
/// which the segmentation engine does once per stream. One scorer instance
/// serves one stream at a time.
pub struct SileroScorer {
    detector: VoiceActivityDetector,
    config: SileroScorerConfig,
}

impl SileroScorer {
    pub fn new(config: SileroScorerConfig) -> Result<Self, String> {
        let detector = VoiceActivityDetector::builder()
            .sample_rate(i64::from(config.sample_rate))
            .chunk_size(config.window_size)
            .build()
            .map_err(|e| format!("failed to create Silero VAD: {e}"))?;

        debug!(
            sample_rate = config.sample_rate,
            window_size = config.window_size,
            "created Silero frame scorer"
        );
        Ok(Self { detector, config })
    }

    /// Scorer matching a window plan's effective rate and window size.
    pub fn for_plan(plan: &WindowPlan) -> Result<Self, String> {
        Self::new(SileroScorerConfig {
            sample_rate: plan.effective_rate,
            window_size: plan.window_size,
        })
    }
}

impl FrameScorer for SileroScorer {
    fn score(&mut self, window: &[f32]) -> Result<f32, String> {
        if window.len() != self.config.window_size {
            return Err(format!(
                "Silero scorer requires {} samples, got {}",
                self.config.window_size,
                window.len()
            ));
        }
        Ok(self.detector.predict(window.iter().copied()))
    }

    fn reset(&mut self) {
        self.detector.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scorer_creates_for_default_config() {
        let scorer = SileroScorer::new(SileroScorerConfig::default());
        assert!(scorer.is_ok());
    }

    #[test]
    fn scorer_creates_for_fallback_plan() {
        let plan = WindowPlan::for_rate(8_000).unwrap();
        let scorer = SileroScorer::for_plan(&plan);
        assert!(scorer.is_ok());
    }

    #[test]
    fn silence_scores_below_speech_threshold() {
        let mut scorer = SileroScorer::new(SileroScorerConfig::default()).unwrap();
        let silence = vec![0.0f32; 512];
        let prob = scorer.score(&silence).unwrap();
        assert!((0.0..=1.0).contains(&prob));
        assert!(prob < 0.5, "digital silence should not look like speech");
    }

    #[test]
    fn wrong_window_length_is_rejected() {
        let mut scorer = SileroScorer::new(SileroScorerConfig::default()).unwrap();
        let err = scorer.score(&vec![0.0f32; 511]).unwrap_err();
        assert!(err.contains("512"), "error should name the required size: {err}");
    }
}
