use serde::{Deserialize, Serialize};

use crate::constants::{NEG_THRESHOLD_FLOOR, NEG_THRESHOLD_GAP};
use crate::error::SegmentationError;

/// Per-call segmentation parameters.
///
/// All durations are in wall-clock time; they are converted to sample counts
/// at the effective rate once the window plan is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Probability at or above which a window counts as speech.
    pub threshold: f32,
    /// Probability below which a window counts as silence while inside a
    /// segment. Derived as `max(threshold - 0.15, 0.01)` when `None`.
    pub neg_threshold: Option<f32>,
    /// Shortest speech span kept in the output.
    pub min_speech_duration_ms: u32,
    /// Longest span before a forced split. Unbounded by default.
    pub max_speech_duration_s: f32,
    /// Silence run needed to close a segment.
    pub min_silence_duration_ms: u32,
    /// Symmetric margin added around each segment.
    pub pad_ms: u32,
    /// Emit boundaries in seconds instead of sample indices.
    pub return_seconds: bool,
    /// Decimal digits kept when emitting seconds.
    pub time_resolution: u32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            neg_threshold: None,
            min_speech_duration_ms: 250,
            max_speech_duration_s: f32::INFINITY,
            min_silence_duration_ms: 100,
            pad_ms: 30,
            return_seconds: false,
            time_resolution: 1,
        }
    }
}

impl SegmentationConfig {
    /// Tuned for close-mic recordings with little background noise.
    pub fn clean_speech() -> Self {
        Self {
            threshold: 0.4,
            min_speech_duration_ms: 200,
            min_silence_duration_ms: 250,
            pad_ms: 100,
            ..Default::default()
        }
    }

    /// Tuned for far-field or noisy recordings.
    pub fn noisy_environment() -> Self {
        Self {
            threshold: 0.6,
            min_speech_duration_ms: 300,
            min_silence_duration_ms: 400,
            pad_ms: 200,
            ..Default::default()
        }
    }

    /// Trigger-off probability, deriving the default when unset.
    pub fn effective_neg_threshold(&self) -> f32 {
        match self.neg_threshold {
            Some(t) if t >= 0.0 => t,
            _ => (self.threshold - NEG_THRESHOLD_GAP).max(NEG_THRESHOLD_FLOOR),
        }
    }

    /// Rejects malformed parameters before any scoring work starts.
    pub fn validate(&self) -> Result<(), SegmentationError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(SegmentationError::InvalidConfig {
                reason: format!("threshold must be within [0, 1], got {}", self.threshold),
            });
        }
        if let Some(neg) = self.neg_threshold {
            if neg.is_nan() || neg > self.threshold {
                return Err(SegmentationError::InvalidConfig {
                    reason: format!(
                        "neg_threshold {} must not exceed threshold {}",
                        neg, self.threshold
                    ),
                });
            }
        }
        if self.max_speech_duration_s.is_nan() || self.max_speech_duration_s <= 0.0 {
            return Err(SegmentationError::InvalidConfig {
                reason: format!(
                    "max_speech_duration_s must be positive, got {}",
                    self.max_speech_duration_s
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SegmentationConfig::default().validate().is_ok());
    }

    #[test]
    fn neg_threshold_derived_from_threshold() {
        let config = SegmentationConfig {
            threshold: 0.5,
            neg_threshold: None,
            ..Default::default()
        };
        assert!((config.effective_neg_threshold() - 0.35).abs() < 1e-6);
    }

    #[test]
    fn derived_neg_threshold_floors_at_001() {
        let config = SegmentationConfig {
            threshold: 0.1,
            neg_threshold: None,
            ..Default::default()
        };
        assert!((config.effective_neg_threshold() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn negative_neg_threshold_means_auto() {
        // Callers porting from the C interface pass -1.0 for "derive it".
        let config = SegmentationConfig {
            threshold: 0.5,
            neg_threshold: Some(-1.0),
            ..Default::default()
        };
        assert!((config.effective_neg_threshold() - 0.35).abs() < 1e-6);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = SegmentationConfig {
            threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_neg_threshold_above_threshold() {
        let config = SegmentationConfig {
            threshold: 0.3,
            neg_threshold: Some(0.6),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn presets_are_valid() {
        assert!(SegmentationConfig::clean_speech().validate().is_ok());
        assert!(SegmentationConfig::noisy_environment().validate().is_ok());
    }
}
