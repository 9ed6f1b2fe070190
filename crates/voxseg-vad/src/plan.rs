use tracing::debug;

use crate::constants::{SAMPLE_RATE_HZ, WINDOW_SIZE_16K, WINDOW_SIZE_FALLBACK};
use crate::error::SegmentationError;

/// How raw samples are grouped for scoring.
///
/// The frame scorer works on 16 kHz-equivalent windows. Rates that are a
/// clean multiple of 16 kHz are decimated by `step` before windowing, and
/// output positions are scaled back by `step` at formatting time. Any other
/// rate is scored as-is with the smaller fallback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlan {
    /// Samples per scorer call, at the effective rate.
    pub window_size: usize,
    /// Decimation ratio applied to the raw stream (1 = none).
    pub step: usize,
    /// Rate the scorer sees after decimation.
    pub effective_rate: u32,
}

impl WindowPlan {
    pub fn for_rate(sample_rate: u32) -> Result<Self, SegmentationError> {
        if sample_rate == 0 {
            return Err(SegmentationError::InvalidSampleRate { rate: sample_rate });
        }

        let plan = if sample_rate == SAMPLE_RATE_HZ {
            Self {
                window_size: WINDOW_SIZE_16K,
                step: 1,
                effective_rate: SAMPLE_RATE_HZ,
            }
        } else if sample_rate > SAMPLE_RATE_HZ && sample_rate % SAMPLE_RATE_HZ == 0 {
            Self {
                window_size: WINDOW_SIZE_16K,
                step: (sample_rate / SAMPLE_RATE_HZ) as usize,
                effective_rate: SAMPLE_RATE_HZ,
            }
        } else {
            Self {
                window_size: WINDOW_SIZE_FALLBACK,
                step: 1,
                effective_rate: sample_rate,
            }
        };

        debug!(
            sample_rate,
            window_size = plan.window_size,
            step = plan.step,
            "planned scoring windows"
        );
        Ok(plan)
    }

    /// Number of samples the scan operates on for `raw_len` input samples.
    pub fn effective_len(&self, raw_len: usize) -> usize {
        raw_len.div_ceil(self.step)
    }
}
