use serde::{Deserialize, Serialize};
use voxseg_vad::{SAMPLE_RATE_HZ, WINDOW_SIZE_16K};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SileroScorerConfig {
    /// Rate the model sees. Must match the window plan's effective rate.
    pub sample_rate: u32,
    /// Samples per prediction.
    pub window_size: usize,
}

impl Default for SileroScorerConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE_HZ,
            window_size: WINDOW_SIZE_16K,
        }
    }
}
