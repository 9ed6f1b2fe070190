//! Audio constants shared across the segmentation pipeline

/// Reference sample rate for the frame scorer (Hz)
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Window size when scoring at 16 kHz (samples)
/// At 16kHz, 512 samples = 32ms windows
pub const WINDOW_SIZE_16K: usize = 512;

/// Window size for non-16 kHz rates (samples)
pub const WINDOW_SIZE_FALLBACK: usize = 256;

/// Silence run length (seconds) that records a preferred split point
/// inside a segment that exceeds the maximum speech duration.
pub const SILENCE_AT_MAX_SPEECH_SECS: f32 = 0.098;

/// Gap subtracted from `threshold` when `neg_threshold` is not supplied.
pub const NEG_THRESHOLD_GAP: f32 = 0.15;

/// Floor applied to a derived `neg_threshold`.
pub const NEG_THRESHOLD_FLOOR: f32 = 0.01;
