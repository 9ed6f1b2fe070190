use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentationError {
    #[error("empty input: no audio samples supplied")]
    EmptyInput,

    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate { rate: u32 },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("frame scorer failed at window {window}: {message}")]
    Scorer { window: usize, message: String },
}
