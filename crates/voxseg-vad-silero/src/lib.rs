pub mod config;
#[cfg(feature = "silero")]
pub mod scorer;

pub use config::SileroScorerConfig;

#[cfg(feature = "silero")]
pub use scorer::SileroScorer;
