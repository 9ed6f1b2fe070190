use crate::config::SegmentationConfig;
use crate::plan::WindowPlan;
use crate::types::SpeechSegment;

/// Converts padded segment bounds to the caller's requested units.
///
/// Seconds are rounded fixed-point to `time_resolution` decimal digits.
/// When the planner decimated the input, sample positions are scaled back to
/// the original rate; otherwise they pass through untouched.
pub fn format_segments(
    segments: &mut [SpeechSegment],
    config: &SegmentationConfig,
    plan: &WindowPlan,
) {
    if config.return_seconds {
        let rate = plan.effective_rate as f32;
        let scale = 10f32.powi(config.time_resolution as i32);
        for seg in segments.iter_mut() {
            seg.start = (seg.start / rate * scale).round() / scale;
            seg.end = (seg.end / rate * scale).round() / scale;
        }
    } else if plan.step > 1 {
        let step = plan.step as f32;
        for seg in segments.iter_mut() {
            seg.start *= step;
            seg.end *= step;
        }
    }
}
