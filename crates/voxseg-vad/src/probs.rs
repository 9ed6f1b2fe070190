use crate::error::SegmentationError;
use crate::plan::WindowPlan;
use crate::FrameScorer;

/// Scores the input one window at a time and collects the probabilities.
///
/// The scorer is recurrent, so windows are submitted strictly in order and
/// exactly once each. The final partial window is zero-padded to full size.
/// Any scorer error aborts the call; the scored prefix is discarded.
pub fn collect_probs(
    samples: &[f32],
    plan: &WindowPlan,
    scorer: &mut dyn FrameScorer,
) -> Result<Vec<f32>, SegmentationError> {
    let effective_len = plan.effective_len(samples.len());
    let n_windows = effective_len.div_ceil(plan.window_size);
    let mut probs = Vec::with_capacity(n_windows);
    let mut scratch = vec![0.0f32; plan.window_size];

    for w in 0..n_windows {
        let start = w * plan.window_size;
        let remaining = effective_len - start;

        let window: &[f32] = if plan.step == 1 && remaining >= plan.window_size {
            &samples[start..start + plan.window_size]
        } else {
            scratch.fill(0.0);
            for (k, slot) in scratch.iter_mut().enumerate().take(remaining) {
                *slot = samples[(start + k) * plan.step];
            }
            &scratch
        };

        let prob = scorer
            .score(window)
            .map_err(|message| SegmentationError::Scorer { window: w, message })?;
        probs.push(prob);
    }

    Ok(probs)
}
