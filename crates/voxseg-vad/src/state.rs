use tracing::trace;

use crate::config::SegmentationConfig;
use crate::constants::SILENCE_AT_MAX_SPEECH_SECS;
use crate::plan::WindowPlan;
use crate::types::RawSegment;

/// Duration thresholds converted to effective-rate sample counts.
#[derive(Debug, Clone, Copy)]
pub struct ScanParams {
    pub threshold: f32,
    pub neg_threshold: f32,
    pub min_speech_samples: f32,
    pub max_speech_samples: f32,
    pub min_silence_samples: f32,
    pub min_silence_samples_at_max: f32,
    pub pad_samples: f32,
}

impl ScanParams {
    pub fn derive(config: &SegmentationConfig, plan: &WindowPlan) -> Self {
        let rate = plan.effective_rate as f32;
        let pad_samples = rate * config.pad_ms as f32 / 1000.0;
        Self {
            threshold: config.threshold,
            neg_threshold: config.effective_neg_threshold(),
            min_speech_samples: rate * config.min_speech_duration_ms as f32 / 1000.0,
            // Padding and one window of slack are reserved out of the budget
            // so a padded segment still fits under the configured maximum.
            max_speech_samples: rate * config.max_speech_duration_s
                - plan.window_size as f32
                - 2.0 * pad_samples,
            min_silence_samples: rate * config.min_silence_duration_ms as f32 / 1000.0,
            min_silence_samples_at_max: rate * SILENCE_AT_MAX_SPEECH_SECS,
            pad_samples,
        }
    }
}

/// Scratch state for one scan. Lives only for the duration of the scan.
///
/// The reference implementation used 0 as the "unset" sentinel for the three
/// position fields, which collides with a legitimate position 0; `Option`
/// makes the distinction explicit. A pending silence can only start after a
/// trigger-on, so `Some(0)` is unreachable and the two encodings agree.
#[derive(Debug, Default)]
struct ScanState {
    /// Inside a candidate segment.
    triggered: bool,
    /// Start of the in-progress segment, valid while `triggered`.
    current_start: usize,
    /// Where the pending silence run began.
    temp_end: Option<usize>,
    /// Committed split point for an overlong segment.
    prev_end: Option<usize>,
    /// Where a segment should resume after a forced split.
    next_start: Option<usize>,
}

impl ScanState {
    fn clear_split_points(&mut self) {
        self.temp_end = None;
        self.prev_end = None;
        self.next_start = None;
    }
}

/// Runs the hysteresis scan over one probability sequence.
///
/// `total_len` is the input length in effective-rate samples; it closes a
/// segment still open when the probabilities run out. Returned segments are
/// ordered, non-overlapping, and unpadded.
pub fn scan(
    probs: &[f32],
    window_size: usize,
    total_len: usize,
    params: &ScanParams,
) -> Vec<RawSegment> {
    let mut segments = Vec::new();
    let mut state = ScanState::default();

    for (i, &prob) in probs.iter().enumerate() {
        let pos = i * window_size;

        // A speech window cancels any pending silence run. If a forced split
        // point is already committed, remember where speech picked back up.
        if prob >= params.threshold && state.temp_end.is_some() {
            state.temp_end = None;
            if let Some(prev_end) = state.prev_end {
                if state.next_start.unwrap_or(0) < prev_end {
                    state.next_start = Some(pos);
                }
            }
        }

        if prob >= params.threshold && !state.triggered {
            state.triggered = true;
            state.current_start = pos;
            continue;
        }

        if state.triggered && (pos - state.current_start) as f32 > params.max_speech_samples {
            if let Some(prev_end) = state.prev_end {
                // Split at the recorded silence rather than mid-speech.
                emit(&mut segments, state.current_start, prev_end);
                if state.next_start.unwrap_or(0) >= prev_end {
                    state.current_start = state.next_start.unwrap_or(0);
                } else {
                    state.triggered = false;
                }
                state.clear_split_points();
            } else {
                // No silence seen anywhere in the run; hard cut here.
                emit(&mut segments, state.current_start, pos);
                state.triggered = false;
                state.clear_split_points();
                continue;
            }
        }

        if prob < params.neg_threshold && state.triggered {
            let temp_end = *state.temp_end.get_or_insert(pos);
            if (pos - temp_end) as f32 > params.min_silence_samples_at_max {
                state.prev_end = Some(temp_end);
            }
            if ((pos - temp_end) as f32) < params.min_silence_samples {
                continue;
            }
            if (temp_end - state.current_start) as f32 > params.min_speech_samples {
                emit(&mut segments, state.current_start, temp_end);
            }
            state.triggered = false;
            state.clear_split_points();
        }
    }

    if state.triggered && (total_len - state.current_start) as f32 > params.min_speech_samples {
        emit(&mut segments, state.current_start, total_len);
    }

    segments
}

fn emit(segments: &mut Vec<RawSegment>, start: usize, end: usize) {
    trace!(start, end, "speech segment closed");
    segments.push(RawSegment { start, end });
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit-level scans use a 100-sample window so positions read naturally.
    const WINDOW: usize = 100;

    fn params() -> ScanParams {
        ScanParams {
            threshold: 0.5,
            neg_threshold: 0.35,
            min_speech_samples: 150.0,
            max_speech_samples: f32::INFINITY,
            min_silence_samples: 200.0,
            min_silence_samples_at_max: 98.0,
            pad_samples: 0.0,
        }
    }

    #[test]
    fn all_silence_yields_nothing() {
        let probs = vec![0.1; 20];
        let segs = scan(&probs, WINDOW, 2000, &params());
        assert!(segs.is_empty());
    }

    #[test]
    fn single_run_yields_one_segment() {
        let mut probs = vec![0.1; 4];
        probs.extend(vec![0.9; 6]);
        probs.extend(vec![0.1; 6]);
        let segs = scan(&probs, WINDOW, 1600, &params());
        assert_eq!(segs, vec![RawSegment { start: 400, end: 1000 }]);
    }

    #[test]
    fn short_dip_does_not_close_segment() {
        // One window below neg_threshold, then speech resumes: the pending
        // silence must be cancelled, not promoted to a segment end.
        let mut probs = vec![0.9; 5];
        probs.push(0.1);
        probs.extend(vec![0.9; 5]);
        probs.extend(vec![0.1; 6]);
        let segs = scan(&probs, WINDOW, 1700, &params());
        assert_eq!(segs, vec![RawSegment { start: 0, end: 1100 }]);
    }

    #[test]
    fn dip_between_thresholds_neither_closes_nor_cancels() {
        // Probabilities between neg_threshold and threshold keep the segment
        // open without starting a silence run.
        let mut probs = vec![0.9; 3];
        probs.extend(vec![0.4; 4]);
        probs.extend(vec![0.9; 3]);
        probs.extend(vec![0.1; 6]);
        let segs = scan(&probs, WINDOW, 1600, &params());
        assert_eq!(segs, vec![RawSegment { start: 0, end: 1000 }]);
    }

    #[test]
    fn too_short_run_is_dropped() {
        // 100-sample run, under the 150-sample minimum.
        let mut probs = vec![0.1; 3];
        probs.push(0.9);
        probs.extend(vec![0.1; 6]);
        let segs = scan(&probs, WINDOW, 1000, &params());
        assert!(segs.is_empty());
    }

    #[test]
    fn open_segment_closes_at_end_of_input() {
        let mut probs = vec![0.1; 3];
        probs.extend(vec![0.9; 5]);
        let segs = scan(&probs, WINDOW, 800, &params());
        assert_eq!(segs, vec![RawSegment { start: 300, end: 800 }]);
    }

    #[test]
    fn trailing_run_shorter_than_minimum_is_dropped() {
        let mut probs = vec![0.1; 8];
        probs.push(0.9);
        let segs = scan(&probs, WINDOW, 900, &params());
        assert!(segs.is_empty());
    }

    #[test]
    fn forced_split_prefers_recorded_silence() {
        let mut p = params();
        p.max_speech_samples = 1000.0;
        // 6 speech windows, a 2-window dip (long enough for the at-max split
        // point, too short for min_silence), then speech past the max.
        let mut probs = vec![0.9; 6];
        probs.extend(vec![0.1; 2]);
        probs.extend(vec![0.9; 8]);
        probs.extend(vec![0.1; 6]);
        let segs = scan(&probs, WINDOW, 2200, &p);
        assert_eq!(segs.len(), 2);
        // First segment ends at the dip start, not at the max-duration cut.
        assert_eq!(segs[0], RawSegment { start: 0, end: 600 });
        // Second resumes where speech came back after the dip.
        assert_eq!(segs[1].start, 800);
    }

    #[test]
    fn forced_split_without_silence_cuts_hard() {
        let mut p = params();
        p.max_speech_samples = 500.0;
        let mut probs = vec![0.9; 12];
        probs.extend(vec![0.1; 6]);
        let segs = scan(&probs, WINDOW, 1800, &p);
        assert!(segs.len() >= 2);
        assert_eq!(segs[0], RawSegment { start: 0, end: 600 });
        // The run re-triggers on the next speech window.
        assert_eq!(segs[1].start, 700);
    }

    #[test]
    fn segments_are_ordered_and_disjoint() {
        let mut probs = Vec::new();
        for _ in 0..3 {
            probs.extend(vec![0.9; 4]);
            probs.extend(vec![0.1; 4]);
        }
        let segs = scan(&probs, WINDOW, 2400, &params());
        assert_eq!(segs.len(), 3);
        for pair in segs.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn trigger_off_in_first_window_is_harmless() {
        // Position 0 can never carry a pending silence: a silence run only
        // starts once triggered, and trigger-on consumes its own window.
        let mut probs = vec![0.1; 1];
        probs.extend(vec![0.9; 4]);
        probs.extend(vec![0.1; 6]);
        let segs = scan(&probs, WINDOW, 1100, &params());
        assert_eq!(segs, vec![RawSegment { start: 100, end: 500 }]);
    }
}
