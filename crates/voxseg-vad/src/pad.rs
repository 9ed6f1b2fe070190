use crate::types::{RawSegment, SpeechSegment};

/// Applies the symmetric padding margin to a list of scanned segments.
///
/// Neighbors closer than `2 * pad_samples` split the gap evenly so the padded
/// bounds meet without overlapping; everything else gets the full margin.
/// The first start is clamped at 0, the last end is extended unconditionally.
pub fn pad_segments(raw: &[RawSegment], pad_samples: f32) -> Vec<SpeechSegment> {
    let mut segments: Vec<SpeechSegment> = raw
        .iter()
        .map(|s| SpeechSegment {
            start: s.start as f32,
            end: s.end as f32,
        })
        .collect();

    let n = segments.len();
    for i in 0..n {
        if i == 0 {
            segments[i].start = (segments[i].start - pad_samples).max(0.0);
        }
        if i + 1 < n {
            let gap = segments[i + 1].start - segments[i].end;
            if gap < 2.0 * pad_samples {
                let half = gap / 2.0;
                segments[i].end += half;
                segments[i + 1].start = (segments[i + 1].start - half).max(0.0);
            } else {
                segments[i].end += pad_samples;
                segments[i + 1].start = (segments[i + 1].start - pad_samples).max(0.0);
            }
        } else {
            segments[i].end += pad_samples;
        }
    }

    segments
}
