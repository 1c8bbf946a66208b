use super::types::{CaptionChunk, EmptyTextPolicy, MergeOptions, RawCue};
use crate::errors::InvalidCueError;

struct OpenRun {
    beg: f64,
    end: f64,
    text: String,
}

/// Collapse duplicate cues into time-ranged caption chunks.
///
/// Consecutive cues belong to the same run when their trimmed text is
/// identical (case-sensitive) and the next cue starts no later than the
/// run's accumulated end plus `options.max_gap_seconds`. Each run becomes
/// one chunk spanning the first cue's start to the largest end seen in
/// the run. Overlapping cues with different text stay distinct.
///
/// The input must be non-decreasing in start time; a regression beyond
/// the tolerance fails with `InvalidCueError`, as does any cue with
/// `end <= start`. On error no partial output is produced.
pub fn merge_cues(
    cues: &[RawCue],
    options: &MergeOptions,
) -> Result<Vec<CaptionChunk>, InvalidCueError> {
    let mut chunks: Vec<CaptionChunk> = Vec::new();
    let mut open: Option<OpenRun> = None;
    let mut prev_start: Option<f64> = None;

    for (pos, cue) in cues.iter().enumerate() {
        if cue.end <= cue.start {
            return Err(InvalidCueError::new(format!(
                "cue {} has an empty or inverted time range ({} -> {})",
                pos, cue.start, cue.end
            )));
        }
        if let Some(prev) = prev_start {
            if prev - cue.start > options.max_gap_seconds {
                return Err(InvalidCueError::new(format!(
                    "cue {} starts at {}, before the previous cue at {}",
                    pos, cue.start, prev
                )));
            }
        }
        prev_start = Some(cue.start);

        let text = cue.text.trim();
        if text.is_empty() {
            match options.empty_text {
                EmptyTextPolicy::Drop => continue,
                EmptyTextPolicy::Keep => {
                    if let Some(run) = open.take() {
                        push_chunk(&mut chunks, run);
                    }
                    push_chunk(
                        &mut chunks,
                        OpenRun {
                            beg: cue.start,
                            end: cue.end,
                            text: String::new(),
                        },
                    );
                    continue;
                }
            }
        }

        match open.as_mut() {
            Some(run)
                if run.text == text && cue.start <= run.end + options.max_gap_seconds =>
            {
                // accumulate with max so a nested cue cannot shrink the run
                run.end = run.end.max(cue.end);
            }
            _ => {
                if let Some(run) = open.take() {
                    push_chunk(&mut chunks, run);
                }
                open = Some(OpenRun {
                    beg: cue.start,
                    end: cue.end,
                    text: text.to_string(),
                });
            }
        }
    }

    if let Some(run) = open {
        push_chunk(&mut chunks, run);
    }

    Ok(chunks)
}

fn push_chunk(chunks: &mut Vec<CaptionChunk>, run: OpenRun) {
    let index = chunks.len();
    chunks.push(CaptionChunk {
        beg_in_seconds: run.beg,
        end_in_seconds: run.end,
        text: run.text,
        index,
    });
}
