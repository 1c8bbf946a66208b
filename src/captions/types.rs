use serde::Serialize;

/// Default contiguity tolerance: cues must touch or overlap to merge.
pub const DEFAULT_MAX_GAP_SECONDS: f64 = 0.0;

/// One elementary subtitle event as decoded from the source track.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RawCue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl RawCue {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Deduplicated caption covering the time range of one cue run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CaptionChunk {
    pub beg_in_seconds: f64,
    pub end_in_seconds: f64,
    pub text: String,
    /// Position of this caption in the output sequence.
    pub index: usize,
}

/// What to do with cues whose text is empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTextPolicy {
    /// Blank cues are removed and never occupy an output index.
    #[default]
    Drop,
    /// Blank cues pass through as their own chunks; they never merge.
    Keep,
}

/// Tuning knobs for the merge pass. Passed explicitly so the merge stays
/// a pure function with no module-level state.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Largest gap in seconds between a run's end and the next cue's
    /// start that still counts as contiguous. Also bounds how far a cue
    /// may start before its predecessor without being an ordering error.
    pub max_gap_seconds: f64,
    pub empty_text: EmptyTextPolicy,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            max_gap_seconds: DEFAULT_MAX_GAP_SECONDS,
            empty_text: EmptyTextPolicy::default(),
        }
    }
}
