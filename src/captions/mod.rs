mod merger;
mod normalizer;
mod parser;
mod types;
mod utils;

pub use merger::merge_cues;
pub use normalizer::collapse_rolling_lines;
pub use parser::parse_vtt;
pub use types::{CaptionChunk, EmptyTextPolicy, MergeOptions, RawCue, DEFAULT_MAX_GAP_SECONDS};
pub use utils::{format_timestamp, parse_timestamp};
