use super::types::RawCue;

/// Collapse scrolling-caption artifacts ahead of deduplication.
///
/// Rolling subtitle tracks re-emit lines that are already on screen and
/// flush cues that are still being rendered. Three rules handle this:
/// - a single-line cue whose line appeared in the previous cue is dropped,
/// - a multi-line cue repeating the previous cue's leading line keeps
///   only the new lines,
/// - a cue whose payload starts with `" \n"` or ends with `"\n "` is
///   incomplete; it is folded into the next complete cue, which inherits
///   its start time.
///
/// Remaining line breaks are joined with single spaces. Time ranges are
/// otherwise untouched; merging contiguous duplicates is the merger's job.
pub fn collapse_rolling_lines(cues: &[RawCue]) -> Vec<RawCue> {
    let mut out = Vec::new();
    let mut prev_lines: Vec<String> = Vec::new();
    let mut run_start = 0.0;
    let mut last_complete = true;

    for cue in cues {
        let lines: Vec<String> = cue
            .text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if lines.len() == 1 && prev_lines.contains(&lines[0]) {
            continue;
        }

        let text = if lines.len() > 1 && last_complete && prev_lines.contains(&lines[0]) {
            lines[1..].join(" ")
        } else {
            lines.join(" ")
        };

        let complete = !(cue.text.starts_with(" \n") || cue.text.ends_with("\n "));
        if last_complete {
            run_start = cue.start;
        }
        if complete {
            out.push(RawCue {
                start: run_start,
                end: cue.end,
                text,
            });
        }
        last_complete = complete;
        prev_lines = lines;
    }

    out
}
