use super::types::RawCue;
use super::utils::parse_timestamp;
use crate::errors::VttError;
use log::{debug, warn};
use std::iter::Peekable;
use std::str::Lines;

/// Parse WebVTT source text into raw cues.
///
/// Understands the subset emitted by common decoders: an optional
/// `WEBVTT` header, NOTE/STYLE/REGION blocks (skipped), optional cue
/// identifiers, and `HH:MM:SS.mmm --> HH:MM:SS.mmm` timing lines with
/// trailing cue settings. Payload line breaks and whitespace-only payload
/// lines are preserved; rolling-caption cleanup happens in a later pass.
pub fn parse_vtt(source: &str) -> Result<Vec<RawCue>, VttError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut cues = Vec::new();
    let mut lines = source.lines().peekable();

    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("WEBVTT") {
            continue;
        }
        if trimmed.starts_with("NOTE")
            || trimmed.starts_with("STYLE")
            || trimmed.starts_with("REGION")
        {
            skip_block(&mut lines);
            continue;
        }

        let timing_line = if trimmed.contains("-->") {
            trimmed
        } else if lines.peek().is_some_and(|next| next.contains("-->")) {
            // the line was a cue identifier
            lines.next().unwrap().trim()
        } else {
            warn!("Skipping unrecognized block starting with: {}", trimmed);
            skip_block(&mut lines);
            continue;
        };

        let (start, end) = parse_timing_line(timing_line)?;

        // payload runs until a fully empty line; whitespace-only lines
        // are part of the payload (partially rendered rolling captions)
        let mut payload = String::new();
        for text_line in lines.by_ref() {
            if text_line.is_empty() {
                break;
            }
            if !payload.is_empty() {
                payload.push('\n');
            }
            payload.push_str(text_line);
        }

        cues.push(RawCue {
            start,
            end,
            text: payload,
        });
    }

    debug!("Parsed {} cues from WebVTT source", cues.len());
    Ok(cues)
}

fn parse_timing_line(line: &str) -> Result<(f64, f64), VttError> {
    let (left, right) = line
        .split_once("-->")
        .ok_or_else(|| VttError::new(format!("Missing --> in timing line: {}", line)))?;

    let start = parse_timestamp(left.trim())
        .ok_or_else(|| VttError::new(format!("Bad start timestamp: {}", left.trim())))?;

    let end_token = right.trim().split_whitespace().next().unwrap_or("");
    let end = parse_timestamp(end_token)
        .ok_or_else(|| VttError::new(format!("Bad end timestamp: {}", end_token)))?;

    Ok((start, end))
}

fn skip_block(lines: &mut Peekable<Lines<'_>>) {
    for line in lines.by_ref() {
        if line.is_empty() {
            break;
        }
    }
}
