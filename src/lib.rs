pub mod captions;
pub use captions::{
    merge_cues, CaptionChunk, EmptyTextPolicy, MergeOptions, RawCue, DEFAULT_MAX_GAP_SECONDS,
};

pub mod document;
pub use document::{attach_caption_chunks, Chunk, ChunkTags, Document, Modality};

pub mod errors;
pub use errors::{InvalidCueError, VideoChunkerError, VideoChunkerResult, VttError};

use log::info;
use std::path::Path;

/// Parse WebVTT source text and reduce it to deduplicated caption chunks.
pub fn captions_from_vtt(
    source: &str,
    options: &MergeOptions,
) -> VideoChunkerResult<Vec<CaptionChunk>> {
    let cues = captions::parse_vtt(source)?;
    info!("Decoded {} raw cues", cues.len());

    let cues = captions::collapse_rolling_lines(&cues);
    let chunks = merge_cues(&cues, options)?;
    info!("Merged into {} caption chunks", chunks.len());
    Ok(chunks)
}

/// Read a WebVTT file from disk and reduce it to caption chunks.
pub fn load_vtt_captions(
    path: impl AsRef<Path>,
    options: &MergeOptions,
) -> VideoChunkerResult<Vec<CaptionChunk>> {
    let source = std::fs::read_to_string(path)?;
    captions_from_vtt(&source, options)
}

/// Build a document for a video source with its captions attached.
pub fn caption_document(
    uri: impl Into<String>,
    source: &str,
    options: &MergeOptions,
) -> VideoChunkerResult<Document> {
    let chunks = captions_from_vtt(source, options)?;
    let mut document = Document::new(uri);
    attach_caption_chunks(&mut document, &chunks);
    Ok(document)
}
