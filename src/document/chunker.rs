use super::types::{Chunk, ChunkTags, Document, Modality};
use crate::captions::{format_timestamp, CaptionChunk};
use log::{debug, info};

/// Attach merged captions to a document as text-modality chunks.
///
/// Each caption becomes one chunk: `location` is the caption's position
/// in the merged sequence, and the tags carry its time range plus the
/// originating document URI.
pub fn attach_caption_chunks(document: &mut Document, captions: &[CaptionChunk]) {
    for caption in captions {
        debug!(
            "caption {} [{} - {}]: {}",
            caption.index,
            format_timestamp(caption.beg_in_seconds),
            format_timestamp(caption.end_in_seconds),
            caption.text
        );
        document.chunks.push(Chunk {
            modality: Modality::Text,
            location: caption.index as u32,
            text: Some(caption.text.clone()),
            tags: ChunkTags {
                beg_in_seconds: Some(caption.beg_in_seconds),
                end_in_seconds: Some(caption.end_in_seconds),
                video_uri: Some(document.uri.clone()),
                ..ChunkTags::default()
            },
        });
    }
    info!(
        "Attached {} caption chunks to {}",
        captions.len(),
        document.uri
    );
}
