mod chunker;
mod types;

pub use chunker::attach_caption_chunks;
pub use types::{Chunk, ChunkTags, Document, Modality};
