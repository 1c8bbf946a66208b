use serde::Serialize;

/// Semantic type of a chunk's payload.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Image,
    Audio,
    Text,
}

/// Timing and provenance tags carried by a chunk. Only the tags relevant
/// to the chunk's modality are set.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ChunkTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beg_in_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_in_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_uri: Option<String>,
}

/// Child record attached to a parent video document.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Chunk {
    pub modality: Modality,
    pub location: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub tags: ChunkTags,
}

impl Chunk {
    /// Image-frame chunk at a frame index, tagged with its timestamp.
    pub fn image(location: u32, timestamp: f64) -> Self {
        Self {
            modality: Modality::Image,
            location,
            text: None,
            tags: ChunkTags {
                timestamp: Some(timestamp),
                ..ChunkTags::default()
            },
        }
    }

    /// Audio-track chunk tagged with its sample rate.
    pub fn audio(sample_rate: u32) -> Self {
        Self {
            modality: Modality::Audio,
            location: 0,
            text: None,
            tags: ChunkTags {
                sample_rate: Some(sample_rate),
                ..ChunkTags::default()
            },
        }
    }
}

/// Parent record for one source video.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub uri: String,
    pub chunks: Vec<Chunk>,
}

impl Document {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            chunks: Vec::new(),
        }
    }
}
