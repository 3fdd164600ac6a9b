//! Image descriptor value object.

use serde::{Deserialize, Serialize};

use crate::id::ImageId;

/// Metadata for one stored image file, embedded in a record's ordered
/// image collection. The id is unique within the owning record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub id: ImageId,
    /// Storage path of the uploaded file.
    pub path: String,
    /// Filename as supplied by the uploader.
    pub original_name: String,
    pub mimetype: String,
    /// Size in bytes.
    pub size: u64,
}

impl ImageDescriptor {
    pub fn new(
        path: impl Into<String>,
        original_name: impl Into<String>,
        mimetype: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            id: ImageId::new(),
            path: path.into(),
            original_name: original_name.into(),
            mimetype: mimetype.into(),
            size,
        }
    }
}
