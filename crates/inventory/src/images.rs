//! Image-collection merge policy.
//!
//! An update may remove images by id, append new descriptors, or replace the
//! whole collection. Removal always runs before addition; a full replacement
//! supersedes both the removal and the prior collection.

use rentory_core::{ImageDescriptor, ImageId};
use serde::{Deserialize, Serialize};

/// Requested image operations accompanying an item update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOps {
    /// Descriptors to append (or to become the whole collection when
    /// `replace_all` is set).
    pub add: Vec<ImageDescriptor>,
    /// Ids to drop from the current collection.
    pub remove: Vec<ImageId>,
    /// Replace the collection with `add` instead of appending. Ignored when
    /// `add` is empty.
    pub replace_all: bool,
}

impl ImageOps {
    /// No operation requested; the record's `images` field is left untouched.
    pub fn is_noop(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty() && !self.replace_all
    }
}

/// Compute the merged image collection.
///
/// Order: existing images keep their relative order, removals are applied
/// first, additions go to the end. When `replace_all` is set and `add` is
/// non-empty the result is exactly `add`.
///
/// This is the reference algorithm; the store-level atomic update
/// ([`crate::ItemUpdate`]) must produce identical ordering for the same
/// inputs.
pub fn merge_images(current: &[ImageDescriptor], ops: &ImageOps) -> Vec<ImageDescriptor> {
    let mut images: Vec<ImageDescriptor> = current.to_vec();

    if !ops.remove.is_empty() {
        images.retain(|img| !ops.remove.contains(&img.id));
    }

    if ops.replace_all && !ops.add.is_empty() {
        images = ops.add.clone();
    } else if !ops.add.is_empty() {
        images.extend(ops.add.iter().cloned());
    }

    images
}
