// SPDX-License-Identifier: MPL-2.0
//! Variation image lists.
//!
//! Store pages publish the gallery images of the product and of each of its
//! variations as JSON:
//!
//! ```json
//! {
//!   "original_images": [{ "url": "front.jpg", "alt": "Front" }],
//!   "variation_images": { "42": [{ "url": "red.jpg", "alt": "Red" }] }
//! }
//! ```
//!
//! Selecting a variation swaps every gallery over to that variation's list;
//! resetting the selection swaps back to the original list.

use crate::domain::ImageEntry;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct ImageDto {
    url: String,
    #[serde(default)]
    alt: String,
}

impl From<ImageDto> for ImageEntry {
    fn from(dto: ImageDto) -> Self {
        ImageEntry::new(dto.url, dto.alt)
    }
}

#[derive(Debug, Deserialize)]
struct VariationParamsDto {
    #[serde(default)]
    original_images: Option<Vec<ImageDto>>,
    #[serde(default)]
    variation_images: BTreeMap<String, Vec<ImageDto>>,
}

/// Image lists of a product and its variations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariationImages {
    original: Option<Vec<ImageEntry>>,
    variations: BTreeMap<String, Vec<ImageEntry>>,
}

impl VariationImages {
    #[must_use]
    pub fn new(
        original: Option<Vec<ImageEntry>>,
        variations: BTreeMap<String, Vec<ImageEntry>>,
    ) -> Self {
        Self {
            original,
            variations,
        }
    }

    /// Parses the JSON parameters published by the store page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Variations`] if the document is not valid JSON or does
    /// not have the expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let dto: VariationParamsDto =
            serde_json::from_str(json).map_err(|err| Error::Variations(err.to_string()))?;
        Ok(Self {
            original: dto
                .original_images
                .map(|images| images.into_iter().map(ImageEntry::from).collect()),
            variations: dto
                .variation_images
                .into_iter()
                .map(|(id, images)| (id, images.into_iter().map(ImageEntry::from).collect()))
                .collect(),
        })
    }

    /// Images to show for `variation_id`: its own list when it has images,
    /// otherwise the original list.
    #[must_use]
    pub fn images_for(&self, variation_id: &str) -> Option<&[ImageEntry]> {
        match self.variations.get(variation_id) {
            Some(images) if !images.is_empty() => Some(images),
            _ => self.original(),
        }
    }

    /// The product's own images, if the page published them.
    #[must_use]
    pub fn original(&self) -> Option<&[ImageEntry]> {
        self.original.as_deref()
    }

    pub fn variation_ids(&self) -> impl Iterator<Item = &str> {
        self.variations.keys().map(String::as_str)
    }
}
