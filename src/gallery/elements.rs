// SPDX-License-Identifier: MPL-2.0
//! Typed binding of the gallery markup.
//!
//! Structural lookups by class name happen once, here. Handlers then work
//! with the resolved [`NodeId`]s instead of re-querying on every event.

use crate::dom::{Dom, NodeId, Role};
use crate::domain::ImageEntry;
use crate::error::{Error, Result};

/// One slide of the image stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub wrapper: NodeId,
    /// The zoomable image, when the wrapper has one.
    pub image: Option<NodeId>,
    pub entry: Option<ImageEntry>,
}

/// Resolved elements of one gallery container.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryElements {
    pub container: NodeId,
    pub stack: NodeId,
    pub slides: Vec<Slide>,
    pub prev_button: NodeId,
    pub next_button: NodeId,
    pub track: NodeId,
    pub thumb: NodeId,
    pub dot_container: NodeId,
    pub lightbox: NodeId,
    pub lightbox_image: NodeId,
    pub lightbox_close: NodeId,
}

impl GalleryElements {
    /// Binds every structural role below `container`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] for the first required role that is
    /// absent. Slides are not required; an empty stack binds fine.
    pub fn bind<D: Dom>(dom: &D, container: NodeId) -> Result<Self> {
        let stack = require(dom, container, Role::ImageStack)?;
        let slides = dom
            .query_all(stack, Role::ImageWrapper.class_name())
            .into_iter()
            .map(|wrapper| {
                let image = dom.query(wrapper, Role::ZoomImage.class_name());
                let entry = image.map(|image| {
                    ImageEntry::new(
                        dom.attribute(image, "src").unwrap_or_default(),
                        dom.attribute(image, "alt").unwrap_or_default(),
                    )
                });
                Slide {
                    wrapper,
                    image,
                    entry,
                }
            })
            .collect();

        Ok(Self {
            container,
            stack,
            slides,
            prev_button: require(dom, container, Role::PrevButton)?,
            next_button: require(dom, container, Role::NextButton)?,
            track: require(dom, container, Role::SliderTrack)?,
            thumb: require(dom, container, Role::SliderThumb)?,
            dot_container: require(dom, container, Role::DotContainer)?,
            lightbox: require(dom, container, Role::Lightbox)?,
            lightbox_image: require(dom, container, Role::LightboxImage)?,
            lightbox_close: require(dom, container, Role::LightboxClose)?,
        })
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Image entries of the slides that have an image, in slide order.
    #[must_use]
    pub fn images(&self) -> Vec<ImageEntry> {
        self.slides
            .iter()
            .filter_map(|slide| slide.entry.clone())
            .collect()
    }
}

fn require<D: Dom>(dom: &D, container: NodeId, role: Role) -> Result<NodeId> {
    dom.query(container, role.class_name())
        .ok_or(Error::MissingElement { role })
}
