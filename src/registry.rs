// SPDX-License-Identifier: MPL-2.0
//! Page-level registry of mounted galleries.
//!
//! The host keeps one [`GalleryRegistry`] per page. Entries are keyed by the
//! `id` of their container: populated by [`GalleryRegistry::mount_all`] on page
//! ready, overwritten by [`GalleryRegistry::refresh`] when the image list
//! changes, and dropped by [`GalleryRegistry::remove`]. Controllers never look
//! themselves up here.

use crate::config::GalleryConfig;
use crate::dom::{image_wrapper, Dom, DomEvent, Role};
use crate::domain::ImageEntry;
use crate::error::{Error, Result};
use crate::gallery::{DispatchOutcome, Gallery};
use crate::variations::VariationImages;
use std::collections::BTreeMap;

/// Mounted galleries of one page, by container id.
#[derive(Debug)]
pub struct GalleryRegistry<D: Dom + Clone> {
    dom: D,
    config: GalleryConfig,
    galleries: BTreeMap<String, Gallery<D>>,
}

impl<D: Dom + Clone> GalleryRegistry<D> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(dom: D, config: GalleryConfig) -> Self {
        Self {
            dom,
            config,
            galleries: BTreeMap::new(),
        }
    }

    /// Mounts a gallery on every `pgs-gallery-wrapper` that carries an `id`.
    ///
    /// # Errors
    ///
    /// Returns the binding error of the first gallery whose markup is incomplete.
    pub fn mount_all(dom: D, config: GalleryConfig) -> Result<Self> {
        let mut registry = Self::new(dom, config);
        let root = registry.dom.document_element();
        for container in registry
            .dom
            .query_all(root, Role::GalleryWrapper.class_name())
        {
            let Some(id) = registry.dom.attribute(container, "id").filter(|id| !id.is_empty())
            else {
                tracing::debug!(?container, "skipping gallery without id");
                continue;
            };
            registry.mount(&id)?;
        }
        tracing::debug!(galleries = registry.len(), "page galleries mounted");
        Ok(registry)
    }

    /// Mounts the gallery whose container has `id`, replacing any previous
    /// entry. Returns `false` when no such container exists.
    ///
    /// # Errors
    ///
    /// Returns the binding error when the container's markup is incomplete.
    pub fn mount(&mut self, id: &str) -> Result<bool> {
        if let Some(mut previous) = self.galleries.remove(id) {
            previous.destroy();
        }
        let container = self.dom.element_by_id(id);
        match Gallery::mount(self.dom.clone(), container, &self.config)? {
            Some(gallery) => {
                self.galleries.insert(id.to_string(), gallery);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replaces the images of gallery `id`: destroys the controller, renders
    /// one wrapper per image into the stack and mounts a fresh controller.
    /// Returns `false` when no container has `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] when the container has no image stack,
    /// or the binding error of the new controller.
    pub fn refresh(&mut self, id: &str, images: &[ImageEntry]) -> Result<bool> {
        if let Some(mut previous) = self.galleries.remove(id) {
            previous.destroy();
        }
        let Some(container) = self.dom.element_by_id(id) else {
            return Ok(false);
        };
        let stack = self
            .dom
            .query(container, Role::ImageStack.class_name())
            .ok_or(Error::MissingElement {
                role: Role::ImageStack,
            })?;

        self.dom.clear_children(stack);
        for (index, image) in images.iter().enumerate() {
            self.dom.append_element(stack, &image_wrapper(index, image));
        }
        tracing::debug!(id, images = images.len(), "gallery images replaced");
        self.mount(id)
    }

    /// Refreshes every registered gallery with `images`.
    ///
    /// # Errors
    ///
    /// Stops at the first gallery that fails to refresh.
    pub fn refresh_all(&mut self, images: &[ImageEntry]) -> Result<()> {
        for id in self.ids() {
            self.refresh(&id, images)?;
        }
        Ok(())
    }

    /// Switches every gallery to the images of `variation_id`, or back to the
    /// original images for `None`. Nothing changes when the page published no
    /// list to switch to.
    ///
    /// # Errors
    ///
    /// Propagates [`GalleryRegistry::refresh_all`] errors.
    pub fn apply_variation(
        &mut self,
        variations: &VariationImages,
        variation_id: Option<&str>,
    ) -> Result<()> {
        let images = match variation_id {
            Some(id) => variations.images_for(id),
            None => variations.original(),
        };
        match images {
            Some(images) => self.refresh_all(images),
            None => {
                tracing::debug!(?variation_id, "no images for variation, galleries unchanged");
                Ok(())
            }
        }
    }

    /// Destroys and forgets gallery `id`. Returns whether it was registered.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.galleries.remove(id) {
            Some(mut gallery) => {
                gallery.destroy();
                true
            }
            None => false,
        }
    }

    /// Routes a host event to every registered gallery.
    pub fn dispatch(&mut self, event: &DomEvent) -> DispatchOutcome {
        self.galleries
            .values_mut()
            .fold(DispatchOutcome::default(), |outcome, gallery| {
                outcome.merge(gallery.dispatch(event))
            })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Gallery<D>> {
        self.galleries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Gallery<D>> {
        self.galleries.get_mut(id)
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.galleries.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }
}
