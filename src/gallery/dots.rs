// SPDX-License-Identifier: MPL-2.0
//! Dot indicators.

use crate::dom::{class, Dom, NewElement, NodeId, Role};

/// Replaces the content of `container` with one `div.dot[data-index]` per slide.
pub fn generate<D: Dom>(dom: &mut D, container: NodeId, count: usize) -> Vec<NodeId> {
    dom.clear_children(container);
    (0..count)
        .map(|index| {
            dom.append_element(
                container,
                &NewElement::new("div")
                    .class(Role::Dot.class_name())
                    .attr("data-index", index.to_string()),
            )
        })
        .collect()
}

/// Marks the dot at `index` active and every other dot inactive.
pub fn sync<D: Dom>(dom: &mut D, dots: &[NodeId], index: usize) {
    for (position, dot) in dots.iter().enumerate() {
        dom.set_class(*dot, class::ACTIVE, position == index);
    }
}
