//! The adapter that implements the view contract the engine consumes.

use crate::descriptor::ViewDescriptor;
use crate::layout_service::LayoutService;
use crate::priority::Priority;
use crate::view_item::View;

/// A pane's declared preferred size, either an exact pixel value or a percentage of the
/// container resolved on demand against a [`LayoutService`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreferredSize {
    Pixels(u32),
    /// A percentage of the container's current extent, 0-100 scale (fractional permitted).
    Percent(f32),
}

/// Thin adapter implementing the view contract (C6 of the component design): it forwards
/// min/max/priority/snap from its [`ViewDescriptor`] and resolves `preferred_size` (pixels or
/// percent) against a [`LayoutService`] on demand, rather than caching a resolved value that
/// would go stale across container resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneView {
    descriptor: ViewDescriptor,
    preferred_size: Option<PreferredSize>,
}

impl PaneView {
    #[must_use]
    pub const fn new(descriptor: ViewDescriptor) -> Self {
        Self {
            descriptor,
            preferred_size: None,
        }
    }

    #[must_use]
    pub const fn with_preferred_size(self, preferred_size: PreferredSize) -> Self {
        Self {
            preferred_size: Some(preferred_size),
            ..self
        }
    }

    #[must_use]
    pub const fn descriptor(&self) -> &ViewDescriptor {
        &self.descriptor
    }

    /// Resolves this pane's preferred size, in pixels, against the given layout service.
    ///
    /// Returns `None` if no preferred size was declared.
    #[must_use]
    pub fn resolved_preferred_size(&self, layout_service: &LayoutService) -> Option<u32> {
        self.preferred_size.map(|preferred| match preferred {
            PreferredSize::Pixels(pixels) => pixels,
            PreferredSize::Percent(percent) => layout_service.resolve_percent(percent),
        })
    }
}

impl View for PaneView {
    fn minimum_size(&self) -> u32 {
        self.descriptor.minimum_size()
    }

    fn maximum_size(&self) -> u32 {
        self.descriptor.maximum_size()
    }

    fn priority(&self) -> Priority {
        self.descriptor.priority()
    }

    fn snap(&self) -> bool {
        self.descriptor.snap()
    }
}

#[cfg(test)]
mod tests {
    use super::{PaneView, PreferredSize};
    use crate::descriptor::ViewDescriptor;
    use crate::layout_service::LayoutService;
    use crate::view_item::View;

    #[test]
    fn forwards_descriptor_fields() {
        let descriptor = ViewDescriptor::new(30, 300)
            .unwrap()
            .with_snap(true);
        let pane = PaneView::new(descriptor);
        assert_eq!(pane.minimum_size(), 30);
        assert_eq!(pane.maximum_size(), 300);
        assert!(pane.snap());
    }

    #[test]
    fn resolves_pixel_preferred_size_verbatim() {
        let pane = PaneView::new(ViewDescriptor::default())
            .with_preferred_size(PreferredSize::Pixels(250));
        let layout_service = LayoutService::new(900);
        assert_eq!(pane.resolved_preferred_size(&layout_service), Some(250));
    }

    #[test]
    fn resolves_percent_preferred_size_against_container() {
        let pane = PaneView::new(ViewDescriptor::default())
            .with_preferred_size(PreferredSize::Percent(25.0));
        let layout_service = LayoutService::new(900);
        assert_eq!(pane.resolved_preferred_size(&layout_service), Some(225));
    }

    #[test]
    fn no_preferred_size_resolves_to_none() {
        let pane = PaneView::new(ViewDescriptor::default());
        let layout_service = LayoutService::new(900);
        assert_eq!(pane.resolved_preferred_size(&layout_service), None);
    }
}
