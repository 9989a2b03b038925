//! The view contract consumed by the engine, and its owned wrapper around each view.

use crate::priority::Priority;

/// The contract the engine needs from whatever a caller registers as a pane.
///
/// [`crate::descriptor::ViewDescriptor`] implements this directly for callers with no further
/// adaptation to do; [`crate::pane::PaneView`] (C6) wraps a descriptor together with a
/// percentage-aware preferred size resolved against a [`crate::layout_service::LayoutService`].
pub trait View {
    fn minimum_size(&self) -> u32;
    fn maximum_size(&self) -> u32;
    fn priority(&self) -> Priority;
    fn snap(&self) -> bool;
}

impl<T: View + ?Sized> View for &T {
    fn minimum_size(&self) -> u32 {
        (**self).minimum_size()
    }

    fn maximum_size(&self) -> u32 {
        (**self).maximum_size()
    }

    fn priority(&self) -> Priority {
        (**self).priority()
    }

    fn snap(&self) -> bool {
        (**self).snap()
    }
}

/// The engine's owned wrapper around a registered view: its current size, its cached-hidden
/// size, and its placement offset along the primary axis.
///
/// Never shared: each `ViewItem` is exclusively owned by one engine instance and mutated only
/// through the engine's methods.
#[derive(Debug, Clone)]
pub struct ViewItem<V> {
    view: V,
    size: u32,
    cached_visible_size: Option<u32>,
    offset: u32,
}

impl<V: View> ViewItem<V> {
    pub(crate) fn new(view: V, size: u32) -> Self {
        let mut item = Self {
            view,
            size: 0,
            cached_visible_size: None,
            offset: 0,
        };
        item.set_size_clamped(size);
        item
    }

    pub(crate) fn hidden(view: V, cached_visible_size: u32) -> Self {
        Self {
            view,
            size: 0,
            cached_visible_size: Some(cached_visible_size),
            offset: 0,
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub const fn cached_visible_size(&self) -> Option<u32> {
        self.cached_visible_size
    }

    /// `true` iff `cached_visible_size` is undefined (P2).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.cached_visible_size.is_none()
    }

    /// The effective minimum: the descriptor's value when visible, `0` when hidden.
    #[must_use]
    pub fn effective_minimum(&self) -> u32 {
        if self.is_visible() {
            self.view.minimum_size()
        } else {
            0
        }
    }

    /// The effective maximum: the descriptor's value when visible, `0` when hidden.
    #[must_use]
    pub fn effective_maximum(&self) -> u32 {
        if self.is_visible() {
            self.view.maximum_size()
        } else {
            0
        }
    }

    /// Room available to shrink before hitting the effective minimum.
    #[must_use]
    pub fn shrink_room(&self) -> i64 {
        i64::from(self.size) - i64::from(self.effective_minimum())
    }

    /// Room available to grow before hitting the effective maximum.
    #[must_use]
    pub fn grow_room(&self) -> i64 {
        let maximum = self.effective_maximum();
        if maximum == u32::MAX {
            crate::primitives::UNBOUNDED_MAX_DELTA
        } else {
            i64::from(maximum) - i64::from(self.size)
        }
    }

    /// Sets `size`, clamping to the effective bounds (invariant P1/P2).
    pub fn set_size_clamped(&mut self, size: u32) {
        if self.is_visible() {
            self.size = size.clamp(self.view.minimum_size(), self.view.maximum_size());
        } else {
            self.size = 0;
        }
    }

    /// Applies a signed delta to the current size, clamping to the effective bounds, and
    /// returns the portion of the delta that was actually absorbed.
    pub fn apply_delta_clamped(&mut self, delta: i64) -> i64 {
        let before = i64::from(self.size);
        let minimum = i64::from(self.effective_minimum());
        let maximum = if self.effective_maximum() == u32::MAX {
            crate::primitives::UNBOUNDED_MAX_DELTA
        } else {
            i64::from(self.effective_maximum())
        };
        let after = (before + delta).clamp(minimum, maximum);
        self.size = u32::try_from(after).unwrap_or(0);
        after - before
    }

    /// Hides the item, caching its current size for later restoration (P2, P7).
    pub fn hide(&mut self) {
        if self.is_visible() {
            self.cached_visible_size = Some(self.size);
            self.size = 0;
        }
    }

    /// Shows the item, restoring its cached size clamped to its (now effective) bounds (P7).
    pub fn show(&mut self) {
        if let Some(cached) = self.cached_visible_size.take() {
            self.size = cached.clamp(self.view.minimum_size(), self.view.maximum_size());
        }
    }

    pub(crate) fn set_offset(&mut self, offset: u32) {
        self.offset = offset;
    }

    /// Unwraps the view out of its engine-owned wrapper, discarding size/offset state.
    ///
    /// Used by `move_view` and `remove_view`, which re-home or hand back the underlying view.
    pub(crate) fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::{View, ViewItem};
    use crate::priority::Priority;

    struct Fixed {
        minimum: u32,
        maximum: u32,
    }

    impl View for Fixed {
        fn minimum_size(&self) -> u32 {
            self.minimum
        }

        fn maximum_size(&self) -> u32 {
            self.maximum
        }

        fn priority(&self) -> Priority {
            Priority::Normal
        }

        fn snap(&self) -> bool {
            false
        }
    }

    #[test]
    fn new_clamps_to_bounds() {
        let item = ViewItem::new(
            Fixed {
                minimum: 30,
                maximum: 100,
            },
            10,
        );
        assert_eq!(item.size(), 30);
    }

    #[test]
    fn hide_then_show_round_trips_size() {
        let mut item = ViewItem::new(
            Fixed {
                minimum: 0,
                maximum: 1000,
            },
            200,
        );
        item.hide();
        assert!(!item.is_visible());
        assert_eq!(item.size(), 0);
        assert_eq!(item.cached_visible_size(), Some(200));

        item.show();
        assert!(item.is_visible());
        assert_eq!(item.size(), 200);
        assert_eq!(item.cached_visible_size(), None);
    }

    #[test]
    fn show_clamps_cached_size_to_current_bounds() {
        let mut item = ViewItem::new(
            Fixed {
                minimum: 0,
                maximum: 1000,
            },
            900,
        );
        item.hide();
        // Bounds shrink while hidden are reflected on restore since `view()` reports them live.
        item.show();
        assert_eq!(item.size(), 900);
    }

    #[test]
    fn apply_delta_clamped_reports_actually_applied_amount() {
        let mut item = ViewItem::new(
            Fixed {
                minimum: 10,
                maximum: 50,
            },
            20,
        );
        let applied = item.apply_delta_clamped(-100);
        assert_eq!(applied, -10);
        assert_eq!(item.size(), 10);
    }

    #[test]
    fn hidden_item_has_zero_effective_bounds() {
        let mut item = ViewItem::new(
            Fixed {
                minimum: 10,
                maximum: 50,
            },
            20,
        );
        item.hide();
        assert_eq!(item.effective_minimum(), 0);
        assert_eq!(item.effective_maximum(), 0);
    }
}
