//! The passive, per-view configuration record consumed by the engine.

use crate::error::{Result, SplitViewError};
use crate::priority::Priority;
use crate::view_item::View;

/// A view's size bounds, priority, snap flag, and preferred size.
///
/// Immutable over a view's lifetime except via [`ViewDescriptor::with_bounds`] and friends,
/// which re-validate the `minimum_size <= maximum_size` invariant on every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    minimum_size: u32,
    maximum_size: u32,
    priority: Priority,
    snap: bool,
    preferred_size: Option<u32>,
}

/// Sentinel maximum meaning "no upper bound".
pub const UNBOUNDED: u32 = u32::MAX;

impl Default for ViewDescriptor {
    fn default() -> Self {
        Self {
            minimum_size: 0,
            maximum_size: UNBOUNDED,
            priority: Priority::Normal,
            snap: false,
            preferred_size: None,
        }
    }
}

impl ViewDescriptor {
    /// Constructs a descriptor, rejecting a `minimum_size` that exceeds `maximum_size`.
    ///
    /// # Errors
    ///
    /// Returns [`SplitViewError::InvalidBounds`] if `minimum > maximum`. The violation is
    /// logged at `warn` before the error is returned, per the diagnostics policy of the
    /// construction-time validation paths.
    pub fn new(minimum: u32, maximum: u32) -> Result<Self> {
        if minimum > maximum {
            log::warn!(
                "rejecting view descriptor: minimum {minimum} exceeds maximum {maximum}"
            );
            return Err(SplitViewError::InvalidBounds {
                minimum,
                maximum,
            });
        }
        Ok(Self {
            minimum_size: minimum,
            maximum_size: maximum,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_priority(self, priority: Priority) -> Self {
        Self { priority, ..self }
    }

    #[must_use]
    pub fn with_snap(self, snap: bool) -> Self {
        Self { snap, ..self }
    }

    #[must_use]
    pub fn with_preferred_size(self, preferred_size: u32) -> Self {
        Self {
            preferred_size: Some(preferred_size),
            ..self
        }
    }

    /// Re-validates and replaces the bounds of an existing descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`SplitViewError::InvalidBounds`] if `minimum > maximum`.
    pub fn with_bounds(self, minimum: u32, maximum: u32) -> Result<Self> {
        if minimum > maximum {
            log::warn!(
                "rejecting view descriptor update: minimum {minimum} exceeds maximum {maximum}"
            );
            return Err(SplitViewError::InvalidBounds {
                minimum,
                maximum,
            });
        }
        Ok(Self {
            minimum_size: minimum,
            maximum_size: maximum,
            ..self
        })
    }

    #[must_use]
    pub const fn minimum_size(&self) -> u32 {
        self.minimum_size
    }

    #[must_use]
    pub const fn maximum_size(&self) -> u32 {
        self.maximum_size
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub const fn snap(&self) -> bool {
        self.snap
    }

    #[must_use]
    pub const fn preferred_size(&self) -> Option<u32> {
        self.preferred_size
    }

    /// Clamps `size` into this descriptor's `[minimum, maximum]` range.
    #[must_use]
    pub fn clamp(&self, size: u32) -> u32 {
        size.clamp(self.minimum_size, self.maximum_size)
    }
}

impl View for ViewDescriptor {
    fn minimum_size(&self) -> u32 {
        self.minimum_size
    }

    fn maximum_size(&self) -> u32 {
        self.maximum_size
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn snap(&self) -> bool {
        self.snap
    }
}
