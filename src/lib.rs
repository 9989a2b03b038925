//! Algorithmic core of a resizable split-pane layout engine.
//!
//! [`engine::SplitViewEngine`] owns a dynamic collection of view items and the sashes between
//! them, and implements the priority-steered resize algorithm, the sash drag state machine, and
//! snap-to-hidden behavior. It has no rendering or windowing dependency of its own: a binding
//! layer registers views through [`view_item::View`], drives container-resize and pointer events
//! in, and reads back sizes, offsets, and sash state to paint.

pub mod descriptor;
pub mod engine;
pub mod error;
pub mod layout_service;
pub mod orientation;
pub mod pane;
pub mod primitives;
pub mod priority;
pub mod sash;
pub mod sizing;
pub mod view_item;

pub use descriptor::ViewDescriptor;
pub use engine::{InitialView, SplitViewEngine, SplitViewOptions};
pub use error::{Result, SplitViewError};
pub use layout_service::LayoutService;
pub use orientation::Orientation;
pub use pane::{PaneView, PreferredSize};
pub use priority::Priority;
pub use sash::{Sash, SashState};
pub use sizing::ViewSizing;
pub use view_item::{View, ViewItem};
