//! Shared fixtures for the engine's behavioral/integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use splitview_core::{SplitViewEngine, ViewDescriptor};

/// Shorthand for a descriptor-backed view with the given bounds; unbounded maximum unless
/// overridden with the builder methods on the returned value.
pub fn bounds(minimum: u32, maximum: u32) -> ViewDescriptor {
    ViewDescriptor::new(minimum, maximum).expect("test bounds are always ordered")
}

/// A single recorded callback invocation, tagged by which callback fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Change(Vec<u32>),
    DragStart(Vec<u32>),
    DragEnd(Vec<u32>),
    SashReset(usize),
}

/// Records every callback invocation, in firing order, so a test can assert both the
/// occurrence and the ordering of engine events (P10).
#[derive(Debug, Default, Clone)]
pub struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Wires all four callbacks on `engine` to this recorder.
    pub fn attach(&self, engine: &mut SplitViewEngine<ViewDescriptor>) {
        let log = Rc::clone(&self.0);
        engine.set_on_did_change(move |sizes| log.borrow_mut().push(Event::Change(sizes.to_vec())));

        let log = Rc::clone(&self.0);
        engine.set_on_did_drag_start(move |sizes| {
            log.borrow_mut().push(Event::DragStart(sizes.to_vec()));
        });

        let log = Rc::clone(&self.0);
        engine.set_on_did_drag_end(move |sizes| log.borrow_mut().push(Event::DragEnd(sizes.to_vec())));

        let log = Rc::clone(&self.0);
        engine.set_on_sash_reset(move |index| log.borrow_mut().push(Event::SashReset(index)));
    }
}

/// Convenience: build an engine with the given descriptors, each installed at its given size
/// and made visible, then run the first layout pass at `container`.
pub fn engine_with(
    options: splitview_core::SplitViewOptions,
    sizes: &[(ViewDescriptor, u32)],
    container: u32,
) -> SplitViewEngine<ViewDescriptor> {
    let mut engine = SplitViewEngine::new(options);
    for &(descriptor, size) in sizes {
        engine.add_view(descriptor, splitview_core::ViewSizing::Exact(size), None, true);
    }
    engine.layout(container);
    engine
}
