//! The centerpiece: owns the view items and sashes, and runs the resize algorithm (C4).

use crate::error::{Result, SplitViewError};
use crate::orientation::Orientation;
use crate::primitives::{clamp_delta, UNBOUNDED_MAX_DELTA, UNBOUNDED_MIN_DELTA};
use crate::priority::Priority;
use crate::sash::{Sash, SashState};
use crate::sizing::ViewSizing;
use crate::view_item::{View, ViewItem};

/// Construction-time options for a [`SplitViewEngine`].
#[derive(Debug, Clone, Copy)]
pub struct SplitViewOptions {
    pub orientation: Orientation,
    /// When true, `layout` resizes proportionally from the last-captured proportions once one
    /// exists, instead of anchoring the resize delta at the last view.
    pub proportional_layout: bool,
    /// The orthogonal-axis thickness reported on every sash this engine creates.
    pub sash_orthogonal_size: Option<u32>,
    /// Whether the view at index 0 is eligible to be a sash drag's snap target.
    pub start_snapping_enabled: bool,
    /// Whether the last view is eligible to be a sash drag's snap target.
    pub end_snapping_enabled: bool,
}

impl Default for SplitViewOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            proportional_layout: false,
            sash_orthogonal_size: None,
            start_snapping_enabled: true,
            end_snapping_enabled: true,
        }
    }
}

/// One entry of the initial view set installed by [`SplitViewEngine::with_initial_views`].
#[derive(Debug, Clone, Copy)]
pub struct InitialView<V> {
    pub view: V,
    pub size: u32,
    pub visible: bool,
}

/// A sash drag's fixed snap candidate, captured at drag start.
#[derive(Debug, Clone, Copy)]
struct SnapTarget {
    index: usize,
    limit_delta: i64,
}

/// The live state of an in-progress sash drag.
#[derive(Debug, Clone, Copy)]
struct DragState {
    anchor: usize,
    start_position: i64,
    snap_before: Option<SnapTarget>,
    snap_after: Option<SnapTarget>,
}

type ChangeCallback = Box<dyn FnMut(&[u32])>;
type ResetCallback = Box<dyn FnMut(usize)>;

/// The algorithmic core of a resizable split-pane layout: a dynamic, owned collection of view
/// items and the sashes between them.
///
/// Single-threaded by design (§5): every mutator takes `&mut self`, so a caller embeds one
/// engine per split view behind whatever synchronization its own binding needs; the engine
/// itself performs none.
pub struct SplitViewEngine<V> {
    orientation: Orientation,
    size: u32,
    content_size: u32,
    proportions: Option<Vec<f64>>,
    proportional_layout: bool,
    sash_orthogonal_size: Option<u32>,
    start_snapping_enabled: bool,
    end_snapping_enabled: bool,
    view_items: Vec<ViewItem<V>>,
    sashes: Vec<Sash>,
    drag_state: Option<DragState>,
    on_did_change: Option<ChangeCallback>,
    on_did_drag_start: Option<ChangeCallback>,
    on_did_drag_end: Option<ChangeCallback>,
    on_sash_reset: Option<ResetCallback>,
}

impl<V> std::fmt::Debug for SplitViewEngine<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitViewEngine")
            .field("orientation", &self.orientation)
            .field("size", &self.size)
            .field("content_size", &self.content_size)
            .field("view_count", &self.view_items.len())
            .field("dragging", &self.drag_state.is_some())
            .finish_non_exhaustive()
    }
}

impl<V: View> SplitViewEngine<V> {
    #[must_use]
    pub fn new(options: SplitViewOptions) -> Self {
        Self {
            orientation: options.orientation,
            size: 0,
            content_size: 0,
            proportions: None,
            proportional_layout: options.proportional_layout,
            sash_orthogonal_size: options.sash_orthogonal_size,
            start_snapping_enabled: options.start_snapping_enabled,
            end_snapping_enabled: options.end_snapping_enabled,
            view_items: Vec::new(),
            sashes: Vec::new(),
            drag_state: None,
            on_did_change: None,
            on_did_drag_start: None,
            on_did_drag_end: None,
            on_sash_reset: None,
        }
    }

    /// Builds an engine and installs an initial set of views before the first layout pass.
    #[must_use]
    pub fn with_initial_views(
        options: SplitViewOptions,
        views: impl IntoIterator<Item = InitialView<V>>,
    ) -> Self {
        let mut engine = Self::new(options);
        for initial in views {
            let sizing = if initial.visible {
                ViewSizing::Exact(initial.size)
            } else {
                ViewSizing::Invisible(Some(initial.size))
            };
            engine.add_view(initial.view, sizing, None, true);
        }
        engine.relayout();
        engine
    }

    // -- accessors --------------------------------------------------------

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub const fn content_size(&self) -> u32 {
        self.content_size
    }

    #[must_use]
    pub fn view_count(&self) -> usize {
        self.view_items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view_items.is_empty()
    }

    #[must_use]
    pub fn view(&self, index: usize) -> Option<&V> {
        self.view_items.get(index).map(ViewItem::view)
    }

    #[must_use]
    pub fn sashes(&self) -> &[Sash] {
        &self.sashes
    }

    #[must_use]
    pub fn sash(&self, index: usize) -> Option<&Sash> {
        self.sashes.get(index)
    }

    #[must_use]
    pub fn get_view_size(&self, index: usize) -> Option<u32> {
        self.view_items.get(index).map(ViewItem::size)
    }

    /// # Errors
    ///
    /// Returns [`SplitViewError::IndexOutOfBounds`] if `index` is not a valid view index.
    pub fn is_view_visible(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.view_items[index].is_visible())
    }

    // -- callbacks ----------------------------------------------------------
    //
    // Every callback below runs synchronously, after the mutation it reports on has already
    // committed. A callback that reaches back into this same engine (through an `Rc<RefCell<_>>`
    // or similar shared handle the binding holds) will hit a runtime borrow panic rather than a
    // compile-time error, since the closure's capture is independent of the `&mut self` this
    // method is called through; callbacks must not assume they can mutate the engine they were
    // registered on.

    pub fn set_on_did_change<F: FnMut(&[u32]) + 'static>(&mut self, f: F) {
        self.on_did_change = Some(Box::new(f));
    }

    pub fn set_on_did_drag_start<F: FnMut(&[u32]) + 'static>(&mut self, f: F) {
        self.on_did_drag_start = Some(Box::new(f));
    }

    pub fn set_on_did_drag_end<F: FnMut(&[u32]) + 'static>(&mut self, f: F) {
        self.on_did_drag_end = Some(Box::new(f));
    }

    pub fn set_on_sash_reset<F: FnMut(usize) + 'static>(&mut self, f: F) {
        self.on_sash_reset = Some(Box::new(f));
    }

    // -- membership -----------------------------------------------------------

    /// Inserts a view at `index` (defaulting to the end), sized per `sizing`.
    ///
    /// Calls `relayout` unless `skip_layout` is set, letting a caller batch several insertions
    /// before paying for a single layout pass.
    pub fn add_view(
        &mut self,
        view: V,
        sizing: ViewSizing,
        index: Option<usize>,
        skip_layout: bool,
    ) {
        let index = index.unwrap_or(self.view_items.len()).min(self.view_items.len());
        let redistribute = matches!(sizing, ViewSizing::Distribute);
        let item = self.build_item(view, sizing);
        self.view_items.insert(index, item);
        self.sync_sash_count_after_insert(index);
        self.sync_content_size();
        if redistribute {
            self.distribute_sizes_internal();
        }
        log::debug!(
            "view inserted at index {index}, {} views now registered",
            self.view_items.len()
        );
        if !skip_layout {
            self.relayout();
        }
    }

    fn build_item(&self, view: V, sizing: ViewSizing) -> ViewItem<V> {
        match sizing {
            ViewSizing::Exact(size) => ViewItem::new(view, size),
            ViewSizing::Distribute => ViewItem::new(view, view.minimum_size()),
            ViewSizing::Split(neighbor) => {
                let half = self.view_items.get(neighbor).map_or(0, |it| it.size() / 2);
                ViewItem::new(view, half)
            }
            ViewSizing::Invisible(cached) => {
                let fallback = cached.unwrap_or_else(|| view.minimum_size());
                ViewItem::hidden(view, fallback)
            }
        }
    }

    /// Removes the view at `index`, along with its paired sash at `max(0, index - 1)`.
    ///
    /// When `redistribute` is set, remaining flexible views are re-equalised before the
    /// resulting relayout runs.
    ///
    /// # Errors
    ///
    /// Returns [`SplitViewError::IndexOutOfBounds`] if `index` is not a valid view index.
    pub fn remove_view(&mut self, index: usize, redistribute: bool) -> Result<V> {
        self.check_index(index)?;
        let item = self.view_items.remove(index);
        self.sync_content_size();
        if !self.sashes.is_empty() {
            let sash_index = index.saturating_sub(1).min(self.sashes.len() - 1);
            self.sashes.remove(sash_index);
        }
        if redistribute {
            self.distribute_sizes_internal();
        }
        log::debug!(
            "view removed from index {index}, {} views remain",
            self.view_items.len()
        );
        self.relayout();
        Ok(item.into_view())
    }

    /// Moves the view at `from` to `to`, preserving its size and visibility.
    ///
    /// # Errors
    ///
    /// Returns [`SplitViewError::IndexOutOfBounds`] if `from` is not a valid view index.
    pub fn move_view(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        let to = to.min(self.view_items.len().saturating_sub(1));
        if from == to {
            return Ok(());
        }
        let item = self.view_items.remove(from);
        if !self.sashes.is_empty() {
            let sash_index = from.saturating_sub(1).min(self.sashes.len() - 1);
            self.sashes.remove(sash_index);
        }
        let sizing = if item.is_visible() {
            ViewSizing::Exact(item.size())
        } else {
            ViewSizing::Invisible(item.cached_visible_size())
        };
        let view = item.into_view();
        let insert_at = to.min(self.view_items.len());
        let reinserted = self.build_item(view, sizing);
        self.view_items.insert(insert_at, reinserted);
        self.sync_sash_count_after_insert(insert_at);
        self.sync_content_size();
        log::debug!("view moved from {from} to {insert_at}");
        self.relayout();
        Ok(())
    }

    fn sync_sash_count_after_insert(&mut self, index: usize) {
        let required = self.view_items.len().saturating_sub(1);
        if self.sashes.len() < required {
            let insert_at = index.min(self.sashes.len());
            self.sashes.insert(insert_at, Sash::new(self.sash_orthogonal_size));
        }
    }

    /// Keeps `content_size` in sync with the raw sum of installed sizes immediately after a
    /// membership change, so a following `layout` call computes its delta against the views'
    /// actual installed sizes rather than a stale or zeroed baseline.
    fn sync_content_size(&mut self) {
        self.content_size = self
            .view_items
            .iter()
            .map(ViewItem::size)
            .fold(0u32, u32::saturating_add);
    }

    // -- sizing -----------------------------------------------------------------

    /// Re-equalises sizes across every visible view whose `maximum - minimum > 0`, leaving
    /// fixed-size and hidden views untouched.
    pub fn distribute_view_sizes(&mut self) {
        self.distribute_sizes_internal();
        self.relayout();
    }

    fn distribute_sizes_internal(&mut self) {
        let flexible: Vec<usize> = (0..self.view_items.len())
            .filter(|&i| {
                let item = &self.view_items[i];
                item.is_visible() && item.view().maximum_size() > item.view().minimum_size()
            })
            .collect();
        if flexible.is_empty() {
            return;
        }
        let fixed_total: u32 = (0..self.view_items.len())
            .filter(|i| !flexible.contains(i))
            .map(|i| self.view_items[i].size())
            .sum();
        let available = self.size.saturating_sub(fixed_total);
        let count = flexible.len() as u32;
        let share = available / count;
        let remainder = available % count;
        for (rank, &i) in flexible.iter().enumerate() {
            let extra = u32::from((rank as u32) < remainder);
            self.view_items[i].set_size_clamped(share + extra);
        }
    }

    /// Clamps `size` to `[minimum, min(maximum, size)]` and relayouts with the view biased to
    /// low priority, so other views absorb the resulting slack first.
    pub fn resize_view(&mut self, index: usize, size: u32) {
        let Some(item) = self.view_items.get_mut(index) else {
            return;
        };
        let upper = item.view().maximum_size().min(self.size);
        let clamped = size.clamp(item.view().minimum_size(), upper);
        item.set_size_clamped(clamped);
        self.distribute_empty_space(Some(index));
        self.layout_views();
        self.finish_mutation();
    }

    /// Sets every view's size directly (same per-item clamp as `resize_view`), then re-derives
    /// proportions from the result and re-applies them against the current container size.
    ///
    /// # Errors
    ///
    /// Returns [`SplitViewError::MismatchedDefaults`] if `sizes.len()` does not match the
    /// number of registered views.
    pub fn resize_views(&mut self, sizes: &[u32]) -> Result<()> {
        if sizes.len() != self.view_items.len() {
            return Err(SplitViewError::MismatchedDefaults {
                expected: self.view_items.len(),
                actual: sizes.len(),
            });
        }
        for (item, &requested) in self.view_items.iter_mut().zip(sizes) {
            item.set_size_clamped(requested);
        }
        self.distribute_empty_space(None);
        self.layout_views();
        self.save_proportions();
        let size = self.size;
        self.apply_proportions(size);
        self.finish_mutation();
        Ok(())
    }

    /// Shows or hides the view at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SplitViewError::IndexOutOfBounds`] if `index` is not a valid view index.
    pub fn set_view_visible(&mut self, index: usize, visible: bool) -> Result<()> {
        self.check_index(index)?;
        if self.view_items[index].is_visible() == visible {
            return Ok(());
        }
        if visible {
            self.view_items[index].show();
        } else {
            self.view_items[index].hide();
        }
        log::debug!("view {index} visibility set to {visible}");
        // A visibility flip is a pure capacity change, not a resize request, so it reconciles
        // like `resize_view` does: the toggled view keeps the size it was just shown/hidden at,
        // and its neighbors absorb whatever slack that leaves, biased away from `index` (P7).
        self.distribute_empty_space(Some(index));
        self.layout_views();
        self.finish_mutation();
        Ok(())
    }

    // -- layout -----------------------------------------------------------------

    /// Resizes the container to `size`. If proportions are cached and proportional layout is
    /// enabled, re-derives sizes from them; otherwise applies a single resize-delta equal to
    /// `size - max(old_size, old_content_size)`, anchored at the last view with priority
    /// steering.
    pub fn layout(&mut self, size: u32) {
        if self.view_items.is_empty() {
            self.size = size;
            return;
        }
        let old_size = self.size;
        let old_content_size = self.content_size;
        self.size = size;
        if self.proportional_layout && self.proportions.is_some() {
            self.apply_proportions(size);
        } else {
            let anchor = self.view_items.len() - 1;
            let delta = i64::from(size) - i64::from(old_size.max(old_content_size));
            self.resize_with_priority(anchor, delta, None, None, None);
        }
        self.finish_mutation();
    }

    /// Re-derives layout against the current container size.
    ///
    /// Before the first explicit `layout` call, `self.size` is still its construction-time `0`,
    /// which is not a real container — routing through `layout` there would read it as "shrink
    /// the container to nothing" and clamp every view down to its minimum. In that case this
    /// only settles offsets/content_size/proportions from the views' current sizes instead.
    fn relayout(&mut self) {
        if self.size == 0 {
            self.layout_views();
            self.finish_mutation();
            return;
        }
        self.layout(self.size);
    }

    fn apply_proportions(&mut self, size: u32) {
        let Some(proportions) = self.proportions.clone() else {
            return;
        };
        for (item, &proportion) in self.view_items.iter_mut().zip(proportions.iter()) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let target = (proportion * f64::from(size)).round_ties_even().max(0.0) as u32;
            item.set_size_clamped(target);
        }
        self.distribute_empty_space(None);
        self.layout_views();
    }

    fn save_proportions(&mut self) {
        if self.content_size == 0 || self.view_items.is_empty() {
            return;
        }
        let total = f64::from(self.content_size);
        self.proportions = Some(
            self.view_items
                .iter()
                .map(|item| f64::from(item.size()) / total)
                .collect(),
        );
    }

    fn finish_mutation(&mut self) {
        self.save_proportions();
        self.emit_on_did_change();
    }

    fn layout_views(&mut self) {
        let mut offset: u32 = 0;
        for item in &mut self.view_items {
            item.set_offset(offset);
            offset = offset.saturating_add(item.size());
        }
        self.content_size = offset;
        let mut prefix: u32 = 0;
        for (i, sash) in self.sashes.iter_mut().enumerate() {
            prefix = prefix.saturating_add(self.view_items[i].size());
            sash.set_position(prefix);
        }
        self.compute_sash_enablement();
    }

    fn compute_sash_enablement(&mut self) {
        let n = self.view_items.len();
        if n == 0 {
            return;
        }
        let mut collapses_down = vec![false; n];
        let mut expands_down = vec![false; n];
        let (mut running_collapse, mut running_expand) = (false, false);
        for k in 0..n {
            running_collapse |= self.view_items[k].shrink_room() > 0;
            running_expand |= self.view_items[k].grow_room() > 0;
            collapses_down[k] = running_collapse;
            expands_down[k] = running_expand;
        }
        let mut collapses_up = vec![false; n];
        let mut expands_up = vec![false; n];
        let (mut running_collapse, mut running_expand) = (false, false);
        for k in (0..n).rev() {
            running_collapse |= self.view_items[k].shrink_room() > 0;
            running_expand |= self.view_items[k].grow_room() > 0;
            collapses_up[k] = running_collapse;
            expands_up[k] = running_expand;
        }
        for i in 0..self.sashes.len() {
            let can_move_left = !(collapses_down[i] && expands_up[i + 1]);
            let can_move_right = !(expands_down[i] && collapses_up[i + 1]);
            let mut state = match (can_move_left, can_move_right) {
                (true, true) => SashState::Disabled,
                (true, false) => SashState::Minimum,
                (false, true) => SashState::Maximum,
                (false, false) => SashState::Enabled,
            };
            if state == SashState::Disabled {
                let up: Vec<usize> = (0..=i).rev().collect();
                let down: Vec<usize> = ((i + 1)..n).collect();
                if self.find_hidden_snap(&up) {
                    state = SashState::Minimum;
                } else if self.find_hidden_snap(&down) {
                    state = SashState::Maximum;
                }
            }
            self.sashes[i].set_state(state);
        }
    }

    fn find_hidden_snap(&self, indexes: &[usize]) -> bool {
        indexes.iter().any(|&idx| self.is_snap_eligible(idx) && {
            let item = &self.view_items[idx];
            item.view().snap() && !item.is_visible()
        })
    }

    fn is_snap_eligible(&self, idx: usize) -> bool {
        if idx == 0 && !self.start_snapping_enabled {
            return false;
        }
        if idx + 1 == self.view_items.len() && !self.end_snapping_enabled {
            return false;
        }
        true
    }

    // -- the resize algorithm (§4.3) --------------------------------------------

    fn resize_with_priority(
        &mut self,
        anchor: usize,
        delta: i64,
        overload: Option<(i64, i64)>,
        snap_before: Option<SnapTarget>,
        snap_after: Option<SnapTarget>,
    ) {
        if self.view_items.is_empty() {
            return;
        }
        let anchor = anchor.min(self.view_items.len() - 1);
        let up_raw: Vec<usize> = (0..=anchor).rev().collect();
        let down_raw: Vec<usize> = ((anchor + 1)..self.view_items.len()).collect();

        if snap_before.is_some() || snap_after.is_some() {
            let mut changed = false;
            if let Some(target) = snap_before {
                let desired = delta >= target.limit_delta;
                if desired != self.view_items[target.index].is_visible() {
                    self.set_item_visible(target.index, desired);
                    changed = true;
                }
            }
            if let Some(target) = snap_after {
                let desired = delta < target.limit_delta;
                if desired != self.view_items[target.index].is_visible() {
                    self.set_item_visible(target.index, desired);
                    changed = true;
                }
            }
            if changed {
                log::debug!("sash drag snapped a neighbor at anchor {anchor}");
                self.resize_with_priority(anchor, delta, None, None, None);
                return;
            }
        }

        let min_delta_up = -self.sum_shrink_room(&up_raw);
        let max_delta_up = self.sum_grow_room(&up_raw);
        let max_delta_down = if down_raw.is_empty() {
            UNBOUNDED_MAX_DELTA
        } else {
            self.sum_shrink_room(&down_raw)
        };
        let min_delta_down = if down_raw.is_empty() {
            UNBOUNDED_MIN_DELTA
        } else {
            -self.sum_grow_room(&down_raw)
        };
        let (overload_min, overload_max) = overload.unwrap_or((UNBOUNDED_MIN_DELTA, UNBOUNDED_MAX_DELTA));
        let lower = min_delta_up.max(min_delta_down).max(overload_min);
        let upper = max_delta_up.min(max_delta_down).min(overload_max);
        let clamped = clamp_delta(delta, lower, upper);
        log::trace!("resize anchor={anchor} delta={delta} clamped={clamped} bounds=[{lower},{upper}]");

        let mut remaining_up = clamped;
        for idx in self.priority_ordered(&up_raw) {
            if remaining_up == 0 {
                break;
            }
            let applied = self.view_items[idx].apply_delta_clamped(remaining_up);
            remaining_up -= applied;
        }
        let mut remaining_down = clamped;
        for idx in self.priority_ordered(&down_raw) {
            if remaining_down == 0 {
                break;
            }
            let applied = self.view_items[idx].apply_delta_clamped(-remaining_down);
            remaining_down += applied;
        }

        self.distribute_empty_space(None);
        self.layout_views();
    }

    fn set_item_visible(&mut self, index: usize, visible: bool) {
        if visible {
            self.view_items[index].show();
        } else {
            self.view_items[index].hide();
        }
    }

    fn sum_shrink_room(&self, indexes: &[usize]) -> i64 {
        indexes
            .iter()
            .map(|&i| self.view_items[i].shrink_room())
            .fold(0i64, i64::saturating_add)
    }

    fn sum_grow_room(&self, indexes: &[usize]) -> i64 {
        indexes
            .iter()
            .map(|&i| self.view_items[i].grow_room())
            .fold(0i64, i64::saturating_add)
    }

    fn priority_ordered(&self, indexes: &[usize]) -> Vec<usize> {
        let mut ordered = indexes.to_vec();
        ordered.sort_by_key(|&i| core::cmp::Reverse(self.view_items[i].view().priority()));
        ordered
    }

    fn distribute_empty_space(&mut self, low_priority_index: Option<usize>) {
        let current_total: i64 = self
            .view_items
            .iter()
            .map(|item| i64::from(item.size()))
            .sum();
        let mut empty_delta = i64::from(self.size) - current_total;
        if empty_delta == 0 {
            return;
        }
        for idx in self.priority_order_with_bias(low_priority_index) {
            if empty_delta == 0 {
                break;
            }
            let applied = self.view_items[idx].apply_delta_clamped(empty_delta);
            empty_delta -= applied;
        }
    }

    fn priority_order_with_bias(&self, low_priority_index: Option<usize>) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.view_items.len());
        for &priority in &Priority::HIGH_TO_LOW {
            for i in 0..self.view_items.len() {
                if Some(i) == low_priority_index {
                    continue;
                }
                if self.view_items[i].view().priority() == priority {
                    order.push(i);
                }
            }
        }
        if let Some(lp) = low_priority_index {
            if lp < self.view_items.len() {
                order.push(lp);
            }
        }
        order
    }

    // -- the drag state machine (§4.2) -------------------------------------------

    /// Begins a sash drag at `pointer_position` (a coordinate on the primary axis).
    ///
    /// # Errors
    ///
    /// Returns [`SplitViewError::IndexOutOfBounds`] if `sash_index` is not a valid sash index.
    pub fn start_drag(&mut self, sash_index: usize, pointer_position: i64) -> Result<()> {
        if sash_index >= self.sashes.len() {
            return Err(SplitViewError::IndexOutOfBounds {
                index: sash_index,
                len: self.sashes.len(),
            });
        }
        let up_raw: Vec<usize> = (0..=sash_index).rev().collect();
        let down_raw: Vec<usize> = ((sash_index + 1)..self.view_items.len()).collect();

        let min_delta_up = -self.sum_shrink_room(&up_raw);
        let max_delta_up = self.sum_grow_room(&up_raw);
        let max_delta_down = if down_raw.is_empty() {
            UNBOUNDED_MAX_DELTA
        } else {
            self.sum_shrink_room(&down_raw)
        };
        let min_delta_down = if down_raw.is_empty() {
            UNBOUNDED_MIN_DELTA
        } else {
            -self.sum_grow_room(&down_raw)
        };
        let min_delta = min_delta_up.max(min_delta_down);
        let max_delta = max_delta_up.min(max_delta_down);

        let snap_before = self.find_snap_target(&up_raw, true, min_delta, max_delta);
        let snap_after = self.find_snap_target(&down_raw, false, min_delta, max_delta);

        self.drag_state = Some(DragState {
            anchor: sash_index,
            start_position: pointer_position,
            snap_before,
            snap_after,
        });
        log::debug!("drag started on sash {sash_index} at position {pointer_position}");
        self.emit_on_did_drag_start();
        Ok(())
    }

    fn find_snap_target(
        &self,
        indexes: &[usize],
        is_before: bool,
        min_delta: i64,
        max_delta: i64,
    ) -> Option<SnapTarget> {
        for &idx in indexes {
            if !self.is_snap_eligible(idx) {
                continue;
            }
            let item = &self.view_items[idx];
            if !item.view().snap() {
                continue;
            }
            let half_min = i64::from(item.view().minimum_size() / 2);
            let base = if is_before {
                min_delta - half_min
            } else {
                max_delta + half_min
            };
            let limit_delta = if item.is_visible() { base } else { -base };
            return Some(SnapTarget { index: idx, limit_delta });
        }
        None
    }

    /// Moves the active drag to `pointer_position`. A no-op if no drag is in progress.
    pub fn drag_to(&mut self, pointer_position: i64) {
        let Some(state) = self.drag_state else {
            return;
        };
        let delta = pointer_position - state.start_position;
        let overload_min = state
            .snap_before
            .map_or(UNBOUNDED_MIN_DELTA, |t| t.limit_delta);
        let overload_max = state
            .snap_after
            .map_or(UNBOUNDED_MAX_DELTA, |t| t.limit_delta);
        self.resize_with_priority(
            state.anchor,
            delta,
            Some((overload_min, overload_max)),
            state.snap_before,
            state.snap_after,
        );
    }

    /// Ends the active drag, if any, saving proportions and firing the end-of-drag callbacks.
    pub fn end_drag(&mut self) {
        if self.drag_state.take().is_some() {
            log::debug!("drag ended");
            self.save_proportions();
            self.emit_on_did_drag_end();
            self.emit_on_did_change();
        }
    }

    /// Requests that the binding reset the sash at `index` to its default split.
    ///
    /// The engine does not decide the reset policy itself; it only suppresses the request when
    /// the sash's immediate neighbor is a hidden, snap-enabled view (resetting into a hidden
    /// view would be surprising), and otherwise re-emits the request for the binding to apply.
    ///
    /// # Errors
    ///
    /// Returns [`SplitViewError::IndexOutOfBounds`] if `index` is not a valid sash index.
    pub fn sash_reset(&mut self, index: usize) -> Result<()> {
        if index >= self.sashes.len() {
            return Err(SplitViewError::IndexOutOfBounds {
                index,
                len: self.sashes.len(),
            });
        }
        let left_hidden_snap = self.view_items[index].view().snap() && !self.view_items[index].is_visible();
        let right_hidden_snap = self
            .view_items
            .get(index + 1)
            .is_some_and(|item| item.view().snap() && !item.is_visible());
        if left_hidden_snap || right_hidden_snap {
            log::debug!("sash reset at {index} suppressed: adjacent hidden snap target");
            return Ok(());
        }
        if let Some(cb) = self.on_sash_reset.as_mut() {
            cb(index);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.view_items.len() {
            return Err(SplitViewError::IndexOutOfBounds {
                index,
                len: self.view_items.len(),
            });
        }
        Ok(())
    }

    fn current_sizes(&self) -> Vec<u32> {
        self.view_items.iter().map(ViewItem::size).collect()
    }

    fn emit_on_did_change(&mut self) {
        let sizes = self.current_sizes();
        if let Some(cb) = self.on_did_change.as_mut() {
            cb(&sizes);
        }
    }

    fn emit_on_did_drag_start(&mut self) {
        let sizes = self.current_sizes();
        if let Some(cb) = self.on_did_drag_start.as_mut() {
            cb(&sizes);
        }
    }

    fn emit_on_did_drag_end(&mut self) {
        let sizes = self.current_sizes();
        if let Some(cb) = self.on_did_drag_end.as_mut() {
            cb(&sizes);
        }
    }
}
