//! Sweep-line depth ordering for overlapping elements
//!
//! Isometric solids can overlap in view space, so elements behind others
//! must be painted first. The footprints of all swept elements are processed
//! by a sweep line of slope -1 (matching the isometric projection axes)
//! advancing through their corner events in order of the coordinate sum
//! `x + y`.
//!
//! ## Active list
//!
//! While an element's footprint intersects the sweep line it is *open* and
//! sits in the active list, ordered nearest to farthest along the axis
//! perpendicular to the sweep direction. The list only ever needs four
//! operations: insert-before, remove, predecessor and successor.
//!
//! ## Constraints
//!
//! - Opening element `e` is inserted before its *successor* `s`, the first
//!   open element the sweep line hits behind `e`'s opening corner; `s` is
//!   behind `e`, so `s` paints first.
//! - After insertion, `e`'s predecessor `p` (if any) is nearer than `e`, so
//!   `e` paints first.
//! - Closing an element makes its two neighbors adjacent; the farther one
//!   paints before the nearer one, preserving transitive ordering.
//!
//! The collected constraints are linearized by
//! [`ConstraintGraph::topological`]. The successor test is derived from the
//! slope-(-1) sweep and the fixed projection in [`crate::projection`]; a
//! different projection angle would need a different comparator.

use log::{debug, warn};

use crate::scene::{BoundingBox, ElementId, Scene};

use super::graph::ConstraintGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Open,
    Close,
}

/// A sweep event at one corner of an element's footprint.
#[derive(Debug, Clone, Copy)]
struct SweepEvent {
    x: f64,
    y: f64,
    kind: EventKind,
    item: usize,
}

impl SweepEvent {
    /// Distance of the event along the sweep direction
    fn coord(&self) -> f64 {
        self.x + self.y
    }
}

/// Currently open elements, ordered nearest (front) to farthest (back).
#[derive(Debug, Default)]
struct ActiveList {
    items: Vec<usize>,
}

impl ActiveList {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, pos: usize) -> usize {
        self.items[pos]
    }

    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    fn position_of(&self, item: usize) -> Option<usize> {
        self.items.iter().position(|&open| open == item)
    }

    fn predecessor(&self, pos: usize) -> Option<usize> {
        pos.checked_sub(1).map(|prev| self.items[prev])
    }

    fn successor(&self, pos: usize) -> Option<usize> {
        self.items.get(pos + 1).copied()
    }

    fn insert_before(&mut self, item: usize, pos: usize) {
        self.items.insert(pos, item);
    }

    fn push_back(&mut self, item: usize) {
        self.items.push(item);
    }

    fn remove(&mut self, pos: usize) {
        self.items.remove(pos);
    }
}

/// Sort the given elements back to front by depth.
///
/// `ids` must be in declaration order; the position within the slice is the
/// tie-break for coincident event coordinates. Elements with malformed
/// bounds are skipped with a warning and drop out of the result entirely.
pub(crate) fn depth_sort(scene: &Scene, ids: &[ElementId]) -> Vec<ElementId> {
    let mut items: Vec<(ElementId, BoundingBox)> = Vec::with_capacity(ids.len());
    for &id in ids {
        let bounds = scene.element(id).bounds;
        if !bounds.is_valid() {
            warn!("element {} has malformed bounds, skipping: {:?}", id, bounds);
            continue;
        }
        items.push((id, bounds));
    }

    let mut events = Vec::with_capacity(items.len() * 2);
    for (item, &(_, bounds)) in items.iter().enumerate() {
        events.push(SweepEvent {
            x: bounds.x,
            y: bounds.y,
            kind: EventKind::Open,
            item,
        });
        events.push(SweepEvent {
            x: bounds.right(),
            y: bounds.bottom(),
            kind: EventKind::Close,
            item,
        });
    }
    // Ascending by sweep coordinate; ties open events first, then
    // declaration order.
    events.sort_by(|a, b| {
        a.coord()
            .total_cmp(&b.coord())
            .then_with(|| a.kind.cmp(&b.kind))
            .then_with(|| a.item.cmp(&b.item))
    });

    let mut graph = ConstraintGraph::new(items.len());
    let mut active = ActiveList::default();
    for event in &events {
        match event.kind {
            EventKind::Open => {
                let pos = match find_successor(&active, &items, event.x, event.y) {
                    Some(pos) => {
                        // the successor is behind the opening element
                        graph.add_order(active.get(pos), event.item);
                        active.insert_before(event.item, pos);
                        pos
                    }
                    None => {
                        active.push_back(event.item);
                        active.len() - 1
                    }
                };
                if let Some(pred) = active.predecessor(pos) {
                    // the predecessor is nearer than the opening element
                    graph.add_order(event.item, pred);
                }
            }
            EventKind::Close => {
                if let Some(pos) = active.position_of(event.item) {
                    if let (Some(succ), Some(pred)) =
                        (active.successor(pos), active.predecessor(pos))
                    {
                        // neighbors become adjacent; keep their ordering
                        graph.add_order(succ, pred);
                    }
                    active.remove(pos);
                }
            }
        }
    }

    debug!(
        "depth-sorted {} of {} elements over {} events",
        items.len(),
        ids.len(),
        events.len()
    );

    graph
        .topological()
        .into_iter()
        .map(|item| items[item].0)
        .collect()
}

/// Find the first open element the sweep line hits behind the opening
/// corner `(x, y)`.
///
/// For each candidate, the sweep line through `(x, y)` is intersected with
/// the candidate's extended far border (`right()`); if the intersection
/// falls outside the footprint, the candidate's near edge is the reference
/// instead. The first candidate whose reference lies behind `y` is the
/// successor.
fn find_successor(
    active: &ActiveList,
    items: &[(ElementId, BoundingBox)],
    x: f64,
    y: f64,
) -> Option<usize> {
    for (pos, item) in active.iter().enumerate() {
        let bounds = items[item].1;
        // x + y == bounds.right() + intersection_y along the sweep line
        let intersection_y = x + y - bounds.right();
        let reference_y = if intersection_y < bounds.y {
            bounds.y
        } else {
            intersection_y
        };
        if reference_y < y {
            return Some(pos);
        }
    }
    None
}
