//! Isopaint - paint-order computation for isometric diagram scenes
//!
//! Isometric (pseudo-3D) diagram elements can overlap in view space, so a
//! renderer must paint farther elements before nearer ones. This library
//! takes a snapshot of scene elements with bounding rectangles and a
//! structural hierarchy and returns the sequence to paint them in.
//!
//! # Example
//!
//! ```rust
//! use isopaint::{paint_order, BoundingBox, ElementFilter, Scene};
//!
//! let mut builder = Scene::builder();
//! let back = builder
//!     .leaf("back", BoundingBox::new(0.0, 0.0, 10.0, 10.0), None)
//!     .unwrap();
//! let front = builder
//!     .leaf("front", BoundingBox::new(5.0, 5.0, 10.0, 10.0), None)
//!     .unwrap();
//! let scene = builder.build();
//!
//! let order = paint_order(&scene, ElementFilter::ALL);
//! assert_eq!(order, vec![back, front]);
//! ```
//!
//! The traversal is synchronous, allocates all working state per call, and
//! never fails: malformed elements are skipped with a log warning, ordering
//! cycles from self-intersecting input are broken deterministically, and an
//! empty scene yields an empty order.

pub mod error;
pub mod order;
pub mod projection;
pub mod scene;

pub use error::SceneError;
pub use scene::{
    BoundingBox, ElementFilter, ElementId, ElementKind, Point, Scene, SceneBuilder,
    SceneElement,
};

/// Compute the farthest-first paint order of the scene, filtered to the
/// requested element kinds.
///
/// Painting elements in the returned order gives correct occlusion:
/// containers first (outer to inner), then connectors, then leaves and
/// connector labels back to front.
///
/// # Example
///
/// ```rust
/// use isopaint::{paint_order, BoundingBox, ElementFilter, Scene};
///
/// let mut builder = Scene::builder();
/// let wire = builder
///     .connector("wire", BoundingBox::new(0.0, 0.0, 20.0, 20.0))
///     .unwrap();
/// let node = builder
///     .leaf("node", BoundingBox::new(0.0, 0.0, 10.0, 10.0), None)
///     .unwrap();
/// let scene = builder.build();
///
/// let connectors = paint_order(&scene, ElementFilter::CONNECTORS);
/// assert_eq!(connectors, vec![wire]);
///
/// let everything = paint_order(&scene, ElementFilter::ALL);
/// assert_eq!(everything, vec![wire, node]);
/// ```
pub fn paint_order(scene: &Scene, filter: ElementFilter) -> Vec<ElementId> {
    order::compute(scene, filter)
}

/// Compute the nearest-first paint order: the exact reverse of
/// [`paint_order`] for the same scene and filter.
///
/// This is the traversal a hit-testing pipeline would use, checking the
/// frontmost element first.
pub fn paint_order_reversed(scene: &Scene, filter: ElementFilter) -> Vec<ElementId> {
    order::compute_reversed(scene, filter)
}
