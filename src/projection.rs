//! Isometric projection between layout space and view space
//!
//! The traversal core never projects anything itself; this module is the
//! adapter that turns 3D solid dimensions into the rectangles the scene
//! carries.
//!
//! ## Spaces
//!
//! Elements live in two coordinate systems:
//!
//! - **Layout space**: the 2D plane the diagram is laid out in. A solid
//!   figure occupies an axis-aligned base rectangle here (its *footprint*),
//!   and the depth sweep operates on these footprints.
//! - **View space**: the 2D screen plane after isometric projection.
//!
//! The mapping between them is the fixed linear transform
//!
//! ```text
//! view_x = (√3/2)·(layout_x + layout_y)
//! view_y = 0.5·(layout_y − layout_x)
//! ```
//!
//! and its inverse. A different projection angle would change the sweep
//! comparator as well; the whole crate assumes this one.
//!
//! ## Corners
//!
//! [`SolidMetrics::corners`] projects the eight corners of a solid's
//! bounding box: four base corners (lower left, lower front, lower right,
//! lower back) followed by the same four raised by the solid's height.

use serde::{Deserialize, Serialize};

use crate::scene::{BoundingBox, Point};

/// Transform a point from layout space into view space.
pub fn to_view(p: Point) -> Point {
    let m = 3.0_f64.sqrt() * 0.5;
    Point::new(m * p.x + m * p.y, -0.5 * p.x + 0.5 * p.y)
}

/// Transform a point from view space into layout space.
pub fn to_layout(p: Point) -> Point {
    let m = 3.0_f64.sqrt().recip();
    Point::new(m * p.x - p.y, m * p.x + p.y)
}

/// Dimensions of a solid figure to be projected.
///
/// `width` and `depth` span the base rectangle in layout space; `height`
/// raises the top face. The `horizontal` flag records the base orientation
/// of flat figures (connector labels may be rotated during layout) and only
/// affects [`SolidMetrics::label_footprint_at`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidMetrics {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub horizontal: bool,
}

impl SolidMetrics {
    /// Create metrics for a solid figure
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
            horizontal: true,
        }
    }

    /// Create metrics for a flat figure such as an on-edge label
    pub fn flat(width: f64, depth: f64, horizontal: bool) -> Self {
        Self {
            width,
            depth,
            height: 0.0,
            horizontal,
        }
    }

    /// Project the eight corners of the solid's bounding box into view
    /// space, with the base origin at layout (0, 0).
    ///
    /// Order: lower left, lower front, lower right, lower back, then the
    /// four upper corners in the same order.
    pub fn corners(&self) -> [Point; 8] {
        let base = [
            to_view(Point::new(0.0, 0.0)),
            to_view(Point::new(self.width, 0.0)),
            to_view(Point::new(self.width, self.depth)),
            to_view(Point::new(0.0, self.depth)),
        ];
        [
            base[0],
            base[1],
            base[2],
            base[3],
            Point::new(base[0].x, base[0].y - self.height),
            Point::new(base[1].x, base[1].y - self.height),
            Point::new(base[2].x, base[2].y - self.height),
            Point::new(base[3].x, base[3].y - self.height),
        ]
    }

    /// The solid's axis-aligned view-space bounds, translated so the
    /// upper-left corner of the bounds sits at `(x, y)`.
    pub fn view_bounds_at(&self, x: f64, y: f64) -> BoundingBox {
        let mut corners = self.corners();
        move_to(x, y, &mut corners);
        corner_bounds(&corners)
    }

    /// The solid's layout-space footprint when its view bounds sit at
    /// `(x, y)`: the base rectangle `(width × depth)` the depth sweep
    /// consumes.
    pub fn footprint_at(&self, x: f64, y: f64) -> BoundingBox {
        let mut corners = self.corners();
        move_to(x, y, &mut corners);
        let base = to_layout(corners[0]);
        BoundingBox::new(base.x, base.y, self.width, self.depth)
    }

    /// The footprint of a flat label when its view bounds sit at `(x, y)`.
    ///
    /// Horizontal labels extend along the width axis only, vertical labels
    /// along the depth axis only, so the result always has zero area. The
    /// sweep handles these through its open-before-close tie-break.
    pub fn label_footprint_at(&self, x: f64, y: f64) -> BoundingBox {
        let mut corners = self.corners();
        move_to(x, y, &mut corners);
        if self.horizontal {
            let base = to_layout(corners[0]);
            BoundingBox::new(base.x, base.y, self.width, 0.0)
        } else {
            let base = to_layout(corners[1]);
            BoundingBox::new(base.x, base.y, 0.0, self.depth)
        }
    }
}

/// Translate the corners so the upper-left corner of their bounding box
/// lands on `(x, y)`.
fn move_to(x: f64, y: f64, corners: &mut [Point; 8]) {
    let mut min_x = corners[0].x;
    let mut min_y = corners[0].y;
    for corner in corners.iter().skip(1) {
        min_x = min_x.min(corner.x);
        min_y = min_y.min(corner.y);
    }
    let dx = x - min_x;
    let dy = y - min_y;
    for corner in corners.iter_mut() {
        corner.x += dx;
        corner.y += dy;
    }
}

/// Axis-aligned bounding box of the given corner points.
fn corner_bounds(corners: &[Point; 8]) -> BoundingBox {
    let mut min_x = corners[0].x;
    let mut min_y = corners[0].y;
    let mut max_x = corners[0].x;
    let mut max_y = corners[0].y;
    for corner in corners.iter().skip(1) {
        min_x = min_x.min(corner.x);
        min_y = min_y.min(corner.y);
        max_x = max_x.max(corner.x);
        max_y = max_y.max(corner.y);
    }
    BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
}
