//! Core types for scene snapshots

use serde::{Deserialize, Serialize};

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding rectangle in the sweep plane.
///
/// For containers, leaves and connectors this is the footprint returned by
/// the coordinate-transform adapter (see [`crate::projection`]); connector
/// labels may carry degenerate zero-area rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Sweep coordinate at which this rectangle opens (its near corner
    /// projected onto the slope-(-1) sweep direction)
    pub fn open_coord(&self) -> f64 {
        self.x + self.y
    }

    /// Sweep coordinate at which this rectangle closes (its far corner
    /// projected onto the slope-(-1) sweep direction)
    pub fn close_coord(&self) -> f64 {
        self.right() + self.bottom()
    }

    /// Whether this rectangle is usable for depth sorting: finite origin
    /// and finite, non-negative extents. Zero-area rectangles are valid.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// Kind of element in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Group node; ordered structurally (hierarchy pre-order), never swept
    Container,
    /// Normal solid node; depth-sorted by the sweep
    Leaf,
    /// Edge between elements; ordered by declaration, never swept
    Connector,
    /// Label on a connector; depth-sorted by the sweep
    ConnectorLabel,
    /// Label attached to a container or leaf; painted right after its owner
    Label,
    /// Attachment point on a container, leaf or connector; painted right
    /// after its owner
    Port,
    /// Bend point of a connector; painted right after the connector
    Bend,
}

impl ElementKind {
    /// Elements ordered by the depth sweep rather than structurally
    pub fn is_swept(self) -> bool {
        matches!(self, ElementKind::Leaf | ElementKind::ConnectorLabel)
    }

    /// Elements painted immediately after the element they are attached to
    pub fn is_satellite(self) -> bool {
        matches!(
            self,
            ElementKind::Label | ElementKind::Port | ElementKind::Bend
        )
    }
}

/// Stable identity of an element within one scene snapshot.
///
/// Ids double as declaration indices: the element added first compares
/// lowest. They are only meaningful for the scene that produced them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Declaration index of the element (its position in the snapshot)
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single element of a scene snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneElement {
    pub kind: ElementKind,
    /// Optional debug name; unique among named elements
    pub name: Option<String>,
    pub bounds: BoundingBox,
    /// Structural parent: the enclosing container for containers and
    /// leaves, the owning element for labels, ports and bends
    pub parent: Option<ElementId>,
}

impl SceneElement {
    /// Get the name as a string, if present
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Bitmask selecting which element kinds a traversal should return.
///
/// Combine with `|`:
///
/// ```rust
/// use isopaint::{ElementFilter, ElementKind};
///
/// let filter = ElementFilter::LEAVES | ElementFilter::CONNECTORS;
/// assert!(filter.accepts(ElementKind::Leaf));
/// assert!(!filter.accepts(ElementKind::Container));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementFilter(u8);

impl ElementFilter {
    pub const NONE: Self = Self(0);
    pub const CONTAINERS: Self = Self(1);
    pub const LEAVES: Self = Self(1 << 1);
    pub const CONNECTORS: Self = Self(1 << 2);
    pub const CONNECTOR_LABELS: Self = Self(1 << 3);
    pub const LABELS: Self = Self(1 << 4);
    pub const PORTS: Self = Self(1 << 5);
    pub const BENDS: Self = Self(1 << 6);
    pub const ALL: Self = Self(0x7f);

    /// The filter bit for a single element kind
    pub fn only(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Container => Self::CONTAINERS,
            ElementKind::Leaf => Self::LEAVES,
            ElementKind::Connector => Self::CONNECTORS,
            ElementKind::ConnectorLabel => Self::CONNECTOR_LABELS,
            ElementKind::Label => Self::LABELS,
            ElementKind::Port => Self::PORTS,
            ElementKind::Bend => Self::BENDS,
        }
    }

    /// Whether elements of the given kind pass this filter
    pub fn accepts(self, kind: ElementKind) -> bool {
        self.0 & Self::only(kind).0 != 0
    }

    /// Whether every kind passes this filter
    pub fn is_all(self) -> bool {
        self.0 & Self::ALL.0 == Self::ALL.0
    }
}

impl Default for ElementFilter {
    fn default() -> Self {
        Self::ALL
    }
}

impl std::ops::BitOr for ElementFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ElementFilter {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
