//! Integration tests for the paint-order traversal. These check the
//! externally observable ordering contract: farther elements before nearer
//! ones, structural precedence, filtering, reversal, and graceful handling
//! of malformed or self-intersecting input.

use pretty_assertions::assert_eq;

use isopaint::{
    paint_order, paint_order_reversed, BoundingBox, ElementFilter, ElementId, Scene,
};

fn rect(x: f64, y: f64, w: f64, h: f64) -> BoundingBox {
    BoundingBox::new(x, y, w, h)
}

fn position(order: &[ElementId], id: ElementId) -> usize {
    order
        .iter()
        .position(|&x| x == id)
        .unwrap_or_else(|| panic!("element {} missing from order: {:?}", id, order))
}

fn assert_permutation(order: &[ElementId], expected: &[ElementId]) {
    let mut sorted = order.to_vec();
    sorted.sort();
    let mut expected = expected.to_vec();
    expected.sort();
    assert_eq!(sorted, expected, "order is not a permutation of the input");
}

/// The worked overlap example: A behind B, C disjoint. Valid outputs are
/// [C,A,B], [A,C,B] and [A,B,C]; anything placing B before A is wrong.
#[test]
fn test_overlap_example() {
    let mut builder = Scene::builder();
    let a = builder.leaf("a", rect(0.0, 0.0, 10.0, 10.0), None).unwrap();
    let b = builder.leaf("b", rect(5.0, 5.0, 10.0, 10.0), None).unwrap();
    let c = builder.leaf("c", rect(20.0, 20.0, 5.0, 5.0), None).unwrap();
    let scene = builder.build();

    let order = paint_order(&scene, ElementFilter::ALL);
    assert_permutation(&order, &[a, b, c]);
    assert!(
        position(&order, a) < position(&order, b),
        "farther element must be painted first: {:?}",
        order,
    );
}

/// Two calls on an unchanged snapshot yield identical output.
#[test]
fn test_idempotence() {
    let mut builder = Scene::builder();
    for i in 0..12 {
        let offset = (i % 5) as f64 * 4.0;
        builder
            .leaf(
                format!("n{}", i),
                rect(offset, 20.0 - offset, 10.0, 10.0),
                None,
            )
            .unwrap();
    }
    let scene = builder.build();

    let first = paint_order(&scene, ElementFilter::ALL);
    let second = paint_order(&scene, ElementFilter::ALL);
    assert_eq!(first, second);
}

/// A container precedes every leaf nested within it, regardless of
/// projected position - here the leaf lies far behind the container.
#[test]
fn test_structural_precedence() {
    let mut builder = Scene::builder();
    let free = builder
        .leaf("free", rect(-50.0, -50.0, 5.0, 5.0), None)
        .unwrap();
    let group = builder
        .container("group", rect(0.0, 0.0, 100.0, 100.0), None)
        .unwrap();
    let group_label = builder.label(group, rect(2.0, 2.0, 20.0, 0.0)).unwrap();
    let nested = builder
        .leaf("nested", rect(-80.0, -80.0, 5.0, 5.0), Some(group))
        .unwrap();
    let scene = builder.build();

    let order = paint_order(&scene, ElementFilter::ALL);
    assert!(position(&order, group) < position(&order, nested));
    assert!(position(&order, group) < position(&order, free));
    // the container's label follows it immediately
    assert_eq!(position(&order, group_label), position(&order, group) + 1);
}

/// Requesting only connectors returns exactly the connectors, in
/// declaration order, nothing else.
#[test]
fn test_connector_filter() {
    let mut builder = Scene::builder();
    builder.leaf("n1", rect(0.0, 0.0, 10.0, 10.0), None).unwrap();
    let c1 = builder.connector("c1", rect(0.0, 0.0, 30.0, 30.0)).unwrap();
    builder.leaf("n2", rect(5.0, 5.0, 10.0, 10.0), None).unwrap();
    let c2 = builder.connector("c2", rect(10.0, 10.0, 30.0, 30.0)).unwrap();
    let c2_label = builder.connector_label(c2, rect(12.0, 12.0, 8.0, 0.0)).unwrap();
    let scene = builder.build();

    let connectors = paint_order(&scene, ElementFilter::CONNECTORS);
    assert_eq!(connectors, vec![c1, c2]);

    let labels = paint_order(&scene, ElementFilter::CONNECTOR_LABELS);
    assert_eq!(labels, vec![c2_label]);
}

/// A filtered subset keeps the relative order of the full traversal.
#[test]
fn test_filter_preserves_relative_order() {
    let mut builder = Scene::builder();
    let group = builder
        .container("g", rect(0.0, 0.0, 60.0, 60.0), None)
        .unwrap();
    let a = builder.leaf("a", rect(0.0, 0.0, 10.0, 10.0), Some(group)).unwrap();
    let b = builder.leaf("b", rect(5.0, 5.0, 10.0, 10.0), None).unwrap();
    let conn = builder.connector("c", rect(0.0, 0.0, 20.0, 20.0)).unwrap();
    let scene = builder.build();

    let full = paint_order(&scene, ElementFilter::ALL);
    let subset = paint_order(&scene, ElementFilter::LEAVES | ElementFilter::CONNECTORS);

    let expected: Vec<ElementId> = full
        .iter()
        .copied()
        .filter(|&id| [a, b, conn].contains(&id))
        .collect();
    assert_eq!(subset, expected);
}

/// The nearest-first traversal is the exact reverse of the farthest-first
/// traversal, for the full scene and for filtered subsets.
#[test]
fn test_reverse_traversal() {
    let mut builder = Scene::builder();
    let group = builder
        .container("g", rect(0.0, 0.0, 40.0, 40.0), None)
        .unwrap();
    builder.leaf("a", rect(0.0, 0.0, 10.0, 10.0), Some(group)).unwrap();
    builder.leaf("b", rect(5.0, 5.0, 10.0, 10.0), None).unwrap();
    builder.connector("c", rect(0.0, 0.0, 20.0, 20.0)).unwrap();
    let scene = builder.build();

    for filter in [
        ElementFilter::ALL,
        ElementFilter::LEAVES,
        ElementFilter::CONTAINERS | ElementFilter::CONNECTORS,
    ] {
        let mut forward = paint_order(&scene, filter);
        let backward = paint_order_reversed(&scene, filter);
        forward.reverse();
        assert_eq!(forward, backward);
    }
}

/// An empty scene is valid and yields an empty sequence.
#[test]
fn test_empty_scene() {
    let scene = Scene::builder().build();
    assert!(paint_order(&scene, ElementFilter::ALL).is_empty());
    assert!(paint_order_reversed(&scene, ElementFilter::ALL).is_empty());
}

/// Malformed geometry never aborts the traversal: the offending element is
/// skipped and everything else keeps its order.
#[test]
fn test_malformed_element_skipped() {
    let mut builder = Scene::builder();
    let a = builder.leaf("a", rect(0.0, 0.0, 10.0, 10.0), None).unwrap();
    let bad = builder
        .leaf("bad", rect(f64::NAN, f64::NAN, 10.0, 10.0), None)
        .unwrap();
    let negative = builder
        .leaf("negative", rect(0.0, 0.0, -4.0, 10.0), None)
        .unwrap();
    let b = builder.leaf("b", rect(5.0, 5.0, 10.0, 10.0), None).unwrap();
    let scene = builder.build();

    let order = paint_order(&scene, ElementFilter::ALL);
    assert!(!order.contains(&bad));
    assert!(!order.contains(&negative));
    assert!(position(&order, a) < position(&order, b));
}

/// Three mutually overlapping rectangles arranged in a ring. Whatever
/// constraints the sweep derives, the traversal must return a complete
/// permutation without failing.
#[test]
fn test_overlap_ring_recovers() {
    let mut builder = Scene::builder();
    let a = builder.leaf("a", rect(0.0, 0.0, 40.0, 12.0), None).unwrap();
    let b = builder.leaf("b", rect(30.0, 4.0, 12.0, 40.0), None).unwrap();
    let c = builder.leaf("c", rect(4.0, 8.0, 40.0, 12.0), None).unwrap();
    let scene = builder.build();

    let order = paint_order(&scene, ElementFilter::ALL);
    assert_permutation(&order, &[a, b, c]);
}

/// Zero-area connector labels (on-edge labels) still traverse: their open
/// and close events coincide and the open-before-close tie-break handles
/// them.
#[test]
fn test_flat_connector_label() {
    let mut builder = Scene::builder();
    let back = builder.leaf("back", rect(0.0, 0.0, 10.0, 10.0), None).unwrap();
    let wire = builder.connector("wire", rect(0.0, 0.0, 30.0, 30.0)).unwrap();
    let flat = builder.connector_label(wire, rect(5.0, 5.0, 8.0, 0.0)).unwrap();
    let scene = builder.build();

    let order = paint_order(&scene, ElementFilter::ALL);
    assert_permutation(&order, &[back, wire, flat]);
    assert!(
        position(&order, back) < position(&order, flat),
        "the solid behind the label must be painted first",
    );
}

/// Full composition: containers (with ports and labels), connectors (with
/// bends and ports), then the depth-sorted pool.
#[test]
fn test_composition_order() {
    let mut builder = Scene::builder();
    let leaf = builder.leaf("leaf", rect(0.0, 0.0, 10.0, 10.0), None).unwrap();
    let group = builder
        .container("group", rect(0.0, 0.0, 80.0, 80.0), None)
        .unwrap();
    let group_port = builder.port(group, rect(0.0, 40.0, 2.0, 2.0)).unwrap();
    let wire = builder.connector("wire", rect(0.0, 0.0, 50.0, 50.0)).unwrap();
    let bend = builder.bend(wire, rect(25.0, 25.0, 0.0, 0.0)).unwrap();
    let scene = builder.build();

    let order = paint_order(&scene, ElementFilter::ALL);
    assert_eq!(order, vec![group, group_port, wire, bend, leaf]);
}
