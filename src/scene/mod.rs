//! Scene snapshots consumed by the paint-order traversal
//!
//! A [`Scene`] is an immutable, ordered collection of elements: containers,
//! leaves, connectors and their satellites (labels, ports, bends). Element
//! positions in the collection double as declaration indices, the stable
//! tie-break used throughout the traversal. Scenes are built through
//! [`SceneBuilder`], which validates names and attachment rules so the
//! traversal itself never has to fail.

pub mod types;

pub use types::{
    BoundingBox, ElementFilter, ElementId, ElementKind, Point, SceneElement,
};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// An immutable snapshot of diagram elements.
///
/// The traversal takes a `&Scene`, so the exclusivity requirement (no
/// mutation while an order is being computed) is enforced by the borrow
/// checker rather than by convention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    elements: Vec<SceneElement>,
}

impl Scene {
    /// Start building a new scene
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// Number of elements in the scene
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the scene contains no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by id
    pub fn get(&self, id: ElementId) -> Option<&SceneElement> {
        self.elements.get(id.0)
    }

    /// Iterate over all elements in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &SceneElement)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (ElementId(index), element))
    }

    /// Element access for ids produced by this scene's builder
    pub(crate) fn element(&self, id: ElementId) -> &SceneElement {
        &self.elements[id.0]
    }
}

/// Builder for [`Scene`] snapshots.
///
/// Containers, leaves and connectors are named primaries; labels, ports,
/// bends and connector labels attach to an owner element. Each method
/// validates its inputs and returns the new element's [`ElementId`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    elements: Vec<SceneElement>,
    names: HashSet<String>,
}

impl SceneBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container, optionally nested inside another container
    pub fn container(
        &mut self,
        name: impl Into<String>,
        bounds: BoundingBox,
        parent: Option<ElementId>,
    ) -> Result<ElementId, SceneError> {
        if let Some(parent) = parent {
            self.check_container(parent)?;
        }
        let name = self.register_name(name)?;
        Ok(self.push(ElementKind::Container, Some(name), bounds, parent))
    }

    /// Add a leaf element, optionally nested inside a container
    pub fn leaf(
        &mut self,
        name: impl Into<String>,
        bounds: BoundingBox,
        parent: Option<ElementId>,
    ) -> Result<ElementId, SceneError> {
        if let Some(parent) = parent {
            self.check_container(parent)?;
        }
        let name = self.register_name(name)?;
        Ok(self.push(ElementKind::Leaf, Some(name), bounds, parent))
    }

    /// Add a connector
    pub fn connector(
        &mut self,
        name: impl Into<String>,
        bounds: BoundingBox,
    ) -> Result<ElementId, SceneError> {
        let name = self.register_name(name)?;
        Ok(self.push(ElementKind::Connector, Some(name), bounds, None))
    }

    /// Add a label to a container or leaf
    pub fn label(
        &mut self,
        owner: ElementId,
        bounds: BoundingBox,
    ) -> Result<ElementId, SceneError> {
        self.check_attachment(
            ElementKind::Label,
            owner,
            &[ElementKind::Container, ElementKind::Leaf],
        )?;
        Ok(self.push(ElementKind::Label, None, bounds, Some(owner)))
    }

    /// Add a port to a container, leaf or connector
    pub fn port(
        &mut self,
        owner: ElementId,
        bounds: BoundingBox,
    ) -> Result<ElementId, SceneError> {
        self.check_attachment(
            ElementKind::Port,
            owner,
            &[
                ElementKind::Container,
                ElementKind::Leaf,
                ElementKind::Connector,
            ],
        )?;
        Ok(self.push(ElementKind::Port, None, bounds, Some(owner)))
    }

    /// Add a bend point to a connector
    pub fn bend(
        &mut self,
        connector: ElementId,
        bounds: BoundingBox,
    ) -> Result<ElementId, SceneError> {
        self.check_attachment(ElementKind::Bend, connector, &[ElementKind::Connector])?;
        Ok(self.push(ElementKind::Bend, None, bounds, Some(connector)))
    }

    /// Add a label to a connector.
    ///
    /// Unlike [`SceneBuilder::label`], connector labels are depth-sorted by
    /// the sweep instead of following their owner; flat on-edge labels may
    /// carry zero-area bounds.
    pub fn connector_label(
        &mut self,
        connector: ElementId,
        bounds: BoundingBox,
    ) -> Result<ElementId, SceneError> {
        self.check_attachment(
            ElementKind::ConnectorLabel,
            connector,
            &[ElementKind::Connector],
        )?;
        Ok(self.push(ElementKind::ConnectorLabel, None, bounds, Some(connector)))
    }

    /// Finish building and return the immutable scene
    pub fn build(self) -> Scene {
        Scene {
            elements: self.elements,
        }
    }

    fn lookup(&self, id: ElementId) -> Result<&SceneElement, SceneError> {
        self.elements
            .get(id.0)
            .ok_or(SceneError::unknown_element(id))
    }

    fn check_container(&self, parent: ElementId) -> Result<(), SceneError> {
        let kind = self.lookup(parent)?.kind;
        if kind != ElementKind::Container {
            return Err(SceneError::not_a_container(parent, kind));
        }
        Ok(())
    }

    fn check_attachment(
        &self,
        kind: ElementKind,
        owner: ElementId,
        allowed: &[ElementKind],
    ) -> Result<(), SceneError> {
        let owner_kind = self.lookup(owner)?.kind;
        if !allowed.contains(&owner_kind) {
            return Err(SceneError::invalid_attachment(kind, owner, owner_kind));
        }
        Ok(())
    }

    fn register_name(&mut self, name: impl Into<String>) -> Result<String, SceneError> {
        let name = name.into();
        if !self.names.insert(name.clone()) {
            return Err(SceneError::duplicate_name(name));
        }
        Ok(name)
    }

    fn push(
        &mut self,
        kind: ElementKind,
        name: Option<String>,
        bounds: BoundingBox,
        parent: Option<ElementId>,
    ) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(SceneElement {
            kind,
            name,
            bounds,
            parent,
        });
        id
    }
}
