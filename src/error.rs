//! Error types for scene construction

use thiserror::Error;

use crate::scene::{ElementId, ElementKind};

/// Errors that can occur while building a scene snapshot.
///
/// The traversal itself never fails; every validation happens up front in
/// [`crate::scene::SceneBuilder`].
#[derive(Debug, Error)]
pub enum SceneError {
    /// Two named elements share a name
    #[error("duplicate element name '{name}'")]
    DuplicateName { name: String },

    /// An element was nested under something that is not a container
    #[error("element {parent} is a {parent_kind:?} and cannot contain nested elements")]
    NotAContainer {
        parent: ElementId,
        parent_kind: ElementKind,
    },

    /// A label, port, bend or connector label was attached to an owner of
    /// an incompatible kind
    #[error("a {kind:?} cannot be attached to element {owner} of kind {owner_kind:?}")]
    InvalidAttachment {
        kind: ElementKind,
        owner: ElementId,
        owner_kind: ElementKind,
    },

    /// Reference to an element id that is not part of this scene
    #[error("unknown element id {id}")]
    UnknownElement { id: ElementId },
}

impl SceneError {
    /// Create a duplicate name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a not-a-container error
    pub fn not_a_container(parent: ElementId, parent_kind: ElementKind) -> Self {
        Self::NotAContainer {
            parent,
            parent_kind,
        }
    }

    /// Create an invalid attachment error
    pub fn invalid_attachment(
        kind: ElementKind,
        owner: ElementId,
        owner_kind: ElementKind,
    ) -> Self {
        Self::InvalidAttachment {
            kind,
            owner,
            owner_kind,
        }
    }

    /// Create an unknown element error
    pub fn unknown_element(id: ElementId) -> Self {
        Self::UnknownElement { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let err = SceneError::duplicate_name("server");
        assert!(err.to_string().contains("server"));
    }

    #[test]
    fn test_not_a_container_display() {
        let err = SceneError::not_a_container(ElementId(3), ElementKind::Leaf);
        assert!(err.to_string().contains("#3"));
        assert!(err.to_string().contains("Leaf"));
    }

    #[test]
    fn test_invalid_attachment_display() {
        let err = SceneError::invalid_attachment(
            ElementKind::Bend,
            ElementId(1),
            ElementKind::Container,
        );
        assert!(err.to_string().contains("Bend"));
        assert!(err.to_string().contains("Container"));
    }
}
