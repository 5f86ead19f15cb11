//! Instantiate-by-name node registry.
//!
//! The editor's dynamic class registry is modeled as a capability interface
//! so the executor never reaches for a process-wide singleton. The built-in
//! [`ClassRegistry`] seeds the stock node classes; hosts can register more.

use std::collections::BTreeMap;

use serde_json::json;
use thiserror::Error;

use crate::scene::Node;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown node class `{0}`")]
    UnknownClass(String),
}

/// Capability to instantiate a node from a class name.
pub trait NodeRegistry {
    fn instantiate(&self, class: &str) -> Result<Node, RegistryError>;

    fn has_class(&self, class: &str) -> bool {
        self.instantiate(class).is_ok()
    }
}

type Factory = fn(&str) -> Node;

/// Name → factory map over the engine's stock node classes.
pub struct ClassRegistry {
    factories: BTreeMap<String, Factory>,
}

fn plain_node(class: &str) -> Node {
    Node::new(class, class)
}

fn node_2d(class: &str) -> Node {
    let mut node = Node::new(class, class);
    node.set("position", json!([0.0, 0.0]));
    node.set("rotation", json!(0.0));
    node
}

fn node_3d(class: &str) -> Node {
    let mut node = Node::new(class, class);
    node.set("position", json!([0.0, 0.0, 0.0]));
    node
}

impl ClassRegistry {
    /// Registry seeded with the stock node classes.
    pub fn with_builtin_classes() -> Self {
        let mut registry = ClassRegistry {
            factories: BTreeMap::new(),
        };
        registry.register("Node", plain_node);
        registry.register("Node2D", node_2d);
        registry.register("Sprite2D", node_2d);
        registry.register("Camera2D", node_2d);
        registry.register("Node3D", node_3d);
        registry.register("Label", plain_node);
        registry.register("Timer", plain_node);
        registry
    }

    pub fn register(&mut self, class: &str, factory: Factory) {
        self.factories.insert(class.to_string(), factory);
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl NodeRegistry for ClassRegistry {
    fn instantiate(&self, class: &str) -> Result<Node, RegistryError> {
        let factory = self
            .factories
            .get(class)
            .ok_or_else(|| RegistryError::UnknownClass(class.to_string()))?;
        Ok(factory(class))
    }
}
