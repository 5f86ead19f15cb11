//! Minimal scene tree backing the assistant's commands.
//!
//! A [`Session`] is the in-memory representation of the scene currently open
//! for editing: one root [`Node`] plus the file path it persists to. Scenes
//! serialize as pretty JSON.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Name given to the root of a freshly created empty scene.
pub const EMPTY_SCENE_ROOT_NAME: &str = "Scene";

/// Errors from persisting a [`Session`].
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not write scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize scene: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A node in the scene tree.
///
/// Properties are dynamic: any name is accepted and unknown names are kept
/// silently, matching how the engine's property system behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub class: String,
    /// Name of the scene root that owns this node for serialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(class: impl Into<String>, name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            class: class.into(),
            owner: None,
            properties: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Assign a dynamic property. Unknown property names are accepted.
    pub fn set(&mut self, property: &str, value: Value) {
        self.properties.insert(property.to_string(), value);
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// The scene currently open for editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    root: Node,
}

impl Session {
    /// A new empty session rooted at a single plain node.
    pub fn empty() -> Self {
        Session {
            root: Node::new("Node", EMPTY_SCENE_ROOT_NAME),
        }
    }

    pub fn with_root(root: Node) -> Self {
        Session { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Persist the scene as pretty JSON at `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), SaveError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a previously saved scene.
    pub fn load_from(path: &Path) -> Result<Self, SaveError> {
        let file = File::open(path)?;
        let session = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(session)
    }
}

/// Default location a workspace saves its scene to.
pub fn default_scene_path() -> PathBuf {
    PathBuf::from("scene.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_session_has_plain_root() {
        let session = Session::empty();
        assert_eq!(session.root().class, "Node");
        assert_eq!(session.root().name, EMPTY_SCENE_ROOT_NAME);
        assert_eq!(session.root().child_count(), 0);
    }

    #[test]
    fn dynamic_properties_accept_any_name() {
        let mut node = Node::new("Node2D", "MyNode");
        node.set("position", json!([0.0, 0.0]));
        node.set("no_such_property", json!(true));
        assert_eq!(node.get("position"), Some(&json!([0.0, 0.0])));
        assert_eq!(node.get("no_such_property"), Some(&json!(true)));
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut session = Session::empty();
        let mut child = Node::new("Node2D", "MyNode");
        child.owner = Some(EMPTY_SCENE_ROOT_NAME.to_string());
        session.root_mut().add_child(child);

        let path = std::env::temp_dir().join(format!(
            "ember-scene-{}-{:p}.json",
            std::process::id(),
            &session
        ));
        session.save_to(&path).unwrap();
        let loaded = Session::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.root().child_count(), 1);
        assert_eq!(loaded.root().children[0].name, "MyNode");
        assert_eq!(
            loaded.root().children[0].owner.as_deref(),
            Some(EMPTY_SCENE_ROOT_NAME)
        );
    }
}
