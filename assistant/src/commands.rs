//! Scene-mutating commands behind the recognized intents.

use serde_json::Value;

use crate::registry::{NodeRegistry, RegistryError};
use crate::scene::{Node, SaveError, Session};
use crate::session::SessionProvider;

/// Executes intents against the externally owned editing session.
///
/// Both collaborators are injected capabilities; the executor performs no
/// I/O of its own beyond what the provider's save facility does.
pub struct SceneCommands<P: SessionProvider, R: NodeRegistry> {
    provider: P,
    registry: R,
}

impl<P: SessionProvider, R: NodeRegistry> SceneCommands<P, R> {
    pub fn new(provider: P, registry: R) -> Self {
        SceneCommands { provider, registry }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Replace any active session with a fresh empty one. The previous
    /// session is released through the provider's deferred queue.
    pub fn create_scene(&mut self) {
        self.provider.replace(Session::empty());
        log::info!("created a new empty scene");
    }

    /// Instantiate `class` via the registry and attach it under the session
    /// root as `name`, owned by the root. Auto-creates a session if none is
    /// active. On an unknown class nothing is mutated.
    pub fn add_node(&mut self, class: &str, name: &str) -> Result<(), RegistryError> {
        if self.provider.active().is_none() {
            self.create_scene();
        }

        let mut node = self.registry.instantiate(class).map_err(|err| {
            log::warn!("add_node failed: {err}");
            err
        })?;
        node.name = name.to_string();

        // active() was just ensured above
        if let Some(session) = self.provider.active_mut() {
            node.owner = Some(session.root().name.clone());
            session.root_mut().add_child(node);
            log::info!("added {class} node '{name}' under '{}'", session.root().name);
        }
        Ok(())
    }

    /// Persist the active session. Silent no-op when no session is active.
    pub fn save_scene(&mut self) -> Result<(), SaveError> {
        if self.provider.save_active()? {
            log::info!("saved the current scene");
        }
        Ok(())
    }

    /// Assign a dynamic property; no-op when the node reference is absent.
    /// Unknown property names are swallowed by the node itself.
    pub fn set_property(node: Option<&mut Node>, property: &str, value: Value) {
        if let Some(node) = node {
            node.set(property, value);
        }
    }

    /// End-of-cycle cleanup: release sessions parked by [`create_scene`].
    ///
    /// [`create_scene`]: Self::create_scene
    pub fn flush(&mut self) {
        self.provider.flush_deferred();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ClassRegistry;
    use crate::session::EditorWorkspace;
    use serde_json::json;

    fn commands() -> SceneCommands<EditorWorkspace, ClassRegistry> {
        SceneCommands::new(
            EditorWorkspace::new("unused.json"),
            ClassRegistry::with_builtin_classes(),
        )
    }

    #[test]
    fn create_scene_twice_leaves_one_empty_session() {
        let mut commands = commands();
        commands.create_scene();
        commands.add_node("Node2D", "MyNode").unwrap();
        commands.create_scene();
        commands.flush();

        let session = commands.provider().active().unwrap();
        assert_eq!(session.root().child_count(), 0);
        assert_eq!(commands.provider().deferred_count(), 0);
    }

    #[test]
    fn add_node_attaches_named_child_owned_by_root() {
        let mut commands = commands();
        commands.create_scene();
        commands.add_node("Node2D", "MyNode").unwrap();

        let root = commands.provider().active().unwrap().root();
        assert_eq!(root.child_count(), 1);
        let child = &root.children[0];
        assert_eq!(child.name, "MyNode");
        assert_eq!(child.class, "Node2D");
        assert_eq!(child.owner.as_deref(), Some("Scene"));
    }

    #[test]
    fn add_node_without_session_creates_one_first() {
        let mut commands = commands();
        assert!(commands.provider().active().is_none());
        commands.add_node("Node2D", "MyNode").unwrap();
        assert_eq!(commands.provider().active().unwrap().root().child_count(), 1);
    }

    #[test]
    fn add_node_unknown_class_mutates_nothing() {
        let mut commands = commands();
        commands.create_scene();
        let err = commands.add_node("FancyNode", "MyNode").unwrap_err();
        assert!(err.to_string().contains("FancyNode"));
        assert_eq!(commands.provider().active().unwrap().root().child_count(), 0);
    }

    #[test]
    fn save_without_session_is_ok() {
        let mut commands = SceneCommands::new(
            EditorWorkspace::new("/nonexistent/dir/scene.json"),
            ClassRegistry::with_builtin_classes(),
        );
        assert!(commands.save_scene().is_ok());
    }

    #[test]
    fn set_property_tolerates_missing_node() {
        SceneCommands::<EditorWorkspace, ClassRegistry>::set_property(
            None,
            "position",
            json!([1.0, 2.0]),
        );

        let mut node = Node::new("Node2D", "MyNode");
        SceneCommands::<EditorWorkspace, ClassRegistry>::set_property(
            Some(&mut node),
            "position",
            json!([1.0, 2.0]),
        );
        assert_eq!(node.get("position"), Some(&json!([1.0, 2.0])));
    }
}
