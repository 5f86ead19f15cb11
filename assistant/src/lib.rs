//! Core logic for the Ember editor's AI Assistant dock.
//!
//! The GUI shell (see `native/linux`) forwards submitted prompt text to an
//! [`Assistant`], which classifies it into an [`Intent`] and executes the
//! matching scene command, returning a human-readable outcome string for the
//! panel's output area. Everything here is synchronous and headless.

pub mod commands;
pub mod intent;
pub mod registry;
pub mod scene;
pub mod session;

pub use commands::SceneCommands;
pub use intent::{classify, Intent};
pub use registry::{ClassRegistry, NodeRegistry, RegistryError};
pub use scene::{Node, SaveError, Session};
pub use session::{EditorWorkspace, SessionProvider};

/// Node type and instance name used for the AddNode intent.
///
/// Fixed constants for now; parsing them out of the prompt is part of the
/// later AI integration work.
pub const DEFAULT_NODE_CLASS: &str = "Node2D";
pub const DEFAULT_NODE_NAME: &str = "MyNode";

/// Prompt-to-outcome pipeline: classify, execute, report.
pub struct Assistant<P: SessionProvider, R: NodeRegistry> {
    commands: SceneCommands<P, R>,
}

impl Assistant<EditorWorkspace, ClassRegistry> {
    /// Assistant over an in-process workspace and the stock class registry.
    pub fn with_workspace(workspace: EditorWorkspace) -> Self {
        Assistant::new(SceneCommands::new(
            workspace,
            ClassRegistry::with_builtin_classes(),
        ))
    }
}

impl<P: SessionProvider, R: NodeRegistry> Assistant<P, R> {
    pub fn new(commands: SceneCommands<P, R>) -> Self {
        Assistant { commands }
    }

    pub fn commands(&self) -> &SceneCommands<P, R> {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut SceneCommands<P, R> {
        &mut self.commands
    }

    /// Process one submitted prompt and return the outcome text to display.
    ///
    /// Unrecognized prompts are echoed back and cause no session mutation.
    pub fn process(&mut self, prompt: &str) -> String {
        let intent = intent::classify(prompt);
        log::debug!("prompt {prompt:?} classified as {intent:?}");

        let response = match intent {
            Intent::CreateScene => {
                self.commands.create_scene();
                "Created a new scene.".to_string()
            }
            Intent::AddNode => {
                match self.commands.add_node(DEFAULT_NODE_CLASS, DEFAULT_NODE_NAME) {
                    Ok(()) => format!(
                        "Added a {DEFAULT_NODE_CLASS} node named '{DEFAULT_NODE_NAME}' to the scene."
                    ),
                    Err(RegistryError::UnknownClass(class)) => {
                        format!("Failed to create node of type: {class}")
                    }
                }
            }
            Intent::SaveScene => match self.commands.save_scene() {
                Ok(()) => "Saved the current scene.".to_string(),
                Err(err) => format!("Failed to save the scene: {err}"),
            },
            Intent::Unrecognized => format!(
                "I understand you want to: {prompt}\n\nThis functionality will be implemented in the AI integration phase."
            ),
        };

        self.commands.flush();
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant() -> Assistant<EditorWorkspace, ClassRegistry> {
        Assistant::with_workspace(EditorWorkspace::new("unused.json"))
    }

    #[test]
    fn create_scene_prompt() {
        let mut assistant = assistant();
        let response = assistant.process("Please CREATE a new Scene for me");
        assert_eq!(response, "Created a new scene.");
        assert!(assistant.commands().provider().active().is_some());
    }

    #[test]
    fn add_node_prompt() {
        let mut assistant = assistant();
        let response = assistant.process("can you add a node?");
        assert_eq!(response, "Added a Node2D node named 'MyNode' to the scene.");

        let root = assistant.commands().provider().active().unwrap().root();
        assert_eq!(root.child_count(), 1);
        assert_eq!(root.children[0].name, "MyNode");
        assert_eq!(root.children[0].class, "Node2D");
    }

    #[test]
    fn unrecognized_prompt_echoes_and_mutates_nothing() {
        let mut assistant = assistant();
        let response = assistant.process("hello there");
        assert_eq!(
            response,
            "I understand you want to: hello there\n\nThis functionality will be implemented in the AI integration phase."
        );
        assert!(assistant.commands().provider().active().is_none());
    }

    #[test]
    fn save_prompt_without_session_still_reports_saved() {
        // Matches the original behavior: the save command itself is a no-op
        // without a session, and that is not reported as an error.
        let mut assistant = assistant();
        let response = assistant.process("save the scene");
        assert_eq!(response, "Saved the current scene.");
    }

    #[test]
    fn deferred_sessions_are_released_each_cycle() {
        let mut assistant = assistant();
        assistant.process("create scene");
        assistant.process("create scene");
        assert_eq!(assistant.commands().provider().deferred_count(), 0);
        assert_eq!(
            assistant
                .commands()
                .provider()
                .active()
                .unwrap()
                .root()
                .child_count(),
            0
        );
    }
}
