//! GTK4 dock panel for the Ember editor's AI Assistant.
//!
//! [`AssistantPanel`] builds the widget tree (title, read-only output,
//! prompt input, Submit button) and forwards submitted prompts to an
//! injected handler — normally `ember_assistant::Assistant::process`.
//! [`DockManager`] places panels into the editor shell's dock slots.

mod dock;
mod panel;

pub use dock::{DockManager, DockShortcut, DockSlot, OPEN_ASSISTANT_SHORTCUT};
pub use panel::AssistantPanel;
