//! Dock placement for editor panels.
//!
//! Four notebook slots (left/right x upper/lower) that the editor shell
//! embeds into its main layout. Panels register under a display title and an
//! optional keyboard shortcut that raises and focuses the dock page.

use gtk4::prelude::*;
use gtk4::{CallbackAction, Label, Notebook, Shortcut, ShortcutController, ShortcutScope, ShortcutTrigger};

/// Where a dock lands in the editor layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockSlot {
    LeftUpper,
    LeftLower,
    RightUpper,
    RightLower,
}

/// A keyboard shortcut registered under a fixed identifier.
#[derive(Debug, Clone, Copy)]
pub struct DockShortcut {
    /// Settings identifier, e.g. `docks/open_ai_assistant`.
    pub id: &'static str,
    /// GTK accelerator string.
    pub accelerator: &'static str,
}

/// Shortcut that opens the AI Assistant dock.
pub const OPEN_ASSISTANT_SHORTCUT: DockShortcut = DockShortcut {
    id: "docks/open_ai_assistant",
    accelerator: "<Control><Alt>a",
};

/// Owns one notebook per dock slot.
pub struct DockManager {
    left_upper: Notebook,
    left_lower: Notebook,
    right_upper: Notebook,
    right_lower: Notebook,
}

impl DockManager {
    pub fn new() -> Self {
        DockManager {
            left_upper: Notebook::new(),
            left_lower: Notebook::new(),
            right_upper: Notebook::new(),
            right_lower: Notebook::new(),
        }
    }

    /// The notebook backing `slot`, for the shell to place in its layout.
    pub fn notebook(&self, slot: DockSlot) -> &Notebook {
        match slot {
            DockSlot::LeftUpper => &self.left_upper,
            DockSlot::LeftLower => &self.left_lower,
            DockSlot::RightUpper => &self.right_upper,
            DockSlot::RightLower => &self.right_lower,
        }
    }

    /// Add `child` as a titled page in `slot`, optionally bound to a
    /// shortcut that raises the page and moves focus into it.
    pub fn add_dock(
        &self,
        slot: DockSlot,
        child: &impl IsA<gtk4::Widget>,
        title: &str,
        shortcut: Option<DockShortcut>,
    ) {
        let notebook = self.notebook(slot);
        let page = notebook.append_page(child, Some(&Label::new(Some(title))));

        if let Some(binding) = shortcut {
            let controller = ShortcutController::new();
            controller.set_scope(ShortcutScope::Global);

            let notebook = notebook.clone();
            let child = child.clone().upcast::<gtk4::Widget>();
            let action = CallbackAction::new(move |_, _| {
                notebook.set_current_page(Some(page));
                child.grab_focus();
                glib::Propagation::Stop
            });

            let trigger = ShortcutTrigger::parse_string(binding.accelerator);
            controller.add_shortcut(Shortcut::new(trigger, Some(action)));
            self.notebook(slot).add_controller(controller);
            log::debug!(
                "registered dock shortcut {} ({})",
                binding.id,
                binding.accelerator
            );
        }
    }
}

impl Default for DockManager {
    fn default() -> Self {
        DockManager::new()
    }
}
