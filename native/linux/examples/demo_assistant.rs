//! Interactive demo: opens a GTK4 window with the AI Assistant dock.
//!
//! Run with: `cargo run --example demo_assistant` from `native/linux/`
//!
//! Try prompts like "create a scene", "add a node", "save", or anything
//! else to see the placeholder echo. Ctrl+Alt+A raises the dock.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Label, Orientation, Paned};

use ember_assistant::{Assistant, EditorWorkspace};
use ember_assistant_gtk::{AssistantPanel, DockManager, DockSlot, OPEN_ASSISTANT_SHORTCUT};

fn main() {
    env_logger::init();

    let app = Application::builder()
        .application_id("dev.ember.AssistantDemo")
        .build();

    app.connect_activate(|app| {
        let workspace = EditorWorkspace::new(std::env::temp_dir().join("ember_demo_scene.json"));
        let assistant = Rc::new(RefCell::new(Assistant::with_workspace(workspace)));

        let panel = AssistantPanel::new(move |prompt| assistant.borrow_mut().process(prompt));

        let docks = DockManager::new();
        docks.add_dock(
            DockSlot::RightUpper,
            panel.root(),
            panel.title(),
            Some(OPEN_ASSISTANT_SHORTCUT),
        );

        // Stand-in for the editor's main viewport.
        let viewport = Label::new(Some("Viewport"));
        viewport.set_hexpand(true);
        viewport.set_vexpand(true);

        let layout = Paned::new(Orientation::Horizontal);
        layout.set_start_child(Some(&viewport));
        layout.set_end_child(Some(docks.notebook(DockSlot::RightUpper)));
        layout.set_position(620);

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Ember Editor — AI Assistant demo")
            .default_width(960)
            .default_height(640)
            .build();
        window.set_child(Some(&layout));
        window.present();
    });

    app.run();
}
