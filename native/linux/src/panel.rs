//! GTK4 construction of the AI Assistant dock panel.
//!
//! Layout: title row, separator, read-only output area (top, expanding),
//! then the prompt input and a full-width Submit button at the bottom.
//! Submitted text is forwarded to the injected prompt handler and the
//! returned outcome string is shown in the output area.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Button, Label, Orientation, ScrolledWindow, Separator, TextView, WrapMode};

const PANEL_TITLE: &str = "AI Assistant";
const PANEL_MARGIN: i32 = 4;

/// The assistant dock panel.
///
/// Owns the widget tree; the host embeds [`AssistantPanel::root`] wherever
/// its dock layout wants it.
pub struct AssistantPanel {
    root: gtk4::Box,
    prompt_input: TextView,
    response_output: TextView,
    submit_button: Button,
}

fn set_margins(widget: &impl IsA<gtk4::Widget>, margin: i32) {
    widget.set_margin_start(margin);
    widget.set_margin_end(margin);
    widget.set_margin_top(margin);
    widget.set_margin_bottom(margin);
}

impl AssistantPanel {
    /// Build the panel. `handler` receives each submitted prompt and returns
    /// the outcome text to display.
    pub fn new<F>(handler: F) -> Self
    where
        F: FnMut(&str) -> String + 'static,
    {
        let root = gtk4::Box::new(Orientation::Vertical, 0);
        root.set_vexpand(true);
        root.set_hexpand(true);

        // Title row
        let title_row = gtk4::Box::new(Orientation::Horizontal, 8);
        set_margins(&title_row, PANEL_MARGIN);
        let title = Label::new(Some(PANEL_TITLE));
        title.set_xalign(0.0);
        title.set_hexpand(true);
        title.add_css_class("heading");
        title_row.append(&title);
        root.append(&title_row);

        root.append(&Separator::new(Orientation::Horizontal));

        // Response output (top section, expanding)
        let response_output = TextView::new();
        response_output.set_editable(false);
        response_output.set_cursor_visible(false);
        response_output.set_wrap_mode(WrapMode::WordChar);

        let output_scroll = ScrolledWindow::new();
        output_scroll.set_child(Some(&response_output));
        output_scroll.set_vexpand(true);
        output_scroll.set_min_content_height(200);
        set_margins(&output_scroll, PANEL_MARGIN);
        root.append(&output_scroll);

        // Prompt input + submit (bottom section)
        let prompt_box = gtk4::Box::new(Orientation::Vertical, 4);
        set_margins(&prompt_box, PANEL_MARGIN);

        let prompt_input = TextView::new();
        prompt_input.set_wrap_mode(WrapMode::WordChar);

        let input_scroll = ScrolledWindow::new();
        input_scroll.set_child(Some(&prompt_input));
        input_scroll.set_min_content_height(60);
        prompt_box.append(&input_scroll);

        let submit_button = Button::with_label("Submit");
        submit_button.set_hexpand(true);
        prompt_box.append(&submit_button);
        root.append(&prompt_box);

        let panel = AssistantPanel {
            root,
            prompt_input,
            response_output,
            submit_button,
        };
        panel.connect_submit(handler);
        panel
    }

    fn connect_submit<F>(&self, handler: F)
    where
        F: FnMut(&str) -> String + 'static,
    {
        let handler = Rc::new(RefCell::new(handler));
        let input_buffer = self.prompt_input.buffer();
        let output_buffer = self.response_output.buffer();

        self.submit_button.connect_clicked(move |_| {
            // Full multi-line text, not just the first line.
            let (start, end) = input_buffer.bounds();
            let prompt = input_buffer.text(&start, &end, true);
            if prompt.trim().is_empty() {
                return;
            }
            let response = (handler.borrow_mut())(prompt.as_str());
            output_buffer.set_text(&response);
            input_buffer.set_text("");
        });
    }

    /// Top-level widget to embed in a dock slot.
    pub fn root(&self) -> &gtk4::Box {
        &self.root
    }

    pub fn title(&self) -> &'static str {
        PANEL_TITLE
    }

    /// Programmatic submit path, equivalent to clicking the button.
    pub fn submit(&self) {
        self.submit_button.emit_clicked();
    }

    /// Replace the prompt input text (used by the demo).
    pub fn set_prompt(&self, text: &str) {
        self.prompt_input.buffer().set_text(text);
    }

    pub fn response_text(&self) -> String {
        let buffer = self.response_output.buffer();
        let (start, end) = buffer.bounds();
        buffer.text(&start, &end, true).to_string()
    }
}
