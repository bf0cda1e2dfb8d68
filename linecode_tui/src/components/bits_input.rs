use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use crate::{
    app::Message,
    component::{Component, HandleResult},
    styles::text_input::FIELD_STYLE,
    widgets::{KeyId, KeyMaps, TextInput, TextInputState},
};

/// Free-text field for the bit string. Nothing is validated while typing.
pub struct BitsInput {
    message_tx: Sender<Message>,
    input_state: TextInputState,
    focused: bool,
    key_maps: KeyMaps,
}

impl BitsInput {
    pub fn new(message_tx: Sender<Message>) -> Self {
        Self {
            message_tx,
            input_state: TextInputState::default(),
            focused: false,
            key_maps: Self::create_key_maps(),
        }
    }

    pub fn text(&self) -> &str {
        self.input_state.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.input_state.set_text(text);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::new()
            .with(
                &[KeyId::from(KeyCode::Left), KeyId::from(KeyCode::Right)],
                "Move cursor",
            )
            .with(&[KeyId::from(KeyCode::Backspace)], "Delete")
    }

    fn notify_render(&self) {
        let _ = self.message_tx.send(Message::Render);
    }
}

impl Component for BitsInput {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut input = TextInput::default().no_header().line_style(FIELD_STYLE);
        if !self.focused {
            input = input.cursor_style(FIELD_STYLE);
        }
        f.render_stateful_widget(input, rect, &mut self.input_state);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char(c), modifiers)
                if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
            {
                self.input_state.put(c)
            }
            (KeyCode::Backspace, _) => self.input_state.backspace(),
            (KeyCode::Delete, _) => self.input_state.delete(),
            (KeyCode::Left, _) => self.input_state.move_cursor_left(),
            (KeyCode::Right, _) => self.input_state.move_cursor_right(),
            (KeyCode::Home, _) => self.input_state.move_cursor_home(),
            (KeyCode::End, _) => self.input_state.move_cursor_end(),
            _ => return HandleResult::NotHandled,
        }
        self.notify_render();
        HandleResult::Handled
    }

    fn get_key_mappings(&self) -> KeyMaps {
        self.key_maps.clone()
    }
}
