use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, text::Line, Frame};

use crate::{
    app::Message,
    backend::interpreter,
    component::{Component, HandleResult},
    styles::command_line::{ERROR_OUTPUT_STYLE, IDLE_STYLE, NORMAL_OUTPUT_STYLE},
    widgets::{KeyId, KeyMaps, TextInput, TextInputState},
};

/// Single status line. Shows the last command outcome, or the `:` prompt
/// while a command is being typed.
pub struct CommandLine {
    message_tx: Sender<Message>,
    input_state: TextInputState,
    output: Option<Result<String, String>>,
    active: bool,
    key_maps: KeyMaps,
}

impl CommandLine {
    const HEADER: &'static str = " : ";

    pub fn new(message_tx: Sender<Message>) -> Self {
        Self {
            message_tx,
            input_state: TextInputState::default(),
            output: None,
            active: false,
            key_maps: Self::create_key_maps(),
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.input_state.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn output(&self) -> Option<&Result<String, String>> {
        self.output.as_ref()
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::new()
            .with(&[KeyId::from(KeyCode::Enter)], "Execute")
            .with(&[KeyId::from(KeyCode::Esc)], "Cancel")
    }

    fn execute_command(&mut self) {
        let command_text = self.input_state.text().to_string();
        match interpreter::interpret(&command_text) {
            Ok(interpreter::Command::Noop) => (),
            Ok(command) => {
                tracing::debug!(command = %command_text, "command accepted");
                self.output = Some(Ok(format!("executed: {command_text}")));
                let _ = self.message_tx.send(Message::Execute(command));
            }
            Err(message) => {
                tracing::debug!(command = %command_text, %message, "command rejected");
                self.output = Some(Err(message));
            }
        }
    }

    fn deactivate(&mut self) -> HandleResult {
        self.active = false;
        self.input_state.clear();
        self.notify_render();
        HandleResult::ReleaseFocus
    }

    fn notify_render(&self) {
        let _ = self.message_tx.send(Message::Render);
    }
}

impl Component for CommandLine {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.active {
            f.render_stateful_widget(
                TextInput::default().header(Self::HEADER),
                rect,
                &mut self.input_state,
            );
        } else {
            let line = match &self.output {
                Some(Ok(output)) => Line::from(&output[..]).style(NORMAL_OUTPUT_STYLE),
                Some(Err(output)) => Line::from(&output[..]).style(ERROR_OUTPUT_STYLE),
                None => Line::from(" ").style(IDLE_STYLE),
            };
            f.render_widget(line, rect);
        }
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) => return self.deactivate(),
            (KeyCode::Char('d'), modifier) if modifier.contains(KeyModifiers::CONTROL) => {
                return self.deactivate()
            }
            (KeyCode::Enter, _) => {
                self.execute_command();
                return self.deactivate();
            }
            (KeyCode::Char(c), modifier) if modifier.is_empty() || modifier == KeyModifiers::SHIFT => {
                self.input_state.put(c)
            }
            (KeyCode::Backspace, _) if self.input_state.text().is_empty() => {
                return self.deactivate()
            }
            (KeyCode::Backspace, _) => self.input_state.backspace(),
            (KeyCode::Right, _) => self.input_state.move_cursor_right(),
            (KeyCode::Left, _) => self.input_state.move_cursor_left(),
            _ => (),
        };
        self.notify_render();
        HandleResult::Handled
    }

    fn get_key_mappings(&self) -> KeyMaps {
        self.key_maps.clone()
    }
}
