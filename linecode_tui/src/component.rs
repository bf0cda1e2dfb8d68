use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, widgets::Block, Frame};

use crate::widgets::KeyMaps;

pub trait Component {
    fn render(&mut self, f: &mut Frame, rect: Rect);

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult;

    fn handle_resize_event(&mut self, _columns: u16, _rows: u16) -> HandleResult {
        HandleResult::NotHandled
    }

    fn handle_focus_gained(&mut self) {}

    fn get_focused_child(&mut self) -> Option<&mut dyn Component> {
        None
    }

    fn get_key_mappings(&self) -> KeyMaps;

    fn render_with_block(&mut self, f: &mut Frame, rect: Rect, block: Block) {
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        self.render(f, inner);
    }

    fn handle_event(&mut self, event: &Event) -> HandleResult {
        match self.try_propagate_event(event) {
            HandleResult::Handled => HandleResult::Handled,
            HandleResult::ReleaseFocus => {
                self.handle_focus_gained();
                HandleResult::Handled
            }
            HandleResult::NotHandled => match event {
                Event::Key(key_event) => self.handle_key_event(key_event),
                Event::Resize(columns, rows) => self.handle_resize_event(*columns, *rows),
                _ => HandleResult::NotHandled,
            },
        }
    }

    fn try_propagate_event(&mut self, event: &Event) -> HandleResult {
        match self.get_focused_child() {
            Some(child) => child.handle_event(event),
            None => HandleResult::NotHandled,
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum HandleResult {
    Handled,
    NotHandled,
    ReleaseFocus,
}
