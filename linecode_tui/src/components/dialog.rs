use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::Message,
    component::{Component, HandleResult},
    styles::dialog::{BUTTON_STYLE, INFO_BORDER_STYLE, WARNING_BORDER_STYLE},
    utils,
    widgets::{KeyId, KeyMaps},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Modal message box. Any dismiss key hands focus back to the parent.
pub struct Dialog {
    message_tx: Sender<Message>,
    title: String,
    text: String,
    severity: Severity,
    key_maps: KeyMaps,
}

impl Dialog {
    const MAX_WIDTH: u16 = 60;

    pub fn new(message_tx: Sender<Message>) -> Self {
        Self {
            message_tx,
            title: String::new(),
            text: String::new(),
            severity: Severity::Info,
            key_maps: Self::create_key_maps(),
        }
    }

    pub fn set_message(&mut self, severity: Severity, title: &str, text: &str) {
        self.severity = severity;
        self.title = title.to_string();
        self.text = text.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::new().with(
            &[
                KeyId::from(KeyCode::Enter),
                KeyId::from(KeyCode::Esc),
                KeyId::from('q'),
                KeyId::from(' '),
            ],
            "Dismiss",
        )
    }

    fn get_render_area(&self, rect: Rect) -> Rect {
        let longest_line = self
            .text
            .lines()
            .chain(std::iter::once(self.title.as_str()))
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let width = (longest_line + 4).clamp(20, Self::MAX_WIDTH);
        let text_width = (width - 2) as usize;
        let text_height: usize = self
            .text
            .lines()
            .map(|l| l.chars().count().div_ceil(text_width).max(1))
            .sum();
        let height = text_height as u16 + 4;
        utils::layout::get_popup_area_centered(rect, width, height)
    }
}

impl Component for Dialog {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = self.get_render_area(rect);
        let border_style = match self.severity {
            Severity::Info => INFO_BORDER_STYLE,
            Severity::Warning => WARNING_BORDER_STYLE,
        };
        let block = Block::bordered()
            .title(&self.title[..])
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner_area = block.inner(area);
        let chunks = Layout::vertical(vec![
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);
        let text = Paragraph::new(&self.text[..]).wrap(Wrap { trim: false });
        let button = Line::from(" OK ").style(BUTTON_STYLE).alignment(Alignment::Center);
        f.render_widget(Clear, area);
        f.render_widget(block, area);
        f.render_widget(text, chunks[0]);
        f.render_widget(button, chunks[2]);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match key_event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char(' ') => {
                let _ = self.message_tx.send(Message::Render);
                HandleResult::ReleaseFocus
            }
            _ => HandleResult::Handled,
        }
    }

    fn get_key_mappings(&self) -> KeyMaps {
        self.key_maps.clone()
    }
}

#[cfg(test)]
mod test {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{backend::TestBackend, Terminal};

    use super::{Dialog, Severity};
    use crate::{
        component::{Component, HandleResult},
        widgets::KeyId,
    };

    #[test]
    fn test_dismiss_releases_focus() {
        let (tx, _rx) = mpsc::channel();
        let mut dialog = Dialog::new(tx);
        assert_eq!(
            dialog.handle_key_event(&KeyEvent::from(KeyCode::Esc)),
            HandleResult::ReleaseFocus
        );
    }

    #[test]
    fn test_every_dismiss_key_is_listed() {
        let (tx, _rx) = mpsc::channel();
        let mut dialog = Dialog::new(tx);
        let key_maps = dialog.get_key_mappings();

        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char(' ')] {
            assert!(key_maps.contains(&KeyId::from(code)));
            assert_eq!(
                dialog.handle_key_event(&KeyEvent::from(code)),
                HandleResult::ReleaseFocus
            );
        }
    }

    #[test]
    fn test_other_keys_are_swallowed() {
        let (tx, _rx) = mpsc::channel();
        let mut dialog = Dialog::new(tx);
        assert_eq!(
            dialog.handle_key_event(&KeyEvent::from(KeyCode::Char('p'))),
            HandleResult::Handled
        );
    }

    #[test]
    fn test_render_shows_message() {
        let (tx, _rx) = mpsc::channel();
        let mut dialog = Dialog::new(tx);
        dialog.set_message(Severity::Warning, "Input Error", "Please enter binary data.");
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                dialog.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Input Error"));
        assert!(screen.contains("Please enter binary data."));
        assert!(screen.contains(" OK "));
    }
}
