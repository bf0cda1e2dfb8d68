use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent};
use linecode::Scheme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListState},
    Frame,
};

use crate::{
    app::Message,
    component::{Component, HandleResult},
    styles::{global::SELECTED_ITEM_STYLE, scheme_selector::CHOSEN_ITEM_STYLE},
    widgets::{KeyId, KeyMaps},
};

/// Radio-button style list of the encoding schemes. Nothing is chosen
/// until the user picks an entry.
pub struct SchemeSelector {
    message_tx: Sender<Message>,
    list_state: ListState,
    selected: Option<Scheme>,
    key_maps: KeyMaps,
}

impl SchemeSelector {
    pub fn new(message_tx: Sender<Message>) -> Self {
        Self {
            message_tx,
            list_state: ListState::default().with_selected(Some(0)),
            selected: None,
            key_maps: Self::create_key_maps(),
        }
    }

    pub fn selected(&self) -> Option<Scheme> {
        self.selected
    }

    pub fn select(&mut self, scheme: Scheme) {
        let idx = Scheme::ALL.iter().position(|s| *s == scheme);
        self.list_state.select(idx);
        self.selected = Some(scheme);
        tracing::debug!(%scheme, "scheme selected");
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::new()
            .with(&[KeyId::from('k'), KeyId::from(KeyCode::Up)], "Move up")
            .with(&[KeyId::from('j'), KeyId::from(KeyCode::Down)], "Move down")
            .with(&[KeyId::from(' ')], "Choose scheme")
    }

    fn choose_highlighted(&mut self) {
        if let Some(scheme) = self.list_state.selected().and_then(|i| Scheme::ALL.get(i)) {
            self.select(*scheme);
        }
    }

    fn new_list_item<'a>(&self, scheme: Scheme) -> Line<'a> {
        if self.selected == Some(scheme) {
            Line::from(vec![Span::from("(•) "), Span::from(scheme.name())]).style(CHOSEN_ITEM_STYLE)
        } else {
            Line::from(vec![Span::from("( ) "), Span::from(scheme.name())])
        }
    }

    fn notify_render(&self) {
        let _ = self.message_tx.send(Message::Render);
    }
}

impl Component for SchemeSelector {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<Line> = Scheme::ALL
            .iter()
            .map(|scheme| self.new_list_item(*scheme))
            .collect();
        let list = List::new(items).highlight_style(SELECTED_ITEM_STYLE);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.list_state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => {
                let last = Scheme::ALL.len() - 1;
                let next = self.list_state.selected().map_or(0, |i| usize::min(i + 1, last));
                self.list_state.select(Some(next));
            }
            KeyCode::Char(' ') => self.choose_highlighted(),
            _ => return HandleResult::NotHandled,
        }
        self.notify_render();
        HandleResult::Handled
    }

    fn get_key_mappings(&self) -> KeyMaps {
        self.key_maps.clone()
    }
}

#[cfg(test)]
mod test {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyEvent};
    use linecode::Scheme;

    use super::SchemeSelector;
    use crate::{app::Message, component::{Component, HandleResult}};

    fn press(selector: &mut SchemeSelector, code: KeyCode) -> HandleResult {
        selector.handle_key_event(&KeyEvent::from(code))
    }

    #[test]
    fn test_nothing_chosen_initially() {
        let (tx, _rx) = mpsc::channel::<Message>();
        let selector = SchemeSelector::new(tx);
        assert_eq!(selector.selected(), None);
    }

    #[test]
    fn test_move_and_choose() {
        let (tx, rx) = mpsc::channel();
        let mut selector = SchemeSelector::new(tx);

        press(&mut selector, KeyCode::Down);
        press(&mut selector, KeyCode::Down);
        assert_eq!(press(&mut selector, KeyCode::Char(' ')), HandleResult::Handled);

        assert_eq!(selector.selected(), Some(Scheme::BipolarAmi));
        assert_eq!(rx.try_iter().count(), 3);
    }

    #[test]
    fn test_down_stops_at_last_scheme() {
        let (tx, _rx) = mpsc::channel();
        let mut selector = SchemeSelector::new(tx);

        for _ in 0..10 {
            press(&mut selector, KeyCode::Char('j'));
        }
        press(&mut selector, KeyCode::Char(' '));

        assert_eq!(selector.selected(), Some(Scheme::DifferentialManchester));
    }

    #[test]
    fn test_unrelated_key_bubbles_up() {
        let (tx, _rx) = mpsc::channel();
        let mut selector = SchemeSelector::new(tx);
        assert_eq!(press(&mut selector, KeyCode::Tab), HandleResult::NotHandled);
    }
}
