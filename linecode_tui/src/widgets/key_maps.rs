use std::{borrow::Cow, fmt};

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::styles::key_maps_help_bar::{DESCRIPTION_STYLE, KEY_ID_STYLE};

/// Ordered list of the keys a component reacts to, for the help bar.
#[derive(Clone, Default)]
pub struct KeyMaps(Vec<KeyMap>);

#[derive(Clone)]
pub struct KeyMap {
    pub key_ids: Vec<KeyId>,
    pub description: &'static str,
}

#[derive(Eq, Hash, PartialEq, Clone, Copy)]
pub struct KeyId {
    pub key_code: KeyCode,
    pub key_modifiers: KeyModifiers,
}

/// One-line, centered list of `[keys: description]` hints. Hints that do not
/// fit are left out.
pub struct KeyMapHelpBar<'a> {
    key_maps: &'a KeyMaps,
}

impl KeyMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key_ids: &[KeyId], description: &'static str) -> Self {
        self.0.push(KeyMap {
            key_ids: key_ids.to_vec(),
            description,
        });
        self
    }

    /// Keeps every mapping of `higher_prio`, then appends the mappings of
    /// `lower_prio` whose keys are not already taken.
    pub fn merge_mappings(higher_prio: &Self, lower_prio: &Self) -> Self {
        let shadowed = lower_prio.0.iter().filter_map(|key_map| {
            let free: Vec<KeyId> = key_map
                .key_ids
                .iter()
                .filter(|k| !higher_prio.contains(k))
                .copied()
                .collect();
            (!free.is_empty()).then_some(KeyMap {
                key_ids: free,
                description: key_map.description,
            })
        });
        KeyMaps(higher_prio.0.iter().cloned().chain(shadowed).collect())
    }

    pub fn contains(&self, key_id: &KeyId) -> bool {
        self.0.iter().any(|m| m.key_ids.contains(key_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyMap> {
        self.0.iter()
    }
}

impl<'a> KeyMapHelpBar<'a> {
    pub fn new(key_maps: &'a KeyMaps) -> Self {
        Self { key_maps }
    }
}

impl Widget for KeyMapHelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut used = 0;
        let spans: Vec<Span> = self
            .key_maps
            .iter()
            .map(KeyMap::hint)
            .take_while(|hint| {
                used += hint.iter().map(Span::width).sum::<usize>();
                used <= area.width as usize
            })
            .flatten()
            .collect();
        Line::from(spans).alignment(Alignment::Center).render(area, buf);
    }
}

impl KeyMap {
    fn keys_label(&self) -> String {
        self.key_ids
            .iter()
            .map(KeyId::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn hint(&self) -> [Span<'static>; 5] {
        [
            Span::raw("["),
            Span::styled(self.keys_label(), KEY_ID_STYLE),
            Span::raw(": "),
            Span::styled(self.description, DESCRIPTION_STYLE),
            Span::raw("] "),
        ]
    }
}

impl KeyId {
    pub fn new(key_code: KeyCode, key_modifiers: KeyModifiers) -> Self {
        Self {
            key_code,
            key_modifiers,
        }
    }

    fn key_label(&self) -> Cow<'static, str> {
        match self.key_code {
            KeyCode::Char(':') => "<colon>".into(),
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string().into(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            code => code.to_string().into(),
        }
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, modifier) in [
            ("Ctrl", KeyModifiers::CONTROL),
            ("Alt", KeyModifiers::ALT),
            ("Shift", KeyModifiers::SHIFT),
        ] {
            if self.key_modifiers.contains(modifier) {
                write!(f, "{name}-")?;
            }
        }
        f.write_str(&self.key_label())
    }
}

impl From<char> for KeyId {
    fn from(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::NONE)
    }
}

impl From<KeyCode> for KeyId {
    fn from(key_code: KeyCode) -> Self {
        Self::new(key_code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyId {
    fn from((key_code, key_modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(key_code, key_modifiers)
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    use super::{KeyId, KeyMapHelpBar, KeyMaps};

    #[test]
    fn test_key_id_display() {
        assert_eq!(KeyId::from(':').to_string(), "<colon>");
        assert_eq!(KeyId::from(KeyCode::Up).to_string(), "↑");
        assert_eq!(
            KeyId::from((KeyCode::Char('c'), KeyModifiers::CONTROL)).to_string(),
            "Ctrl-c"
        );
    }

    #[test]
    fn test_merge_prefers_higher_priority() {
        let child = KeyMaps::new().with(&[KeyId::from('q')], "Close");
        let parent = KeyMaps::new()
            .with(&[KeyId::from('q'), KeyId::from(KeyCode::Esc)], "Quit")
            .with(&[KeyId::from(KeyCode::Tab)], "Next panel");

        let merged = KeyMaps::merge_mappings(&child, &parent);
        let descriptions: Vec<(String, &str)> = merged
            .iter()
            .map(|m| (m.keys_label(), m.description))
            .collect();

        assert_eq!(
            descriptions,
            vec![
                ("q".to_string(), "Close"),
                ("Esc".to_string(), "Quit"),
                ("Tab".to_string(), "Next panel"),
            ]
        );
    }

    #[test]
    fn test_help_bar_drops_what_does_not_fit() {
        let key_maps = KeyMaps::new()
            .with(&[KeyId::from('p')], "Plot")
            .with(&[KeyId::from('q')], "Quit");
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));

        KeyMapHelpBar::new(&key_maps).render(buf.area, &mut buf);

        let text: String = (0..12)
            .map(|x| buf.cell((x, 0)).map_or(" ", |c| c.symbol()))
            .collect();
        assert_eq!(text, " [p: Plot]  ");
    }
}
