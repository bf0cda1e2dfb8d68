use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use crate::styles::text_input::{CURSOR_STYLE, HEADER_STYLE, LINE_STYLE};

pub struct TextInput {
    header: Option<&'static str>,
    line_style: Style,
    cursor_style: Style,
}

#[derive(Default)]
pub struct TextInputState {
    text: String,
    cursor_position: usize,
    start_position: usize,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            header: Some(" >>> "),
            line_style: LINE_STYLE,
            cursor_style: CURSOR_STYLE,
        }
    }
}

impl TextInput {
    pub fn header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }

    pub fn no_header(mut self) -> Self {
        self.header = None;
        self
    }

    pub fn line_style(mut self, style: Style) -> Self {
        self.line_style = style;
        self
    }

    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    fn header_width(&self) -> usize {
        self.header.map_or(0, |h| h.chars().count() + 1)
    }
}

impl StatefulWidget for TextInput {
    type State = TextInputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // One column is kept free for the cursor past the end of the text.
        let viewport = (area.width as usize).saturating_sub(self.header_width() + 1).max(1);
        state.scroll_to_cursor(viewport);

        let chars: Vec<char> = state.text.chars().collect();
        let end = chars.len().min(state.start_position + viewport);
        let cursor = state.cursor_position;
        let before: String = chars[state.start_position..cursor].iter().collect();
        let highlight: String = chars.get(cursor).map_or(" ".to_string(), char::to_string);
        let after: String = chars.get(cursor + 1..end).map_or(String::new(), String::from_iter);

        let mut spans = vec![];
        if let Some(header) = self.header {
            spans.push(Span::from(header).style(HEADER_STYLE));
            spans.push(Span::from(" "));
        }
        spans.push(Span::from(before));
        spans.push(Span::from(highlight).style(self.cursor_style));
        spans.push(Span::from(after));
        Line::from(spans).style(self.line_style).render(area, buf);
    }
}

impl TextInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor_position = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
        self.start_position = 0;
    }

    pub fn put(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor_position);
        self.text.insert(idx, ch);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_position >= 1 {
            let idx = self.byte_index(self.cursor_position - 1);
            self.text.remove(idx);
            self.cursor_position -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_position < self.char_count() {
            let idx = self.byte_index(self.cursor_position);
            self.text.remove(idx);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    fn scroll_to_cursor(&mut self, viewport: usize) {
        if self.cursor_position < self.start_position {
            self.start_position = self.cursor_position;
        } else if self.cursor_position >= self.start_position + viewport {
            self.start_position = self.cursor_position + 1 - viewport;
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, ch_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(ch_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod test {
    use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

    use super::{TextInput, TextInputState};

    fn symbols(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, 0)).map_or(" ", |c| c.symbol()))
            .collect()
    }

    #[test]
    fn test_edit() {
        let mut state = TextInputState::default();
        for ch in "1001".chars() {
            state.put(ch);
        }
        state.move_cursor_left();
        state.backspace();
        state.move_cursor_home();
        state.put('1');
        assert_eq!(state.text(), "1101");
        state.move_cursor_end();
        state.put('0');
        assert_eq!(state.text(), "11010");
        state.move_cursor_home();
        state.delete();
        assert_eq!(state.text(), "1010");
    }

    #[test]
    fn test_render_with_header() {
        let mut state = TextInputState::default();
        state.set_text("plot ami 1101");
        let mut buf = Buffer::empty(Rect::new(0, 0, 24, 1));

        TextInput::default().render(buf.area, &mut buf, &mut state);

        assert_eq!(symbols(&buf), " >>>  plot ami 1101     ");
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let mut state = TextInputState::default();
        state.set_text("0123456789");
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));

        TextInput::default()
            .no_header()
            .render(buf.area, &mut buf, &mut state);

        assert_eq!(symbols(&buf), "6789  ");

        state.move_cursor_home();
        TextInput::default()
            .no_header()
            .render(buf.area, &mut buf, &mut state);

        assert_eq!(symbols(&buf), "01234 ");
    }
}
